//! `maxLength` (§4.2 String), counted the same way as `minLength`.
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{Tag, APPLIES_STRING},
};
use serde_json::{Map, Value};

pub(crate) struct MaxLength {
    bound: u64,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let bound = value
        .as_u64()
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds))?;
    if let Some(minimum) = siblings.get("minLength").and_then(Value::as_u64) {
        if bound < minimum {
            return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds));
        }
    }
    Ok(Keyword::MaxLength(MaxLength { bound }))
}

impl MaxLength {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_STRING
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let bound = self.bound;
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            if let Some(text) = instance.as_str() {
                if (text.chars().count() as u64) > bound {
                    errors.push(ErrorRecord { path: path.clone(), keyword: "maxLength", value: Value::from(bound) });
                }
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn rejects_too_long_strings() {
        let validator = Validator::compile(&json!({"maxLength": 2})).unwrap();
        assert!(validator.is_valid(&json!("ab")));
        assert!(!validator.is_valid(&json!("abc")));
    }

    #[test]
    fn rejects_max_below_min() {
        assert!(Validator::compile(&json!({"minLength": 3, "maxLength": 1})).is_err());
    }
}
