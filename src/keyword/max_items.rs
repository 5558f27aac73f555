//! `maxItems` (§4.2 Array).
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{Tag, APPLIES_ARRAY},
};
use serde_json::{Map, Value};

pub(crate) struct MaxItems {
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
    if let Some(minimum) = siblings.get("minItems").and_then(Value::as_u64) {
        if bound < minimum {
            return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds));
        }
    }
    Ok(Keyword::MaxItems(MaxItems { bound }))
}

impl MaxItems {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_ARRAY
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let bound = self.bound;
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            if let Some(elements) = instance.as_array() {
                if (elements.len() as u64) > bound {
                    errors.push(ErrorRecord { path: path.clone(), keyword: "maxItems", value: Value::from(bound) });
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
    fn rejects_too_many_elements() {
        let validator = Validator::compile(&json!({"maxItems": 2})).unwrap();
        assert!(validator.is_valid(&json!([1, 2])));
        assert!(!validator.is_valid(&json!([1, 2, 3])));
    }

    #[test]
    fn rejects_max_below_min() {
        assert!(Validator::compile(&json!({"minItems": 3, "maxItems": 1})).is_err());
    }
}
