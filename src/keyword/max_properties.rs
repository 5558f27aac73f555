//! `maxProperties` (§4.2 Object).
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{Tag, APPLIES_OBJECT},
};
use serde_json::{Map, Value};

pub(crate) struct MaxProperties {
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
    if let Some(minimum) = siblings.get("minProperties").and_then(Value::as_u64) {
        if bound < minimum {
            return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds));
        }
    }
    Ok(Keyword::MaxProperties(MaxProperties { bound }))
}

impl MaxProperties {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_OBJECT
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let bound = self.bound;
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            if let Some(object) = instance.as_object() {
                if (object.len() as u64) > bound {
                    errors.push(ErrorRecord { path: path.clone(), keyword: "maxProperties", value: Value::from(bound) });
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
    fn rejects_too_many_properties() {
        let validator = Validator::compile(&json!({"maxProperties": 1})).unwrap();
        assert!(validator.is_valid(&json!({"a": 1})));
        assert!(!validator.is_valid(&json!({"a": 1, "b": 2})));
    }

    #[test]
    fn rejects_max_below_min() {
        assert!(Validator::compile(&json!({"minProperties": 3, "maxProperties": 1})).is_err());
    }
}
