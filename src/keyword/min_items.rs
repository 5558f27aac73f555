//! `minItems` (§4.2 Array).
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{Tag, APPLIES_ARRAY},
};
use serde_json::{Map, Value};

pub(crate) struct MinItems {
    bound: u64,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let bound = value
        .as_u64()
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds))?;
    Ok(Keyword::MinItems(MinItems { bound }))
}

impl MinItems {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_ARRAY
    }

    pub(crate) fn is_dead(&self) -> bool {
        self.bound == 0
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        if self.is_dead() {
            return Ok(None);
        }
        let bound = self.bound;
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            if let Some(elements) = instance.as_array() {
                if (elements.len() as u64) < bound {
                    errors.push(ErrorRecord { path: path.clone(), keyword: "minItems", value: Value::from(bound) });
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
    fn rejects_too_few_elements() {
        let validator = Validator::compile(&json!({"minItems": 2})).unwrap();
        assert!(validator.is_valid(&json!([1, 2])));
        assert!(!validator.is_valid(&json!([1])));
    }

    #[test]
    fn zero_bound_is_optimized_away() {
        let validator = Validator::compile(&json!({"minItems": 0})).unwrap();
        assert!(validator.is_valid(&json!([])));
    }
}
