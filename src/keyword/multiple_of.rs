//! `multipleOf` (§4.2 Numeric). The schema rule is "positive integer" —
//! `multipleOf: 0.1` is a `SchemaError`, matching the original
//! (`keyword.py`'s `type(self.value) != int` check).
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{Tag, APPLIES_NUMERIC},
};
use serde_json::{Map, Value};

pub(crate) struct MultipleOf {
    divisor: f64,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let divisor = value
        .as_i64()
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds))?;
    if divisor <= 0 {
        return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds));
    }
    Ok(Keyword::MultipleOf(MultipleOf { divisor: divisor as f64 }))
}

impl MultipleOf {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_NUMERIC
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let divisor = self.divisor;
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            if let Some(instance) = instance.as_f64() {
                let quotient = instance / divisor;
                if (quotient - quotient.round()).abs() > f64::EPSILON * quotient.abs().max(1.0) {
                    errors.push(ErrorRecord {
                        path: path.clone(),
                        keyword: "multipleOf",
                        value: Value::from(divisor),
                    });
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
    fn rejects_non_multiples() {
        let validator = Validator::compile(&json!({"multipleOf": 2})).unwrap();
        assert!(validator.is_valid(&json!(4)));
        assert!(!validator.is_valid(&json!(5)));
    }

    #[test]
    fn rejects_non_positive_divisor() {
        assert!(Validator::compile(&json!({"multipleOf": 0})).is_err());
        assert!(Validator::compile(&json!({"multipleOf": -1})).is_err());
    }

    #[test]
    fn rejects_non_integer_divisor() {
        assert!(Validator::compile(&json!({"multipleOf": 0.1})).is_err());
    }
}
