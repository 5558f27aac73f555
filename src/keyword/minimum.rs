//! `minimum` (§4.2 Numeric). Reads the sibling `exclusiveMinimum` flag
//! directly from the schema object rather than depending on
//! `exclusive_minimum`'s own compiled `Keyword` — the two keywords are
//! compiled independently (table order), and `exclusiveMinimum` alone,
//! without a sibling `minimum`, has no bound to apply (§4.2 note).
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{compare_numbers, Tag, APPLIES_NUMERIC},
};
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;

pub(crate) struct Minimum {
    bound: Number,
    exclusive: bool,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let bound = match value {
        Value::Number(number) => number.clone(),
        _ => return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds)),
    };
    let exclusive = match siblings.get("exclusiveMinimum") {
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds)),
        None => false,
    };
    Ok(Keyword::Minimum(Minimum { bound, exclusive }))
}

impl Minimum {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_NUMERIC
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let bound = self.bound.clone();
        let exclusive = self.exclusive;
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            let ordering = match compare_numbers(instance, &bound) {
                Some(ordering) => ordering,
                None => return,
            };
            let fails = match ordering {
                Ordering::Less => true,
                Ordering::Equal => exclusive,
                Ordering::Greater => false,
            };
            if fails {
                errors.push(ErrorRecord {
                    path: path.clone(),
                    keyword: "minimum",
                    value: Value::Number(bound.clone()),
                });
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn inclusive_by_default() {
        let validator = Validator::compile(&json!({"minimum": 3})).unwrap();
        assert!(validator.is_valid(&json!(3)));
        assert!(!validator.is_valid(&json!(2)));
    }

    #[test]
    fn exclusive_when_flagged() {
        let validator = Validator::compile(&json!({"minimum": 3, "exclusiveMinimum": true})).unwrap();
        assert!(!validator.is_valid(&json!(3)));
        assert!(validator.is_valid(&json!(3.1)));
    }

    #[test]
    fn compares_large_integers_without_float_rounding() {
        let validator = Validator::compile(&json!({"minimum": 9007199254740993_u64})).unwrap();
        assert!(!validator.is_valid(&json!(9007199254740992_u64)));
        assert!(validator.is_valid(&json!(9007199254740993_u64)));
    }
}
