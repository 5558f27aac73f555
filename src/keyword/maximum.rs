//! `maximum` (§4.2 Numeric), paired with sibling `exclusiveMaximum` the same
//! way `minimum` pairs with `exclusiveMinimum`.
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

pub(crate) struct Maximum {
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
    let exclusive = match siblings.get("exclusiveMaximum") {
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds)),
        None => false,
    };
    if let Some(Value::Number(minimum)) = siblings.get("minimum") {
        if bound.as_f64() < minimum.as_f64() {
            return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds));
        }
    }
    Ok(Keyword::Maximum(Maximum { bound, exclusive }))
}

impl Maximum {
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
                Ordering::Greater => true,
                Ordering::Equal => exclusive,
                Ordering::Less => false,
            };
            if fails {
                errors.push(ErrorRecord {
                    path: path.clone(),
                    keyword: "maximum",
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
        let validator = Validator::compile(&json!({"maximum": 3})).unwrap();
        assert!(validator.is_valid(&json!(3)));
        assert!(!validator.is_valid(&json!(4)));
    }

    #[test]
    fn exclusive_when_flagged() {
        let validator = Validator::compile(&json!({"maximum": 3, "exclusiveMaximum": true})).unwrap();
        assert!(!validator.is_valid(&json!(3)));
        assert!(validator.is_valid(&json!(2.9)));
    }

    #[test]
    fn rejects_maximum_below_minimum() {
        assert!(Validator::compile(&json!({"minimum": 5, "maximum": 1})).is_err());
        assert!(Validator::compile(&json!({"minimum": 1, "maximum": 5})).is_ok());
    }
}
