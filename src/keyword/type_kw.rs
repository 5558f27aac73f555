//! `type` (§4.2 General). Applicability is empty — unlike every other
//! keyword in this module, `type`'s own rule is what *defines* which tags
//! are "allowed" at all, so it must run regardless of the instance's tag.
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{matches_type, Tag, APPLIES_GENERAL},
};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub(crate) struct TypeKw {
    pub(crate) allowed: BTreeSet<Tag>,
    raw: Value,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let allowed = parse_type_set(value, path)?;
    Ok(Keyword::Type(TypeKw { allowed, raw: value.clone() }))
}

fn parse_type_set(value: &Value, path: &Path) -> Result<BTreeSet<Tag>, SchemaError> {
    let names: Vec<&str> = match value {
        Value::String(name) => vec![name.as_str()],
        Value::Array(items) => {
            if items.is_empty() {
                return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidType));
            }
            items
                .iter()
                .map(|item| item.as_str().ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidType)))
                .collect::<Result<_, _>>()?
        }
        _ => return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidType)),
    };
    let mut set = BTreeSet::new();
    for name in names {
        let tag = Tag::from_name(name)
            .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidType))?;
        if !set.insert(tag) {
            return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidType));
        }
    }
    Ok(set)
}

impl TypeKw {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_GENERAL
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let allowed = self.allowed.clone();
        let raw = self.raw.clone();
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            if !allowed.iter().any(|&wanted| matches_type(instance, wanted)) {
                errors.push(ErrorRecord { path: path.clone(), keyword: "type", value: raw.clone() });
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"type": "integer"}), json!(5), true)]
    #[test_case(json!({"type": "integer"}), json!(5.5), false)]
    #[test_case(json!({"type": "number"}), json!(5), true)]
    #[test_case(json!({"type": ["integer", "null"]}), json!(null), true)]
    #[test_case(json!({"type": ["integer", "null"]}), json!("x"), false)]
    fn type_keyword(schema: serde_json::Value, instance: serde_json::Value, valid: bool) {
        let validator = Validator::compile(&schema).unwrap();
        assert_eq!(validator.is_valid(&instance), valid);
    }

    #[test]
    fn rejects_unknown_type_name() {
        assert!(Validator::compile(&json!({"type": "weird"})).is_err());
    }

    #[test]
    fn rejects_duplicate_type_names() {
        assert!(Validator::compile(&json!({"type": ["string", "string"]})).is_err());
    }

    #[test]
    fn rejects_empty_type_list() {
        assert!(Validator::compile(&json!({"type": []})).is_err());
    }
}
