//! `required` (§4.2 Object): every listed name must be present. Each
//! missing-field record carries the keyword's own configured value (the
//! whole `required` array), not the individual field name (§3.5, §8
//! scenario 3).
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{Tag, APPLIES_OBJECT},
};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub(crate) struct Required {
    names: Vec<String>,
    raw: Value,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let items = value
        .as_array()
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword))?;
    if items.is_empty() {
        return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword));
    }
    let mut names = Vec::with_capacity(items.len());
    let mut seen = BTreeSet::new();
    for item in items {
        let name = item
            .as_str()
            .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword))?;
        if name.is_empty() {
            return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword));
        }
        if !seen.insert(name.to_string()) {
            return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword));
        }
        names.push(name.to_string());
    }
    Ok(Keyword::Required(Required { names, raw: value.clone() }))
}

impl Required {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_OBJECT
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let names = self.names.clone();
        let raw = self.raw.clone();
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            let object = match instance.as_object() {
                Some(object) => object,
                None => return,
            };
            for name in &names {
                if !object.contains_key(name) {
                    errors.push(ErrorRecord {
                        path: path.clone(),
                        keyword: "required",
                        value: raw.clone(),
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
    fn rejects_missing_required_name() {
        let validator = Validator::compile(&json!({"required": ["id"]})).unwrap();
        assert!(validator.is_valid(&json!({"id": 1})));
        assert!(!validator.is_valid(&json!({})));
    }

    #[test]
    fn reports_each_missing_name() {
        let validator = Validator::compile(&json!({"required": ["a", "b"]})).unwrap();
        let err = validator.validate(&json!({})).unwrap_err();
        assert_eq!(err.groups()[0].errors.len(), 2);
    }

    #[test]
    fn error_value_is_the_configured_array_not_the_missing_name() {
        let validator = Validator::compile(&json!({"required": ["a", "b"]})).unwrap();
        let err = validator.validate(&json!({"a": 3})).unwrap_err();
        assert_eq!(err.groups().len(), 1);
        assert_eq!(err.groups()[0].errors.len(), 1);
        assert_eq!(err.groups()[0].errors[0].keyword, "required");
        assert_eq!(err.groups()[0].errors[0].value, json!(["a", "b"]));
    }

    #[test]
    fn rejects_empty_or_duplicate_list() {
        assert!(Validator::compile(&json!({"required": []})).is_err());
        assert!(Validator::compile(&json!({"required": ["a", "a"]})).is_err());
    }

    #[test]
    fn rejects_empty_string_name() {
        assert!(Validator::compile(&json!({"required": [""]})).is_err());
    }
}
