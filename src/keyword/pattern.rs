//! `pattern` (§4.2 String): an unanchored regex search, per JSON Schema's
//! own semantics (not a full-string match).
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{Tag, APPLIES_STRING},
};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::Arc;

pub(crate) struct Pattern {
    regex: Arc<Regex>,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let source = value
        .as_str()
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword))?;
    let regex = Regex::new(source).map_err(|_| SchemaError::new(path.clone(), SchemaErrorKind::InvalidRegex))?;
    Ok(Keyword::Pattern(Pattern { regex: Arc::new(regex) }))
}

impl Pattern {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_STRING
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let regex = self.regex.clone();
        let pattern_source = Value::String(regex.as_str().to_string());
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            if let Some(text) = instance.as_str() {
                if !regex.is_match(text) {
                    errors.push(ErrorRecord { path: path.clone(), keyword: "pattern", value: pattern_source.clone() });
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
    fn matches_anywhere_in_the_string() {
        let validator = Validator::compile(&json!({"pattern": "foo"})).unwrap();
        assert!(validator.is_valid(&json!("xx foo xx")));
        assert!(!validator.is_valid(&json!("bar")));
    }

    #[test]
    fn rejects_invalid_regex() {
        assert!(Validator::compile(&json!({"pattern": "("})).is_err());
    }
}
