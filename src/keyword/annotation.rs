//! `title`/`description`/`default` (§4.2 `[SUPPLEMENT]`): recognized so a
//! schema that carries them never trips `UnknownVariant`-style rejection,
//! but they assert nothing and compile to no rule.
use crate::{context::CompilationContext, error::SchemaError, keyword::Keyword, path::Path, program::Rule, value::{Tag, APPLIES_GENERAL}};
use serde_json::{Map, Value};

pub(crate) struct Annotation;

pub(crate) fn construct(
    _value: &Value,
    _path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    Ok(Keyword::Annotation(Annotation))
}

impl Annotation {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_GENERAL
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn annotation_keywords_never_reject() {
        let validator = Validator::compile(&json!({
            "title": "Age",
            "description": "A person's age",
            "default": 0,
            "type": "integer"
        }))
        .unwrap();
        assert!(validator.is_valid(&json!(5)));
    }
}
