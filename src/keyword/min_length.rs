//! `minLength` (§4.2 String). Length is counted in Unicode scalar values
//! (`str::chars().count()`), not UTF-8 bytes or UTF-16 code units — see
//! `DESIGN.md` for why this reading was chosen where the source was silent.
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{Tag, APPLIES_STRING},
};
use serde_json::{Map, Value};

pub(crate) struct MinLength {
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
    Ok(Keyword::MinLength(MinLength { bound }))
}

impl MinLength {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_STRING
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
            if let Some(text) = instance.as_str() {
                if (text.chars().count() as u64) < bound {
                    errors.push(ErrorRecord { path: path.clone(), keyword: "minLength", value: Value::from(bound) });
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
    fn rejects_too_short_strings() {
        let validator = Validator::compile(&json!({"minLength": 2})).unwrap();
        assert!(validator.is_valid(&json!("ab")));
        assert!(!validator.is_valid(&json!("a")));
    }

    #[test]
    fn counts_unicode_scalars_not_bytes() {
        let validator = Validator::compile(&json!({"minLength": 2})).unwrap();
        assert!(validator.is_valid(&json!("\u{1F600}\u{1F600}")));
    }
}
