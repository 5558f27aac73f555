//! `enum` (§4.2 General).
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{equal, Tag, APPLIES_GENERAL},
};
use serde_json::{Map, Value};

pub(crate) struct EnumKw {
    variants: Vec<Value>,
    raw: Value,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let variants = value
        .as_array()
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidEnum))?;
    if variants.is_empty() {
        return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidEnum));
    }
    Ok(Keyword::Enum(EnumKw { variants: variants.clone(), raw: value.clone() }))
}

impl EnumKw {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_GENERAL
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let variants = self.variants.clone();
        let raw = self.raw.clone();
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            if !variants.iter().any(|variant| equal(variant, instance)) {
                errors.push(ErrorRecord { path: path.clone(), keyword: "enum", value: raw.clone() });
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn accepts_listed_variant() {
        let validator = Validator::compile(&json!({"enum": [1, "a", true]})).unwrap();
        assert!(validator.is_valid(&json!(1)));
        assert!(validator.is_valid(&json!("a")));
        assert!(!validator.is_valid(&json!(2)));
    }

    #[test]
    fn compares_structurally_not_by_identity() {
        let validator = Validator::compile(&json!({"enum": [{"a": 1, "b": 2}]})).unwrap();
        assert!(validator.is_valid(&json!({"b": 2, "a": 1})));
    }

    #[test]
    fn rejects_empty_enum() {
        assert!(Validator::compile(&json!({"enum": []})).is_err());
    }

    #[test]
    fn rejects_non_array_enum() {
        assert!(Validator::compile(&json!({"enum": 1})).is_err());
    }
}
