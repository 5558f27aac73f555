//! `exclusiveMinimum`/`exclusiveMaximum` standing alone (§4.2 Numeric).
//!
//! These keywords have no effect of their own — `minimum`/`maximum` read
//! the sibling flag directly (see [`crate::keyword::minimum`]). What must
//! still happen here is schema validation: `exclusiveMinimum`/
//! `exclusiveMaximum` must be booleans even on a schema that omits the
//! paired bound, so their own `construct` exists purely to enforce that
//! shape and then contribute no rule at all.
use crate::{
    context::CompilationContext,
    error::{SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::Rule,
    value::{Tag, APPLIES_GENERAL},
};
use serde_json::{Map, Value};

pub(crate) struct ExclusiveMinimum;
pub(crate) struct ExclusiveMaximum;

pub(crate) fn construct_minimum(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    require_bool(value, path)?;
    Ok(Keyword::ExclusiveMinimum(ExclusiveMinimum))
}

pub(crate) fn construct_maximum(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    require_bool(value, path)?;
    Ok(Keyword::ExclusiveMaximum(ExclusiveMaximum))
}

fn require_bool(value: &Value, path: &Path) -> Result<(), SchemaError> {
    if value.is_boolean() {
        Ok(())
    } else {
        Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidBounds))
    }
}

impl ExclusiveMinimum {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_GENERAL
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        Ok(None)
    }
}

impl ExclusiveMaximum {
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
    fn rejects_non_boolean_flag() {
        assert!(Validator::compile(&json!({"minimum": 1, "exclusiveMinimum": 1})).is_err());
        assert!(Validator::compile(&json!({"maximum": 1, "exclusiveMaximum": "yes"})).is_err());
    }

    #[test]
    fn accepts_flag_without_sibling_bound() {
        assert!(Validator::compile(&json!({"exclusiveMinimum": true})).is_ok());
    }
}
