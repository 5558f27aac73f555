//! `not` (§4.2 General): the instance must fail the nested schema.
use crate::{
    compiler::compile_schema,
    context::CompilationContext,
    error::{ErrorRecord, SchemaError},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Program, Rule},
    value::{Tag, APPLIES_GENERAL},
};
use serde_json::{Map, Value};
use std::sync::Arc;

pub(crate) struct Not {
    nested: Arc<Program>,
    raw: Value,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    depth: usize,
    ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let nested = compile_schema(value, path.clone(), depth + 1, ctx)?;
    Ok(Keyword::Not(Not { nested: Arc::new(nested), raw: value.clone() }))
}

impl Not {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_GENERAL
    }

    pub(crate) fn is_dead(&self) -> bool {
        // A nested schema that never fails anything would make `not` always
        // fail; that's still live behavior, so `not` is only ever dead if
        // someone writes `{"not": false}` producing an always-matching
        // nested program — which never happens, since `false` lowers to
        // `Program::always_fail`, never `Program::empty`. Kept explicit for
        // symmetry with the other composite keywords.
        false
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let nested = self.nested.clone();
        let raw = self.raw.clone();
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            if nested.matches(path, instance) {
                errors.push(ErrorRecord { path: path.clone(), keyword: "not", value: raw.clone() });
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn rejects_when_nested_schema_matches() {
        let validator = Validator::compile(&json!({"not": {"type": "string"}})).unwrap();
        assert!(validator.is_valid(&json!(1)));
        assert!(!validator.is_valid(&json!("x")));
    }
}
