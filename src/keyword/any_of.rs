//! `anyOf` (§4.2 General): at least one branch must accept the instance.
//! Per §4.4's single-error specialization, a failing instance contributes
//! exactly one `anyOf` record, not the union of every branch's own errors —
//! branch validation runs against scratch buffers that are discarded.
use crate::{
    compiler::compile_schema,
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Program, Rule},
    value::{Tag, APPLIES_GENERAL},
};
use serde_json::{Map, Value};
use std::sync::Arc;

pub(crate) struct AnyOf {
    branches: Vec<Arc<Program>>,
    raw: Value,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    depth: usize,
    ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let items = value
        .as_array()
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword))?;
    if items.is_empty() {
        return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword));
    }
    let mut branches = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let branch_path = path.with_index(index);
        branches.push(Arc::new(compile_schema(item, branch_path, depth + 1, ctx)?));
    }
    Ok(Keyword::AnyOf(AnyOf { branches, raw: value.clone() }))
}

impl AnyOf {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_GENERAL
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let branches = self.branches.clone();
        let raw = self.raw.clone();
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            let matched = branches.iter().any(|branch| branch.matches(path, instance));
            if !matched {
                errors.push(ErrorRecord { path: path.clone(), keyword: "anyOf", value: raw.clone() });
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn accepts_when_one_branch_matches() {
        let validator = Validator::compile(&json!({
            "anyOf": [{"type": "string"}, {"type": "integer"}]
        }))
        .unwrap();
        assert!(validator.is_valid(&json!("x")));
        assert!(validator.is_valid(&json!(1)));
        assert!(!validator.is_valid(&json!(1.5)));
    }

    #[test]
    fn single_error_specialization_reports_one_record() {
        let validator = Validator::compile(&json!({
            "anyOf": [{"type": "string"}, {"type": "integer"}]
        }))
        .unwrap();
        let err = validator.validate(&json!(null)).unwrap_err();
        assert_eq!(err.groups().len(), 1);
        assert_eq!(err.groups()[0].errors.len(), 1);
    }
}
