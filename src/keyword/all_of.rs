//! `allOf` (§4.2 General): every sub-schema's `Program` runs against the
//! same instance and path; all their errors are reported.
use crate::{
    compiler::compile_schema,
    context::CompilationContext,
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Program, Rule},
    value::{Tag, APPLIES_GENERAL},
};
use serde_json::{Map, Value};
use std::sync::Arc;

pub(crate) struct AllOf {
    branches: Vec<Arc<Program>>,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    depth: usize,
    ctx: &CompilationContext,
) -> Result<Keyword, crate::error::SchemaError> {
    let items = value
        .as_array()
        .ok_or_else(|| crate::error::SchemaError::new(path.clone(), crate::error::SchemaErrorKind::InvalidKeyword))?;
    if items.is_empty() {
        return Err(crate::error::SchemaError::new(path.clone(), crate::error::SchemaErrorKind::InvalidKeyword));
    }
    let mut branches = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let branch_path = path.with_index(index);
        let program = compile_schema(item, branch_path, depth + 1, ctx)?;
        branches.push(Arc::new(program));
    }
    Ok(Keyword::AllOf(AllOf { branches }))
}

impl AllOf {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_GENERAL
    }

    pub(crate) fn is_dead(&self) -> bool {
        self.branches.iter().all(|branch| branch.is_empty())
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, crate::error::SchemaError> {
        if self.is_dead() {
            return Ok(None);
        }
        let branches = self.branches.clone();
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            for branch in &branches {
                branch.run(path, instance, errors);
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn requires_every_branch() {
        let validator = Validator::compile(&json!({
            "allOf": [{"type": "integer"}, {"minimum": 5}]
        }))
        .unwrap();
        assert!(validator.is_valid(&json!(10)));
        assert!(!validator.is_valid(&json!(3)));
        assert!(!validator.is_valid(&json!("x")));
    }

    #[test]
    fn all_trivial_branches_are_optimized_away() {
        let validator = Validator::compile(&json!({"allOf": [{}, {}]})).unwrap();
        assert!(validator.is_valid(&json!(1)));
    }

    #[test]
    fn rejects_empty_branch_list() {
        assert!(Validator::compile(&json!({"allOf": []})).is_err());
    }
}
