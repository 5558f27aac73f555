//! `oneOf` (§4.2 General): exactly one branch must accept the instance.
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

pub(crate) struct OneOf {
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
    Ok(Keyword::OneOf(OneOf { branches, raw: value.clone() }))
}

impl OneOf {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_GENERAL
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let branches = self.branches.clone();
        let raw = self.raw.clone();
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            let matched = branches.iter().filter(|branch| branch.matches(path, instance)).count();
            if matched != 1 {
                errors.push(ErrorRecord { path: path.clone(), keyword: "oneOf", value: raw.clone() });
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn accepts_exactly_one_match() {
        let validator = Validator::compile(&json!({
            "oneOf": [{"type": "integer"}, {"multipleOf": 3}]
        }))
        .unwrap();
        assert!(validator.is_valid(&json!(2)));
        assert!(!validator.is_valid(&json!(3)));
        assert!(!validator.is_valid(&json!(3.5)));
    }
}
