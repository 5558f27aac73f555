//! `uniqueItems` (§4.2 Array): structural equality, not `serde_json::Value`
//! identity — see [`crate::value::equal`].
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{equal, Tag, APPLIES_ARRAY},
};
use serde_json::{Map, Value};

pub(crate) struct UniqueItems {
    required: bool,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    _depth: usize,
    _ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let required = value
        .as_bool()
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword))?;
    Ok(Keyword::UniqueItems(UniqueItems { required }))
}

impl UniqueItems {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_ARRAY
    }

    pub(crate) fn is_dead(&self) -> bool {
        !self.required
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        if self.is_dead() {
            return Ok(None);
        }
        Ok(Some(CompiledRule::new(|path, instance, errors| {
            if let Some(elements) = instance.as_array() {
                for (j, candidate) in elements.iter().enumerate() {
                    if elements[..j].iter().any(|earlier| equal(candidate, earlier)) {
                        errors.push(ErrorRecord {
                            path: path.with_index(j),
                            keyword: "uniqueItems",
                            value: Value::Bool(true),
                        });
                    }
                }
            }
        })))
    }
}
