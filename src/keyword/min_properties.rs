//! `minProperties` (§4.2 Object).
use crate::{
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Rule},
    value::{Tag, APPLIES_OBJECT},
};
use serde_json::{Map, Value};

pub(crate) struct MinProperties {
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
    Ok(Keyword::MinProperties(MinProperties { bound }))
}

impl MinProperties {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_OBJECT
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
            if let Some(object) = instance.as_object() {
                if (object.len() as u64) < bound {
                    errors.push(ErrorRecord { path: path.clone(), keyword: "minProperties", value: Value::from(bound) });
                }
            }
        })))
    }
}
