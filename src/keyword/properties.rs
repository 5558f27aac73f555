//! `properties` (§4.2 Object).
use crate::{
    compiler::compile_schema,
    context::CompilationContext,
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Program, Rule},
    value::{Tag, APPLIES_OBJECT},
};
use serde_json::{Map, Value};
use std::sync::Arc;

pub(crate) struct Properties {
    entries: Vec<(String, Arc<Program>)>,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    depth: usize,
    ctx: &CompilationContext,
) -> Result<Keyword, crate::error::SchemaError> {
    let object = value
        .as_object()
        .ok_or_else(|| crate::error::SchemaError::new(path.clone(), crate::error::SchemaErrorKind::InvalidKeyword))?;
    if object.is_empty() {
        return Err(crate::error::SchemaError::new(path.clone(), crate::error::SchemaErrorKind::InvalidKeyword));
    }
    let mut entries = Vec::with_capacity(object.len());
    for (name, schema) in object {
        if name.is_empty() {
            return Err(crate::error::SchemaError::new(path.clone(), crate::error::SchemaErrorKind::InvalidKeyword));
        }
        let property_path = path.with_key(name);
        let program = compile_schema(schema, property_path, depth + 1, ctx)?;
        entries.push((name.clone(), Arc::new(program)));
    }
    Ok(Keyword::Properties(Properties { entries }))
}

impl Properties {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_OBJECT
    }

    pub(crate) fn is_dead(&self) -> bool {
        self.entries.iter().all(|(_, program)| program.is_empty())
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, crate::error::SchemaError> {
        if self.is_dead() {
            return Ok(None);
        }
        let entries = self.entries.clone();
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            let object = match instance.as_object() {
                Some(object) => object,
                None => return,
            };
            for (name, program) in &entries {
                if let Some(member) = object.get(name) {
                    program.run(&path.with_key(name), member, errors);
                }
            }
        })))
    }
}
