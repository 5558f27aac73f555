//! `patternProperties` (§4.2 Object): a property whose name matches a
//! pattern is validated against that pattern's schema; a name can match
//! more than one pattern, in which case every matching sub-schema runs.
//! A name listed in the sibling `properties` is skipped entirely, even if
//! it also matches a pattern here (§4.2: "for each instance member whose
//! key is NOT in properties").
use crate::{
    compiler::compile_schema,
    context::CompilationContext,
    error::{SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Program, Rule},
    value::{Tag, APPLIES_OBJECT},
};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::Arc;

pub(crate) struct PatternProperties {
    entries: Vec<(Arc<Regex>, Arc<Program>)>,
    declared_names: Vec<String>,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    siblings: &Map<String, Value>,
    depth: usize,
    ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let object = value
        .as_object()
        .ok_or_else(|| SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword))?;
    if object.is_empty() {
        return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword));
    }
    let mut entries = Vec::with_capacity(object.len());
    for (pattern, schema) in object {
        let regex = Regex::new(pattern)
            .map_err(|_| SchemaError::new(path.clone(), SchemaErrorKind::InvalidRegex))?;
        let property_path = path.with_key(pattern);
        let program = compile_schema(schema, property_path, depth + 1, ctx)?;
        entries.push((Arc::new(regex), Arc::new(program)));
    }
    let declared_names = match siblings.get("properties") {
        Some(Value::Object(object)) => object.keys().cloned().collect(),
        _ => Vec::new(),
    };
    Ok(Keyword::PatternProperties(PatternProperties { entries, declared_names }))
}

impl PatternProperties {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_OBJECT
    }

    pub(crate) fn is_dead(&self) -> bool {
        self.entries.iter().all(|(_, program)| program.is_empty())
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        if self.is_dead() {
            return Ok(None);
        }
        let entries = self.entries.clone();
        let declared_names = self.declared_names.clone();
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            let object = match instance.as_object() {
                Some(object) => object,
                None => return,
            };
            for (name, member) in object {
                if declared_names.iter().any(|declared| declared == name) {
                    continue;
                }
                for (regex, program) in &entries {
                    if regex.is_match(name) {
                        program.run(&path.with_key(name), member, errors);
                    }
                }
            }
        })))
    }
}
