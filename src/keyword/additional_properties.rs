//! `additionalProperties` (§4.2 Object). A property name is "covered" if it
//! is listed in the sibling `properties`, or matches any sibling
//! `patternProperties` pattern (§9 "patternProperties' covered set"); only
//! uncovered names are subject to this keyword.
use crate::{
    compiler::compile_schema,
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Program, Rule},
    value::{Tag, APPLIES_OBJECT},
};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::Arc;

enum Shape {
    Inert,
    Forbidden,
    Schema(Arc<Program>),
}

pub(crate) struct AdditionalProperties {
    shape: Shape,
    declared_names: Vec<String>,
    patterns: Vec<Arc<Regex>>,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    siblings: &Map<String, Value>,
    depth: usize,
    ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let declared_names = match siblings.get("properties") {
        Some(Value::Object(object)) => object.keys().cloned().collect(),
        _ => Vec::new(),
    };
    let patterns = match siblings.get("patternProperties") {
        Some(Value::Object(object)) => object
            .keys()
            .map(|pattern| {
                Regex::new(pattern)
                    .map(Arc::new)
                    .map_err(|_| SchemaError::new(path.clone(), SchemaErrorKind::InvalidRegex))
            })
            .collect::<Result<_, _>>()?,
        _ => Vec::new(),
    };
    let shape = match value {
        Value::Bool(true) => Shape::Inert,
        Value::Bool(false) => Shape::Forbidden,
        Value::Object(_) => Shape::Schema(Arc::new(compile_schema(value, path.clone(), depth + 1, ctx)?)),
        _ => return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword)),
    };
    Ok(Keyword::AdditionalProperties(AdditionalProperties { shape, declared_names, patterns }))
}

impl AdditionalProperties {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_OBJECT
    }

    pub(crate) fn is_dead(&self) -> bool {
        match &self.shape {
            Shape::Inert => true,
            Shape::Forbidden => false,
            Shape::Schema(program) => program.is_empty(),
        }
    }

    fn is_covered(&self, name: &str) -> bool {
        self.declared_names.iter().any(|declared| declared == name)
            || self.patterns.iter().any(|pattern| pattern.is_match(name))
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        if self.is_dead() {
            return Ok(None);
        }
        let declared_names = self.declared_names.clone();
        let patterns = self.patterns.clone();
        let covered = move |name: &str| -> bool {
            declared_names.iter().any(|declared| declared == name)
                || patterns.iter().any(|pattern| pattern.is_match(name))
        };
        match &self.shape {
            Shape::Inert => Ok(None),
            Shape::Forbidden => Ok(Some(CompiledRule::new(move |path, instance, errors| {
                let object = match instance.as_object() {
                    Some(object) => object,
                    None => return,
                };
                for name in object.keys() {
                    if !covered(name) {
                        errors.push(ErrorRecord {
                            path: path.with_key(name),
                            keyword: "additionalProperties",
                            value: Value::Bool(false),
                        });
                    }
                }
            }))),
            Shape::Schema(program) => {
                let program = program.clone();
                Ok(Some(CompiledRule::new(move |path, instance, errors| {
                    let object = match instance.as_object() {
                        Some(object) => object,
                        None => return,
                    };
                    for (name, member) in object {
                        if !covered(name) {
                            program.run(&path.with_key(name), member, errors);
                        }
                    }
                })))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn forbids_uncovered_names() {
        let validator = Validator::compile(&json!({
            "properties": {"age": {}},
            "additionalProperties": false
        }))
        .unwrap();
        assert!(validator.is_valid(&json!({"age": 1})));
        assert!(!validator.is_valid(&json!({"age": 1, "extra": 1})));
    }

    #[test]
    fn pattern_properties_count_as_covered() {
        let validator = Validator::compile(&json!({
            "patternProperties": {"^S_": {}},
            "additionalProperties": false
        }))
        .unwrap();
        assert!(validator.is_valid(&json!({"S_x": 1})));
        assert!(!validator.is_valid(&json!({"other": 1})));
    }

    #[test]
    fn schema_form_validates_uncovered_values() {
        let validator = Validator::compile(&json!({
            "properties": {"age": {}},
            "additionalProperties": {"type": "string"}
        }))
        .unwrap();
        assert!(validator.is_valid(&json!({"age": 1, "note": "ok"})));
        assert!(!validator.is_valid(&json!({"age": 1, "note": 1})));
    }
}
