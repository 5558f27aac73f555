//! `additionalItems` (§4.2 Array). Only has any effect when the sibling
//! `items` is present and in its tuple (array-of-schemas) form; otherwise
//! `items` (in uniform-schema form, or absent) already covers every element
//! and `additionalItems` is inert, matching Draft 4 semantics.
use crate::{
    compiler::compile_schema,
    context::CompilationContext,
    error::{ErrorRecord, SchemaError, SchemaErrorKind},
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Program, Rule},
    value::{Tag, APPLIES_ARRAY},
};
use serde_json::{Map, Value};
use std::sync::Arc;

enum Shape {
    Inert,
    Forbidden { offset: usize },
    Schema { offset: usize, program: Arc<Program> },
}

pub(crate) struct AdditionalItems {
    shape: Shape,
    raw: Value,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    siblings: &Map<String, Value>,
    depth: usize,
    ctx: &CompilationContext,
) -> Result<Keyword, SchemaError> {
    let offset = match siblings.get("items") {
        Some(Value::Array(tuple)) => tuple.len(),
        _ => {
            return Ok(Keyword::AdditionalItems(AdditionalItems {
                shape: Shape::Inert,
                raw: value.clone(),
            }))
        }
    };
    let shape = match value {
        Value::Bool(true) => Shape::Inert,
        Value::Bool(false) => Shape::Forbidden { offset },
        Value::Object(_) => Shape::Schema {
            offset,
            program: Arc::new(compile_schema(value, path.clone(), depth + 1, ctx)?),
        },
        _ => return Err(SchemaError::new(path.clone(), SchemaErrorKind::InvalidKeyword)),
    };
    Ok(Keyword::AdditionalItems(AdditionalItems { shape, raw: value.clone() }))
}

impl AdditionalItems {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_ARRAY
    }

    pub(crate) fn is_dead(&self) -> bool {
        match &self.shape {
            Shape::Inert => true,
            Shape::Forbidden { .. } => false,
            Shape::Schema { program, .. } => program.is_empty(),
        }
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        let raw = self.raw.clone();
        match &self.shape {
            Shape::Inert => Ok(None),
            Shape::Forbidden { offset } => {
                let offset = *offset;
                Ok(Some(CompiledRule::new(move |path, instance, errors| {
                    if let Some(elements) = instance.as_array() {
                        if elements.len() > offset {
                            errors.push(ErrorRecord {
                                path: path.clone(),
                                keyword: "additionalItems",
                                value: raw.clone(),
                            });
                        }
                    }
                })))
            }
            Shape::Schema { offset, program } => {
                if program.is_empty() {
                    return Ok(None);
                }
                let offset = *offset;
                let program = program.clone();
                Ok(Some(CompiledRule::new(move |path, instance, errors| {
                    if let Some(elements) = instance.as_array() {
                        for (index, element) in elements.iter().enumerate().skip(offset) {
                            program.run(&path.with_index(index), element, errors);
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
    fn forbids_extra_tuple_items() {
        let validator = Validator::compile(&json!({
            "items": [{"type": "integer"}],
            "additionalItems": false
        }))
        .unwrap();
        assert!(validator.is_valid(&json!([1])));
        assert!(!validator.is_valid(&json!([1, 2])));
    }

    #[test]
    fn constrains_extra_tuple_items_by_schema() {
        let validator = Validator::compile(&json!({
            "items": [{"type": "integer"}],
            "additionalItems": {"type": "string"}
        }))
        .unwrap();
        assert!(validator.is_valid(&json!([1, "x", "y"])));
        assert!(!validator.is_valid(&json!([1, 2])));
    }

    #[test]
    fn inert_when_items_is_not_a_tuple() {
        let validator = Validator::compile(&json!({
            "items": {"type": "integer"},
            "additionalItems": false
        }))
        .unwrap();
        assert!(validator.is_valid(&json!([1, 2, 3])));
    }
}
