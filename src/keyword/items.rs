//! `items` (§4.2 Array): either a single schema applied to every element, or
//! an array of schemas applied positionally (the tuple form), in which case
//! `additionalItems` (§4.2) governs elements past the tuple's length.
use crate::{
    compiler::compile_schema,
    context::CompilationContext,
    keyword::Keyword,
    path::Path,
    program::{CompiledRule, Program, Rule},
    value::{Tag, APPLIES_ARRAY},
};
use serde_json::{Map, Value};
use std::sync::Arc;

pub(crate) enum ItemsShape {
    Uniform(Arc<Program>),
    Tuple(Vec<Arc<Program>>),
}

pub(crate) struct Items {
    shape: ItemsShape,
}

pub(crate) fn construct(
    value: &Value,
    path: &Path,
    _siblings: &Map<String, Value>,
    depth: usize,
    ctx: &CompilationContext,
) -> Result<Keyword, crate::error::SchemaError> {
    let shape = match value {
        Value::Array(schemas) => {
            let mut programs = Vec::with_capacity(schemas.len());
            for (index, schema) in schemas.iter().enumerate() {
                let item_path = path.with_index(index);
                programs.push(Arc::new(compile_schema(schema, item_path, depth + 1, ctx)?));
            }
            ItemsShape::Tuple(programs)
        }
        _ => ItemsShape::Uniform(Arc::new(compile_schema(value, path.clone(), depth + 1, ctx)?)),
    };
    Ok(Keyword::Items(Items { shape }))
}

impl Items {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        APPLIES_ARRAY
    }

    pub(crate) fn is_dead(&self) -> bool {
        match &self.shape {
            ItemsShape::Uniform(program) => program.is_empty(),
            ItemsShape::Tuple(programs) => programs.iter().all(|program| program.is_empty()),
        }
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, crate::error::SchemaError> {
        if self.is_dead() {
            return Ok(None);
        }
        let shape = match &self.shape {
            ItemsShape::Uniform(program) => ItemsShape::Uniform(program.clone()),
            ItemsShape::Tuple(programs) => ItemsShape::Tuple(programs.clone()),
        };
        Ok(Some(CompiledRule::new(move |path, instance, errors| {
            let elements = match instance.as_array() {
                Some(elements) => elements,
                None => return,
            };
            match &shape {
                ItemsShape::Uniform(program) => {
                    for (index, element) in elements.iter().enumerate() {
                        program.run(&path.with_index(index), element, errors);
                    }
                }
                ItemsShape::Tuple(programs) => {
                    for (index, program) in programs.iter().enumerate() {
                        if let Some(element) = elements.get(index) {
                            program.run(&path.with_index(index), element, errors);
                        }
                    }
                }
            }
        })))
    }
}

#[cfg(test)]
mod tests {
    use crate::validator::Validator;
    use serde_json::json;

    #[test]
    fn uniform_schema_applies_to_every_element() {
        let validator = Validator::compile(&json!({"items": {"type": "integer"}})).unwrap();
        assert!(validator.is_valid(&json!([1, 2, 3])));
        assert!(!validator.is_valid(&json!([1, "x"])));
    }

    #[test]
    fn tuple_schema_applies_positionally() {
        let validator = Validator::compile(&json!({
            "items": [{"type": "integer"}, {"type": "string"}]
        }))
        .unwrap();
        assert!(validator.is_valid(&json!([1, "x"])));
        assert!(validator.is_valid(&json!([1, "x", true])));
        assert!(!validator.is_valid(&json!(["x", 1])));
    }

    #[test]
    fn ignores_non_array_instances() {
        let validator = Validator::compile(&json!({"items": {"type": "integer"}})).unwrap();
        assert!(validator.is_valid(&json!("not an array")));
    }
}
