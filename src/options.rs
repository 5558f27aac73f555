//! Compile-time configuration surface, trimmed to the one knob the
//! resource model actually calls for: a maximum schema-nesting depth
//! (§5 "Memory bound").
use crate::{error::SchemaError, validator::Validator};
use serde_json::Value;

const DEFAULT_MAX_DEPTH: usize = 128;

/// Builder for compiling a schema with non-default limits.
///
/// ```
/// use jsonschema::ValidatorOptions;
/// use serde_json::json;
///
/// let schema = json!({"type": "string"});
/// let validator = ValidatorOptions::new().with_max_depth(16).compile(&schema).unwrap();
/// assert!(validator.is_valid(&json!("hi")));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ValidatorOptions {
    max_depth: usize,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        ValidatorOptions { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl ValidatorOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail compilation with `SchemaError::MaxDepthExceeded` instead of
    /// recursing past `max_depth` nested schema objects (§5).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Compile `schema` into a [`Validator`] using these options.
    pub fn compile<'a>(&self, schema: &'a Value) -> Result<Validator<'a>, SchemaError> {
        Validator::compile_with_options(schema, *self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_max_depth_is_generous() {
        assert_eq!(ValidatorOptions::default().max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn custom_max_depth_rejects_deep_schemas() {
        let mut schema = json!({"type": "integer"});
        for _ in 0..10 {
            schema = json!({"allOf": [schema]});
        }
        let err = ValidatorOptions::new().with_max_depth(3).compile(&schema);
        assert!(err.is_err());
    }
}
