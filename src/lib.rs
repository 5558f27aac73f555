//! A JSON Schema Draft 4 validator.
//!
//! Compilation lowers a schema into a small interpreted program (an IR of
//! closures, not an AST) once; validating an instance afterwards walks
//! that program directly (§2).
//!
//! ```
//! use jsonschema::Validator;
//! use serde_json::json;
//!
//! let schema = json!({"type": "integer", "minimum": 0});
//! let validator = Validator::compile(&schema).unwrap();
//! assert!(validator.is_valid(&json!(5)));
//! assert!(!validator.is_valid(&json!(-1)));
//! ```
mod compiler;
mod context;
mod dialect;
mod error;
mod keyword;
mod optimizer;
mod options;
mod path;
mod program;
mod validator;
mod value;

pub use error::{ErrorGroup, KeywordViolation, SchemaError, SchemaErrorKind, ValidationError};
pub use options::ValidatorOptions;
pub use path::{Path, PathSegment};
pub use validator::Validator;

use serde_json::Value;

/// Compile `schema` with default options and report whether `instance`
/// satisfies it. A convenience shortcut for one-off checks; compile once
/// with [`Validator::compile`] and reuse it when validating more than one
/// instance against the same schema (§6).
pub fn is_valid(schema: &Value, instance: &Value) -> Result<bool, SchemaError> {
    Ok(Validator::compile(schema)?.is_valid(instance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shortcut_matches_validator_compile() {
        let schema = json!({"type": "string"});
        assert!(is_valid(&schema, &json!("hi")).unwrap());
        assert!(!is_valid(&schema, &json!(1)).unwrap());
    }

    #[test]
    fn shortcut_propagates_compile_errors() {
        assert!(is_valid(&json!({"type": "nonsense"}), &json!(1)).is_err());
    }
}
