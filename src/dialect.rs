//! Dialect selection (§4.1 step 1, §6): which `$schema` values this crate
//! recognizes as Draft 4, and what happens when `$schema` names something
//! else.
use crate::{
    error::{SchemaError, SchemaErrorKind},
    path::Path,
};
use serde_json::Value;

/// The JSON Schema draft a `Validator` was compiled against. Only one
/// variant exists today — this type exists so a future draft can be added
/// without breaking `Validator`'s public surface (§1 Non-goals: multiple
/// drafts are out of scope for now, but dialect selection itself is not).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dialect {
    Draft4,
}

const RECOGNIZED_SCHEMA_URIS: &[&str] =
    &["http://json-schema.org/schema#", "http://json-schema.org/draft-04/schema#"];

/// Inspect the root schema's `$schema` keyword, if present, and decide
/// which dialect governs compilation (§4.1 step 1). Absence defaults to
/// [`Dialect::Draft4`]; an unrecognized URI is a compile-time error rather
/// than a silent fallback.
pub(crate) fn dialect_from_schema(schema: &Value) -> Result<Dialect, SchemaError> {
    let schema_path = Path::root().with_key("$schema");
    let uri = match schema.as_object().and_then(|object| object.get("$schema")) {
        Some(Value::String(uri)) => uri,
        Some(_) => {
            return Err(SchemaError::new(schema_path, SchemaErrorKind::InvalidKeyword));
        }
        None => return Ok(Dialect::Draft4),
    };
    if RECOGNIZED_SCHEMA_URIS.contains(&uri.as_str()) {
        Ok(Dialect::Draft4)
    } else {
        Err(SchemaError::new(schema_path, SchemaErrorKind::UnknownVariant(uri.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_to_draft4_when_absent() {
        assert_eq!(dialect_from_schema(&json!({"type": "string"})).unwrap(), Dialect::Draft4);
    }

    #[test]
    fn recognizes_known_schema_uris() {
        let schema = json!({"$schema": "http://json-schema.org/draft-04/schema#"});
        assert_eq!(dialect_from_schema(&schema).unwrap(), Dialect::Draft4);
    }

    #[test]
    fn rejects_unknown_schema_uri() {
        let schema = json!({"$schema": "http://json-schema.org/draft-07/schema#"});
        assert!(dialect_from_schema(&schema).is_err());
    }

    #[test]
    fn unknown_schema_uri_error_points_at_schema_path() {
        let schema = json!({"$schema": "http://json-schema.org/draft-07/schema#"});
        let err = dialect_from_schema(&schema).unwrap_err();
        assert_eq!(err.path, Path::root().with_key("$schema"));
    }
}
