//! Error types (§3.5, §3.6, §7): `SchemaError` at compile time,
//! `ValidationError` at validation time. Both implement `std::error::Error`
//! by hand rather than pulling in a derive-macro error crate.
use crate::path::Path;
use serde_json::Value;
use std::{collections::HashMap, error, fmt};

/// Why a schema failed to compile.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaErrorKind {
    /// `type` is not a known type name, or not a non-empty list of them.
    InvalidType,
    /// `enum` is missing, empty, or contains structurally-equal duplicates.
    InvalidEnum,
    /// A `pattern`/`patternProperties` key is not a valid regular expression.
    InvalidRegex,
    /// A numeric bound (`minimum`, `maxItems`, ...) is missing, of the wrong
    /// type, or inconsistent with a sibling bound (e.g. `maximum < minimum`).
    InvalidBounds,
    /// A keyword's value has the wrong JSON type or shape for what the
    /// keyword expects (e.g. `properties` not an object of schemas).
    InvalidKeyword,
    /// An unsupported `format` name, or an unrecognized `$schema` dialect.
    UnknownVariant(String),
    /// The schema is not an object or boolean at a position a schema is
    /// expected.
    NotASchema,
    /// The schema nests deeper than `ValidatorOptions::max_depth` allows.
    MaxDepthExceeded,
}

impl fmt::Display for SchemaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaErrorKind::InvalidType => write!(f, "invalid `type`"),
            SchemaErrorKind::InvalidEnum => write!(f, "invalid `enum`"),
            SchemaErrorKind::InvalidRegex => write!(f, "invalid regular expression"),
            SchemaErrorKind::InvalidBounds => write!(f, "invalid numeric bound"),
            SchemaErrorKind::InvalidKeyword => write!(f, "invalid keyword configuration"),
            SchemaErrorKind::UnknownVariant(name) => write!(f, "unrecognized value: {}", name),
            SchemaErrorKind::NotASchema => write!(f, "not a valid schema"),
            SchemaErrorKind::MaxDepthExceeded => write!(f, "schema nesting exceeds max_depth"),
        }
    }
}

/// Raised during schema compilation (§3.6). Non-retriable; aborts
/// compilation at the first failure.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    pub path: Path,
    pub kind: SchemaErrorKind,
}

impl SchemaError {
    pub(crate) fn new(path: Path, kind: SchemaErrorKind) -> Self {
        SchemaError { path, kind }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema error at {}: {}", self.path, self.kind)
    }
}

impl error::Error for SchemaError {}

/// A single raw violation produced by one `Rule` invocation, before
/// grouping. Carries the keyword's own configured value, cloned at compile
/// time into the `Rule` closure (§3.5, §9 "Closures carrying compiled
/// state") rather than a live back-reference to the originating keyword.
#[derive(Debug, Clone)]
pub(crate) struct ErrorRecord {
    pub(crate) path: Path,
    pub(crate) keyword: &'static str,
    pub(crate) value: Value,
}

/// One keyword violation inside an [`ErrorGroup`].
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordViolation {
    pub keyword: &'static str,
    pub value: Value,
}

/// All violations recorded at a single instance `path`, in the order their
/// keywords fired.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorGroup {
    pub path: Path,
    pub errors: Vec<KeywordViolation>,
}

/// Raised when `Validator::validate` finds at least one violation (§7).
/// Groups errors by `path`, in first-occurrence order (§3.5, §8 "Order
/// stability"). Deliberately carries only machine-readable records, never
/// a formatted human message (§1 Non-goals).
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    groups: Vec<ErrorGroup>,
}

impl ValidationError {
    pub(crate) fn from_records(records: Vec<ErrorRecord>) -> Self {
        let mut order: Vec<Path> = Vec::new();
        let mut by_path: HashMap<Path, Vec<KeywordViolation>> = HashMap::new();
        for record in records {
            by_path.entry(record.path.clone()).or_insert_with(|| {
                order.push(record.path.clone());
                Vec::new()
            });
            by_path
                .get_mut(&record.path)
                .expect("just inserted")
                .push(KeywordViolation {
                    keyword: record.keyword,
                    value: record.value,
                });
        }
        let groups = order
            .into_iter()
            .map(|path| {
                let errors = by_path.remove(&path).unwrap_or_default();
                ErrorGroup { path, errors }
            })
            .collect();
        ValidationError { groups }
    }

    #[must_use]
    pub fn groups(&self) -> &[ErrorGroup] {
        &self.groups
    }

    #[must_use]
    pub fn into_groups(self) -> Vec<ErrorGroup> {
        self.groups
    }
}

impl IntoIterator for ValidationError {
    type Item = ErrorGroup;
    type IntoIter = std::vec::IntoIter<ErrorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationError {
    type Item = &'a ErrorGroup;
    type IntoIter = std::slice::Iter<'a, ErrorGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation error(s)", self.groups.len())?;
        for group in &self.groups {
            write!(f, "; at {}:", group.path)?;
            for violation in &group.errors {
                write!(f, " {}={}", violation.keyword, violation.value)?;
            }
        }
        Ok(())
    }
}

impl error::Error for ValidationError {}
