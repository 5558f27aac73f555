//! The JSON value model (§3.1): a tagged view over `serde_json::Value`.
//!
//! We reuse `serde_json::Value` rather than hand-rolling a parallel tagged
//! sum, the way a library that already sits on top of `serde_json` for its
//! input type naturally would; [`Tag`] is the discriminant the compiler and
//! executor dispatch on, and [`equal`] is the dedicated structural-equality
//! function the `enum` and `uniqueItems` keywords need (see §9 "Structural
//! equality and hashing" — we do not lean on `serde_json::Value`'s own
//! `PartialEq` because it does not treat an integer and an equal-valued
//! float as the same number).
use num_cmp::NumCmp;
use serde_json::{Number, Value};
use std::cmp::Ordering;

/// The seven JSON Schema instance types, plus the `integer`/`number` split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Tag {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

/// Number of distinct [`Tag`] variants; used to size the type-specific rule
/// table in [`crate::program::Program`].
pub(crate) const TAG_COUNT: usize = 7;

impl Tag {
    pub(crate) fn index(self) -> usize {
        match self {
            Tag::Null => 0,
            Tag::Boolean => 1,
            Tag::Integer => 2,
            Tag::Number => 3,
            Tag::String => 4,
            Tag::Array => 5,
            Tag::Object => 6,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Tag::Null => "null",
            Tag::Boolean => "boolean",
            Tag::Integer => "integer",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::Array => "array",
            Tag::Object => "object",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Tag> {
        match name {
            "null" => Some(Tag::Null),
            "boolean" => Some(Tag::Boolean),
            "integer" => Some(Tag::Integer),
            "number" => Some(Tag::Number),
            "string" => Some(Tag::String),
            "array" => Some(Tag::Array),
            "object" => Some(Tag::Object),
            _ => None,
        }
    }
}

/// All seven tags, in a fixed, deterministic order (used when iterating a
/// `type_specific` table and when reporting `type` violations).
pub(crate) const ALL_TAGS: [Tag; TAG_COUNT] = [
    Tag::Null,
    Tag::Boolean,
    Tag::Integer,
    Tag::Number,
    Tag::String,
    Tag::Array,
    Tag::Object,
];

/// Applicability sets from §4.2's keyword tables.
pub(crate) const APPLIES_GENERAL: &[Tag] = &[];
pub(crate) const APPLIES_ARRAY: &[Tag] = &[Tag::Array];
pub(crate) const APPLIES_NUMERIC: &[Tag] = &[Tag::Integer, Tag::Number];
pub(crate) const APPLIES_OBJECT: &[Tag] = &[Tag::Object];
pub(crate) const APPLIES_STRING: &[Tag] = &[Tag::String];

/// Expand a declared `type` set so that `number` also covers `integer`
/// instances (an integer value satisfies `"type": "number"`), matching
/// [`matches_type`]. Used when deciding which `type_specific` buckets a
/// numeric keyword should land in, and when pruning keywords disjoint from
/// the declared set (§4.1 step 4).
pub(crate) fn expand_declared_types(declared: &std::collections::BTreeSet<Tag>) -> std::collections::BTreeSet<Tag> {
    let mut expanded = declared.clone();
    if expanded.contains(&Tag::Number) {
        expanded.insert(Tag::Integer);
    }
    expanded
}

/// The variant discriminator of `value` (§3.1, glossary "Tag").
///
/// A `serde_json::Number` that holds an exact integral value is reported as
/// [`Tag::Integer`], never [`Tag::Number`]; everything else numeric is
/// [`Tag::Number`]. This is what lets a single instance satisfy both
/// `"type": "integer"` and `"type": "number"`, handled in [`matches_type`].
pub(crate) fn tag(value: &Value) -> Tag {
    match value {
        Value::Null => Tag::Null,
        Value::Bool(_) => Tag::Boolean,
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                Tag::Integer
            } else if number.as_f64().map_or(false, is_integral) {
                Tag::Integer
            } else {
                Tag::Number
            }
        }
        Value::String(_) => Tag::String,
        Value::Array(_) => Tag::Array,
        Value::Object(_) => Tag::Object,
    }
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

enum Repr {
    I(i64),
    U(u64),
    F(f64),
}

fn repr(number: &Number) -> Repr {
    if let Some(v) = number.as_i64() {
        Repr::I(v)
    } else if let Some(v) = number.as_u64() {
        Repr::U(v)
    } else {
        Repr::F(number.as_f64().unwrap_or(f64::NAN))
    }
}

/// Compare `instance` (if it's a number) against `bound` by picking each
/// side's most precise native representation (`i64`/`u64`/`f64`) and
/// comparing with [`num_cmp::NumCmp`], so a bound outside `f64`'s 53-bit
/// exact-integer range is never silently rounded (§9 "Numeric comparison
/// precision").
pub(crate) fn compare_numbers(instance: &Value, bound: &Number) -> Option<Ordering> {
    let instance = match instance {
        Value::Number(number) => number,
        _ => return None,
    };
    let (left, right) = (repr(instance), repr(bound));
    match (left, right) {
        (Repr::I(a), Repr::I(b)) => a.num_cmp(b),
        (Repr::I(a), Repr::U(b)) => a.num_cmp(b),
        (Repr::I(a), Repr::F(b)) => a.num_cmp(b),
        (Repr::U(a), Repr::I(b)) => a.num_cmp(b),
        (Repr::U(a), Repr::U(b)) => a.num_cmp(b),
        (Repr::U(a), Repr::F(b)) => a.num_cmp(b),
        (Repr::F(a), Repr::I(b)) => a.num_cmp(b),
        (Repr::F(a), Repr::U(b)) => a.num_cmp(b),
        (Repr::F(a), Repr::F(b)) => a.num_cmp(b),
    }
}

/// Does `value` satisfy the named JSON Schema type `wanted`? An integer
/// value matches both `integer` and `number`.
pub(crate) fn matches_type(value: &Value, wanted: Tag) -> bool {
    let actual = tag(value);
    actual == wanted || (wanted == Tag::Number && actual == Tag::Integer)
}

/// Recursive structural equality over JSON values (§3.1, §9). Object key
/// order is irrelevant; array order is significant; an integer and a
/// mathematically-equal float compare equal.
pub(crate) fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => left.as_f64() == right.as_f64(),
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right.iter()).all(|(a, b)| equal(a, b))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .all(|(key, value)| right.get(key).map_or(false, |other| equal(value, other)))
        }
        (left, right) => left == right,
    }
}
