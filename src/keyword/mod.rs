//! The keyword registry (§3.3, §4.2): a closed, tagged sum of every
//! recognized Draft 4 keyword, each constructed from its raw JSON value
//! plus its sibling keywords' raw values, and each compiling to at most one
//! [`Rule`](crate::program::Rule). Per §9 "Tagged-sum keyword registry",
//! this is a plain `enum` rather than `Box<dyn Validate>` — there is no
//! dynamic dispatch anywhere in the compiled representation.
mod additional_items;
mod additional_properties;
mod all_of;
mod annotation;
mod any_of;
mod enum_kw;
mod exclusive_bounds;
mod format;
mod items;
mod max_items;
mod max_length;
mod max_properties;
mod maximum;
mod min_items;
mod min_length;
mod min_properties;
mod minimum;
mod multiple_of;
mod not_kw;
mod one_of;
mod pattern;
mod pattern_properties;
mod properties;
mod required;
mod type_kw;
mod unique_items;

use crate::{
    context::CompilationContext,
    error::SchemaError,
    path::Path,
    program::Rule,
    value::Tag,
};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub(crate) enum Keyword {
    Type(type_kw::TypeKw),
    Enum(enum_kw::EnumKw),
    AllOf(all_of::AllOf),
    AnyOf(any_of::AnyOf),
    OneOf(one_of::OneOf),
    Not(not_kw::Not),
    Items(items::Items),
    AdditionalItems(additional_items::AdditionalItems),
    MinItems(min_items::MinItems),
    MaxItems(max_items::MaxItems),
    UniqueItems(unique_items::UniqueItems),
    MultipleOf(multiple_of::MultipleOf),
    Minimum(minimum::Minimum),
    Maximum(maximum::Maximum),
    ExclusiveMinimum(exclusive_bounds::ExclusiveMinimum),
    ExclusiveMaximum(exclusive_bounds::ExclusiveMaximum),
    Properties(properties::Properties),
    PatternProperties(pattern_properties::PatternProperties),
    AdditionalProperties(additional_properties::AdditionalProperties),
    Required(required::Required),
    MinProperties(min_properties::MinProperties),
    MaxProperties(max_properties::MaxProperties),
    MinLength(min_length::MinLength),
    MaxLength(max_length::MaxLength),
    Pattern(pattern::Pattern),
    Format(format::FormatKw),
    Annotation(annotation::Annotation),
}

/// A single slot in a dialect's keyword table (§4.1 step 2, §4.3): the
/// keyword's name, the function that builds it from a raw schema value,
/// plus its siblings and the point it was found at, and its declared
/// applicability (used for §4.1 step 4's pruning).
pub(crate) type Constructor = fn(
    &Value,
    &Path,
    &Map<String, Value>,
    usize,
    &CompilationContext,
) -> Result<Keyword, SchemaError>;

pub(crate) struct KeywordSlot {
    pub(crate) name: &'static str,
    pub(crate) construct: Constructor,
}

impl Keyword {
    pub(crate) fn applicability(&self) -> &'static [Tag] {
        match self {
            Keyword::Type(kw) => kw.applicability(),
            Keyword::Enum(kw) => kw.applicability(),
            Keyword::AllOf(kw) => kw.applicability(),
            Keyword::AnyOf(kw) => kw.applicability(),
            Keyword::OneOf(kw) => kw.applicability(),
            Keyword::Not(kw) => kw.applicability(),
            Keyword::Items(kw) => kw.applicability(),
            Keyword::AdditionalItems(kw) => kw.applicability(),
            Keyword::MinItems(kw) => kw.applicability(),
            Keyword::MaxItems(kw) => kw.applicability(),
            Keyword::UniqueItems(kw) => kw.applicability(),
            Keyword::MultipleOf(kw) => kw.applicability(),
            Keyword::Minimum(kw) => kw.applicability(),
            Keyword::Maximum(kw) => kw.applicability(),
            Keyword::ExclusiveMinimum(kw) => kw.applicability(),
            Keyword::ExclusiveMaximum(kw) => kw.applicability(),
            Keyword::Properties(kw) => kw.applicability(),
            Keyword::PatternProperties(kw) => kw.applicability(),
            Keyword::AdditionalProperties(kw) => kw.applicability(),
            Keyword::Required(kw) => kw.applicability(),
            Keyword::MinProperties(kw) => kw.applicability(),
            Keyword::MaxProperties(kw) => kw.applicability(),
            Keyword::MinLength(kw) => kw.applicability(),
            Keyword::MaxLength(kw) => kw.applicability(),
            Keyword::Pattern(kw) => kw.applicability(),
            Keyword::Format(kw) => kw.applicability(),
            Keyword::Annotation(kw) => kw.applicability(),
        }
    }

    /// Proven at construction time to never contribute an error on any
    /// input; used by [`crate::compiler::compile_schema`] to build a dead
    /// [`crate::optimizer::Candidate`] rather than a live one (§4.4).
    pub(crate) fn is_dead(&self) -> bool {
        match self {
            Keyword::AllOf(kw) => kw.is_dead(),
            Keyword::Items(kw) => kw.is_dead(),
            Keyword::AdditionalItems(kw) => kw.is_dead(),
            Keyword::MinItems(kw) => kw.is_dead(),
            Keyword::UniqueItems(kw) => kw.is_dead(),
            Keyword::Properties(kw) => kw.is_dead(),
            Keyword::PatternProperties(kw) => kw.is_dead(),
            Keyword::AdditionalProperties(kw) => kw.is_dead(),
            Keyword::MinProperties(kw) => kw.is_dead(),
            Keyword::MinLength(kw) => kw.is_dead(),
            Keyword::Not(kw) => kw.is_dead(),
            _ => false,
        }
    }

    pub(crate) fn compile(&self) -> Result<Option<Rule>, SchemaError> {
        match self {
            Keyword::Type(kw) => kw.compile(),
            Keyword::Enum(kw) => kw.compile(),
            Keyword::AllOf(kw) => kw.compile(),
            Keyword::AnyOf(kw) => kw.compile(),
            Keyword::OneOf(kw) => kw.compile(),
            Keyword::Not(kw) => kw.compile(),
            Keyword::Items(kw) => kw.compile(),
            Keyword::AdditionalItems(kw) => kw.compile(),
            Keyword::MinItems(kw) => kw.compile(),
            Keyword::MaxItems(kw) => kw.compile(),
            Keyword::UniqueItems(kw) => kw.compile(),
            Keyword::MultipleOf(kw) => kw.compile(),
            Keyword::Minimum(kw) => kw.compile(),
            Keyword::Maximum(kw) => kw.compile(),
            Keyword::ExclusiveMinimum(kw) => kw.compile(),
            Keyword::ExclusiveMaximum(kw) => kw.compile(),
            Keyword::Properties(kw) => kw.compile(),
            Keyword::PatternProperties(kw) => kw.compile(),
            Keyword::AdditionalProperties(kw) => kw.compile(),
            Keyword::Required(kw) => kw.compile(),
            Keyword::MinProperties(kw) => kw.compile(),
            Keyword::MaxProperties(kw) => kw.compile(),
            Keyword::MinLength(kw) => kw.compile(),
            Keyword::MaxLength(kw) => kw.compile(),
            Keyword::Pattern(kw) => kw.compile(),
            Keyword::Format(kw) => kw.compile(),
            Keyword::Annotation(kw) => kw.compile(),
        }
    }

    /// The declared `type` set, if this is the `type` keyword — used by
    /// `compile_schema` for §4.1 step 4's dead-rule pruning.
    pub(crate) fn declared_types(&self) -> Option<&BTreeSet<Tag>> {
        match self {
            Keyword::Type(kw) => Some(&kw.allowed),
            _ => None,
        }
    }
}

/// The Draft 4 keyword table, in the fixed declared order rule execution
/// must follow (§3.3, §4.1 step 2, §8 "Order stability") — independent of
/// whatever order the schema object's own keys happen to iterate in.
pub(crate) static DRAFT4_KEYWORDS: &[KeywordSlot] = &[
    KeywordSlot { name: "type", construct: type_kw::construct },
    KeywordSlot { name: "enum", construct: enum_kw::construct },
    KeywordSlot { name: "allOf", construct: all_of::construct },
    KeywordSlot { name: "anyOf", construct: any_of::construct },
    KeywordSlot { name: "oneOf", construct: one_of::construct },
    KeywordSlot { name: "not", construct: not_kw::construct },
    KeywordSlot { name: "multipleOf", construct: multiple_of::construct },
    KeywordSlot { name: "maximum", construct: maximum::construct },
    KeywordSlot { name: "exclusiveMaximum", construct: exclusive_bounds::construct_maximum },
    KeywordSlot { name: "minimum", construct: minimum::construct },
    KeywordSlot { name: "exclusiveMinimum", construct: exclusive_bounds::construct_minimum },
    KeywordSlot { name: "maxLength", construct: max_length::construct },
    KeywordSlot { name: "minLength", construct: min_length::construct },
    KeywordSlot { name: "pattern", construct: pattern::construct },
    KeywordSlot { name: "format", construct: format::construct },
    KeywordSlot { name: "items", construct: items::construct },
    KeywordSlot { name: "additionalItems", construct: additional_items::construct },
    KeywordSlot { name: "maxItems", construct: max_items::construct },
    KeywordSlot { name: "minItems", construct: min_items::construct },
    KeywordSlot { name: "uniqueItems", construct: unique_items::construct },
    KeywordSlot { name: "properties", construct: properties::construct },
    KeywordSlot { name: "patternProperties", construct: pattern_properties::construct },
    KeywordSlot { name: "additionalProperties", construct: additional_properties::construct },
    KeywordSlot { name: "required", construct: required::construct },
    KeywordSlot { name: "maxProperties", construct: max_properties::construct },
    KeywordSlot { name: "minProperties", construct: min_properties::construct },
    KeywordSlot { name: "title", construct: annotation::construct },
    KeywordSlot { name: "description", construct: annotation::construct },
    KeywordSlot { name: "default", construct: annotation::construct },
];
