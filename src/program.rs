//! The IR (§3.4, §4.3): a `Program` bundles general rules with a
//! type-dispatched rule table for one schema scope, and composes
//! recursively (`properties`, `items`, `allOf`, ... each hold nested
//! `Program`s).
use crate::{
    error::ErrorRecord,
    path::Path,
    value::{tag, Tag, TAG_COUNT},
};
use serde_json::Value;
use std::sync::Arc;

/// A compiled, executable keyword: a function of (instance path, instance
/// value, error accumulator), plus the metadata the optimizer needs.
pub(crate) struct CompiledRule {
    body: Box<dyn Fn(&Path, &Value, &mut Vec<ErrorRecord>) + Send + Sync>,
}

impl CompiledRule {
    pub(crate) fn new(
        body: impl Fn(&Path, &Value, &mut Vec<ErrorRecord>) + Send + Sync + 'static,
    ) -> Rule {
        Arc::new(CompiledRule { body: Box::new(body) })
    }

    #[inline]
    fn run(&self, path: &Path, value: &Value, errors: &mut Vec<ErrorRecord>) {
        (self.body)(path, value, errors)
    }
}

/// Rules are reference-counted so a single compiled keyword (e.g.
/// `minimum`, applicable to both `integer` and `number`) can be shared
/// across more than one `type_specific` slot without recompiling or
/// re-boxing its closure.
pub(crate) type Rule = Arc<CompiledRule>;

/// The IR node (§3.4): general rules apply regardless of instance type;
/// `type_specific[tag]` rules apply only when `tag(value) == tag`.
pub(crate) struct Program {
    pub(crate) general: Vec<Rule>,
    pub(crate) type_specific: [Vec<Rule>; TAG_COUNT],
    /// Diagnostic label only (parent's key or slot); never read by `run`.
    #[allow(dead_code)]
    pub(crate) field: Box<str>,
}

impl Program {
    pub(crate) fn empty(field: impl Into<Box<str>>) -> Self {
        Program {
            general: Vec::new(),
            type_specific: Default::default(),
            field: field.into(),
        }
    }

    /// A program that rejects every instance unconditionally, used to lower
    /// the boolean schema `false`.
    pub(crate) fn always_fail(field: impl Into<Box<str>>) -> Self {
        let rule = CompiledRule::new(|path, _value, errors| {
            errors.push(ErrorRecord {
                path: path.clone(),
                keyword: "false",
                value: Value::Bool(false),
            });
        });
        Program {
            general: vec![rule],
            type_specific: Default::default(),
            field: field.into(),
        }
    }

    /// True iff this program can never append an error, for any input —
    /// used by composite keywords (`allOf`, `properties`, `items`, ...) to
    /// recognize and eliminate trivially-true sub-programs (§2 "eliminates
    /// empty sub-programs", §4.4).
    pub(crate) fn is_empty(&self) -> bool {
        self.general.is_empty() && self.type_specific.iter().all(Vec::is_empty)
    }

    /// Run every applicable rule against `value`, appending violations to
    /// `errors` in declared order (§4.3): all `general` rules first, then
    /// the rules registered for `tag(value)`. `tag(value)` is computed
    /// exactly once per call — the type-test consolidation the optimizer
    /// would otherwise hoist is already baked into this dispatch, since
    /// every rule sharing a `type_specific` bucket reuses the same
    /// precomputed tag (§4.4 "Type-test consolidation", §9).
    pub(crate) fn run(&self, path: &Path, value: &Value, errors: &mut Vec<ErrorRecord>) {
        for rule in &self.general {
            rule.run(path, value, errors);
        }
        let bucket = &self.type_specific[tag(value).index()];
        for rule in bucket {
            rule.run(path, value, errors);
        }
    }

    /// Convenience used by `not`/`anyOf`/`oneOf`: run against a scratch
    /// accumulator and report whether any rule fired.
    pub(crate) fn matches(&self, path: &Path, value: &Value) -> bool {
        let mut scratch = Vec::new();
        self.run(path, value, &mut scratch);
        scratch.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn type_specific_is_empty_for(&self, tag: Tag) -> bool {
        self.type_specific[tag.index()].is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_program_never_errors() {
        let program = Program::empty("root");
        let mut errors = Vec::new();
        program.run(&Path::root(), &json!({"anything": 1}), &mut errors);
        assert!(errors.is_empty());
        assert!(program.is_empty());
    }

    #[test]
    fn always_fail_program_always_errors() {
        let program = Program::always_fail("root");
        let mut errors = Vec::new();
        program.run(&Path::root(), &json!(null), &mut errors);
        assert_eq!(errors.len(), 1);
        assert!(!program.is_empty());
    }

    #[test]
    fn general_rules_run_before_type_specific() {
        let mut program = Program::empty("root");
        program.general.push(CompiledRule::new(|path, _, errors| {
            errors.push(ErrorRecord { path: path.clone(), keyword: "general", value: json!(1) });
        }));
        program.type_specific[crate::value::Tag::Null.index()].push(CompiledRule::new(
            |path, _, errors| {
                errors.push(ErrorRecord {
                    path: path.clone(),
                    keyword: "type-specific",
                    value: json!(2),
                });
            },
        ));
        let mut errors = Vec::new();
        program.run(&Path::root(), &json!(null), &mut errors);
        assert_eq!(errors[0].keyword, "general");
        assert_eq!(errors[1].keyword, "type-specific");
    }
}
