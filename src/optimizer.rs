//! The optimizer (§4.4): local, pure rewrites over a freshly-lowered
//! `Program`. Per §9 "Optimizer via textual AST rewriting", there is no
//! separate generated-source pass here — each transformation is folded
//! directly into the IR as it is built:
//!
//! - **Type-test consolidation** is not a rewrite performed by this module
//!   at all: `Program::run` already computes `tag(value)` exactly once and
//!   every rule sharing a `type_specific` bucket reuses it, so there is
//!   nothing left to hoist once the IR is represented this way.
//! - **Single-error specialization** is likewise inherent to how each
//!   keyword's `Rule` closure is written (`not`, `oneOf`, single-branch
//!   `required` misses, ...): they append exactly one record directly,
//!   with no "collect, then maybe discard" machinery in between.
//! - **Dead sub-program elimination** is the one transformation this module
//!   actually performs: composite keywords (`allOf`, `anyOf`, `properties`,
//!   ...) hand their compiled `Rule`s a `dead` flag, set at construction
//!   time from [`crate::program::Program::is_empty`] on their nested
//!   sub-programs; `optimize` strips every rule so flagged. This realizes
//!   the dead-rule elimination mentioned in §2's overview of the optimizer.
use crate::{
    program::{Program, Rule},
    value::TAG_COUNT,
};

/// A `Rule` together with whether it was proven, at construction time, to
/// never contribute an error on any input.
pub(crate) struct Candidate {
    pub(crate) rule: Rule,
    pub(crate) dead: bool,
}

impl Candidate {
    pub(crate) fn live(rule: Rule) -> Self {
        Candidate { rule, dead: false }
    }

    pub(crate) fn dead(rule: Rule) -> Self {
        Candidate { rule, dead: true }
    }
}

/// Bottom-up rewrite: drop every `Candidate` marked `dead`, keep the rest.
/// `P` and `optimize(P)` are required to produce equal error sequences on
/// every input (§4.4) — stripping a rule proven to never fire trivially
/// satisfies that, since it never contributed to the sequence in the first
/// place.
pub(crate) fn optimize(
    general: Vec<Candidate>,
    type_specific: [Vec<Candidate>; TAG_COUNT],
) -> Program {
    optimize_with_field(general, type_specific, Box::from(""))
}

/// Same as [`optimize`], but stamps the resulting `Program` with a
/// diagnostic `field` label (the schema path it was compiled from).
pub(crate) fn optimize_with_field(
    general: Vec<Candidate>,
    type_specific: [Vec<Candidate>; TAG_COUNT],
    field: Box<str>,
) -> Program {
    Program {
        general: strip_dead(general),
        type_specific: type_specific.map(strip_dead),
        field,
    }
}

fn strip_dead(candidates: Vec<Candidate>) -> Vec<Rule> {
    candidates
        .into_iter()
        .filter(|candidate| !candidate.dead)
        .map(|candidate| candidate.rule)
        .collect()
}
