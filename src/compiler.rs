//! The compilation pipeline (§4.1): parse → per-keyword compile → prune →
//! lower → optimize, all in one recursive pass over nested schema objects.
use crate::{
    context::CompilationContext,
    error::{SchemaError, SchemaErrorKind},
    keyword::{Keyword, DRAFT4_KEYWORDS},
    optimizer::{self, Candidate},
    path::Path,
    program::Program,
    value::{expand_declared_types, Tag, ALL_TAGS, TAG_COUNT},
};
use serde_json::Value;
use std::collections::BTreeSet;

/// Compile one schema node (boolean or object) into a [`Program`] (§4.1).
///
/// `depth` counts nested schema objects from the validator's root; it is an
/// explicit parameter, not mutable state threaded through `&mut self`, so
/// that every recursive call owns its own view of how deep it is (§5
/// "Mutation discipline", §9 "Explicit depth parameter").
pub(crate) fn compile_schema(
    schema: &Value,
    path: Path,
    depth: usize,
    ctx: &CompilationContext,
) -> Result<Program, SchemaError> {
    if depth > ctx.max_depth {
        return Err(SchemaError::new(path, SchemaErrorKind::MaxDepthExceeded));
    }
    let field = Box::from(path.to_string());
    match schema {
        Value::Bool(true) => return Ok(Program::empty(field)),
        Value::Bool(false) => return Ok(Program::always_fail(field)),
        Value::Object(object) => {
            if object.is_empty() {
                return Ok(Program::empty(field));
            }
            let mut keywords = Vec::new();
            for slot in DRAFT4_KEYWORDS {
                if let Some(value) = object.get(slot.name) {
                    let keyword = (slot.construct)(value, &path, object, depth, ctx)?;
                    keywords.push(keyword);
                }
            }
            Ok(lower(keywords, field))
        }
        _ => Err(SchemaError::new(path, SchemaErrorKind::NotASchema)),
    }
}

/// §4.1 steps 3-6: prune keywords disjoint from the declared `type` set,
/// lower the rest into general/type-specific buckets, then run the
/// optimizer over the result.
fn lower(keywords: Vec<Keyword>, field: Box<str>) -> Program {
    let declared = keywords
        .iter()
        .find_map(Keyword::declared_types)
        .map(expand_declared_types)
        .unwrap_or_else(|| ALL_TAGS.iter().copied().collect::<BTreeSet<Tag>>());

    let mut general: Vec<Candidate> = Vec::new();
    let mut type_specific: [Vec<Candidate>; TAG_COUNT] = Default::default();

    for keyword in &keywords {
        let applicability = keyword.applicability();
        if applicability.is_empty() {
            if let Some(rule) = compile_or_skip(keyword) {
                general.push(candidate(rule, keyword.is_dead()));
            }
            continue;
        }
        let relevant: Vec<Tag> = applicability.iter().copied().filter(|tag| declared.contains(tag)).collect();
        if relevant.is_empty() {
            // Disjoint from the declared `type` set: this keyword can never
            // run on any instance this schema could ever accept (§4.1 step 4).
            continue;
        }
        if let Some(rule) = compile_or_skip(keyword) {
            let dead = keyword.is_dead();
            for tag in relevant {
                type_specific[tag.index()].push(candidate(rule.clone(), dead));
            }
        }
    }

    optimizer::optimize_with_field(general, type_specific, field)
}

fn compile_or_skip(keyword: &Keyword) -> Option<crate::program::Rule> {
    // `compile_schema` never calls this with a keyword whose `compile`
    // returns `Err` going unnoticed: any per-keyword `SchemaError` from a
    // nested composite (`allOf`, `properties`, ...) is raised eagerly from
    // within `construct`, before the keyword ever reaches `lower`.
    keyword.compile().expect("keyword construction already validated its own shape")
}

fn candidate(rule: crate::program::Rule, dead: bool) -> Candidate {
    if dead {
        Candidate::dead(rule)
    } else {
        Candidate::live(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ValidatorOptions;
    use serde_json::json;

    fn ctx() -> CompilationContext {
        CompilationContext::new(&ValidatorOptions::new())
    }

    #[test]
    fn true_schema_compiles_to_empty_program() {
        let program = compile_schema(&json!(true), Path::root(), 0, &ctx()).unwrap();
        assert!(program.is_empty());
    }

    #[test]
    fn false_schema_always_fails() {
        let program = compile_schema(&json!(false), Path::root(), 0, &ctx()).unwrap();
        let mut errors = Vec::new();
        program.run(&Path::root(), &json!(1), &mut errors);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn numeric_keyword_is_pruned_when_disjoint_from_declared_type() {
        let program = compile_schema(&json!({"type": "string", "minimum": 5}), Path::root(), 0, &ctx()).unwrap();
        assert!(program.type_specific_is_empty_for(crate::value::Tag::Integer));
    }

    #[test]
    fn max_depth_is_enforced() {
        let mut schema = json!({"type": "integer"});
        for _ in 0..5 {
            schema = json!({"allOf": [schema]});
        }
        let err = compile_schema(&schema, Path::root(), 0, &CompilationContext { max_depth: 2 });
        assert!(err.is_err());
    }
}
