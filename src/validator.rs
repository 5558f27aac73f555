//! The public façade (§6): compiles a schema once, then validates any
//! number of instances against the resulting [`Program`].
use crate::{
    compiler::compile_schema,
    context::CompilationContext,
    dialect::{dialect_from_schema, Dialect},
    error::{SchemaError, ValidationError},
    options::ValidatorOptions,
    path::Path,
    program::Program,
};
use serde_json::Value;

/// A compiled Draft 4 schema, ready to validate instances.
///
/// Compilation (parsing, keyword construction, pruning, lowering, and
/// optimization — §4.1-§4.4) happens once, in [`Validator::compile`];
/// validating an instance afterwards only ever walks the resulting
/// [`Program`] (§2).
pub struct Validator<'a> {
    schema: &'a Value,
    dialect: Dialect,
    program: Program,
}

impl<'a> Validator<'a> {
    /// Compile `schema` with default options (§6).
    pub fn compile(schema: &'a Value) -> Result<Self, SchemaError> {
        Self::compile_with_options(schema, ValidatorOptions::default())
    }

    pub(crate) fn compile_with_options(
        schema: &'a Value,
        options: ValidatorOptions,
    ) -> Result<Self, SchemaError> {
        let span = tracing::debug_span!("compile_schema");
        let _guard = span.enter();
        let dialect = dialect_from_schema(schema)?;
        let ctx = CompilationContext::new(&options);
        let program = compile_schema(schema, Path::root(), 0, &ctx)?;
        tracing::debug!(dialect = ?dialect, "schema compiled");
        Ok(Validator { schema, dialect, program })
    }

    /// The root schema this validator was compiled from.
    #[must_use]
    pub fn schema(&self) -> &Value {
        self.schema
    }

    /// The dialect selected during compilation (§4.1 step 1).
    #[allow(dead_code)]
    pub(crate) fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Validate `instance`, collecting every violation (§7). `Ok(())` means
    /// `instance` satisfies the schema.
    pub fn validate(&self, instance: &Value) -> Result<(), ValidationError> {
        let span = tracing::debug_span!("validate");
        let _guard = span.enter();
        let mut records = Vec::new();
        self.program.run(&Path::root(), instance, &mut records);
        if records.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::from_records(records))
        }
    }

    /// Convenience shortcut over [`Validator::validate`] for callers who
    /// only need a yes/no answer (§6).
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.program.matches(&Path::root(), instance)
    }
}
