//! Generation pipeline: defaults → extract → assemble, per declaration.
//!
//! Portable (no filesystem IO). The feed comes in as slices, results come
//! out as [`GenerateOutput`].

use rayon::prelude::*;
use strongly_codegen::{assemble, file_name, source_name, AssembleError};
use strongly_config::Configuration;
use strongly_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, DiagnosticSink};
use strongly_extract::{extract, extract_defaults, DeclarationContext};
use strongly_ir::{RawAttribute, RawDeclaration};

use crate::output::{GenerateOutput, GeneratedSource, Outcome};

/// Configuration for a generation run.
#[derive(Clone, Debug)]
pub struct GenerateConfig {
    /// Initial capacity of each scratch buffer.
    pub scratch_capacity: usize,
    pub diagnostics: DiagnosticConfig,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            scratch_capacity: 16 * 1024,
            diagnostics: DiagnosticConfig::default(),
        }
    }
}

/// Generate every declaration in order on the current thread.
#[tracing::instrument(level = "debug", skip_all, fields(declarations = declarations.len()))]
pub fn generate(
    declarations: &[RawDeclaration],
    defaults: &[RawAttribute],
    config: &GenerateConfig,
) -> GenerateOutput {
    let mut queue = DiagnosticQueue::with_config(config.diagnostics.clone());
    let global = extract_defaults(defaults, &mut queue);

    let mut scratch = String::with_capacity(config.scratch_capacity);
    let mut output = GenerateOutput::default();
    for declaration in declarations {
        let outcome = run_one(declaration, global.as_ref(), &mut queue, |ctx| {
            assemble_source(ctx, &mut scratch)
        });
        output.record(outcome);
    }

    output.diagnostics = queue.flush();
    output
}

/// [`generate`] across the rayon pool.
///
/// Each worker owns one scratch buffer. Sources and diagnostics come out in
/// the same order as the sequential run.
#[tracing::instrument(level = "debug", skip_all, fields(declarations = declarations.len()))]
pub fn generate_parallel(
    declarations: &[RawDeclaration],
    defaults: &[RawAttribute],
    config: &GenerateConfig,
) -> GenerateOutput {
    let mut queue = DiagnosticQueue::with_config(config.diagnostics.clone());
    let global = extract_defaults(defaults, &mut queue);

    let results: Vec<(Outcome, Vec<Diagnostic>)> = declarations
        .par_iter()
        .map_init(
            || String::with_capacity(config.scratch_capacity),
            |scratch, declaration| {
                let mut diagnostics: Vec<Diagnostic> = Vec::new();
                let outcome = run_one(declaration, global.as_ref(), &mut diagnostics, |ctx| {
                    assemble_source(ctx, scratch)
                });
                (outcome, diagnostics)
            },
        )
        .collect();

    let mut output = GenerateOutput::default();
    for (outcome, diagnostics) in results {
        for diagnostic in diagnostics {
            queue.report(diagnostic);
        }
        output.record(outcome);
    }

    output.diagnostics = queue.flush();
    output
}

/// Extract and assemble a single declaration.
///
/// `defaults` is the result of [`extract_defaults`]. Findings, including an
/// assembly failure, go to `sink`.
pub fn generate_one(
    declaration: &RawDeclaration,
    defaults: Option<&Configuration>,
    scratch: &mut String,
    sink: &mut impl DiagnosticSink,
) -> Option<GeneratedSource> {
    match run_one(declaration, defaults, sink, |ctx| assemble_source(ctx, scratch)) {
        Outcome::Generated(source) => Some(source),
        Outcome::Failed | Outcome::Skipped => None,
    }
}

/// Shared per-declaration step. `build` turns a context into a file; the
/// memoizing driver passes a cached lookup.
pub(crate) fn run_one(
    declaration: &RawDeclaration,
    defaults: Option<&Configuration>,
    sink: &mut impl DiagnosticSink,
    build: impl FnOnce(&DeclarationContext) -> Result<GeneratedSource, AssembleError>,
) -> Outcome {
    let Some(ctx) = extract(declaration, defaults, sink).into_context() else {
        return Outcome::Skipped;
    };

    match build(&ctx) {
        Ok(source) => Outcome::Generated(source),
        Err(err) => {
            tracing::debug!(error = %err, "assembly failed");
            sink.report(err.to_diagnostic(ctx.location));
            Outcome::Failed
        }
    }
}

/// Assemble `ctx` into a fresh file. `scratch` is cleared first.
pub(crate) fn assemble_source(
    ctx: &DeclarationContext,
    scratch: &mut String,
) -> Result<GeneratedSource, AssembleError> {
    scratch.clear();
    let text = assemble(ctx, scratch)?;
    Ok(GeneratedSource {
        hint_name: source_name(&ctx.namespace, &ctx.parents, &ctx.name),
        file_name: file_name(ctx),
        text,
    })
}
