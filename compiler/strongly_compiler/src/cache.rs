//! Memoizing driver.
//!
//! Assembly is a pure function of the [`DeclarationContext`], so a host that
//! regenerates after every edit can reuse the text of every declaration
//! whose context did not change. Extraction still runs each time and its
//! findings are reported fresh.

use rustc_hash::FxHashMap;
use strongly_codegen::AssembleError;
use strongly_diagnostic::DiagnosticQueue;
use strongly_extract::{extract_defaults, DeclarationContext};
use strongly_ir::{RawAttribute, RawDeclaration};

use crate::output::{GenerateOutput, GeneratedSource};
use crate::pipeline::{assemble_source, run_one, GenerateConfig};

/// Sequential driver with an assembly cache that survives across runs.
pub struct Generator {
    config: GenerateConfig,
    cache: FxHashMap<DeclarationContext, Result<GeneratedSource, AssembleError>>,
    scratch: String,
    hits: usize,
}

impl Generator {
    pub fn new(config: GenerateConfig) -> Self {
        let scratch = String::with_capacity(config.scratch_capacity);
        Self {
            config,
            cache: FxHashMap::default(),
            scratch,
            hits: 0,
        }
    }

    /// Same result as [`generate`](crate::generate) for the same input.
    #[tracing::instrument(level = "debug", skip_all, fields(declarations = declarations.len()))]
    pub fn generate(
        &mut self,
        declarations: &[RawDeclaration],
        defaults: &[RawAttribute],
    ) -> GenerateOutput {
        let Self {
            config,
            cache,
            scratch,
            hits,
        } = self;

        let mut queue = DiagnosticQueue::with_config(config.diagnostics.clone());
        let global = extract_defaults(defaults, &mut queue);

        let mut output = GenerateOutput::default();
        for declaration in declarations {
            let outcome = run_one(declaration, global.as_ref(), &mut queue, |ctx| {
                if let Some(cached) = cache.get(ctx) {
                    *hits += 1;
                    return cached.clone();
                }
                let result = assemble_source(ctx, scratch);
                cache.insert(ctx.clone(), result.clone());
                result
            });
            output.record(outcome);
        }

        tracing::debug!(cached = cache.len(), hits = *hits, "run complete");
        output.diagnostics = queue.flush();
        output
    }

    /// Number of distinct contexts remembered.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Total cache hits since creation or the last [`clear`](Self::clear).
    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GenerateConfig::default())
    }
}
