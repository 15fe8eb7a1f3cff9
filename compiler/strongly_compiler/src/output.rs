//! Result types for the generation driver.
//!
//! These are the interface between the driver and its consumers (the CLI,
//! a build-host adapter, tests).

use strongly_diagnostic::{Diagnostic, Severity};

/// One generated file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeneratedSource {
    /// Unique key of the declaration, `Namespace.Parent.Name`.
    pub hint_name: String,
    /// `hint_name` with the `.g.cs` extension.
    pub file_name: String,
    pub text: String,
}

/// Result of one generation run.
#[derive(Clone, Debug, Default)]
pub struct GenerateOutput {
    /// Generated files, in declaration order.
    pub sources: Vec<GeneratedSource>,
    /// Every finding of the run, ordered by position.
    pub diagnostics: Vec<Diagnostic>,
    /// Declarations dropped because an attribute argument did not resolve.
    pub skipped: usize,
}

impl GenerateOutput {
    /// Whether any declaration failed to generate.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Look up a generated file by its hint name.
    pub fn source(&self, hint_name: &str) -> Option<&GeneratedSource> {
        self.sources.iter().find(|s| s.hint_name == hint_name)
    }
}

/// What happened to one declaration.
pub(crate) enum Outcome {
    Generated(GeneratedSource),
    Failed,
    Skipped,
}

impl GenerateOutput {
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Generated(source) => self.sources.push(source),
            Outcome::Failed => {}
            Outcome::Skipped => self.skipped += 1,
        }
    }
}
