//! Collecting diagnostics from a generation run.
//!
//! The generator reports through the [`DiagnosticSink`] trait so a host can
//! forward findings straight into its own reporting callback. The
//! [`DiagnosticQueue`] is the in-process sink used by the driver and the CLI:
//! it counts, deduplicates and orders findings.

use rustc_hash::FxHashSet;
use strongly_ir::Span;

use crate::{Diagnostic, ErrorCode, Severity};

/// Receiver for findings.
///
/// Reporting never fails and never aborts generation.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Errors kept before further errors are dropped (0 = unlimited).
    pub error_limit: usize,
    /// Drop a finding with the same code, location and message as a queued one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Keep every finding.
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

type FindingKey = (ErrorCode, Option<Span>, String);

/// Sink that filters by [`DiagnosticConfig`] and hands findings back in
/// source order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    seen: FxHashSet<FindingKey>,
    errors: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Queue `diagnostic` unless the error limit or deduplication drops it.
    /// Returns whether it was kept.
    pub fn add(&mut self, diagnostic: Diagnostic) -> bool {
        if diagnostic.is_error() && self.error_limit_reached() {
            return false;
        }

        if self.config.deduplicate {
            let key = (
                diagnostic.code,
                diagnostic.location,
                diagnostic.message.clone(),
            );
            if !self.seen.insert(key) {
                return false;
            }
        }

        if diagnostic.is_error() {
            self.errors += 1;
        }
        self.diagnostics.push(diagnostic);
        true
    }

    fn error_limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.errors >= self.config.error_limit
    }

    /// Take every queued finding, ordered by location.
    ///
    /// The sort is stable: findings at the same position keep report order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let mut diagnostics = std::mem::take(&mut self.diagnostics);
        diagnostics.sort_by_key(Diagnostic::position);
        self.seen.clear();
        self.errors = 0;
        diagnostics
    }

    /// Queued findings in report order.
    pub fn peek(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.errors
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

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}

#[cfg(test)]
mod tests;
