//! Rendering findings for people and for build hosts.
//!
//! - [`TerminalEmitter`]: one block per finding, optionally colored
//! - [`JsonEmitter`]: one JSON array for the whole run

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::io;

use crate::Diagnostic;

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    /// Write out anything buffered and report the first write failure.
    fn finish(&mut self) -> io::Result<()>;
}
