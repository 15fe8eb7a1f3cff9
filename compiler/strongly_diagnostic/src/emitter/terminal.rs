//! Human-readable output.
//!
//! ```text
//! warning[STI2]: the target of the Strongly attribute must be declared as partial: `UserId`
//!   --> ids.json:40..52: declared here without `partial`
//!   = help: add the `partial` modifier to `UserId`
//! ```

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::{Diagnostic, Hint, Severity};

use super::DiagnosticEmitter;

const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[1;31m";
const YELLOW: &str = "\x1b[1;33m";
const GREEN: &str = "\x1b[1;32m";
const CYAN: &str = "\x1b[1;36m";
const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    /// Printed before every location, usually the manifest path.
    origin: Option<String>,
    status: io::Result<()>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            origin: None,
            status: Ok(()),
        }
    }

    /// Prefix every location with `origin` (e.g. `orders.json:10..15`).
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    fn paint(&self, out: &mut String, text: &str, style: &str) {
        if self.colors {
            let _ = write!(out, "{style}{text}{RESET}");
        } else {
            out.push_str(text);
        }
    }

    fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();

        let style = match diagnostic.severity {
            Severity::Error => RED,
            Severity::Warning => YELLOW,
        };
        self.paint(&mut out, diagnostic.severity.as_str(), style);
        self.paint(&mut out, &format!("[{}]", diagnostic.code), BOLD);
        let _ = writeln!(out, ": {}", diagnostic.message);

        if let Some(span) = diagnostic.location.filter(|span| !span.is_dummy()) {
            out.push_str("  --> ");
            if let Some(origin) = &self.origin {
                let _ = write!(out, "{origin}:");
            }
            let _ = write!(out, "{span:?}: ");
            self.paint(&mut out, &diagnostic.detail, style);
            out.push('\n');
        }

        for hint in &diagnostic.hints {
            out.push_str("  = ");
            let style = match hint {
                Hint::Note(_) => CYAN,
                Hint::Help(_) => GREEN,
            };
            self.paint(&mut out, hint.kind(), style);
            let _ = writeln!(out, ": {}", hint.text());
        }

        out.push('\n');
        out
    }
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let text = self.render(diagnostic);
        if self.status.is_ok() {
            self.status = self.writer.write_all(text.as_bytes());
        }
    }

    fn finish(&mut self) -> io::Result<()> {
        std::mem::replace(&mut self.status, Ok(()))?;
        self.writer.flush()
    }
}
