//! Portable strongly generator driver.
//!
//! Provides an IO-free generation pipeline suitable for build-host adapters,
//! the CLI and test harnesses: raw declarations and defaults attributes go
//! in, generated C# files and diagnostics come out.
//!
//! # Usage
//!
//! ```ignore
//! use strongly_compiler::{generate, GenerateConfig};
//!
//! let output = generate(&declarations, &defaults, &GenerateConfig::default());
//! for source in &output.sources {
//!     println!("{}", source.file_name);
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! strongly_ir, strongly_config, strongly_extract, strongly_codegen
//!                          ↓
//!                 strongly_compiler  ← this crate
//!                          ↓
//!                      stronglyc
//! ```
//!
//! One failing declaration never aborts the run: its failure becomes an
//! `STE1` error diagnostic and the remaining declarations are generated.

mod cache;
mod output;
mod pipeline;

pub use cache::Generator;
pub use output::{GenerateOutput, GeneratedSource};
pub use pipeline::{generate, generate_one, generate_parallel, GenerateConfig};

use strongly_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use strongly_diagnostic::Diagnostic;

/// Render diagnostics as human-readable text.
///
/// `origin` (usually the manifest path) prefixes every location.
pub fn render_diagnostics(
    diagnostics: &[Diagnostic],
    origin: Option<&str>,
    color: ColorMode,
) -> String {
    let mut buf = Vec::new();
    {
        let mut emitter = TerminalEmitter::with_color_mode(&mut buf, color, false);
        if let Some(origin) = origin {
            emitter = emitter.with_origin(origin);
        }
        emitter.emit_all(diagnostics);
        // Writing into a Vec cannot fail.
        let _ = emitter.finish();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Render diagnostics as a JSON array.
pub fn render_diagnostics_json(diagnostics: &[Diagnostic]) -> String {
    let mut buf = Vec::new();
    {
        let mut emitter = JsonEmitter::new(&mut buf);
        emitter.emit_all(diagnostics);
        let _ = emitter.finish();
    }
    String::from_utf8_lossy(&buf).into_owned()
}
