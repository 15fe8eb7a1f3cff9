//! Diagnostic system for the strongly generator.
//!
//! Every finding carries:
//! - A stable code for searchability (`STI2`, `STG3`, ...)
//! - A clear message (what is wrong)
//! - An optional location (which attribute or declaration) with a detail line
//! - Notes and help hints (how to fix it)
//!
//! Misconfiguration findings are warnings: generation always proceeds.
//! Only a failed generation for a declaration is an error, and it never
//! affects the other declarations of the same run.

mod diagnostic;
pub mod emitter;
mod error_code;
mod errors;
pub mod queue;

pub use diagnostic::{
    invalid_backing_type, invalid_flags, missing_partial, Diagnostic, Hint, Severity,
};
pub use error_code::ErrorCode;
pub use queue::{DiagnosticConfig, DiagnosticQueue, DiagnosticSink};
