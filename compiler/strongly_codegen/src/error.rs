//! Assembly failures.

use strongly_diagnostic::{Diagnostic, ErrorCode};
use strongly_ir::Span;

/// Why a declaration produced no source.
///
/// Contained per declaration: a driver reports it and moves on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum AssembleError {
    /// The context is not fit for generation.
    #[error("cannot generate `{name}`: {reason}")]
    InvalidInput { name: String, reason: &'static str },

    /// No template family for the backing type.
    #[error("cannot generate `{name}`: {backing} has no templates")]
    UnsupportedBackingKind { name: String, backing: String },
}

impl AssembleError {
    /// Error diagnostic for the declaration at `span`.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        Diagnostic::error(ErrorCode::GenerationFailed)
            .with_message(self.to_string())
            .at(span, "no source was generated for this declaration")
    }
}
