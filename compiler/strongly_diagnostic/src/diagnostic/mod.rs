//! Findings reported by the generator.
//!
//! A [`Diagnostic`] mirrors what a build host registers for a source
//! generator finding: a stable code, a severity, a one-line message and the
//! location of the attribute or declaration it is about. Follow-up lines are
//! [`Hint`]s.

use std::fmt;

use strongly_ir::Span;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    /// A declaration produced no source.
    Error,
    /// Misconfiguration; generation proceeded.
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A follow-up line under the message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Hint {
    /// Context: what the generator did about the finding.
    Note(String),
    /// What the user can change.
    Help(String),
}

impl Hint {
    pub fn kind(&self) -> &'static str {
        match self {
            Hint::Note(_) => "note",
            Hint::Help(_) => "help",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Hint::Note(text) | Hint::Help(text) => text,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Attribute or declaration span in the host file.
    pub location: Option<Span>,
    /// What is wrong at `location`.
    pub detail: String,
    pub hints: Vec<Hint>,
}

impl Diagnostic {
    fn with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            location: None,
            detail: String::new(),
            hints: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Warning)
    }

    /// A diagnostic at the code's default severity.
    #[cold]
    pub fn new(code: ErrorCode) -> Self {
        Self::with_severity(code, code.default_severity())
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point the finding at `span` and say what is wrong there.
    pub fn at(mut self, span: Span, detail: impl Into<String>) -> Self {
        self.location = Some(span);
        self.detail = detail.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.hints.push(Hint::Note(note.into()));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.hints.push(Hint::Help(help.into()));
        self
    }

    pub fn location(&self) -> Option<Span> {
        self.location
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Sort key: findings without a location come first.
    pub(crate) fn position(&self) -> u32 {
        self.location.map_or(0, |span| span.start)
    }
}

/// `warning STI2: message (10..15: detail)`, the shape MSBuild prints.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.code, self.message)?;
        if let Some(span) = self.location {
            write!(f, " ({span:?}: {})", self.detail)?;
        }
        for hint in &self.hints {
            write!(f, "\n  = {}: {}", hint.kind(), hint.text())?;
        }
        Ok(())
    }
}

/// The type carrying the attribute is not `partial`.
pub fn missing_partial(span: Span, type_name: &str) -> Diagnostic {
    Diagnostic::new(ErrorCode::MissingPartial)
        .with_message(format!(
            "the target of the Strongly attribute must be declared as partial: `{type_name}`"
        ))
        .at(span, "declared here without `partial`")
        .with_help(format!("add the `partial` modifier to `{type_name}`"))
}

/// A flag-set argument has undeclared bits. `code` selects the set and
/// `target` names what carries the attribute.
pub fn invalid_flags(
    code: ErrorCode,
    span: Span,
    target: &str,
    set_name: &str,
    raw: u32,
) -> Diagnostic {
    Diagnostic::new(code)
        .with_message(format!(
            "the {set_name} value provided for `{target}` is not a valid combination of flags"
        ))
        .at(span, format!("raw value `{raw}` has undeclared bits"))
        .with_note("generation continues with the value as written")
}

pub fn invalid_backing_type(span: Span, target: &str, raw: i32) -> Diagnostic {
    Diagnostic::new(ErrorCode::InvalidBackingType)
        .with_message(format!(
            "the StronglyType value provided for `{target}` is not a valid option"
        ))
        .at(span, format!("`{raw}` is not a StronglyType member"))
}

#[cfg(test)]
mod tests;
