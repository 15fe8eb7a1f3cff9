//! Diagnostic codes reported by the generator.
//!
//! Each code is a stable identifier (e.g. `STI2`) that shows up next to the
//! finding in the host compiler and is used for `--explain` lookups.

use std::fmt;

use crate::Severity;

/// Codes for every finding the generator can report.
///
/// Identifier prefixes:
/// - `STI`: problems with the annotated declaration itself
/// - `STG`: problems with attribute configuration values
/// - `STE`: generation failures
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// The annotated type is not declared `partial` (`STI2`)
    MissingPartial,
    /// Converter flags are outside the declared range (`STG3`)
    InvalidConverter,
    /// Backing type is not a known member (`STG4`)
    InvalidBackingType,
    /// Implementation flags are outside the declared range (`STI5`)
    InvalidImplementations,
    /// Cast flags are outside the declared range (`STG6`)
    InvalidCast,
    /// Math flags are outside the declared range (`STG7`)
    InvalidMath,
    /// Cast operators requested for a backing type that cannot have them (`STG8`)
    UnsupportedCast,
    /// Math operators requested for a backing type that cannot have them (`STG9`)
    UnsupportedMath,
    /// Source generation failed for one declaration (`STE1`)
    GenerationFailed,
}

impl ErrorCode {
    /// All codes, in identifier order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::MissingPartial,
        ErrorCode::InvalidConverter,
        ErrorCode::InvalidBackingType,
        ErrorCode::InvalidImplementations,
        ErrorCode::InvalidCast,
        ErrorCode::InvalidMath,
        ErrorCode::UnsupportedCast,
        ErrorCode::UnsupportedMath,
        ErrorCode::GenerationFailed,
    ];

    /// The stable identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::MissingPartial => "STI2",
            ErrorCode::InvalidConverter => "STG3",
            ErrorCode::InvalidBackingType => "STG4",
            ErrorCode::InvalidImplementations => "STI5",
            ErrorCode::InvalidCast => "STG6",
            ErrorCode::InvalidMath => "STG7",
            ErrorCode::UnsupportedCast => "STG8",
            ErrorCode::UnsupportedMath => "STG9",
            ErrorCode::GenerationFailed => "STE1",
        }
    }

    /// Short human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::MissingPartial => "Must be partial",
            ErrorCode::InvalidConverter => "Invalid converter",
            ErrorCode::InvalidBackingType => "Invalid backing type",
            ErrorCode::InvalidImplementations => "Invalid implementations value",
            ErrorCode::InvalidCast => "Invalid cast value",
            ErrorCode::InvalidMath => "Invalid math value",
            ErrorCode::UnsupportedCast => "Unsupported cast operators",
            ErrorCode::UnsupportedMath => "Unsupported math operators",
            ErrorCode::GenerationFailed => "Generation failed",
        }
    }

    /// Category shown by hosts that group findings.
    pub fn category(&self) -> &'static str {
        match self {
            ErrorCode::GenerationFailed => "Generation",
            _ => "Usage",
        }
    }

    /// Severity a finding with this code is reported at.
    pub fn default_severity(&self) -> Severity {
        if self.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    /// Misconfiguration findings never stop generation.
    pub fn is_warning(&self) -> bool {
        !matches!(self, ErrorCode::GenerationFailed)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an identifier like `"STG3"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`].
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
