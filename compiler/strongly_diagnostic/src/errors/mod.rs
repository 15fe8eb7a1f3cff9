//! Long-form documentation behind `strongly explain <CODE>`.
//!
//! One markdown page per code, compiled into the binary. Each page opens
//! with `# <CODE>: <title>`.

use crate::ErrorCode;

impl ErrorCode {
    /// Markdown page for this code.
    pub fn docs(self) -> &'static str {
        match self {
            ErrorCode::MissingPartial => include_str!("STI2.md"),
            ErrorCode::InvalidConverter => include_str!("STG3.md"),
            ErrorCode::InvalidBackingType => include_str!("STG4.md"),
            ErrorCode::InvalidImplementations => include_str!("STI5.md"),
            ErrorCode::InvalidCast => include_str!("STG6.md"),
            ErrorCode::InvalidMath => include_str!("STG7.md"),
            ErrorCode::UnsupportedCast => include_str!("STG8.md"),
            ErrorCode::UnsupportedMath => include_str!("STG9.md"),
            ErrorCode::GenerationFailed => include_str!("STE1.md"),
        }
    }
}
