//! Fragment text shared across kinds.
//!
//! Placeholders are `{{slot}}`. Single braces are C# and pass through
//! untouched.

mod converters;
mod operators;
mod skeleton;

pub use converters::*;
pub use operators::*;
pub use skeleton::*;
