//! Assembly engine for the strongly generator.
//!
//! Turns a [`DeclarationContext`](strongly_extract::DeclarationContext)
//! into C# source using the bundle for its backing kind.
//!
//! # Architecture
//!
//! ```text
//! DeclarationContext
//!        ↓
//!     plan           (preconditions, operator masks)
//!        ↓
//!    SlotMap         (leaf slots, then bundle slots rendered against them)
//!        ↓
//!  SourceWriter      (fragments rendered and nested, appended to scratch)
//! ```
//!
//! Assembly is pure and single-threaded. A failure affects only the one
//! declaration and converts to an error diagnostic.

mod assemble;
mod error;
mod render;
mod source_name;
mod writer;

pub use assemble::assemble;
pub use error::AssembleError;
pub use render::{render, render_into, SlotMap};
pub use source_name::{file_name, source_name, EXTENSION};
pub use writer::SourceWriter;
