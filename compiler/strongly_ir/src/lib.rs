//! Strongly IR - input types shared by every generator phase.
//!
//! This crate contains the data the host compiler hands to the generator:
//! - Spans for source locations
//! - The raw declaration feed (`RawDeclaration`, `RawAttribute`)
//!
//! The host compiler owns syntax and semantic analysis. By the time a
//! declaration reaches this crate its attribute arguments are already
//! evaluated to integers, or marked as [`ArgumentValue::Error`] when the host
//! could not resolve them.
//!
//! # Serialization
//!
//! With the `serde` feature every type derives `Serialize`/`Deserialize`, so
//! a front end can ship declarations as JSON.

mod declaration;
mod span;

pub use declaration::{
    ArgumentValue, AttributeTarget, NamedArgument, RawAttribute, RawDeclaration, SyntaxAncestor,
    TypeKeyword,
};
pub use span::Span;
