//! Configuration model for strongly-typed ID generation.
//!
//! A [`Configuration`] holds the five settings an attribute can carry: the
//! backing type and four flag sets. Every field is a [`Setting`], so "not
//! specified here" is distinct from any concrete value. [`merge`] folds a
//! per-type configuration over the assembly defaults and the built-in
//! baseline, producing a configuration with no `Inherit` left.
//!
//! The [`check`] module turns misconfiguration into warnings, and
//! [`semantic`] decides which cast and math operators a backing kind can
//! carry. Assembly masks requests with the same functions, so what is
//! reported and what is emitted never disagree.

mod backing;
pub mod check;
mod configuration;
mod flags;
pub mod semantic;
mod setting;

pub use backing::{BackingKind, BackingType};
pub use configuration::{merge, Configuration, ResolvedConfiguration};
pub use flags::{
    is_backing_kind_valid, is_valid_flag_combination, member_names, AttributeFlags,
    CapabilitySet, CastSet, ConverterSet, MathSet,
};
pub use setting::Setting;
