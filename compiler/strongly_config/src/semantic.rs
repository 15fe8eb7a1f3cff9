//! Which operators a backing kind can carry.
//!
//! Requests outside these sets are reported by [`check`](crate::check) and
//! masked out during assembly.

use crate::{BackingKind, CastSet, MathSet, Setting};

/// Cast operators the kind supports.
///
/// String kinds get none: a conversion from `string` would bypass the
/// wrapper's constructor, and for `NullableString` the conversion to
/// `string` is not null-safe.
pub fn supported_casts(kind: BackingKind) -> CastSet {
    if kind.is_string() {
        CastSet::empty()
    } else {
        CastSet::all()
    }
}

/// Math operators the kind supports. Non-numeric kinds only compare.
pub fn supported_math(kind: BackingKind) -> MathSet {
    if kind.is_numeric() {
        MathSet::all()
    } else {
        MathSet::COMPARE
    }
}

/// Declared cast bits requested but not supported by `kind`.
pub fn unsupported_casts(kind: BackingKind, requested: CastSet) -> CastSet {
    requested
        .intersection(CastSet::all())
        .difference(supported_casts(kind))
}

/// Declared math bits requested but not supported by `kind`.
pub fn unsupported_math(kind: BackingKind, requested: MathSet) -> MathSet {
    requested
        .intersection(MathSet::all())
        .difference(supported_math(kind))
}

/// Casts to emit: the request (none when inheriting) masked to what `kind`
/// supports. Undeclared bits are dropped.
pub fn effective_casts(kind: BackingKind, requested: Setting<CastSet>) -> CastSet {
    requested
        .unwrap_or(CastSet::empty())
        .intersection(supported_casts(kind))
}

/// Math operators to emit, masked like [`effective_casts`].
pub fn effective_math(kind: BackingKind, requested: Setting<MathSet>) -> MathSet {
    requested
        .unwrap_or(MathSet::empty())
        .intersection(supported_math(kind))
}
