//! Backing kinds: the primitive a wrapper stores.

use std::fmt;

use crate::Setting;

/// Primitive backing a strongly-typed wrapper.
///
/// Raw codes are the integer values the host compiler evaluates the
/// `StronglyType` enum constants to. `0` is the "use the defaults" sentinel
/// and is not a kind.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum BackingKind {
    Guid,
    SequentialGuid,
    GuidComb,
    Int,
    String,
    Long,
    NullableString,
    MassTransitNewId,
    BigInteger,
    Decimal,
    Double,
    Float,
    Byte,
    Short,
    NativeInt,
}

impl BackingKind {
    /// Every kind, in raw-code order.
    pub const ALL: &'static [BackingKind] = &[
        BackingKind::Guid,
        BackingKind::SequentialGuid,
        BackingKind::GuidComb,
        BackingKind::Int,
        BackingKind::String,
        BackingKind::Long,
        BackingKind::NullableString,
        BackingKind::MassTransitNewId,
        BackingKind::BigInteger,
        BackingKind::Decimal,
        BackingKind::Double,
        BackingKind::Float,
        BackingKind::Byte,
        BackingKind::Short,
        BackingKind::NativeInt,
    ];

    /// Stable wire code (`1..=15`).
    pub const fn raw(self) -> i32 {
        match self {
            BackingKind::Guid => 1,
            BackingKind::SequentialGuid => 2,
            BackingKind::GuidComb => 3,
            BackingKind::Int => 4,
            BackingKind::String => 5,
            BackingKind::Long => 6,
            BackingKind::NullableString => 7,
            BackingKind::MassTransitNewId => 8,
            BackingKind::BigInteger => 9,
            BackingKind::Decimal => 10,
            BackingKind::Double => 11,
            BackingKind::Float => 12,
            BackingKind::Byte => 13,
            BackingKind::Short => 14,
            BackingKind::NativeInt => 15,
        }
    }

    /// Inverse of [`raw`](Self::raw).
    pub fn from_raw(raw: i32) -> Option<BackingKind> {
        Self::ALL.iter().copied().find(|kind| kind.raw() == raw)
    }

    /// Enum member name as written in the attribute.
    pub const fn name(self) -> &'static str {
        match self {
            BackingKind::Guid => "Guid",
            BackingKind::SequentialGuid => "SequentialGuid",
            BackingKind::GuidComb => "GuidComb",
            BackingKind::Int => "Int",
            BackingKind::String => "String",
            BackingKind::Long => "Long",
            BackingKind::NullableString => "NullableString",
            BackingKind::MassTransitNewId => "MassTransitNewId",
            BackingKind::BigInteger => "BigInteger",
            BackingKind::Decimal => "Decimal",
            BackingKind::Double => "Double",
            BackingKind::Float => "Float",
            BackingKind::Byte => "Byte",
            BackingKind::Short => "Short",
            BackingKind::NativeInt => "NativeInt",
        }
    }

    /// Whether the primitive supports arithmetic.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            BackingKind::Int
                | BackingKind::Long
                | BackingKind::BigInteger
                | BackingKind::Decimal
                | BackingKind::Double
                | BackingKind::Float
                | BackingKind::Byte
                | BackingKind::Short
                | BackingKind::NativeInt
        )
    }

    /// String-backed kinds.
    pub const fn is_string(self) -> bool {
        matches!(self, BackingKind::String | BackingKind::NullableString)
    }
}

impl fmt::Display for BackingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A backing type as it came off the wire.
///
/// `Unknown` keeps a raw value that names no kind (an integer cast to the
/// enum) so it can be reported and rejected later instead of silently
/// replaced.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BackingType {
    Known(BackingKind),
    Unknown(i32),
}

impl BackingType {
    /// Wire sentinel meaning "use the defaults".
    pub const INHERIT_RAW: i32 = 0;

    /// Decode a raw attribute argument.
    pub fn from_raw(raw: i32) -> Setting<BackingType> {
        if raw == Self::INHERIT_RAW {
            return Setting::Inherit;
        }
        Setting::Value(match BackingKind::from_raw(raw) {
            Some(kind) => BackingType::Known(kind),
            None => BackingType::Unknown(raw),
        })
    }

    pub fn kind(self) -> Option<BackingKind> {
        match self {
            BackingType::Known(kind) => Some(kind),
            BackingType::Unknown(_) => None,
        }
    }
}

impl From<BackingKind> for BackingType {
    fn from(kind: BackingKind) -> Self {
        BackingType::Known(kind)
    }
}
