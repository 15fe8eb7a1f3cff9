//! Flag sets carried by the attribute.
//!
//! Bit 0 (value `1`) is the wire sentinel "use the defaults" in every set, so
//! the first real member is `1 << 1`. Unknown bits are retained on decode so
//! [`is_valid_flag_combination`] can see them.

use bitflags::{bitflags, Flags};
use strongly_diagnostic::ErrorCode;

use crate::{BackingType, Setting};

bitflags! {
    /// Interfaces the wrapper implements.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CapabilitySet: u32 {
        /// `System.IParsable<T>` plus `Parse`/`TryParse`.
        const PARSABLE = 1 << 1;
        const EQUATABLE = 1 << 2;
        const COMPARABLE = 1 << 3;
        const FORMATTABLE = 1 << 4;
    }
}

bitflags! {
    /// Serialization and persistence adapters.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ConverterSet: u32 {
        const TYPE_CONVERTER = 1 << 1;
        const NEWTONSOFT_JSON = 1 << 2;
        const SYSTEM_TEXT_JSON = 1 << 3;
        const EF_VALUE_CONVERTER = 1 << 4;
        const DAPPER_TYPE_HANDLER = 1 << 5;
        const SWAGGER_SCHEMA_FILTER = 1 << 6;
    }
}

bitflags! {
    /// Conversion operators between the wrapper and its primitive.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct CastSet: u32 {
        const IMPLICIT_FROM = 1 << 1;
        const IMPLICIT_TO = 1 << 2;
        const EXPLICIT_FROM = 1 << 3;
        const EXPLICIT_TO = 1 << 4;

        const IMPLICIT = Self::IMPLICIT_FROM.bits() | Self::IMPLICIT_TO.bits();
        const EXPLICIT = Self::EXPLICIT_FROM.bits() | Self::EXPLICIT_TO.bits();
    }
}

bitflags! {
    /// Arithmetic and comparison operators.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct MathSet: u32 {
        const ADDITION = 1 << 1;
        const SUBTRACTION = 1 << 2;
        const MULTIPLICATION = 1 << 3;
        const DIVISION = 1 << 4;
        const NEGATION = 1 << 5;
        /// `<`, `<=`, `>`, `>=`.
        const COMPARE = 1 << 6;

        const BASIC = Self::ADDITION.bits()
            | Self::SUBTRACTION.bits()
            | Self::NEGATION.bits()
            | Self::COMPARE.bits();
        const ALL = Self::BASIC.bits() | Self::DIVISION.bits() | Self::MULTIPLICATION.bits();
    }
}

/// A flag set that can appear as an attribute argument.
pub trait AttributeFlags: Flags<Bits = u32> + Copy + Eq + std::fmt::Debug {
    /// Attribute enum name, used in messages.
    const NAME: &'static str;
    /// Largest single declared bit.
    const MAX_FLAG: u32;
    /// Code reported when a value has undeclared bits.
    const INVALID_CODE: ErrorCode;
}

impl AttributeFlags for CapabilitySet {
    const NAME: &'static str = "StronglyImplementations";
    const MAX_FLAG: u32 = CapabilitySet::FORMATTABLE.bits();
    const INVALID_CODE: ErrorCode = ErrorCode::InvalidImplementations;
}

impl AttributeFlags for ConverterSet {
    const NAME: &'static str = "StronglyConverter";
    const MAX_FLAG: u32 = ConverterSet::SWAGGER_SCHEMA_FILTER.bits();
    const INVALID_CODE: ErrorCode = ErrorCode::InvalidConverter;
}

impl AttributeFlags for CastSet {
    const NAME: &'static str = "StronglyCast";
    const MAX_FLAG: u32 = CastSet::EXPLICIT_TO.bits();
    const INVALID_CODE: ErrorCode = ErrorCode::InvalidCast;
}

impl AttributeFlags for MathSet {
    const NAME: &'static str = "StronglyMath";
    const MAX_FLAG: u32 = MathSet::COMPARE.bits();
    const INVALID_CODE: ErrorCode = ErrorCode::InvalidMath;
}

/// Wire sentinel meaning "use the defaults" for every flag set.
const INHERIT_RAW: i32 = 1;

impl<F: AttributeFlags> Setting<F> {
    /// Decode a raw attribute argument.
    ///
    /// Exactly the sentinel inherits; anything else, including `0` (no
    /// members) and values with undeclared bits, is taken as written.
    pub fn from_raw(raw: i32) -> Self {
        if raw == INHERIT_RAW {
            Setting::Inherit
        } else {
            Setting::Value(F::from_bits_retain(u32::from_ne_bytes(raw.to_ne_bytes())))
        }
    }
}

/// Whether `value` is a combination of declared bits (and the sentinel).
///
/// Any value below twice the largest flag passes, which admits every
/// combination of declared members. Negative raw arguments decode to large
/// bit patterns and fail.
pub fn is_valid_flag_combination<F: AttributeFlags>(value: F) -> bool {
    u64::from(value.bits()) < 2 * u64::from(F::MAX_FLAG)
}

/// Whether a backing type names a declared kind.
pub fn is_backing_kind_valid(backing: BackingType) -> bool {
    matches!(backing, BackingType::Known(_))
}

/// Declared member names contained in `value`, joined with ` | `.
///
/// Composite members (`IMPLICIT`, `BASIC`) are never listed.
pub fn member_names<F: AttributeFlags>(value: F) -> String {
    value
        .iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" | ")
}
