//! Template catalog for strongly-typed ID generation.
//!
//! One [`TemplateBundle`] per [`BackingKind`], all static data. Every bundle
//! exposes the same fragment names; a fragment that does not apply to a kind
//! is `""`. Most text is shared (see [`fragments`]); kinds differ through
//! their primitive name, a few distinct fragments, and an override table of
//! slot values.
//!
//! # Slots
//!
//! Fragments contain `{{slot}}` placeholders. The assembly engine fills:
//! - leaf slots ([`LEAF_SLOTS`]) from the declaration and bundle
//! - every other slot from the bundle's override, else [`SLOT_DEFAULTS`]
//!
//! Override and default values may reference leaf slots only.

pub mod fragments;
mod kinds;

use strongly_config::BackingKind;

pub use fragments::{CastFragments, MathFragments};

/// Base type declaration and members, in emission order.
#[derive(Copy, Clone, Debug)]
pub struct Skeleton {
    pub declaration: &'static str,
    /// Positional `record struct` header used instead of `declaration`.
    pub record_declaration: &'static str,
    pub value_property: &'static str,
    pub constructor: &'static str,
    /// Parameterless constructor, `""` if the kind has none.
    pub default_constructor: &'static str,
    /// Kind members (`Empty`, `New()`, validation hook), kept for records.
    pub members: &'static [&'static str],
    pub equality: &'static str,
    pub to_string: &'static str,
}

/// Everything needed to generate a wrapper over one backing kind.
#[derive(Copy, Clone, Debug)]
pub struct TemplateBundle {
    pub kind: BackingKind,
    /// C# spelling of the stored primitive.
    pub primitive: &'static str,
    pub header: &'static str,
    pub skeleton: Skeleton,
    pub comparable: &'static str,
    pub formattable: &'static str,
    pub parsable: &'static str,
    pub ef_value_converter: &'static str,
    pub dapper_type_handler: &'static str,
    pub type_converter: &'static str,
    pub newtonsoft_json: &'static str,
    pub system_text_json: &'static str,
    pub swagger_schema_filter: &'static str,
    pub casts: CastFragments,
    pub math: MathFragments,
    /// Relational operators for kinds without arithmetic.
    pub compare_operators: Option<&'static str>,
    pub overrides: &'static [(&'static str, &'static str)],
    pub is_numeric: bool,
    /// Emit `#nullable enable` and nullable-aware members.
    pub supports_nullable_annotations: bool,
}

impl TemplateBundle {
    /// Override for `slot`, falling back to [`SLOT_DEFAULTS`].
    pub fn slot_value(&self, slot: &str) -> Option<&'static str> {
        lookup(self.overrides, slot).or_else(|| lookup(SLOT_DEFAULTS, slot))
    }

    /// Every slot this bundle can fill from static data.
    pub fn slots(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        let overridden = self.overrides.iter().copied();
        let defaults = SLOT_DEFAULTS
            .iter()
            .copied()
            .filter(|(name, _)| lookup(self.overrides, name).is_none());
        overridden.chain(defaults)
    }
}

fn lookup(table: &[(&'static str, &'static str)], slot: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(name, _)| *name == slot)
        .map(|(_, value)| *value)
}

/// Slots computed by the engine for each declaration.
pub const LEAF_SLOTS: &[&str] = &[
    "type_name",
    "base_type",
    "nullable",
    "hash_code",
    "interfaces",
    "interfaces_net7",
    "record_parameter",
];

/// Values used when a bundle does not override a slot.
pub const SLOT_DEFAULTS: &[(&str, &str)] = &[
    ("to_string", "Value.ToString()"),
    ("ctor_value", "Value = value;"),
    ("number_style", "Number"),
    ("compare_body", "Value.CompareTo(other.Value)"),
    ("format_body", "Value.ToString(format, formatProvider)"),
    ("empty_value", "0"),
    ("math_cast", ""),
    ("dapper_set_value", "parameter.Value = value.Value;"),
    (
        "dapper_cases",
        "{{base_type}} typedValue => new {{type_name}}(typedValue),\n\
         string stringValue when !string.IsNullOrEmpty(stringValue) && {{base_type}}.TryParse(stringValue, out var result) => new {{type_name}}(result),",
    ),
    ("convert_from_types", "sourceType == typeof({{base_type}})"),
    (
        "convert_from_cases",
        "{{base_type}} typedValue => new {{type_name}}(typedValue),\n\
         string stringValue when !string.IsNullOrEmpty(stringValue) && {{base_type}}.TryParse(stringValue, out var result) => new {{type_name}}(result),",
    ),
    ("converter_type", "{{base_type}}"),
    ("convert_to_value", "idValue.Value"),
    ("convert_to_string", "idValue.Value.ToString()"),
    ("newtonsoft_write", "id?.Value"),
    (
        "newtonsoft_read",
        "var result = serializer.Deserialize<{{base_type}}?>(reader);\n\
         return result.HasValue ? new {{type_name}}(result.Value) : null;",
    ),
    ("json_write", "writer.WriteNumberValue(value.Value);"),
    ("ef_provider_type", "{{base_type}}"),
    ("ef_to_provider", "id.Value"),
    ("ef_from_provider", "new {{type_name}}(value)"),
    ("swagger_type", "string"),
    ("swagger_format", "null"),
];

/// The bundle for `kind`. Total over [`BackingKind`].
pub fn bundle(kind: BackingKind) -> &'static TemplateBundle {
    match kind {
        BackingKind::Guid => &kinds::guid::GUID,
        BackingKind::SequentialGuid => &kinds::guid::SEQUENTIAL_GUID,
        BackingKind::GuidComb => &kinds::guid::GUID_COMB,
        BackingKind::Int => &kinds::integer::INT,
        BackingKind::Long => &kinds::integer::LONG,
        BackingKind::Short => &kinds::integer::SHORT,
        BackingKind::Byte => &kinds::integer::BYTE,
        BackingKind::NativeInt => &kinds::integer::NATIVE_INT,
        BackingKind::Decimal => &kinds::floating::DECIMAL,
        BackingKind::Double => &kinds::floating::DOUBLE,
        BackingKind::Float => &kinds::floating::FLOAT,
        BackingKind::BigInteger => &kinds::big_integer::BIG_INTEGER,
        BackingKind::String => &kinds::string::STRING,
        BackingKind::NullableString => &kinds::string::NULLABLE_STRING,
        BackingKind::MassTransitNewId => &kinds::new_id::NEW_ID,
    }
}

/// Every bundle, in raw-code order.
pub fn all() -> impl Iterator<Item = &'static TemplateBundle> {
    BackingKind::ALL.iter().map(|kind| bundle(*kind))
}
