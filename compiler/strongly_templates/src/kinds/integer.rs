//! Fixed-width integers.

use strongly_config::BackingKind;

use super::NUMERIC;
use crate::TemplateBundle;

pub(crate) static INT: TemplateBundle = TemplateBundle {
    kind: BackingKind::Int,
    primitive: "int",
    overrides: &[
        ("number_style", "Integer"),
        ("json_read", "reader.GetInt32()"),
        ("swagger_type", "integer"),
        ("swagger_format", "\"int32\""),
        (
            "dapper_cases",
            "int intValue => new {{type_name}}(intValue),\n\
             long longValue when longValue < int.MaxValue => new {{type_name}}((int)longValue),\n\
             string stringValue when !string.IsNullOrEmpty(stringValue) && int.TryParse(stringValue, out var result) => new {{type_name}}(result),",
        ),
    ],
    ..NUMERIC
};

pub(crate) static LONG: TemplateBundle = TemplateBundle {
    kind: BackingKind::Long,
    primitive: "long",
    overrides: &[
        ("number_style", "Integer"),
        ("json_read", "reader.GetInt64()"),
        ("swagger_type", "integer"),
        ("swagger_format", "\"int64\""),
        (
            "dapper_cases",
            "long longValue => new {{type_name}}(longValue),\n\
             int intValue => new {{type_name}}(intValue),\n\
             short shortValue => new {{type_name}}(shortValue),\n\
             string stringValue when !string.IsNullOrEmpty(stringValue) && long.TryParse(stringValue, out var result) => new {{type_name}}(result),",
        ),
    ],
    ..NUMERIC
};

pub(crate) static SHORT: TemplateBundle = TemplateBundle {
    kind: BackingKind::Short,
    primitive: "short",
    overrides: &[
        ("number_style", "Integer"),
        ("math_cast", "(short)"),
        ("json_read", "reader.GetInt16()"),
        ("swagger_type", "integer"),
        (
            "dapper_cases",
            "short shortValue => new {{type_name}}(shortValue),\n\
             int intValue when intValue < short.MaxValue => new {{type_name}}((short)intValue),\n\
             long longValue when longValue < short.MaxValue => new {{type_name}}((short)longValue),\n\
             string stringValue when !string.IsNullOrEmpty(stringValue) && short.TryParse(stringValue, out var result) => new {{type_name}}(result),",
        ),
    ],
    ..NUMERIC
};

pub(crate) static BYTE: TemplateBundle = TemplateBundle {
    kind: BackingKind::Byte,
    primitive: "byte",
    overrides: &[
        ("number_style", "Integer"),
        ("math_cast", "(byte)"),
        ("json_read", "reader.GetByte()"),
        ("swagger_type", "integer"),
        (
            "dapper_cases",
            "byte byteValue => new {{type_name}}(byteValue),\n\
             int intValue when intValue >= byte.MinValue && intValue <= byte.MaxValue => new {{type_name}}((byte)intValue),\n\
             string stringValue when !string.IsNullOrEmpty(stringValue) && byte.TryParse(stringValue, out var result) => new {{type_name}}(result),",
        ),
    ],
    ..NUMERIC
};

/// `nint` is stored as `long` outside the process.
pub(crate) static NATIVE_INT: TemplateBundle = TemplateBundle {
    kind: BackingKind::NativeInt,
    primitive: "nint",
    overrides: &[
        ("number_style", "Integer"),
        ("json_read", "(nint)reader.GetInt64()"),
        ("json_write", "writer.WriteNumberValue((long)value.Value);"),
        ("newtonsoft_write", "(long?)id?.Value"),
        (
            "newtonsoft_read",
            "var result = serializer.Deserialize<long?>(reader);\n\
             return result.HasValue ? new {{type_name}}((nint)result.Value) : null;",
        ),
        ("ef_provider_type", "long"),
        ("ef_to_provider", "(long)id.Value"),
        ("ef_from_provider", "new {{type_name}}((nint)value)"),
        ("dapper_set_value", "parameter.Value = (long)value.Value;"),
        (
            "dapper_cases",
            "nint nintValue => new {{type_name}}(nintValue),\n\
             int intValue => new {{type_name}}((nint)intValue),\n\
             long longValue => new {{type_name}}((nint)longValue),\n\
             string stringValue when !string.IsNullOrEmpty(stringValue) && long.TryParse(stringValue, out var result) => new {{type_name}}((nint)result),",
        ),
        ("swagger_type", "integer"),
        ("swagger_format", "\"int64\""),
    ],
    ..NUMERIC
};
