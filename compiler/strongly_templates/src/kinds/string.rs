//! `string` and `string?`.
//!
//! Both compare ordinally and carry no casts or arithmetic. The nullable
//! kind stores `null` as a legitimate value.

use strongly_config::BackingKind;

use super::{NUMERIC, STANDARD_SKELETON};
use crate::fragments::{COMPARE_OPERATORS_ORDINAL, EQUALITY_STRING, NO_MATH};
use crate::{Skeleton, TemplateBundle};

const PARSABLE: &str = r"public static {{type_name}} Parse(string value) => new {{type_name}}(value);

public static {{type_name}} Parse(string value, System.IFormatProvider{{nullable}} provider) => new {{type_name}}(value);

public static bool TryParse(
    [System.Diagnostics.CodeAnalysis.NotNullWhen(true)] string{{nullable}} value,
    out {{type_name}} result)
{
    if (value is null)
    {
        result = default;
        return false;
    }

    result = new {{type_name}}(value);
    return true;
}

public static bool TryParse(
    [System.Diagnostics.CodeAnalysis.NotNullWhen(true)] string{{nullable}} value,
    System.IFormatProvider{{nullable}} provider,
    out {{type_name}} result) => TryParse(value, out result);";

const STRING_SKELETON: Skeleton = Skeleton {
    equality: EQUALITY_STRING,
    ..STANDARD_SKELETON
};

const STRING_FAMILY: TemplateBundle = TemplateBundle {
    kind: BackingKind::String,
    primitive: "string",
    skeleton: STRING_SKELETON,
    parsable: PARSABLE,
    math: NO_MATH,
    compare_operators: Some(COMPARE_OPERATORS_ORDINAL),
    is_numeric: false,
    supports_nullable_annotations: true,
    ..NUMERIC
};

pub(crate) static STRING: TemplateBundle = TemplateBundle {
    overrides: &[
        (
            "ctor_value",
            "Value = value ?? throw new System.ArgumentNullException(nameof(value));",
        ),
        ("empty_value", "string.Empty"),
        ("to_string", "Value"),
        ("compare_body", "string.CompareOrdinal(Value, other.Value)"),
        ("format_body", "Value"),
        ("dapper_cases", "string stringValue => new {{type_name}}(stringValue),"),
        ("convert_from_types", "sourceType == typeof(string)"),
        ("convert_from_cases", "string stringValue => new {{type_name}}(stringValue),"),
        ("converter_type", "string"),
        ("convert_to_string", "idValue.Value"),
        (
            "newtonsoft_read",
            "var result = serializer.Deserialize<string>(reader);\n\
             return result is null ? null : new {{type_name}}(result);",
        ),
        ("json_read", "reader.GetString()!"),
        ("json_write", "writer.WriteStringValue(value.Value);"),
    ],
    ..STRING_FAMILY
};

pub(crate) static NULLABLE_STRING: TemplateBundle = TemplateBundle {
    kind: BackingKind::NullableString,
    primitive: "string?",
    overrides: &[
        ("empty_value", "string.Empty"),
        ("to_string", "Value"),
        ("compare_body", "string.CompareOrdinal(Value, other.Value)"),
        ("format_body", "Value ?? string.Empty"),
        (
            "dapper_set_value",
            "parameter.Value = value.Value;\nparameter.DbType = System.Data.DbType.AnsiString;",
        ),
        (
            "dapper_cases",
            "null => new {{type_name}}(null),\n\
             System.DBNull => new {{type_name}}(null),\n\
             string stringValue => new {{type_name}}(stringValue),",
        ),
        ("convert_from_types", "sourceType == typeof(string)"),
        ("convert_from_cases", "string stringValue => new {{type_name}}(stringValue),"),
        ("converter_type", "string"),
        ("convert_to_string", "idValue.Value"),
        (
            "newtonsoft_read",
            "var result = serializer.Deserialize<string?>(reader);\n\
             return new {{type_name}}(result);",
        ),
        ("json_read", "reader.GetString()"),
        ("json_write", "writer.WriteStringValue(value.Value);"),
        ("ef_provider_type", "string"),
        ("ef_to_provider", "id.Value!"),
    ],
    ..STRING_FAMILY
};
