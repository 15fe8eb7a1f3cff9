//! `MassTransit.NewId`. Stored and exchanged as a `System.Guid`.

use strongly_config::BackingKind;

use super::{NUMERIC, VALIDATED_CTOR, VALIDATED_SKELETON};
use crate::fragments::{
    COMPARE_OPERATORS, EMPTY_VALUE, NEW_FACTORY, NO_MATH, VALIDATE_HOOK,
};
use crate::{Skeleton, TemplateBundle};

const PARSABLE: &str = r"public static {{type_name}} Parse(string value) => new {{type_name}}(new MassTransit.NewId(in value));

public static {{type_name}} Parse(string value, System.IFormatProvider{{nullable}} provider) => Parse(value);

public static bool TryParse(
    [System.Diagnostics.CodeAnalysis.NotNullWhen(true)] string{{nullable}} value,
    out {{type_name}} result)
{
    if (value is null)
    {
        result = default;
        return false;
    }

    try
    {
        result = new {{type_name}}(new MassTransit.NewId(in value));
        return true;
    }
    catch
    {
        result = default;
        return false;
    }
}

public static bool TryParse(
    [System.Diagnostics.CodeAnalysis.NotNullWhen(true)] string{{nullable}} value,
    System.IFormatProvider{{nullable}} provider,
    out {{type_name}} result) => TryParse(value, out result);";

pub(crate) static NEW_ID: TemplateBundle = TemplateBundle {
    kind: BackingKind::MassTransitNewId,
    primitive: "MassTransit.NewId",
    skeleton: Skeleton {
        members: &[VALIDATE_HOOK, NEW_FACTORY, EMPTY_VALUE],
        ..VALIDATED_SKELETON
    },
    parsable: PARSABLE,
    math: NO_MATH,
    compare_operators: Some(COMPARE_OPERATORS),
    is_numeric: false,
    overrides: &[
        ("ctor_value", VALIDATED_CTOR),
        ("new_value", "MassTransit.NewId.Next()"),
        ("empty_value", "MassTransit.NewId.Empty"),
        ("json_read", "MassTransit.NewId.FromGuid(reader.GetGuid())"),
        ("json_write", "writer.WriteStringValue(value.Value.ToGuid());"),
        ("newtonsoft_write", "id?.Value.ToGuid()"),
        (
            "newtonsoft_read",
            "var result = serializer.Deserialize<System.Guid?>(reader);\n\
             return result.HasValue ? new {{type_name}}(MassTransit.NewId.FromGuid(result.Value)) : null;",
        ),
        ("ef_provider_type", "System.Guid"),
        ("ef_to_provider", "id.Value.ToGuid()"),
        (
            "ef_from_provider",
            "new {{type_name}}(MassTransit.NewId.FromGuid(value))",
        ),
        ("dapper_set_value", "parameter.Value = value.Value.ToGuid();"),
        (
            "dapper_cases",
            "System.Guid guidValue => new {{type_name}}(MassTransit.NewId.FromGuid(guidValue)),\n\
             string stringValue when !string.IsNullOrEmpty(stringValue) && System.Guid.TryParse(stringValue, out var result) => new {{type_name}}(MassTransit.NewId.FromGuid(result)),",
        ),
        (
            "convert_from_types",
            "sourceType == typeof(System.Guid) || sourceType == typeof(MassTransit.NewId)",
        ),
        (
            "convert_from_cases",
            "MassTransit.NewId newIdValue => new {{type_name}}(newIdValue),\n\
             System.Guid guidValue => new {{type_name}}(MassTransit.NewId.FromGuid(guidValue)),\n\
             string stringValue when !string.IsNullOrEmpty(stringValue) && System.Guid.TryParse(stringValue, out var result) => new {{type_name}}(MassTransit.NewId.FromGuid(result)),",
        ),
        ("converter_type", "System.Guid"),
        ("convert_to_value", "idValue.Value.ToGuid()"),
        ("convert_to_string", "idValue.Value.ToGuid().ToString()"),
        ("swagger_format", "\"uuid\""),
    ],
    ..NUMERIC
};
