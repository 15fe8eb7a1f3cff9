//! `System.Numerics.BigInteger`.
//!
//! JSON carries the number as raw text so no precision is lost, and Entity
//! Framework gets an extra converter to a string column for providers
//! without a native big integer type.

use strongly_config::BackingKind;

use super::{NUMERIC, VALIDATED_CTOR, VALIDATED_SKELETON};
use crate::TemplateBundle;

const EF_VALUE_CONVERTERS: &str = r"public class EfValueConverter : Microsoft.EntityFrameworkCore.Storage.ValueConversion.ValueConverter<{{type_name}}, System.Numerics.BigInteger>
{
    public EfValueConverter() : this(null) { }
    public EfValueConverter(Microsoft.EntityFrameworkCore.Storage.ValueConversion.ConverterMappingHints{{nullable}} mappingHints = null)
        : base(
            id => id.Value,
            value => new {{type_name}}(value),
            mappingHints
        )
    { }
}

public class EfStringValueConverter : Microsoft.EntityFrameworkCore.Storage.ValueConversion.ValueConverter<{{type_name}}, string>
{
    public EfStringValueConverter() : this(null) { }
    public EfStringValueConverter(Microsoft.EntityFrameworkCore.Storage.ValueConversion.ConverterMappingHints{{nullable}} mappingHints = null)
        : base(
            id => id.ToString(),
            value => {{type_name}}.Parse(value),
            mappingHints
        )
    { }
}";

const SYSTEM_TEXT_JSON: &str = r#"class {{type_name}}SystemTextJsonConverter : System.Text.Json.Serialization.JsonConverter<{{type_name}}>
{
    public override {{type_name}} Read(ref System.Text.Json.Utf8JsonReader reader, System.Type typeToConvert, System.Text.Json.JsonSerializerOptions options)
    {
        if (!(reader.TokenType == System.Text.Json.JsonTokenType.Number || reader.TokenType == System.Text.Json.JsonTokenType.String))
            throw new System.Text.Json.JsonException(
                $"Found token {reader.TokenType} but expected token {System.Text.Json.JsonTokenType.Number}");

        using var doc = System.Text.Json.JsonDocument.ParseValue(ref reader);
        var value = doc.RootElement.ValueKind == System.Text.Json.JsonValueKind.String
            ? doc.RootElement.GetString() ?? "0"
            : doc.RootElement.GetRawText();

        return new {{type_name}}(System.Numerics.BigInteger.Parse(value, System.Globalization.NumberFormatInfo.InvariantInfo));
    }

    public override void Write(System.Text.Json.Utf8JsonWriter writer, {{type_name}} value, System.Text.Json.JsonSerializerOptions options)
    {
        writer.WriteRawValue(value.Value.ToString(System.Globalization.NumberFormatInfo.InvariantInfo));
    }
}"#;

const WIDENING_CASES: &str = "System.Numerics.BigInteger bigValue => new {{type_name}}(bigValue),\n\
    long longValue => new {{type_name}}(longValue),\n\
    int intValue => new {{type_name}}(intValue),\n\
    short shortValue => new {{type_name}}(shortValue),\n\
    byte byteValue => new {{type_name}}(byteValue),\n\
    ulong ulongValue => new {{type_name}}(ulongValue),\n\
    uint uintValue => new {{type_name}}(uintValue),\n\
    string stringValue when !string.IsNullOrEmpty(stringValue) && System.Numerics.BigInteger.TryParse(stringValue, out var result) => new {{type_name}}(result),";

pub(crate) static BIG_INTEGER: TemplateBundle = TemplateBundle {
    kind: BackingKind::BigInteger,
    primitive: "System.Numerics.BigInteger",
    skeleton: VALIDATED_SKELETON,
    ef_value_converter: EF_VALUE_CONVERTERS,
    system_text_json: SYSTEM_TEXT_JSON,
    overrides: &[
        ("ctor_value", VALIDATED_CTOR),
        ("new_value", "System.Numerics.BigInteger.Zero"),
        ("empty_value", "System.Numerics.BigInteger.Zero"),
        (
            "to_string",
            "Value.ToString(System.Globalization.NumberFormatInfo.InvariantInfo)",
        ),
        ("number_style", "Integer"),
        ("dapper_cases", WIDENING_CASES),
        (
            "convert_from_types",
            "sourceType == typeof(System.Numerics.BigInteger) || sourceType == typeof(long) || sourceType == typeof(int) || sourceType == typeof(short) || sourceType == typeof(byte) || sourceType == typeof(ulong) || sourceType == typeof(uint)",
        ),
        ("convert_from_cases", WIDENING_CASES),
        ("swagger_type", "integer"),
    ],
    ..NUMERIC
};
