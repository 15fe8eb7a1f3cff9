//! Interface implementations and serialization adapters shared by most kinds.

pub const NEWTONSOFT_JSON_MARKER: &str =
    "[Newtonsoft.Json.JsonConverter(typeof({{type_name}}NewtonsoftJsonConverter))]";
pub const SYSTEM_TEXT_JSON_MARKER: &str =
    "[System.Text.Json.Serialization.JsonConverter(typeof({{type_name}}SystemTextJsonConverter))]";
pub const TYPE_CONVERTER_MARKER: &str =
    "[System.ComponentModel.TypeConverter(typeof({{type_name}}TypeConverter))]";
pub const SWAGGER_SCHEMA_FILTER_MARKER: &str =
    "[Swashbuckle.AspNetCore.Annotations.SwaggerSchemaFilter(typeof({{type_name}}SchemaFilter))]";

pub const COMPARABLE: &str = "public int CompareTo({{type_name}} other) => {{compare_body}};";

pub const FORMATTABLE: &str = r"public string ToString(string{{nullable}} format, System.IFormatProvider{{nullable}} formatProvider) =>
    {{format_body}};";

/// `Parse`/`TryParse` for primitives without number styles.
pub const PARSABLE_STANDARD: &str = r"public static {{type_name}} Parse(string value) =>
    new {{type_name}}({{base_type}}.Parse(value));

public static bool TryParse(
    [System.Diagnostics.CodeAnalysis.NotNullWhen(true)] string{{nullable}} value,
    out {{type_name}} result)
{
    if ({{base_type}}.TryParse(value, out {{base_type}} parseResult))
    {
        result = new {{type_name}}(parseResult);
        return true;
    }
    result = default;
    return false;
}

#if NET7_0_OR_GREATER
public static {{type_name}} Parse(string value, System.IFormatProvider{{nullable}} provider) =>
    new {{type_name}}({{base_type}}.Parse(value, provider));

public static bool TryParse(
    [System.Diagnostics.CodeAnalysis.NotNullWhen(true)] string{{nullable}} value,
    System.IFormatProvider{{nullable}} provider,
    out {{type_name}} result)
{
    if ({{base_type}}.TryParse(value, provider, out {{base_type}} parseResult))
    {
        result = new {{type_name}}(parseResult);
        return true;
    }
    result = default;
    return false;
}
#endif";

/// `Parse`/`TryParse` for numeric primitives, with `NumberStyles` overloads.
pub const PARSABLE_NUMBER: &str = r"public static {{type_name}} Parse(string value) =>
    new {{type_name}}({{base_type}}.Parse(value));

public static {{type_name}} Parse(string value, System.Globalization.NumberStyles style) =>
    new {{type_name}}({{base_type}}.Parse(value, style));

public static {{type_name}} Parse(string value, System.Globalization.NumberStyles style, System.IFormatProvider{{nullable}} provider) =>
    new {{type_name}}({{base_type}}.Parse(value, style, provider));

public static {{type_name}} Parse(string value, System.IFormatProvider{{nullable}} provider) =>
    new {{type_name}}({{base_type}}.Parse(value, provider));

public static bool TryParse(
    [System.Diagnostics.CodeAnalysis.NotNullWhen(true)] string{{nullable}} value,
    out {{type_name}} result)
{
    if ({{base_type}}.TryParse(value, out {{base_type}} parseResult))
    {
        result = new {{type_name}}(parseResult);
        return true;
    }
    result = default;
    return false;
}

public static bool TryParse(
    [System.Diagnostics.CodeAnalysis.NotNullWhen(true)] string{{nullable}} value,
    System.Globalization.NumberStyles style,
    System.IFormatProvider{{nullable}} provider,
    out {{type_name}} result)
{
    if ({{base_type}}.TryParse(value, style, provider, out {{base_type}} parseResult))
    {
        result = new {{type_name}}(parseResult);
        return true;
    }
    result = default;
    return false;
}

public static bool TryParse(
    [System.Diagnostics.CodeAnalysis.NotNullWhen(true)] string{{nullable}} value,
    System.IFormatProvider{{nullable}} provider,
    out {{type_name}} result) =>
    TryParse(value, System.Globalization.NumberStyles.{{number_style}}, provider, out result);";

pub const EF_VALUE_CONVERTER: &str = r"public class EfValueConverter : Microsoft.EntityFrameworkCore.Storage.ValueConversion.ValueConverter<{{type_name}}, {{ef_provider_type}}>
{
    public EfValueConverter() : this(null) { }
    public EfValueConverter(Microsoft.EntityFrameworkCore.Storage.ValueConversion.ConverterMappingHints{{nullable}} mappingHints = null)
        : base(
            id => {{ef_to_provider}},
            value => {{ef_from_provider}},
            mappingHints
        )
    { }
}";

pub const DAPPER_TYPE_HANDLER: &str = r#"public class DapperTypeHandler : Dapper.SqlMapper.TypeHandler<{{type_name}}>
{
    public override void SetValue(System.Data.IDbDataParameter parameter, {{type_name}} value)
    {
        {{dapper_set_value}}
    }

    public override {{type_name}} Parse(object value)
    {
        return value switch
        {
            {{dapper_cases}}
            _ => throw new System.InvalidCastException($"Unable to cast object of type {value.GetType()} to {{type_name}}"),
        };
    }
}"#;

pub const TYPE_CONVERTER: &str = r"class {{type_name}}TypeConverter : System.ComponentModel.TypeConverter
{
    public override bool CanConvertFrom(System.ComponentModel.ITypeDescriptorContext{{nullable}} context, System.Type sourceType)
    {
        return {{convert_from_types}} || sourceType == typeof(string) || base.CanConvertFrom(context, sourceType);
    }

    public override object{{nullable}} ConvertFrom(System.ComponentModel.ITypeDescriptorContext{{nullable}} context, System.Globalization.CultureInfo{{nullable}} culture, object value)
    {
        return value switch
        {
            {{convert_from_cases}}
            _ => base.ConvertFrom(context, culture, value),
        };
    }

    public override bool CanConvertTo(System.ComponentModel.ITypeDescriptorContext{{nullable}} context, System.Type{{nullable}} sourceType)
    {
        return sourceType == typeof({{converter_type}}) || sourceType == typeof(string) || base.CanConvertTo(context, sourceType);
    }

    public override object{{nullable}} ConvertTo(System.ComponentModel.ITypeDescriptorContext{{nullable}} context, System.Globalization.CultureInfo{{nullable}} culture, object{{nullable}} value, System.Type destinationType)
    {
        if (value is {{type_name}} idValue)
        {
            if (destinationType == typeof({{converter_type}}))
            {
                return {{convert_to_value}};
            }

            if (destinationType == typeof(string))
            {
                return {{convert_to_string}};
            }
        }

        return base.ConvertTo(context, culture, value, destinationType);
    }
}";

pub const NEWTONSOFT_JSON: &str = r"class {{type_name}}NewtonsoftJsonConverter : Newtonsoft.Json.JsonConverter
{
    public override bool CanConvert(System.Type objectType)
    {
        return objectType == typeof({{type_name}});
    }

    public override void WriteJson(Newtonsoft.Json.JsonWriter writer, object{{nullable}} value, Newtonsoft.Json.JsonSerializer serializer)
    {
        var id = value as {{type_name}}?;
        serializer.Serialize(writer, {{newtonsoft_write}});
    }

    public override object{{nullable}} ReadJson(Newtonsoft.Json.JsonReader reader, System.Type objectType, object{{nullable}} existingValue, Newtonsoft.Json.JsonSerializer serializer)
    {
        {{newtonsoft_read}}
    }
}";

pub const SYSTEM_TEXT_JSON: &str = r"class {{type_name}}SystemTextJsonConverter : System.Text.Json.Serialization.JsonConverter<{{type_name}}>
{
    public override {{type_name}} Read(ref System.Text.Json.Utf8JsonReader reader, System.Type typeToConvert, System.Text.Json.JsonSerializerOptions options)
    {
        return new {{type_name}}({{json_read}});
    }

    public override void Write(System.Text.Json.Utf8JsonWriter writer, {{type_name}} value, System.Text.Json.JsonSerializerOptions options)
    {
        {{json_write}}
    }
}";

pub const SWAGGER_SCHEMA_FILTER: &str = r#"class {{type_name}}SchemaFilter : Swashbuckle.AspNetCore.SwaggerGen.ISchemaFilter
{
    public void Apply(Microsoft.OpenApi.Models.OpenApiSchema schema, Swashbuckle.AspNetCore.SwaggerGen.SchemaFilterContext context)
    {
        var idSchema = new Microsoft.OpenApi.Models.OpenApiSchema { Type = "{{swagger_type}}", Format = {{swagger_format}} };
        schema.Type = idSchema.Type;
        schema.Format = idSchema.Format;
        schema.Example = idSchema.Example;
        schema.Default = idSchema.Default;
        schema.Properties = idSchema.Properties;
    }
}"#;
