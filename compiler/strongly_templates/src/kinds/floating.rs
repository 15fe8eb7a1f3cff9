//! `decimal`, `double` and `float`.

use strongly_config::BackingKind;

use super::{NUMERIC, VALIDATED_CTOR, VALIDATED_SKELETON};
use crate::TemplateBundle;

const FLOAT_STYLE: &str = "Float | System.Globalization.NumberStyles.AllowThousands";

/// Validated like identifiers; `decimal.Zero` is the default value.
pub(crate) static DECIMAL: TemplateBundle = TemplateBundle {
    kind: BackingKind::Decimal,
    primitive: "decimal",
    skeleton: VALIDATED_SKELETON,
    overrides: &[
        ("ctor_value", VALIDATED_CTOR),
        ("new_value", "decimal.Zero"),
        ("empty_value", "decimal.Zero"),
        ("number_style", "Number"),
        ("json_read", "reader.GetDecimal()"),
        ("swagger_type", "number"),
        (
            "dapper_cases",
            "decimal decimalValue => new {{type_name}}(decimalValue),\n\
             double doubleValue => new {{type_name}}((decimal)doubleValue),\n\
             int intValue => new {{type_name}}(intValue),\n\
             long longValue => new {{type_name}}(longValue),\n\
             string stringValue when !string.IsNullOrEmpty(stringValue) && decimal.TryParse(stringValue, out var result) => new {{type_name}}(result),",
        ),
    ],
    ..NUMERIC
};

pub(crate) static DOUBLE: TemplateBundle = TemplateBundle {
    kind: BackingKind::Double,
    primitive: "double",
    overrides: &[
        ("number_style", FLOAT_STYLE),
        ("json_read", "reader.GetDouble()"),
        ("swagger_type", "number"),
        ("swagger_format", "\"double\""),
        (
            "dapper_cases",
            "double doubleValue => new {{type_name}}(doubleValue),\n\
             float floatValue => new {{type_name}}(floatValue),\n\
             decimal decimalValue => new {{type_name}}((double)decimalValue),\n\
             int intValue => new {{type_name}}(intValue),\n\
             long longValue => new {{type_name}}(longValue),\n\
             string stringValue when !string.IsNullOrEmpty(stringValue) && double.TryParse(stringValue, out var result) => new {{type_name}}(result),",
        ),
    ],
    ..NUMERIC
};

pub(crate) static FLOAT: TemplateBundle = TemplateBundle {
    kind: BackingKind::Float,
    primitive: "float",
    overrides: &[
        ("number_style", FLOAT_STYLE),
        ("json_read", "reader.GetSingle()"),
        ("swagger_type", "number"),
        ("swagger_format", "\"float\""),
        (
            "dapper_cases",
            "float floatValue => new {{type_name}}(floatValue),\n\
             double doubleValue => new {{type_name}}((float)doubleValue),\n\
             decimal decimalValue => new {{type_name}}((float)decimalValue),\n\
             int intValue => new {{type_name}}(intValue),\n\
             string stringValue when !string.IsNullOrEmpty(stringValue) && float.TryParse(stringValue, out var result) => new {{type_name}}(result),",
        ),
    ],
    ..NUMERIC
};
