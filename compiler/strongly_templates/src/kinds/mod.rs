//! Per-kind bundles.
//!
//! Each family starts from one of the bases below and replaces only what
//! differs.

pub(crate) mod big_integer;
pub(crate) mod floating;
pub(crate) mod guid;
pub(crate) mod integer;
pub(crate) mod new_id;
pub(crate) mod string;

use strongly_config::BackingKind;

use crate::fragments::{
    CASTS, COMPARABLE, CONSTRUCTOR, DAPPER_TYPE_HANDLER, DECLARATION, DEFAULT_CONSTRUCTOR,
    EF_VALUE_CONVERTER, EMPTY_VALUE, EQUALITY, FORMATTABLE, HEADER, NEWTONSOFT_JSON, NUMERIC_MATH,
    PARSABLE_NUMBER, RECORD_DECLARATION, SWAGGER_SCHEMA_FILTER, SYSTEM_TEXT_JSON, TO_STRING,
    TYPE_CONVERTER, VALIDATE_HOOK, VALUE_PROPERTY,
};
use crate::{Skeleton, TemplateBundle};

/// Constructor body for kinds with a `Validate` hook.
const VALIDATED_CTOR: &str = "Validate(value);\nValue = value;";

const STANDARD_SKELETON: Skeleton = Skeleton {
    declaration: DECLARATION,
    record_declaration: RECORD_DECLARATION,
    value_property: VALUE_PROPERTY,
    constructor: CONSTRUCTOR,
    default_constructor: "",
    members: &[EMPTY_VALUE],
    equality: EQUALITY,
    to_string: TO_STRING,
};

/// Adds a parameterless constructor and a `Validate` hook.
const VALIDATED_SKELETON: Skeleton = Skeleton {
    default_constructor: DEFAULT_CONSTRUCTOR,
    members: &[VALIDATE_HOOK, EMPTY_VALUE],
    ..STANDARD_SKELETON
};

/// Numeric primitives: every converter, full arithmetic.
const NUMERIC: TemplateBundle = TemplateBundle {
    kind: BackingKind::Int,
    primitive: "int",
    header: HEADER,
    skeleton: STANDARD_SKELETON,
    comparable: COMPARABLE,
    formattable: FORMATTABLE,
    parsable: PARSABLE_NUMBER,
    ef_value_converter: EF_VALUE_CONVERTER,
    dapper_type_handler: DAPPER_TYPE_HANDLER,
    type_converter: TYPE_CONVERTER,
    newtonsoft_json: NEWTONSOFT_JSON,
    system_text_json: SYSTEM_TEXT_JSON,
    swagger_schema_filter: SWAGGER_SCHEMA_FILTER,
    casts: CASTS,
    math: NUMERIC_MATH,
    compare_operators: None,
    overrides: &[],
    is_numeric: true,
    supports_nullable_annotations: false,
};
