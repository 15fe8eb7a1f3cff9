//! `System.Guid` family: random, sequential and COMB identifiers.
//!
//! The three kinds share every fragment and differ in how `New()` and the
//! parameterless constructor produce a value.

use strongly_config::BackingKind;

use super::{NUMERIC, VALIDATED_CTOR, VALIDATED_SKELETON};
use crate::fragments::{
    COMPARE_OPERATORS, EMPTY_VALUE, NEW_FACTORY, NEXT_COMB, NO_MATH, PARSABLE_STANDARD,
    VALIDATE_HOOK,
};
use crate::{Skeleton, TemplateBundle};

macro_rules! guid_overrides {
    ($new_value:expr) => {
        &[
            ("new_value", $new_value),
            ("ctor_value", VALIDATED_CTOR),
            ("empty_value", "System.Guid.Empty"),
            ("json_read", "reader.GetGuid()"),
            ("json_write", "writer.WriteStringValue(value.Value);"),
            ("swagger_format", "\"uuid\""),
        ]
    };
}

const GUID_SKELETON: Skeleton = Skeleton {
    members: &[VALIDATE_HOOK, NEW_FACTORY, EMPTY_VALUE],
    ..VALIDATED_SKELETON
};

const GUID_FAMILY: TemplateBundle = TemplateBundle {
    kind: BackingKind::Guid,
    primitive: "System.Guid",
    skeleton: GUID_SKELETON,
    parsable: PARSABLE_STANDARD,
    math: NO_MATH,
    compare_operators: Some(COMPARE_OPERATORS),
    overrides: guid_overrides!("System.Guid.NewGuid()"),
    is_numeric: false,
    ..NUMERIC
};

pub(crate) static GUID: TemplateBundle = GUID_FAMILY;

pub(crate) static SEQUENTIAL_GUID: TemplateBundle = TemplateBundle {
    kind: BackingKind::SequentialGuid,
    overrides: guid_overrides!("MassTransit.NewId.NextSequentialGuid()"),
    ..GUID_FAMILY
};

pub(crate) static GUID_COMB: TemplateBundle = TemplateBundle {
    kind: BackingKind::GuidComb,
    skeleton: Skeleton {
        members: &[VALIDATE_HOOK, NEW_FACTORY, EMPTY_VALUE, NEXT_COMB],
        ..GUID_SKELETON
    },
    overrides: guid_overrides!("NextComb()"),
    ..GUID_FAMILY
};
