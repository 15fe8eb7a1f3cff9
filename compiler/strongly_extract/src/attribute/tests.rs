use super::*;
use pretty_assertions::assert_eq;
use strongly_config::{BackingKind, CastSet, ConverterSet, MathSet};
use strongly_ir::{AttributeTarget, Span};

fn attribute() -> RawAttribute {
    RawAttribute::new(AttributeTarget::Type).with_span(Span::new(0, 10))
}

#[test]
fn test_no_arguments_inherits_everything() {
    let config = configuration_from_attribute(&attribute()).unwrap();
    assert_eq!(config, Configuration::new().with_location(Span::new(0, 10)));
}

#[test]
fn test_positional_prefix() {
    let attr = attribute()
        .with_positional(ArgumentValue::Int(BackingKind::Int.raw()))
        .with_positional(ArgumentValue::Int(4));

    let config = configuration_from_attribute(&attr).unwrap();
    assert_eq!(config.backing_kind(), Some(BackingKind::Int));
    assert_eq!(
        config.converters,
        Setting::Value(ConverterSet::NEWTONSOFT_JSON)
    );
    assert!(config.capabilities.is_inherit());
    assert!(config.casts.is_inherit());
    assert!(config.math.is_inherit());
}

#[test]
fn test_all_five_positional() {
    let attr = attribute()
        .with_positional(ArgumentValue::Int(11))
        .with_positional(ArgumentValue::Int(0))
        .with_positional(ArgumentValue::Int(1))
        .with_positional(ArgumentValue::Int(2))
        .with_positional(ArgumentValue::Int(66));

    let config = configuration_from_attribute(&attr).unwrap();
    assert_eq!(config.backing_kind(), Some(BackingKind::Double));
    assert_eq!(config.converters, Setting::Value(ConverterSet::empty()));
    assert!(config.capabilities.is_inherit());
    assert_eq!(config.casts, Setting::Value(CastSet::IMPLICIT_FROM));
    assert_eq!(
        config.math,
        Setting::Value(MathSet::ADDITION | MathSet::COMPARE)
    );
}

#[test]
fn test_named_wins_over_positional() {
    let attr = attribute()
        .with_positional(ArgumentValue::Int(BackingKind::Int.raw()))
        .with_named("backingType", ArgumentValue::Int(BackingKind::Long.raw()))
        .with_named("math", ArgumentValue::Int(64));

    let config = configuration_from_attribute(&attr).unwrap();
    assert_eq!(config.backing_kind(), Some(BackingKind::Long));
    assert_eq!(config.math, Setting::Value(MathSet::COMPARE));
}

#[test]
fn test_unknown_named_argument_is_ignored() {
    let attr = attribute().with_named("flavour", ArgumentValue::Int(3));
    let config = configuration_from_attribute(&attr).unwrap();
    assert_eq!(config, Configuration::new().with_location(Span::new(0, 10)));
}

#[test]
fn test_error_argument_skips() {
    let positional = attribute().with_positional(ArgumentValue::Error);
    assert_eq!(configuration_from_attribute(&positional), None);

    let named = attribute()
        .with_positional(ArgumentValue::Int(4))
        .with_named("converters", ArgumentValue::Error);
    assert_eq!(configuration_from_attribute(&named), None);
}
