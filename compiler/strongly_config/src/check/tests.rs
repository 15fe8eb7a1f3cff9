use super::*;
use crate::{merge, CapabilitySet, CastSet, ConverterSet, MathSet};
use pretty_assertions::assert_eq;
use strongly_diagnostic::Hint;

fn codes(diagnostics: &[Diagnostic]) -> Vec<&'static str> {
    diagnostics.iter().map(|d| d.code.as_str()).collect()
}

#[test]
fn test_valid_declaration_is_silent() {
    let config = Configuration::new()
        .with_backing(BackingKind::Int)
        .with_converters(ConverterSet::all())
        .with_math(MathSet::ALL);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    check_declared(&config, "OrderId", &mut diagnostics);
    check_supported(&merge(&config, None), "OrderId", &mut diagnostics);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_inherited_fields_are_not_checked() {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    check_declared(&Configuration::new(), "OrderId", &mut diagnostics);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_invalid_converter_reports_once() {
    let config = Configuration::new()
        .with_converters(ConverterSet::from_bits_retain(512))
        .with_location(Span::new(3, 20));

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    check_declared(&config, "OrderId", &mut diagnostics);

    assert_eq!(codes(&diagnostics), ["STG3"]);
    assert!(diagnostics[0].message.contains("StronglyConverter"));
    assert_eq!(diagnostics[0].location(), Some(Span::new(3, 20)));
    assert!(!diagnostics[0].is_error());
}

#[test]
fn test_findings_follow_field_order() {
    let config = Configuration::new()
        .with_backing_type(BackingType::Unknown(42))
        .with_converters(ConverterSet::from_bits_retain(1 << 10))
        .with_capabilities(CapabilitySet::from_bits_retain(1 << 10))
        .with_casts(CastSet::from_bits_retain(1 << 10))
        .with_math(MathSet::from_bits_retain(1 << 10));

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    check_declared(&config, "OrderId", &mut diagnostics);
    assert_eq!(codes(&diagnostics), ["STG3", "STG4", "STI5", "STG6", "STG7"]);
}

#[test]
fn test_unsupported_math_on_guid() {
    let declared = Configuration::new().with_math(MathSet::ADDITION | MathSet::COMPARE);
    let merged = merge(&declared, None);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    check_supported(&merged, "OrderId", &mut diagnostics);

    assert_eq!(codes(&diagnostics), ["STG9"]);
    assert!(diagnostics[0].detail.contains("ADDITION"));
    assert!(!diagnostics[0].detail.contains("COMPARE"));
}

#[test]
fn test_unsupported_cast_on_string() {
    let declared = Configuration::new()
        .with_backing(BackingKind::String)
        .with_casts(CastSet::IMPLICIT);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    check_supported(&merge(&declared, None), "OrderId", &mut diagnostics);

    assert_eq!(codes(&diagnostics), ["STG8"]);
    assert_eq!(
        diagnostics[0].hints,
        [Hint::Help("remove the cast argument".into())]
    );
}

#[test]
fn test_unknown_backing_skips_semantic_checks() {
    let declared = Configuration::new()
        .with_backing_type(BackingType::Unknown(99))
        .with_math(MathSet::ALL);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    check_supported(&merge(&declared, None), "OrderId", &mut diagnostics);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_findings_name_their_target() {
    let config = Configuration::new()
        .with_backing_type(BackingType::Unknown(42))
        .with_math(MathSet::from_bits_retain(1 << 10));

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    check_declared(&config, "OrderId", &mut diagnostics);
    check_declared(&config, DEFAULTS_TARGET, &mut diagnostics);

    assert_eq!(codes(&diagnostics), ["STG4", "STG7", "STG4", "STG7"]);
    assert!(diagnostics[..2].iter().all(|d| d.message.contains("`OrderId`")));
    assert!(diagnostics[2..]
        .iter()
        .all(|d| d.message.contains("`StronglyDefaults`")));
    assert_ne!(diagnostics[0].message, diagnostics[2].message);
}
