use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_builder_collects_hints_in_order() {
    let diag = Diagnostic::warning(ErrorCode::InvalidConverter)
        .with_message("bad converters")
        .at(Span::new(0, 5), "here")
        .with_note("kept as written")
        .with_help("drop the unknown bits");

    assert_eq!(diag.code, ErrorCode::InvalidConverter);
    assert!(!diag.is_error());
    assert_eq!(diag.location(), Some(Span::new(0, 5)));
    assert_eq!(diag.detail, "here");
    assert_eq!(
        diag.hints,
        [
            Hint::Note("kept as written".into()),
            Hint::Help("drop the unknown bits".into())
        ]
    );
}

#[test]
fn test_new_uses_default_severity() {
    assert_eq!(
        Diagnostic::new(ErrorCode::GenerationFailed).severity,
        Severity::Error
    );
    assert_eq!(
        Diagnostic::new(ErrorCode::InvalidMath).severity,
        Severity::Warning
    );
}

#[test]
fn test_missing_partial_helper() {
    let diag = missing_partial(Span::new(10, 15), "OrderId");

    assert_eq!(diag.code, ErrorCode::MissingPartial);
    assert_eq!(diag.severity, Severity::Warning);
    assert!(diag.message.ends_with("`OrderId`"));
    assert_eq!(diag.location(), Some(Span::new(10, 15)));
    assert_eq!(diag.hints[0].kind(), "help");
}

#[test]
fn test_invalid_flags_helper() {
    let diag = invalid_flags(
        ErrorCode::InvalidConverter,
        Span::new(0, 4),
        "OrderId",
        "StronglyConverter",
        512,
    );

    assert!(diag.message.contains("StronglyConverter"));
    assert!(diag.message.contains("`OrderId`"));
    assert_eq!(diag.detail, "raw value `512` has undeclared bits");
}

#[test]
fn test_invalid_backing_type_helper() {
    let diag = invalid_backing_type(Span::DUMMY, "OrderId", 99);

    assert_eq!(diag.code, ErrorCode::InvalidBackingType);
    assert!(diag.detail.contains("99"));
}

#[test]
fn test_display_format() {
    let diag = Diagnostic::error(ErrorCode::GenerationFailed)
        .with_message("cannot generate `Id`")
        .at(Span::new(0, 5), "no source")
        .with_help("check the attribute");

    assert_eq!(
        diag.to_string(),
        "error STE1: cannot generate `Id` (0..5: no source)\n  = help: check the attribute"
    );

    let bare = Diagnostic::warning(ErrorCode::InvalidMath).with_message("m");
    assert_eq!(bare.to_string(), "warning STG7: m");
}
