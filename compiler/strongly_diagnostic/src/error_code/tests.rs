use std::collections::HashSet;

use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::MissingPartial.to_string(), "STI2");
    assert_eq!(ErrorCode::InvalidConverter.as_str(), "STG3");
    assert_eq!(ErrorCode::InvalidBackingType.as_str(), "STG4");
    assert_eq!(ErrorCode::InvalidImplementations.as_str(), "STI5");
}

#[test]
fn test_identifiers_are_unique() {
    let ids: HashSet<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    assert_eq!(ids.len(), ErrorCode::ALL.len());
}

#[test]
fn test_from_str_round_trips_every_code() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("sti2".parse::<ErrorCode>(), Ok(ErrorCode::MissingPartial));
    assert_eq!(" stg3 ".parse::<ErrorCode>(), Ok(ErrorCode::InvalidConverter));
    assert_eq!("E0001".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_only_generation_failure_is_an_error() {
    for code in ErrorCode::ALL {
        let expected = if *code == ErrorCode::GenerationFailed {
            Severity::Error
        } else {
            Severity::Warning
        };
        assert_eq!(code.default_severity(), expected, "{code}");
    }
}

#[test]
fn test_categories() {
    assert_eq!(ErrorCode::MissingPartial.category(), "Usage");
    assert_eq!(ErrorCode::UnsupportedMath.category(), "Usage");
    assert_eq!(ErrorCode::GenerationFailed.category(), "Generation");
}
