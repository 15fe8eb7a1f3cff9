use pretty_assertions::assert_eq;
use strongly_ir::Span;

use super::*;

fn warning_at(code: ErrorCode, start: u32) -> Diagnostic {
    Diagnostic::warning(code)
        .with_message(format!("finding at {start}"))
        .at(Span::new(start, start + 1), "here")
}

fn failure(message: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::GenerationFailed).with_message(message)
}

#[test]
fn test_queue_counts_by_severity() {
    let mut queue = DiagnosticQueue::new();
    queue.report(warning_at(ErrorCode::MissingPartial, 0));
    queue.report(failure("boom"));

    assert_eq!(queue.warning_count(), 1);
    assert_eq!(queue.error_count(), 1);
    assert!(queue.has_errors());
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_queue_deduplicates_identical_findings() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(warning_at(ErrorCode::InvalidConverter, 4)));
    assert!(!queue.add(warning_at(ErrorCode::InvalidConverter, 4)));
    assert!(queue.add(warning_at(ErrorCode::InvalidConverter, 5)));
    assert!(queue.add(warning_at(ErrorCode::InvalidCast, 4)));

    assert_eq!(queue.len(), 3);
}

#[test]
fn test_unlimited_config_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.report(warning_at(ErrorCode::InvalidMath, 1));
    queue.report(warning_at(ErrorCode::InvalidMath, 1));

    assert_eq!(queue.len(), 2);
}

#[test]
fn test_error_limit_only_caps_errors() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: false,
    });
    assert!(queue.add(failure("a")));
    assert!(!queue.add(failure("b")));
    assert!(queue.add(warning_at(ErrorCode::MissingPartial, 0)));

    assert_eq!(queue.error_count(), 1);
    assert_eq!(queue.warning_count(), 1);
}

#[test]
fn test_flush_sorts_by_location_and_resets() {
    let mut queue = DiagnosticQueue::new();
    queue.report(warning_at(ErrorCode::InvalidCast, 30));
    queue.report(warning_at(ErrorCode::MissingPartial, 10));
    queue.report(failure("unplaced"));
    queue.report(warning_at(ErrorCode::InvalidMath, 20));

    let flushed = queue.flush();
    let codes: Vec<&str> = flushed.iter().map(|d| d.code.as_str()).collect();

    assert_eq!(codes, ["STE1", "STI2", "STG7", "STG6"]);
    assert!(queue.is_empty());
    assert_eq!(queue.error_count(), 0);

    // Flushing forgets what was seen.
    assert!(queue.add(warning_at(ErrorCode::InvalidCast, 30)));
}

#[test]
fn test_vec_sink() {
    let mut collected: Vec<Diagnostic> = Vec::new();
    collected.report(warning_at(ErrorCode::UnsupportedMath, 0));
    collected.report(warning_at(ErrorCode::UnsupportedMath, 0));
    assert_eq!(collected.len(), 2);
}
