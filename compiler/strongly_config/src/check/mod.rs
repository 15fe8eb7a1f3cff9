//! Configuration checks.
//!
//! Two passes:
//! - [`check_declared`] looks at what one attribute wrote (per-type or
//!   defaults) and flags values that name no declared member.
//! - [`check_supported`] looks at the merged configuration and flags cast
//!   and math requests the backing kind cannot carry.
//!
//! Every finding is a warning. Generation proceeds regardless.

use strongly_diagnostic::{
    invalid_backing_type, invalid_flags, Diagnostic, DiagnosticSink, ErrorCode,
};
use strongly_ir::Span;

use crate::semantic::{supported_casts, supported_math, unsupported_casts, unsupported_math};
use crate::{
    is_valid_flag_combination, member_names, AttributeFlags, BackingKind, BackingType,
    Configuration, Setting,
};

/// Name used as the target of findings on the defaults attribute.
pub const DEFAULTS_TARGET: &str = "StronglyDefaults";

/// Report invalid values written in one attribute.
///
/// `target` is the declaration name, or [`DEFAULTS_TARGET`]. Findings name
/// it so equal values on different declarations stay separate findings.
/// Only concrete fields are checked: an inherited field was not written.
pub fn check_declared(config: &Configuration, target: &str, sink: &mut impl DiagnosticSink) {
    let span = config.location.unwrap_or(Span::DUMMY);

    check_flags(config.converters, span, target, sink);
    if let Setting::Value(BackingType::Unknown(raw)) = config.backing_type {
        sink.report(invalid_backing_type(span, target, raw));
    }
    check_flags(config.capabilities, span, target, sink);
    check_flags(config.casts, span, target, sink);
    check_flags(config.math, span, target, sink);
}

fn check_flags<F: AttributeFlags>(
    setting: Setting<F>,
    span: Span,
    target: &str,
    sink: &mut impl DiagnosticSink,
) {
    if let Setting::Value(value) = setting {
        if !is_valid_flag_combination(value) {
            sink.report(invalid_flags(
                F::INVALID_CODE,
                span,
                target,
                F::NAME,
                value.bits(),
            ));
        }
    }
}

/// Report cast and math requests the merged backing kind cannot carry.
///
/// Does nothing when the backing type is not a declared kind; that case is
/// already reported by [`check_declared`].
pub fn check_supported(config: &Configuration, target: &str, sink: &mut impl DiagnosticSink) {
    let Some(kind) = config.backing_kind() else {
        return;
    };
    let span = config.location.unwrap_or(Span::DUMMY);

    if let Setting::Value(casts) = config.casts {
        let dropped = unsupported_casts(kind, casts);
        if !dropped.is_empty() {
            let supported = supported_casts(kind);
            sink.report(unsupported(
                ErrorCode::UnsupportedCast,
                span,
                target,
                kind,
                &member_names(dropped),
                &member_names(supported),
            ));
        }
    }

    if let Setting::Value(math) = config.math {
        let dropped = unsupported_math(kind, math);
        if !dropped.is_empty() {
            let supported = supported_math(kind);
            sink.report(unsupported(
                ErrorCode::UnsupportedMath,
                span,
                target,
                kind,
                &member_names(dropped),
                &member_names(supported),
            ));
        }
    }
}

fn unsupported(
    code: ErrorCode,
    span: Span,
    target: &str,
    kind: BackingKind,
    dropped: &str,
    supported: &str,
) -> Diagnostic {
    let what = match code {
        ErrorCode::UnsupportedCast => "cast",
        _ => "math",
    };
    let diagnostic = Diagnostic::new(code)
        .with_message(format!(
            "{what} operators on `{target}` are not supported for backing type `{kind}`"
        ))
        .at(span, format!("`{dropped}` will not be generated"));

    if supported.is_empty() {
        diagnostic.with_help(format!("remove the {what} argument"))
    } else {
        diagnostic.with_help(format!("`{kind}` supports `{supported}`"))
    }
}

#[cfg(test)]
mod tests;
