//! The `explain` command: display documentation for diagnostic codes.

use strongly_diagnostic::ErrorCode;

/// Documentation for a code string such as `STG3` (any case).
pub fn explanation(code_str: &str) -> Result<&'static str, String> {
    code_str
        .parse::<ErrorCode>()
        .map(ErrorCode::docs)
        .map_err(|()| format!("unknown diagnostic code: {code_str}"))
}

/// Print the documentation for `code_str`, or exit with status 1.
pub fn explain_code(code_str: &str) {
    match explanation(code_str) {
        Ok(doc) => println!("{doc}"),
        Err(message) => {
            eprintln!("{message}");
            eprintln!();
            eprintln!("Codes have the format STXN, e.g. STI2, STG3, STE1.");
            eprintln!(
                "Known codes: {}",
                ErrorCode::ALL
                    .iter()
                    .map(ErrorCode::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            std::process::exit(1);
        }
    }
}
