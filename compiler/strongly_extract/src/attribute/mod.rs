//! Attribute argument binding.
//!
//! Both attributes share one constructor shape:
//! `(backingType, converters, implementations, cast, math)`, every parameter
//! optional. Positional arguments bind a prefix of that list; named
//! arguments are applied afterwards and win.

use strongly_config::{BackingType, Configuration, Setting};
use strongly_ir::{ArgumentValue, RawAttribute};

/// Constructor parameter names, in positional order.
pub const PARAMETERS: [&str; 5] = [
    "backingType",
    "converters",
    "implementations",
    "cast",
    "math",
];

/// Build the declared configuration of one attribute usage.
///
/// Returns `None` if any argument failed to resolve; the caller skips the
/// declaration without reporting, since the host compiler already did.
pub fn configuration_from_attribute(attribute: &RawAttribute) -> Option<Configuration> {
    let mut config = Configuration::new().with_location(attribute.span);

    for (index, value) in attribute.positional.iter().enumerate() {
        let ArgumentValue::Int(raw) = *value else {
            return None;
        };
        if let Some(name) = PARAMETERS.get(index) {
            bind(&mut config, name, raw);
        }
    }

    for argument in &attribute.named {
        let ArgumentValue::Int(raw) = argument.value else {
            return None;
        };
        bind(&mut config, &argument.name, raw);
    }

    Some(config)
}

/// Apply one argument. Unknown names are ignored.
fn bind(config: &mut Configuration, name: &str, raw: i32) {
    match name {
        "backingType" => config.backing_type = BackingType::from_raw(raw),
        "converters" => config.converters = Setting::from_raw(raw),
        "implementations" => config.capabilities = Setting::from_raw(raw),
        "cast" => config.casts = Setting::from_raw(raw),
        "math" => config.math = Setting::from_raw(raw),
        _ => tracing::trace!(name, "ignoring unknown attribute argument"),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
