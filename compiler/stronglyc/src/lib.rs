//! Strongly CLI library.
//!
//! The `strongly` binary is a thin argument dispatcher over [`commands`].
//! Generation itself lives in `strongly_compiler`; this crate adds the JSON
//! manifest, file output and terminal reporting.

pub mod commands;
pub mod manifest;

pub use manifest::{Manifest, ManifestError};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=strongly_codegen=debug`. Spans are printed as an indented tree
/// on stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(HierarchicalLayer::new(2).with_targets(true))
                .init();
        }
    });
}
