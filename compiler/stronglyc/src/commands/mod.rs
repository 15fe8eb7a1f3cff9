//! Command handlers for the strongly CLI.
//!
//! Each submodule implements one command. Handlers that print and exit sit
//! next to pure helpers the tests drive directly.

mod explain;
mod generate;
mod kinds;

pub use explain::{explain_code, explanation};
pub use generate::{
    generate_manifest, print_sources, run_generate, write_sources, GenerateOptions,
};
pub use kinds::{kinds_table, list_kinds};
