//! The `kinds` command: list backing kinds with their attribute codes.

use std::fmt::Write;

use strongly_config::{semantic::supported_math, BackingKind, MathSet};

/// One row per backing kind: raw code, name, C# primitive, math support.
pub fn kinds_table() -> String {
    let mut table = String::new();
    let _ = writeln!(table, "{:>4}  {:<18} {:<34} math", "code", "kind", "primitive");
    for &kind in BackingKind::ALL {
        let bundle = strongly_templates::bundle(kind);
        let math = if supported_math(kind) == MathSet::all() {
            "all"
        } else {
            "compare"
        };
        let _ = writeln!(
            table,
            "{:>4}  {:<18} {:<34} {math}",
            kind.raw(),
            kind.name(),
            bundle.primitive
        );
    }
    table
}

pub fn list_kinds() {
    print!("{}", kinds_table());
}
