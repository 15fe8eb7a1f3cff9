//! Placeholder rendering.
//!
//! A single left-to-right pass over the template: each `{{slot}}` is
//! replaced by its value from the [`SlotMap`] and the value is never scanned
//! again. A placeholder with no value is copied through verbatim.
//!
//! Multi-line values continue at the column of the placeholder, so a slot
//! written inside an indented block stays inside it.

use rustc_hash::FxHashMap;

/// Values for the placeholders of one declaration.
#[derive(Clone, Debug, Default)]
pub struct SlotMap {
    values: FxHashMap<&'static str, String>,
}

impl SlotMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `slot`, replacing an earlier value.
    pub fn insert(&mut self, slot: &'static str, value: impl Into<String>) {
        self.values.insert(slot, value.into());
    }

    #[inline]
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.values.get(slot).map(String::as_str)
    }

    pub fn contains(&self, slot: &str) -> bool {
        self.values.contains_key(slot)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Render `template` into a fresh string.
pub fn render(template: &str, slots: &SlotMap) -> String {
    let mut out = String::with_capacity(template.len() + template.len() / 4);
    render_into(template, slots, &mut out);
    out
}

/// Render `template`, appending to `out`.
pub fn render_into(template: &str, slots: &SlotMap, out: &mut String) {
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            // Unterminated: the remainder is literal text.
            out.push_str(&rest[start..]);
            return;
        };

        let name = &after[..end];
        match slots.get(name) {
            Some(value) => push_aligned(out, value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
}

/// Append `value`, indenting its continuation lines to match the leading
/// spaces of the line being written.
fn push_aligned(out: &mut String, value: &str) {
    let line_start = out.rfind('\n').map_or(0, |i| i + 1);
    let line = &out[line_start..];
    let indent = line.len() - line.trim_start_matches(' ').len();

    let mut lines = value.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        if !line.is_empty() {
            for _ in 0..indent {
                out.push(' ');
            }
        }
        out.push_str(line);
    }
}

#[cfg(test)]
mod tests;
