//! Brace-and-indent layout for generated C#.

const INDENT: &str = "    ";

/// Appends C# to a caller-owned buffer, one nesting level per open block.
pub struct SourceWriter<'a> {
    out: &'a mut String,
    depth: usize,
    /// No member written yet in the innermost block.
    fresh_block: bool,
}

impl<'a> SourceWriter<'a> {
    /// Existing contents of `out` are kept.
    pub fn new(out: &'a mut String) -> Self {
        SourceWriter {
            out,
            depth: 0,
            fresh_block: true,
        }
    }

    pub fn writeln(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.out.push('\n');
            return;
        }
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Multi-line text at the current depth. Blank lines stay unindented.
    pub fn write_fragment(&mut self, text: &str) {
        text.lines().for_each(|line| self.writeln(line));
    }

    pub fn open_block(&mut self, header: &str) {
        self.write_fragment(header);
        self.writeln("{");
        self.depth += 1;
        self.fresh_block = true;
    }

    pub fn close_block(&mut self) {
        debug_assert!(self.depth > 0, "close_block without open_block");
        self.depth = self.depth.saturating_sub(1);
        self.writeln("}");
        self.fresh_block = false;
    }

    /// A blank line separates members. Empty text writes nothing.
    pub fn write_member(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.fresh_block {
            self.out.push('\n');
        }
        self.write_fragment(text);
        self.fresh_block = false;
    }
}
