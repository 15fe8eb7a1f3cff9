use std::fmt;

/// Byte range of an attribute or declaration in the host source file.
///
/// The host reports positions; the generator only carries them through to
/// findings. `end` is exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Position of findings the host could not place.
    pub const DUMMY: Span = Span::new(0, 0);

    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    pub const fn is_dummy(self) -> bool {
        self.start == 0 && self.end == 0
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
