//! `Setting<T>`: a value or "inherit from the next level".

/// One configurable field.
///
/// `Inherit` means the attribute did not specify the field; [`merge`]
/// replaces it with the defaults attribute's value or the baseline.
///
/// [`merge`]: crate::merge
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Setting<T> {
    Inherit,
    Value(T),
}

impl<T> Default for Setting<T> {
    fn default() -> Self {
        Setting::Inherit
    }
}

impl<T: Copy> Setting<T> {
    /// The concrete value, if any.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Setting::Inherit => None,
            Setting::Value(value) => Some(value),
        }
    }

    /// Keep `self` if concrete, otherwise take `fallback`.
    #[inline]
    #[must_use]
    pub fn or(self, fallback: Setting<T>) -> Setting<T> {
        match self {
            Setting::Inherit => fallback,
            concrete @ Setting::Value(_) => concrete,
        }
    }

    /// The concrete value, or `default` when inheriting.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.value().unwrap_or(default)
    }
}

impl<T> Setting<T> {
    #[inline]
    pub fn is_inherit(&self) -> bool {
        matches!(self, Setting::Inherit)
    }

    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(self, Setting::Value(_))
    }
}

impl<T> From<T> for Setting<T> {
    fn from(value: T) -> Self {
        Setting::Value(value)
    }
}
