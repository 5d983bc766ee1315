//! Keyboard shortcuts.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `t` or `T`.
    ToggleTheme,
    /// `Home`.
    ScrollToTop,
}

impl Shortcut {
    /// Map a `KeyboardEvent.key` value to a shortcut.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "t" | "T" => Some(Self::ToggleTheme),
            "Home" => Some(Self::ScrollToTop),
            _ => None,
        }
    }
}
