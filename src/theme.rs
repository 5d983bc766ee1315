//! Persisted light/dark theme.
//!
//! The flag is owned by a [`ThemeState`] instead of living at page scope.
//! Whoever needs it (the toggle control, the keyboard shortcut, the icon and
//! card updates) goes through [`ThemeState::current`] and
//! [`ThemeState::toggle`]. Persistence is behind [`PreferenceStore`] so the
//! browser's `localStorage` and in-memory test stores are interchangeable.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed write is logged and the in-memory
//! flag still changes, so the page reflects the click even when storage is
//! unavailable (private browsing, quota).

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{LIGHT_CARD_BACKDROP, THEME_STORAGE_KEY};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored value. Anything other than `dark`/`light` is `None`.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Which toggle icon is shown: the moon in dark mode, the sun in light.
    #[must_use]
    pub fn icons(self) -> IconVisibility {
        IconVisibility { moon: self == Self::Dark, sun: self == Self::Light }
    }

    /// Inline `backdrop-filter` for cards, or `None` to clear it.
    #[must_use]
    pub fn card_backdrop(self) -> Option<&'static str> {
        match self {
            Self::Dark => None,
            Self::Light => Some(LIGHT_CARD_BACKDROP),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconVisibility {
    pub moon: bool,
    pub sun: bool,
}

impl IconVisibility {
    /// CSS `display` value for a visibility flag.
    #[must_use]
    pub fn display(visible: bool) -> &'static str {
        if visible { "block" } else { "none" }
    }
}

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The page's theme flag and the store it persists to.
#[derive(Debug)]
pub struct ThemeState<S> {
    current: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Read the stored theme, defaulting to dark when absent or unrecognized.
    pub fn load(store: S) -> Self {
        let current = match store.load(THEME_STORAGE_KEY) {
            Some(value) => Theme::from_stored(&value).unwrap_or_else(|| {
                log::warn!("ignoring stored theme {value:?}");
                Theme::default()
            }),
            None => Theme::default(),
        };
        Self { current, store }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switch to `theme` and persist it.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(err) = self.store.save(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("failed to persist theme {theme}: {err}");
        }
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    #[must_use]
    pub fn icons(&self) -> IconVisibility {
        self.current.icons()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
