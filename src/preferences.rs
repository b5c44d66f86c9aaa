//! User preferences kept next to the task list.
//!
//! Only the colour theme exists today. It is stored as `"dark"` or
//! `"light"` under its own key, read at startup and written on every toggle.

use crate::storage::keys;
use crate::traits::KeyValueStore;

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light theme (default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Parse a stored value. Anything other than `"dark"` is light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Get the stored representation of the theme.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Theme preference backed by a key-value store.
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
    theme: Theme,
}

impl<S: KeyValueStore> Preferences<S> {
    /// Read the stored preferences. Unreadable storage gives the defaults.
    pub fn load(store: S) -> Self {
        let stored = store.get(keys::THEME).unwrap_or_else(|e| {
            log::warn!("Failed to read theme preference: {e}");
            None
        });
        let theme = Theme::from_stored(stored.as_deref());
        Self { store, theme }
    }

    /// The current theme.
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to `theme` and write it. Write failures are logged; the new
    /// theme stays in effect for the session.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.store.set(keys::THEME, theme.as_str()) {
            log::error!("Failed to save theme preference: {e}");
        }
    }

    /// Flip between light and dark. Returns the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }
}
