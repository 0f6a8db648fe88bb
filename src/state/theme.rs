//! Light/dark theme preference and the controller that owns it.
//!
//! DESIGN
//! ======
//! The controller is generic over a `PreferenceStore` so the persistence
//! rules can be exercised on the host; the browser build plugs in a
//! `localStorage`-backed store and paints the result onto the document.
//!
//! The startup default is painted without being persisted, so the first OS
//! color-scheme change can still tell "never chose" apart from "chose dark".
//! Toggle clicks, `setTheme`, and that first OS change all write the key;
//! once written, later OS changes are ignored.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

/// Two-valued display theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Value written to `data-theme` and to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle: the sun offers a way out of dark mode.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "\u{2600}",
            Self::Light => "\u{25D0}",
        }
    }

    /// Theme reported by a `(prefers-color-scheme: dark)` match.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme {:?}", self.0)
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Single-key string storage for the theme preference.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// In-memory store, used where no browser storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        Self { value: Some(value.to_owned()) }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_owned());
    }
}

/// Owns the current theme and the store it is persisted to.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the startup theme: the stored preference, or dark.
    ///
    /// Unrecognized stored values count as no preference.
    pub fn initialize(store: S) -> Self {
        let current = Self::stored(&store).unwrap_or_default();
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Whether the user has ever made an explicit choice.
    pub fn has_preference(&self) -> bool {
        Self::stored(&self.store).is_some()
    }

    /// Apply and persist an explicit choice.
    pub fn apply(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.store.save(theme.as_str());
        theme
    }

    /// Flip the current theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        self.toggle_from(None)
    }

    /// Flip the theme the document currently shows.
    ///
    /// `marker` is the parsed `data-theme` attribute; when it is absent or
    /// unreadable the tracked theme is flipped instead.
    pub fn toggle_from(&mut self, marker: Option<Theme>) -> Theme {
        self.apply(marker.unwrap_or(self.current).toggled())
    }

    /// React to an OS color-scheme change.
    ///
    /// Persists and returns the theme to paint, or `None` when a stored
    /// preference exists and the change must be ignored.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_preference() {
            return None;
        }
        Some(self.apply(Theme::from_prefers_dark(prefers_dark)))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn stored(store: &S) -> Option<Theme> {
        store.load().and_then(|raw| raw.parse().ok())
    }
}
