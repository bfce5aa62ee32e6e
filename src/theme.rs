//! Light/dark theme preference and its persistence.
//!
//! The applied theme lives on the document root as `data-theme`; the
//! persisted copy lives in a key-value store injected into
//! [`ThemeManager`]. Storage is best-effort: a store that refuses reads or
//! writes never stops the theme from being applied for the session.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;

use crate::consts::THEME_KEY;

/// Visual mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Attribute/storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything other than the two members is rejected.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Derive the current theme from the document attribute.
    ///
    /// Only `"light"` reads as light; a missing or unknown value reads as dark.
    #[must_use]
    pub fn from_attribute(attr: Option<&str>) -> Self {
        if attr == Some("light") { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected access: {0}")]
    Rejected(String),
}

/// Minimal string key-value store, shaped after `window.localStorage`.
pub trait KeyValueStore {
    /// Read `key`; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store refuses the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store, used in tests in place of `localStorage`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Theme state holder over an injected store.
#[derive(Debug)]
pub struct ThemeManager<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted theme if valid, else the platform signal, else dark.
    ///
    /// `system` is the platform's `prefers-color-scheme` answer, `None` when
    /// the platform cannot tell.
    pub fn preferred_theme(&self, system: Option<Theme>) -> Theme {
        match self.store.get_item(THEME_KEY) {
            Ok(Some(saved)) => {
                if let Some(theme) = Theme::parse(&saved) {
                    return theme;
                }
                log::debug!("ignoring invalid persisted theme {saved:?}");
            }
            Ok(None) => {}
            Err(e) => log::debug!("theme read skipped: {e}"),
        }
        system.unwrap_or_default()
    }

    /// Persist `theme` and return it for the host to apply.
    ///
    /// Write failures are swallowed: the returned value is applied regardless.
    pub fn set_theme(&mut self, theme: Theme) -> Theme {
        if let Err(e) = self.store.set_item(THEME_KEY, theme.as_str()) {
            log::debug!("theme write skipped: {e}");
        }
        theme
    }

    /// Flip the theme currently shown by the document and persist the result.
    pub fn toggle(&mut self, current_attr: Option<&str>) -> Theme {
        let next = Theme::from_attribute(current_attr).flipped();
        self.set_theme(next)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
