//! Light/dark theme initialization and toggle.
//!
//! Reads the persisted preference from the local store and emits an
//! `ApplyTheme` command. Toggle writes back to the store and re-applies.
//! Persistence is best-effort: a failed write is logged and the new theme
//! still applies for the running session.

use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::prefs::PrefsStore;
use crate::surface::{RenderCommand, Surface};

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Only the two literal names are recognized.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
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

/// Read the persisted theme. Absent or unrecognized values read as light.
#[must_use]
pub fn read_preference(store: &PrefsStore) -> Theme {
    store
        .get(STORAGE_KEY)
        .and_then(Theme::from_stored)
        .unwrap_or_default()
}

pub fn apply(theme: Theme, surface: &dyn Surface) {
    surface.emit(RenderCommand::ApplyTheme { theme });
}

/// Flip the theme, persist it and apply it. Returns the new theme.
pub fn toggle(current: Theme, store: &mut PrefsStore, surface: &dyn Surface) -> Theme {
    let next = current.flipped();
    apply(next, surface);
    match store.set(STORAGE_KEY, next.as_str()) {
        Ok(()) => info!(theme = %next, "theme toggled"),
        Err(e) => warn!(error = %e, theme = %next, "theme toggled but not persisted"),
    }
    next
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;
