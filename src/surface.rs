//! Rendering surface: the command stream the core writes into.
//!
//! ARCHITECTURE
//! ============
//! The core never formats markup. It emits `RenderCommand`s addressed to
//! stable container ids and carrying structured records; a presentation
//! layer drains them in order and decides how they look.

use std::fmt;

use serde::{Serialize, Serializer};
use tokio::sync::mpsc;

use crate::theme::Theme;

// =============================================================================
// CONTAINERS
// =============================================================================

/// Named regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    LoadingScreen,
    MainContent,
    Nicknames,
    Contact,
    Favorites,
    CompletionMessage,
}

impl ContainerId {
    /// Stable element identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoadingScreen => "loading-screen",
            Self::MainContent => "main-content",
            Self::Nicknames => "nicknames-container",
            Self::Contact => "contact-container",
            Self::Favorites => "favorites-container",
            Self::CompletionMessage => "completion-message",
        }
    }
}

impl Serialize for ContainerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// What to draw for a record. The presentation layer falls back from the
/// image to the icon if the image cannot be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Visual {
    Image { path: String, fallback_icon: String },
    Icon { name: String },
}

impl Visual {
    /// An image when one is present and non-empty, otherwise the icon.
    #[must_use]
    pub fn from_parts(image: Option<&str>, icon: &str) -> Self {
        match image.map(str::trim) {
            Some(path) if !path.is_empty() => Self::Image { path: path.to_string(), fallback_icon: icon.to_string() },
            _ => Self::Icon { name: icon.to_string() },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicknameRecord {
    pub name: String,
    /// Shown as a tooltip.
    pub description: String,
    pub visual: Visual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    /// `Email`, `Phone` or `Location`.
    pub title: &'static str,
    pub value: String,
    pub description: String,
    pub visual: Visual,
}

/// A revealed favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteCard {
    /// Position in the reveal queue; drives the staggered entry animation.
    pub index: usize,
    pub category: String,
    pub category_label: String,
    pub name: String,
    pub description: String,
    pub pickup: String,
    pub visual: Visual,
}

// =============================================================================
// COMMANDS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RenderCommand {
    Show { target: ContainerId },
    Hide { target: ContainerId },
    Clear { target: ContainerId },
    AppendNickname { record: NicknameRecord },
    AppendContact { record: ContactRecord },
    AppendFavorite { card: FavoriteCard },
    ScrollIntoView { target: ContainerId },
    SetRevealButton { label: String, enabled: bool },
    ApplyTheme { theme: Theme },
}

/// Sink for render commands. Commands must be applied in emission order.
pub trait Surface: Send + Sync + 'static {
    fn emit(&self, command: RenderCommand);
}

impl Surface for mpsc::UnboundedSender<RenderCommand> {
    fn emit(&self, command: RenderCommand) {
        if self.send(command).is_err() {
            tracing::debug!("render surface closed; dropping command");
        }
    }
}

#[cfg(test)]
#[path = "surface_test.rs"]
mod tests;
