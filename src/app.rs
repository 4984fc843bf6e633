//! Page controller: boot sequence and user actions.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the loaded document, the preference store, the current theme
//! and the reveal controller. User actions arrive from the presentation
//! layer; the reveal trigger is guarded here, mirroring a disabled button,
//! while the controller itself always replaces any session in flight.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::content::{contact_records, nickname_records};
use crate::prefs::PrefsStore;
use crate::profile::ProfileDocument;
use crate::profile::loader;
use crate::reveal::{RevealController, RevealStatus};
use crate::surface::{ContainerId, RenderCommand, Surface};
use crate::theme::{self, Theme};

pub struct App {
    document: ProfileDocument,
    surface: Arc<dyn Surface>,
    reveal: RevealController,
    prefs: PrefsStore,
    theme: Theme,
}

impl App {
    /// Apply the saved theme, show the loading screen, load the document,
    /// hold for the loading delay, then reveal the main content.
    pub async fn boot(config: &AppConfig, surface: Arc<dyn Surface>) -> Self {
        let prefs = PrefsStore::open(config.prefs_path.clone());
        let theme = theme::read_preference(&prefs);
        theme::apply(theme, surface.as_ref());

        surface.emit(RenderCommand::Show { target: ContainerId::LoadingScreen });
        surface.emit(RenderCommand::Hide { target: ContainerId::MainContent });

        let document = loader::load(&config.data_source).await;
        tokio::time::sleep(config.loading_delay).await;

        surface.emit(RenderCommand::Hide { target: ContainerId::LoadingScreen });
        surface.emit(RenderCommand::Show { target: ContainerId::MainContent });
        populate_static_content(&document, surface.as_ref());
        info!(%theme, "page ready");

        let reveal = RevealController::new(Arc::clone(&surface), config.timing);
        Self { document, surface, reveal, prefs, theme }
    }

    /// Start a reveal unless one is already showing items. Returns whether
    /// a new session started.
    pub fn reveal(&mut self) -> bool {
        if self.reveal.status().is_busy() {
            debug!("reveal already in progress; ignoring trigger");
            return false;
        }
        self.reveal.start(self.document.favorites.as_ref());
        true
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = theme::toggle(self.theme, &mut self.prefs, self.surface.as_ref());
        self.theme
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn document(&self) -> &ProfileDocument {
        &self.document
    }

    #[must_use]
    pub fn reveal_status(&self) -> RevealStatus {
        self.reveal.status()
    }

    /// Wait for the current reveal, if any, to show its completion message.
    pub async fn reveal_finished(&mut self) {
        self.reveal.finished().await;
    }
}

/// Fill the nickname and contact sections from `doc`.
pub fn populate_static_content(doc: &ProfileDocument, surface: &dyn Surface) {
    surface.emit(RenderCommand::Clear { target: ContainerId::Nicknames });
    for record in nickname_records(doc) {
        surface.emit(RenderCommand::AppendNickname { record });
    }

    surface.emit(RenderCommand::Clear { target: ContainerId::Contact });
    for record in contact_records(doc) {
        surface.emit(RenderCommand::AppendContact { record });
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
