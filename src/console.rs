//! Console presentation layer.
//!
//! Drains render commands and prints them, and maps typed input lines to
//! user actions. In text mode visibility toggles and scrolling have no
//! console equivalent beyond a short status line. In JSON mode every command
//! is printed as one JSON object per line, for another process to draw.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::surface::{ContainerId, RenderCommand, Visual};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Reveal,
    ToggleTheme,
    Quit,
}

impl UserAction {
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "r" | "reveal" => Some(Self::Reveal),
            "t" | "theme" => Some(Self::ToggleTheme),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// How the printer writes each command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per command, tagged by `op`.
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Spawn the printer task. It ends when every surface sender is dropped.
pub fn spawn_renderer(mut rx: mpsc::UnboundedReceiver<RenderCommand>, format: OutputFormat) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(command) = rx.recv().await {
            if let Some(line) = format_command(&command, format) {
                println!("{line}");
            }
        }
    })
}

/// Output line for one command in `format`, or `None` when nothing should
/// be printed.
#[must_use]
pub fn format_command(command: &RenderCommand, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Text => render_line(command),
        OutputFormat::Json => match serde_json::to_string(command) {
            Ok(line) => Some(line),
            Err(e) => {
                warn!(error = %e, "render command encode failed");
                None
            }
        },
    }
}

/// Text for one command, or `None` when nothing should be printed.
#[must_use]
pub fn render_line(command: &RenderCommand) -> Option<String> {
    match command {
        RenderCommand::Show { target: ContainerId::LoadingScreen } => Some("Loading...".to_string()),
        RenderCommand::Show { target: ContainerId::MainContent } => {
            Some("Ready. Type `reveal`, `theme` or `quit`.".to_string())
        }
        RenderCommand::Show { target: ContainerId::CompletionMessage } => {
            Some("** All favorites revealed! **".to_string())
        }
        RenderCommand::Clear { target: ContainerId::Nicknames } => Some("Nicknames:".to_string()),
        RenderCommand::Clear { target: ContainerId::Contact } => Some("Contact:".to_string()),
        RenderCommand::Clear { target: ContainerId::Favorites } => Some("Favorites:".to_string()),
        RenderCommand::AppendNickname { record } => {
            Some(format!("  {} {} ({})", glyph(&record.visual), record.name, record.description))
        }
        RenderCommand::AppendContact { record } => Some(format!(
            "  {} {}: {} ({})",
            glyph(&record.visual),
            record.title,
            record.value,
            record.description
        )),
        RenderCommand::AppendFavorite { card } => Some(format!(
            "  #{} [{}] {} {} - {}\n      \"{}\"",
            card.index + 1,
            card.category_label,
            glyph(&card.visual),
            card.name,
            card.description,
            card.pickup
        )),
        RenderCommand::SetRevealButton { label, enabled } => {
            Some(if *enabled { format!("[{label}]") } else { format!("({label})") })
        }
        RenderCommand::ApplyTheme { theme } => Some(format!("theme: {theme}")),
        RenderCommand::Show { .. }
        | RenderCommand::Hide { .. }
        | RenderCommand::Clear { .. }
        | RenderCommand::ScrollIntoView { .. } => None,
    }
}

fn glyph(visual: &Visual) -> String {
    match visual {
        Visual::Image { path, .. } => format!("<{path}>"),
        Visual::Icon { name } => format!("<{name}>"),
    }
}

#[cfg(test)]
#[path = "console_test.rs"]
mod tests;
