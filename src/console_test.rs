use super::*;
use serde_json::{Value, json};

use crate::surface::{ContactRecord, FavoriteCard, NicknameRecord, Surface};
use crate::theme::Theme;

// =============================================================================
// UserAction
// =============================================================================

#[test]
fn parse_actions() {
    assert_eq!(UserAction::parse("reveal"), Some(UserAction::Reveal));
    assert_eq!(UserAction::parse(" R "), Some(UserAction::Reveal));
    assert_eq!(UserAction::parse("theme"), Some(UserAction::ToggleTheme));
    assert_eq!(UserAction::parse("t"), Some(UserAction::ToggleTheme));
    assert_eq!(UserAction::parse("quit"), Some(UserAction::Quit));
    assert_eq!(UserAction::parse("EXIT"), Some(UserAction::Quit));
}

#[test]
fn parse_unknown_action_is_none() {
    assert_eq!(UserAction::parse(""), None);
    assert_eq!(UserAction::parse("dance"), None);
}

// =============================================================================
// render_line
// =============================================================================

#[test]
fn favorite_card_line_includes_label_and_pickup() {
    let card = FavoriteCard {
        index: 0,
        category: "mlbbSpells".into(),
        category_label: "MLBB Spell".into(),
        name: "Flicker".into(),
        description: "Teleport".into(),
        pickup: "Always back to you.".into(),
        visual: Visual::Icon { name: "fas fa-bolt".into() },
    };
    let line = render_line(&RenderCommand::AppendFavorite { card }).unwrap();
    assert!(line.starts_with("  #1 [MLBB Spell] <fas fa-bolt> Flicker - Teleport"));
    assert!(line.ends_with("\"Always back to you.\""));
}

#[test]
fn nickname_line_prefers_image() {
    let record = NicknameRecord {
        name: "Ceyy".into(),
        description: "short".into(),
        visual: Visual::Image { path: "img/c.png".into(), fallback_icon: "fas fa-star".into() },
    };
    assert_eq!(render_line(&RenderCommand::AppendNickname { record }).unwrap(), "  <img/c.png> Ceyy (short)");
}

#[test]
fn button_line_shows_enabled_state() {
    let enabled = RenderCommand::SetRevealButton { label: "Show Again".into(), enabled: true };
    let disabled = RenderCommand::SetRevealButton { label: "Revealing Favorites...".into(), enabled: false };
    assert_eq!(render_line(&enabled).unwrap(), "[Show Again]");
    assert_eq!(render_line(&disabled).unwrap(), "(Revealing Favorites...)");
}

#[test]
fn silent_commands_print_nothing() {
    assert_eq!(render_line(&RenderCommand::Hide { target: ContainerId::LoadingScreen }), None);
    assert_eq!(render_line(&RenderCommand::ScrollIntoView { target: ContainerId::Favorites }), None);
    assert_eq!(render_line(&RenderCommand::Show { target: ContainerId::Favorites }), None);
}

#[test]
fn theme_line() {
    assert_eq!(render_line(&RenderCommand::ApplyTheme { theme: Theme::Dark }).unwrap(), "theme: dark");
}

// =============================================================================
// JSON output
// =============================================================================

fn json_line(command: &RenderCommand) -> Value {
    let line = format_command(command, OutputFormat::Json).unwrap();
    assert!(!line.contains('\n'));
    serde_json::from_str(&line).unwrap()
}

#[test]
fn parse_output_format() {
    assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::parse(" Text "), Some(OutputFormat::Text));
    assert_eq!(OutputFormat::parse("yaml"), None);
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn text_format_matches_render_line() {
    let command = RenderCommand::ApplyTheme { theme: Theme::Light };
    assert_eq!(format_command(&command, OutputFormat::Text), render_line(&command));
    let silent = RenderCommand::Hide { target: ContainerId::LoadingScreen };
    assert_eq!(format_command(&silent, OutputFormat::Text), None);
}

#[test]
fn json_format_prints_every_command() {
    assert_eq!(
        json_line(&RenderCommand::Hide { target: ContainerId::LoadingScreen }),
        json!({ "op": "hide", "target": "loading-screen" })
    );
    assert_eq!(
        json_line(&RenderCommand::ScrollIntoView { target: ContainerId::Favorites }),
        json!({ "op": "scroll_into_view", "target": "favorites-container" })
    );
    assert_eq!(
        json_line(&RenderCommand::SetRevealButton { label: "Show Again".into(), enabled: true }),
        json!({ "op": "set_reveal_button", "label": "Show Again", "enabled": true })
    );
    assert_eq!(json_line(&RenderCommand::ApplyTheme { theme: Theme::Dark }), json!({ "op": "apply_theme", "theme": "dark" }));
}

#[test]
fn json_format_carries_records() {
    let card = FavoriteCard {
        index: 2,
        category: "colors".into(),
        category_label: "Color".into(),
        name: "Black".into(),
        description: "d".into(),
        pickup: "p".into(),
        visual: Visual::Image { path: "img/b.png".into(), fallback_icon: "fas fa-palette".into() },
    };
    assert_eq!(
        json_line(&RenderCommand::AppendFavorite { card }),
        json!({
            "op": "append_favorite",
            "card": {
                "index": 2,
                "category": "colors",
                "category_label": "Color",
                "name": "Black",
                "description": "d",
                "pickup": "p",
                "visual": { "kind": "image", "path": "img/b.png", "fallback_icon": "fas fa-palette" }
            }
        })
    );

    let record = ContactRecord {
        title: "Phone",
        value: "NTC - mobile".into(),
        description: "mobile".into(),
        visual: Visual::Icon { name: "fas fa-phone-alt".into() },
    };
    assert_eq!(
        json_line(&RenderCommand::AppendContact { record }),
        json!({
            "op": "append_contact",
            "record": {
                "title": "Phone",
                "value": "NTC - mobile",
                "description": "mobile",
                "visual": { "kind": "icon", "name": "fas fa-phone-alt" }
            }
        })
    );
}

#[tokio::test]
async fn renderer_exits_when_senders_drop() {
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = spawn_renderer(rx, OutputFormat::Json);
    tx.emit(RenderCommand::Show { target: ContainerId::LoadingScreen });
    drop(tx);
    handle.await.unwrap();
}
