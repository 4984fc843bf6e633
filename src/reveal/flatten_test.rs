use super::*;
use serde_json::{Value, json};

fn favorites(value: Value) -> Favorites {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn pairs(entries: &[FlattenedEntry]) -> Vec<(&str, &str)> {
    entries.iter().map(|e| (e.category.as_str(), e.item.name.as_str())).collect()
}

#[test]
fn preserves_category_and_item_order() {
    let favs = favorites(json!({
        "a": [{ "name": "x" }, { "name": "y" }],
        "b": [{ "name": "z" }]
    }));
    let entries = flatten_favorites(Some(&favs));
    assert_eq!(pairs(&entries), [("a", "x"), ("a", "y"), ("b", "z")]);
}

#[test]
fn follows_insertion_order_not_alphabetical() {
    let favs: Favorites =
        serde_json::from_str(r#"{"songs":[{"name":"s"}],"colors":[{"name":"c"}],"anime":[{"name":"a"}]}"#).unwrap();
    let entries = flatten_favorites(Some(&favs));
    assert_eq!(pairs(&entries), [("songs", "s"), ("colors", "c"), ("anime", "a")]);
}

#[test]
fn keeps_duplicates() {
    let favs = favorites(json!({ "drinks": [{ "name": "Coke" }, { "name": "Coke" }] }));
    assert_eq!(flatten_favorites(Some(&favs)).len(), 2);
}

#[test]
fn skips_non_list_categories() {
    let favs = favorites(json!({
        "a": [{ "name": "x" }],
        "b": "not a list",
        "c": { "name": "nested" },
        "d": null,
        "e": [{ "name": "w" }]
    }));
    let entries = flatten_favorites(Some(&favs));
    assert_eq!(pairs(&entries), [("a", "x"), ("e", "w")]);
}

#[test]
fn missing_favorites_is_empty() {
    assert!(flatten_favorites(None).is_empty());
}

#[test]
fn empty_favorites_is_empty() {
    assert!(flatten_favorites(Some(&Favorites::new())).is_empty());
}

#[test]
fn empty_categories_contribute_nothing() {
    let favs = favorites(json!({ "a": [], "b": [{ "name": "z" }] }));
    assert_eq!(pairs(&flatten_favorites(Some(&favs))), [("b", "z")]);
}

#[test]
fn same_input_same_output() {
    let favs = favorites(json!({ "a": [{ "name": "x", "pickup": "p" }], "b": [{ "name": "z" }] }));
    assert_eq!(flatten_favorites(Some(&favs)), flatten_favorites(Some(&favs)));
}

#[test]
fn carries_item_fields() {
    let favs = favorites(json!({
        "colors": [{ "name": "Black", "description": "Elegant", "icon": "fas fa-circle", "pickup": "line" }]
    }));
    let entries = flatten_favorites(Some(&favs));
    assert_eq!(entries[0].item.description, "Elegant");
    assert_eq!(entries[0].item.icon, "fas fa-circle");
    assert_eq!(entries[0].item.pickup, "line");
}

#[test]
fn default_document_flattens_all_items() {
    let doc = crate::profile::loader::default_document();
    let entries = flatten_favorites(doc.favorites.as_ref());
    assert_eq!(entries.len(), 29);
    assert_eq!(pairs(&entries[..2]), [("colors", "Black"), ("colors", "Purple")]);
    assert_eq!(entries.last().map(|e| e.category.as_str()), Some("songs"));
}

#[test]
fn items_with_null_or_number_fields_are_kept() {
    let favs = favorites(json!({
        "a": [
            { "name": "x", "description": null, "pickup": "p" },
            { "name": 7, "pickup": "q" },
            { "name": "y" }
        ]
    }));
    let entries = flatten_favorites(Some(&favs));
    assert_eq!(pairs(&entries), [("a", "x"), ("a", "7"), ("a", "y")]);
    assert_eq!(entries[0].item.description, "");
    assert_eq!(entries[0].item.pickup, "p");
    assert_eq!(entries[1].item.pickup, "q");
}

#[test]
fn non_object_elements_become_empty_items() {
    let favs = favorites(json!({ "a": [{ "name": "x" }, 42, "text", null] }));
    let entries = flatten_favorites(Some(&favs));
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].item.name, "x");
    for entry in &entries[1..] {
        assert_eq!(entry.category, "a");
        assert_eq!(entry.item, FavoriteItem::default());
    }
}
