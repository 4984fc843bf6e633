//! Flattening of the categorized favorites into one reveal queue.

use serde_json::Value;

use crate::profile::{FavoriteItem, Favorites};

/// One queued reveal: the category key and the item inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedEntry {
    pub category: String,
    pub item: FavoriteItem,
}

/// Flatten `favorites` in document order: categories as they appear in the
/// map, items as they appear in each list. Every element of a list yields
/// exactly one entry; categories whose value is not a list contribute
/// nothing. Never fails.
#[must_use]
pub fn flatten_favorites(favorites: Option<&Favorites>) -> Vec<FlattenedEntry> {
    let Some(favorites) = favorites else {
        return Vec::new();
    };

    favorites
        .iter()
        .filter_map(|(category, value)| match value {
            Value::Array(items) => Some((category, items)),
            _ => None,
        })
        .flat_map(|(category, items)| {
            items
                .iter()
                .map(move |item| FlattenedEntry { category: category.clone(), item: FavoriteItem::from_value(item) })
        })
        .collect()
}

#[cfg(test)]
#[path = "flatten_test.rs"]
mod tests;
