//! Profile document model.
//!
//! DESIGN
//! ======
//! The document is loaded once at startup and never mutated. Parsing is
//! permissive: sections that are missing or have the wrong shape become
//! empty instead of failing the whole document. Only a root that is not a
//! JSON object counts as a shape failure (handled by the loader fallback).
//!
//! Record fields are decoded one at a time: a `null` or non-string value in
//! a text field becomes empty (numbers and booleans keep their JSON text),
//! so a bad field never costs the whole record.
//!
//! `favorites` stays as a raw JSON map so category insertion order survives
//! parsing (`serde_json` `preserve_order`) and non-list categories can be
//! skipped later by the flattener rather than rejected here.

pub mod loader;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Category key -> raw category value, in document order.
pub type Favorites = serde_json::Map<String, Value>;

// =============================================================================
// DOCUMENT
// =============================================================================

/// Root profile document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProfileDocument {
    #[serde(deserialize_with = "lenient_list")]
    pub nicknames: Vec<Nickname>,
    #[serde(deserialize_with = "lenient_object")]
    pub favorites: Option<Favorites>,
    #[serde(deserialize_with = "lenient_contact")]
    pub contact: Contact,
}

/// Display-only nickname record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Nickname {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub icon: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
}

/// One favorite thing inside a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FavoriteItem {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub icon: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
    /// Short line shown under the card when revealed.
    #[serde(deserialize_with = "lenient_string")]
    pub pickup: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "lenient_list")]
    pub emails: Vec<ContactEntry>,
    #[serde(deserialize_with = "lenient_list")]
    pub phones: Vec<ContactEntry>,
    #[serde(deserialize_with = "lenient_option")]
    pub location: Option<ContactEntry>,
}

/// Shared shape for emails, phones and the location.
///
/// Emails use `address` and `type`, phones use `number` and `carrier`, the
/// location uses `address` only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactEntry {
    #[serde(deserialize_with = "lenient_opt_string")]
    pub address: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub number: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient_opt_string")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub carrier: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub icon: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub image: Option<String>,
}

impl FavoriteItem {
    /// Decode one list element. Elements that are not objects become an
    /// empty item so every element still takes its place in the queue.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

// =============================================================================
// LENIENT DECODING
// =============================================================================

/// Keep the elements of `value` that decode as `T`; anything that is not an
/// array yields nothing.
fn items_from_value<T: DeserializeOwned>(value: &Value) -> Vec<T> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect()
}

/// Text of a scalar JSON value; `None` for null, arrays and objects.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(de)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(de)?))
}

fn lenient_list<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(de)?;
    Ok(items_from_value(&value))
}

fn lenient_option<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(de)?;
    Ok(T::deserialize(&value).ok())
}

fn lenient_object<'de, D>(de: D) -> Result<Option<Favorites>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(de)? {
        Value::Object(map) => Ok(Some(map)),
        _ => Ok(None),
    }
}

fn lenient_contact<'de, D>(de: D) -> Result<Contact, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(de)?;
    Ok(Contact::deserialize(&value).unwrap_or_default())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
