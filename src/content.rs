//! Record builders for the static sections and revealed cards.

use crate::profile::{ContactEntry, ProfileDocument};
use crate::reveal::flatten::FlattenedEntry;
use crate::surface::{ContactRecord, FavoriteCard, NicknameRecord, Visual};

/// Category key -> display label. Keys not listed display verbatim.
const CATEGORY_LABELS: &[(&str, &str)] = &[
    ("colors", "Color"),
    ("drinks", "Drink"),
    ("mlbbSpells", "MLBB Spell"),
    ("iceCreamFlavors", "Ice Cream"),
    ("musicGenres", "Music Genre"),
    ("foods", "Food"),
    ("mlbbMaleHeroes", "MLBB Male Hero"),
    ("mlbbFemaleHeroes", "MLBB Female Hero"),
    ("flowers", "Flower"),
    ("emotes", "Emote"),
    ("onePieceCharacters", "One Piece Character"),
    ("songs", "Song"),
    ("anime", "Anime"),
    ("games", "Game"),
];

#[must_use]
pub fn category_label(category: &str) -> &str {
    CATEGORY_LABELS
        .iter()
        .find(|(key, _)| *key == category)
        .map_or(category, |&(_, label)| label)
}

#[must_use]
pub fn nickname_records(doc: &ProfileDocument) -> Vec<NicknameRecord> {
    doc.nicknames
        .iter()
        .map(|n| NicknameRecord {
            name: n.name.clone(),
            description: n.description.clone(),
            visual: Visual::from_parts(n.image.as_deref(), &n.icon),
        })
        .collect()
}

/// Emails, then phones, then the location.
#[must_use]
pub fn contact_records(doc: &ProfileDocument) -> Vec<ContactRecord> {
    let contact = &doc.contact;
    let emails = contact.emails.iter().map(|email| {
        contact_record(
            "Email",
            email,
            email.address.clone().unwrap_or_default(),
            format!("{} - {}", email.kind.as_deref().unwrap_or_default(), email.description),
        )
    });
    let phones = contact.phones.iter().map(|phone| {
        contact_record(
            "Phone",
            phone,
            phone.number.clone().unwrap_or_default(),
            format!("{} - {}", phone.carrier.as_deref().unwrap_or_default(), phone.description),
        )
    });
    let location = contact.location.iter().map(|location| {
        contact_record(
            "Location",
            location,
            location.address.clone().unwrap_or_default(),
            location.description.clone(),
        )
    });

    emails.chain(phones).chain(location).collect()
}

fn contact_record(title: &'static str, entry: &ContactEntry, value: String, description: String) -> ContactRecord {
    ContactRecord { title, value, description, visual: Visual::from_parts(entry.image.as_deref(), &entry.icon) }
}

#[must_use]
pub fn favorite_card(entry: &FlattenedEntry, index: usize) -> FavoriteCard {
    let item = &entry.item;
    FavoriteCard {
        index,
        category: entry.category.clone(),
        category_label: category_label(&entry.category).to_string(),
        name: item.name.clone(),
        description: item.description.clone(),
        pickup: item.pickup.clone(),
        visual: Visual::from_parts(item.image.as_deref(), &item.icon),
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
