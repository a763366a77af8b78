//! Pure derivations over a character collection

use crate::types::{Character, CharacterId};

/// Characters whose name contains `query`, ignoring case, in collection order
///
/// An empty query matches everything.
pub fn search(collection: &[Character], query: &str) -> Vec<Character> {
    if query.is_empty() {
        return collection.to_vec();
    }

    let needle = query.to_lowercase();
    collection
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The collection without the first entry carrying `id`
///
/// Absent ids leave the collection unchanged.
pub fn remove(collection: &[Character], id: CharacterId) -> Vec<Character> {
    let mut remaining = collection.to_vec();
    if let Some(pos) = remaining.iter().position(|c| c.id == id) {
        remaining.remove(pos);
    }
    remaining
}
