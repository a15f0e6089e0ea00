//! Shared response envelope types for API handlers.
//!
//! Collection listings (`GET /{entities}/`) wrap their rows under the
//! collection name, e.g. `{ "players": [...] }`. Filtered and lookup
//! endpoints return bare arrays.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// `{ "<key>": [T, ...] }` listing envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(Listing::new("players", players)))
/// ```
#[derive(Debug)]
pub struct Listing<T> {
    key: &'static str,
    items: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new(key: &'static str, items: Vec<T>) -> Self {
        Self { key, items }
    }
}

impl<T: Serialize> Serialize for Listing<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.items)?;
        map.end()
    }
}
