//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Updates replace every settable field, so each entity's update DTO is an
//! alias of its create DTO.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use squad_builder_core::types::DbId;

pub mod competition;
pub mod formation;
pub mod nationality;
pub mod player;
pub mod rating;
pub mod squad;
pub mod squad_player;
pub mod team;
pub mod team_competition;
pub mod user;

/// Confirmation returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deleted {
    pub detail: String,
}

impl Deleted {
    pub fn new(entity: &str, id: DbId) -> Self {
        Self {
            detail: format!("{entity} with id {id} deleted successfully"),
        }
    }
}

/// Query parameters for the `*_filtered/?name=` lookups.
#[derive(Debug, Default, Deserialize)]
pub struct NameFilter {
    pub name: Option<String>,
}

impl NameFilter {
    /// The search term, if one was supplied and is non-empty.
    pub fn term(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Parse a query string value with [`FromStr`], mapping an empty value to `None`.
pub(crate) fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
