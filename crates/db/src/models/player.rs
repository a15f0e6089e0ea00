//! Player entity model, DTOs and filter parameters.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use squad_builder_core::error::CoreError;
use squad_builder_core::position::Position;
use squad_builder_core::types::DbId;

use super::empty_as_none;

/// A row from the `players` table.
///
/// `position` and `alternate_position` hold [`Position`] codes; the column
/// CHECK constraints guarantee they parse.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Player {
    pub id: DbId,
    pub name: String,
    pub nationality_id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub market_value: f64,
    pub position: String,
    pub alternate_position: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlayer {
    pub name: String,
    pub nationality_id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub market_value: f64,
    pub position: Position,
    pub alternate_position: Option<Position>,
}

pub type UpdatePlayer = CreatePlayer;

/// Optional predicates for `GET /players_filtered/`. All supplied options are ANDed.
///
/// A query option given with an empty value (`?position=`) is treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerFilter {
    /// Case-insensitive substring of the player name.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub name: Option<String>,
    #[serde(default, alias = "nation", deserialize_with = "empty_as_none")]
    pub nationality_id: Option<DbId>,
    #[serde(default, alias = "team", deserialize_with = "empty_as_none")]
    pub team_id: Option<DbId>,
    /// Players whose team takes part in this competition.
    #[serde(default, alias = "competition", deserialize_with = "empty_as_none")]
    pub competition_id: Option<DbId>,
    /// Strict upper bound on market value.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub market_value: Option<f64>,
    /// Matches the primary position or a substring of the alternate position.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub position: Option<Position>,
}

impl PlayerFilter {
    /// `name` with empty strings treated as absent.
    pub fn name_term(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Reject a market value bound that no player value can be compared against.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.market_value {
            Some(v) if !v.is_finite() => Err(CoreError::Validation(format!(
                "market_value must be a finite number, got '{v}'"
            ))),
            _ => Ok(()),
        }
    }
}
