//! SquadPlayer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use squad_builder_core::types::DbId;

/// Assignment of a player to a slot within a squad.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct SquadPlayer {
    pub id: DbId,
    pub squad_id: DbId,
    pub player_id: DbId,
    /// Slot label inside the formation (free text, e.g. `"LCB"`).
    pub position: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSquadPlayer {
    pub squad_id: DbId,
    pub player_id: DbId,
    pub position: String,
}

pub type UpdateSquadPlayer = CreateSquadPlayer;
