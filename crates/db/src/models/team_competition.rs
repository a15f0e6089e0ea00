//! Team participation in a competition, keyed by `(team_id, competition_id)`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use squad_builder_core::types::DbId;

/// A row from the `team_competitions` join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct TeamCompetition {
    pub team_id: DbId,
    pub competition_id: DbId,
}

/// DTO for linking a team to a competition. Both ids must reference existing rows.
pub type CreateTeamCompetition = TeamCompetition;
