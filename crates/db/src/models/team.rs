//! Team entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use squad_builder_core::types::DbId;

/// A row from the `teams` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Team {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeam {
    pub name: String,
}

pub type UpdateTeam = CreateTeam;
