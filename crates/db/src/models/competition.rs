//! Competition entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use squad_builder_core::types::DbId;

/// A row from the `competitions` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Competition {
    pub id: DbId,
    pub name: String,
    pub region: String,
}

/// DTO for creating a competition.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompetition {
    pub name: String,
    pub region: String,
}

pub type UpdateCompetition = CreateCompetition;
