//! Nationality entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use squad_builder_core::types::DbId;

/// A row from the `nationalities` table. Names are unique.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Nationality {
    pub id: DbId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateNationality {
    pub name: String,
}

pub type UpdateNationality = CreateNationality;
