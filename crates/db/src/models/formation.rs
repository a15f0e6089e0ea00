//! Formation entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use squad_builder_core::types::DbId;

/// A row from the `formations` table (e.g. "4-3-3").
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Formation {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFormation {
    pub name: String,
    pub description: Option<String>,
}

pub type UpdateFormation = CreateFormation;
