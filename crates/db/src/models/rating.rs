//! Rating entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use squad_builder_core::types::{DbId, Timestamp};

use super::empty_as_none;

/// A user's score for a squad. `rating` is constrained to `0..=5`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub user_id: DbId,
    pub squad_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRating {
    pub user_id: DbId,
    pub squad_id: DbId,
    pub rating: i32,
    pub comment: Option<String>,
}

pub type UpdateRating = CreateRating;

/// Query parameters for `GET /ratings_filtered/`.
#[derive(Debug, Default, Deserialize)]
pub struct RatingFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub squad_id: Option<DbId>,
}
