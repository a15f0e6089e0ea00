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

use squad_builder_db::models::NameFilter;

use crate::error::{AppError, AppResult};

/// Message for filtered lookups that received no usable parameter.
pub(crate) const MISSING_FILTER: &str = "At least one filter parameter is required";

/// The `name` term of a name-only filtered lookup, or 400 when absent.
pub(crate) fn require_name(params: &NameFilter) -> AppResult<&str> {
    params
        .term()
        .ok_or_else(|| AppError::BadRequest(MISSING_FILTER.to_string()))
}
