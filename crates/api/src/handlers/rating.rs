//! Handlers for the `/ratings` resource.
//!
//! Rating values are range-checked here so out-of-range input is a 400
//! rather than a constraint violation from the store.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use squad_builder_core::rating::validate_rating;
use squad_builder_core::types::DbId;
use squad_builder_db::models::rating::{CreateRating, Rating, RatingFilter, UpdateRating};
use squad_builder_db::models::Deleted;
use squad_builder_db::repositories::RatingRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::MISSING_FILTER;
use crate::response::Listing;
use crate::state::AppState;

/// POST /ratings/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRating>,
) -> AppResult<(StatusCode, Json<Rating>)> {
    validate_rating(input.rating)?;
    let rating = RatingRepo::create(&state.pool, &input).await?;
    tracing::info!(
        rating_id = rating.id,
        squad_id = rating.squad_id,
        rating = rating.rating,
        "Rating created",
    );
    Ok((StatusCode::CREATED, Json(rating)))
}

/// GET /ratings/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Rating>>> {
    let ratings = RatingRepo::list(&state.pool).await?;
    Ok(Json(Listing::new("ratings", ratings)))
}

/// GET /ratings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Rating>> {
    let rating = RatingRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(rating))
}

/// GET /ratings_filtered/?squad_id=
pub async fn filtered(
    State(state): State<AppState>,
    Query(params): Query<RatingFilter>,
) -> AppResult<Json<Vec<Rating>>> {
    let squad_id = params
        .squad_id
        .ok_or_else(|| AppError::BadRequest(MISSING_FILTER.to_string()))?;
    let ratings = RatingRepo::find_by_squad(&state.pool, squad_id).await?;
    Ok(Json(ratings))
}

/// PUT /ratings/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRating>,
) -> AppResult<Json<Rating>> {
    validate_rating(input.rating)?;
    let rating = RatingRepo::update(&state.pool, id, &input).await?;
    tracing::info!(rating_id = id, "Rating updated");
    Ok(Json(rating))
}

/// DELETE /ratings/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Deleted>> {
    let deleted = RatingRepo::delete(&state.pool, id).await?;
    tracing::info!(rating_id = id, "Rating deleted");
    Ok(Json(deleted))
}
