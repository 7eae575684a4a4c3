use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use tracing::{debug, info, instrument};

use super::dto::{AdminUpdateWorkout, MessageResponse, SearchParams};
use super::repo::{self, AdminWorkoutRow};
use crate::{auth::jwt::AdminUser, error::ApiError, state::AppState, validation};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/workouts", get(list_workouts))
        .route("/admin/workouts/:id", put(update_workout).delete(delete_workout))
}

#[instrument(skip(state))]
pub async fn list_workouts(
    State(state): State<AppState>,
    AdminUser(who): AdminUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<AdminWorkoutRow>>, ApiError> {
    debug!(admin_id = who.id, "admin workout listing");

    // Wildcards are applied only after the term passes the allow-list.
    let pattern = match params.query.as_deref() {
        Some(raw) => {
            let term = validation::sanitize_search_term(raw)?;
            Some(format!("%{}%", term))
        }
        None => None,
    };

    let rows = repo::list_all(&state.db, pattern.as_deref()).await?;
    if rows.is_empty() {
        return Err(ApiError::NotFound(
            "No workouts found matching the search criteria.".into(),
        ));
    }
    Ok(Json(rows))
}

#[instrument(skip(state, payload))]
pub async fn update_workout(
    State(state): State<AppState>,
    AdminUser(who): AdminUser,
    Path(raw_id): Path<String>,
    Json(payload): Json<AdminUpdateWorkout>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::parse_workout_id(&raw_id)?;

    let workout_type = validation::require_text("workout_type", payload.workout_type.as_deref())?;
    let duration = validation::require_positive("duration", payload.duration)?;
    let calories_burned =
        validation::require_positive("calories_burned", payload.calories_burned)?;

    if repo::find_by_id(&state.db, id).await?.is_none() {
        return Err(ApiError::NotFound("Workout not found".into()));
    }

    repo::update_by_id(&state.db, id, &workout_type, duration, calories_burned).await?;

    info!(workout_id = id, admin_id = who.id, "workout updated by admin");
    Ok(Json(MessageResponse {
        message: "Workout updated successfully".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_workout(
    State(state): State<AppState>,
    AdminUser(who): AdminUser,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::parse_workout_id(&raw_id)?;

    if repo::find_by_id(&state.db, id).await?.is_none() {
        return Err(ApiError::NotFound("Workout not found.".into()));
    }

    let affected = repo::delete_by_id(&state.db, id).await?;
    if affected == 0 {
        return Err(ApiError::Validation(
            "Failed to delete workout. No changes were made.".into(),
        ));
    }

    info!(workout_id = id, admin_id = who.id, "workout deleted by admin");
    Ok(Json(MessageResponse {
        message: "Workout deleted successfully.".into(),
    }))
}
