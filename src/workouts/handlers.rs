use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tracing::{info, instrument};

use super::dto::{MessageResponse, WorkoutForm, WorkoutMutationResponse};
use super::repo::Workout;
use super::service::upload_workout_image;
use crate::{auth::jwt::AuthUser, error::ApiError, state::AppState, validation};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", get(list_workouts).post(create_workout))
        .route("/workouts/:id", put(update_workout).delete(delete_workout))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // 20MB
}

#[instrument(skip(state))]
pub async fn list_workouts(
    State(state): State<AppState>,
    AuthUser(who): AuthUser,
) -> Result<Json<Vec<Workout>>, ApiError> {
    let workouts = Workout::list_by_user(&state.db, who.id).await?;
    if workouts.is_empty() {
        return Err(ApiError::NotFound("No workouts found for this user".into()));
    }
    Ok(Json(workouts))
}

#[instrument(skip(state, mp))]
pub async fn create_workout(
    State(state): State<AppState>,
    AuthUser(who): AuthUser,
    mp: Multipart,
) -> Result<(StatusCode, Json<WorkoutMutationResponse>), ApiError> {
    let form = WorkoutForm::from_multipart(mp).await?;
    let workout_type = validation::require_text("workout_type", form.workout_type.as_deref())?;
    let duration = validation::require_positive_text("duration", form.duration.as_deref())?;
    let calories_burned =
        validation::require_positive_text("calories_burned", form.calories_burned.as_deref())?;

    let image_url = match form.image {
        Some(img) => Some(upload_workout_image(&state, who.id, img).await?),
        None => None,
    };

    // The row is always scoped to the authenticated caller.
    let workout = Workout::insert(
        &state.db,
        who.id,
        &workout_type,
        duration,
        calories_burned,
        image_url.as_deref(),
    )
    .await?;

    info!(workout_id = workout.id, user_id = who.id, "workout logged");
    Ok((
        StatusCode::CREATED,
        Json(WorkoutMutationResponse {
            message: "Workout logged successfully".into(),
            image_url,
        }),
    ))
}

#[instrument(skip(state, mp))]
pub async fn update_workout(
    State(state): State<AppState>,
    AuthUser(who): AuthUser,
    Path(raw_id): Path<String>,
    mp: Multipart,
) -> Result<Json<WorkoutMutationResponse>, ApiError> {
    let id = validation::parse_workout_id(&raw_id)?;

    let form = WorkoutForm::from_multipart(mp).await?;
    let workout_type = validation::require_text("workout_type", form.workout_type.as_deref())?;
    let duration = validation::require_positive_text("duration", form.duration.as_deref())?;
    let calories_burned =
        validation::require_positive_text("calories_burned", form.calories_burned.as_deref())?;

    // Missing and not-owned rows are indistinguishable to the caller.
    let existing = Workout::find_owned(&state.db, id, who.id)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("Workout not found or does not belong to this user.".into())
        })?;

    // Keep the old image if no new one was uploaded.
    let image_url = match form.image {
        Some(img) => Some(upload_workout_image(&state, who.id, img).await?),
        None => existing.image_url,
    };

    Workout::update_owned(
        &state.db,
        id,
        who.id,
        &workout_type,
        duration,
        calories_burned,
        image_url.as_deref(),
    )
    .await?;

    info!(workout_id = id, user_id = who.id, "workout updated");
    Ok(Json(WorkoutMutationResponse {
        message: "Workout updated successfully".into(),
        image_url,
    }))
}

#[instrument(skip(state))]
pub async fn delete_workout(
    State(state): State<AppState>,
    AuthUser(who): AuthUser,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = validation::parse_workout_id(&raw_id)?;

    if Workout::find_owned(&state.db, id, who.id).await?.is_none() {
        return Err(ApiError::NotFound(
            "Workout not found or does not belong to this user.".into(),
        ));
    }

    Workout::delete_owned(&state.db, id, who.id).await?;

    info!(workout_id = id, user_id = who.id, "workout deleted");
    Ok(Json(MessageResponse {
        message: "Workout deleted successfully".into(),
    }))
}
