use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        claims::Role,
        dto::{AuthResponse, LoginRequest, MessageResponse, PublicUser, RegisterRequest},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    state::AppState,
    validation,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (name, email, password) = match (payload.name, payload.email, payload.password) {
        (Some(n), Some(e), Some(p)) if !n.is_empty() && !e.is_empty() && !p.is_empty() => {
            (n, e, p)
        }
        _ => return Err(ApiError::Validation("All fields are required".into())),
    };

    if !validation::is_valid_email(&email) {
        warn!("register with invalid email format");
        return Err(ApiError::Validation("Invalid email format".into()));
    }
    if password.len() < 6 {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters long".into(),
        ));
    }

    if User::find_by_email(&state.db, &email).await?.is_some() {
        return Err(ApiError::Conflict("Email is already registered".into()));
    }

    let hash = hash_password(&password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        ApiError::Internal(e)
    })?;

    let user = User::create(&state.db, &name, &email, &hash).await?;

    info!(user_id = user.id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".into(),
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = match (payload.email, payload.password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => return Err(ApiError::Validation("Email and password are required".into())),
    };

    if !validation::is_valid_email(&email) {
        return Err(ApiError::Validation("Invalid email format".into()));
    }

    // Unknown email and wrong password get the same response, so a caller
    // cannot probe which accounts exist.
    let user = User::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| {
            warn!("login with unknown email");
            ApiError::Authentication("Invalid email or password".into())
        })?;

    let ok = verify_password(&password, &user.password).map_err(|e| {
        error!(error = %e, user_id = user.id, "verify_password failed");
        ApiError::Internal(e)
    })?;
    if !ok {
        warn!(user_id = user.id, "login with invalid password");
        return Err(ApiError::Authentication("Invalid email or password".into()));
    }

    let role = Role::from(user.role.as_str());
    let keys = JwtKeys::from_ref(&state);
    let token = keys.sign(user.id, role).map_err(|e| {
        error!(error = %e, "jwt sign failed");
        ApiError::Internal(e)
    })?;

    info!(user_id = user.id, "user logged in");
    Ok(Json(AuthResponse {
        token,
        user: PublicUser {
            id: user.id,
            name: user.name,
            email: user.email,
            role,
        },
    }))
}
