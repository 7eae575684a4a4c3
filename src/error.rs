use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Error taxonomy shared by every handler boundary. Each variant carries the
/// message shown to the client; internal causes stay in the logs.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    Authorization(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Store(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::Authorization(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            // Never echo internal causes to the caller.
            ApiError::Internal(_) => "Internal server error. Please try again later.".into(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return ApiError::NotFound("Resource not found".into());
        }
        if let sqlx::Error::Database(db) = &err {
            if let Some(mapped) = db.code().as_deref().and_then(translate_sqlstate) {
                return mapped;
            }
        }
        error!(error = %err, "database error");
        ApiError::Store("Internal server error. Please try again later.".into())
    }
}

/// Curated SQLSTATE translation: a handful of store failures get a specific
/// status and message, everything else collapses to a generic 500.
pub(crate) fn translate_sqlstate(code: &str) -> Option<ApiError> {
    match code {
        // syntax_error
        "42601" => Some(ApiError::Validation("Invalid database query syntax.".into())),
        // insufficient_privilege
        "42501" => Some(ApiError::Store(
            "Database access denied. Check credentials.".into(),
        )),
        // undefined_column
        "42703" => Some(ApiError::Store("Invalid field in database query.".into())),
        // foreign_key_violation, on both writes and parent deletes
        "23503" => Some(ApiError::Validation("Invalid foreign key reference.".into())),
        // unique_violation
        "23505" => Some(ApiError::Conflict("Duplicate entry detected.".into())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_variant() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Authentication("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Authorization("x".into()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(ApiError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Store("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn sqlstate_translation_table() {
        let syntax = translate_sqlstate("42601").expect("mapped");
        assert_eq!(syntax.status(), StatusCode::BAD_REQUEST);
        assert_eq!(syntax.to_string(), "Invalid database query syntax.");

        let denied = translate_sqlstate("42501").expect("mapped");
        assert_eq!(denied.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bad_field = translate_sqlstate("42703").expect("mapped");
        assert_eq!(bad_field.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let fk = translate_sqlstate("23503").expect("mapped");
        assert_eq!(fk.status(), StatusCode::BAD_REQUEST);

        let dup = translate_sqlstate("23505").expect("mapped");
        assert_eq!(dup.status(), StatusCode::CONFLICT);
        assert_eq!(dup.to_string(), "Duplicate entry detected.");

        assert!(translate_sqlstate("40001").is_none());
    }

    #[tokio::test]
    async fn response_uses_json_error_envelope() {
        let resp = ApiError::Conflict("Email is already registered".into()).into_response();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        let parsed: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(parsed["error"], "Email is already registered");
    }

    #[tokio::test]
    async fn internal_cause_is_not_echoed() {
        let resp = ApiError::Internal(anyhow::anyhow!("connection refused at 10.0.0.5")).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        let parsed: serde_json::Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(parsed["error"], "Internal server error. Please try again later.");
    }
}
