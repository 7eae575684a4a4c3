mod dto;
pub mod handlers;
pub mod repo;
mod service;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
