// Route definitions for the root and hello endpoints

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Registers `GET /` and `GET /api/hello`.
/// Other methods on these paths get the router's 405, unknown paths its 404.
pub fn home_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::home_handler))
        .route("/api/hello", get(handler::hello_handler))
}
