// Handlers for the root and hello endpoints

use tracing::{debug, instrument};

/// Body returned by `GET /`
pub const HOME_MESSAGE: &str = "✅ Backend is running successfully!";

/// Body returned by `GET /api/hello`
pub const HELLO_MESSAGE: &str = "Hello from Event Management API!";

/// Liveness endpoint, answered as plain text
#[instrument]
pub async fn home_handler() -> &'static str {
    debug!("Home endpoint called");
    HOME_MESSAGE
}

#[instrument]
pub async fn hello_handler() -> &'static str {
    debug!("Hello endpoint called");
    HELLO_MESSAGE
}
