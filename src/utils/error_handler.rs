// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use tracing::warn;

/// Maps errors raised by the middleware stack to HTTP responses
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // 413 if the body was too large
    if let Some(e) = find_cause::<LengthLimitError>(&*err) {
        warn!("Rejected oversized request body: {e}");
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            format!("Request body too large: {e}"),
        );
    }

    // 408 if the request took too long
    if let Some(e) = find_cause::<Elapsed>(&*err) {
        warn!("Request timed out: {e}");
        return (
            StatusCode::REQUEST_TIMEOUT,
            format!("Request timeout: {e}"),
        );
    }

    warn!("Unhandled middleware error: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Unhandled internal error: {err}"),
    )
}

/// Finds an error of type `T`, starting at `err` itself and following its source chain
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    let mut current: Option<&'a (dyn Error + 'static)> = Some(err);

    while let Some(e) = current {
        if let Some(typed) = e.downcast_ref::<T>() {
            return Some(typed);
        }
        current = e.source();
    }

    None
}
