// Start of file: /src/middlewares/request_logger.rs

use std::{
    convert::Infallible,
    time::Instant,
};
use axum::{
    body::Body,
    http::{Method, Request, Response},
    middleware::Next,
};
use tracing::{info, warn};

/*
    * Records when the request arrived, runs the rest of the stack and
    * emits one log line with method, path, status and elapsed time.
*/
pub async fn request_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let start_time: Instant = Instant::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let response: Response<Body> = next.run(req).await;

    let duration_ms: u64 = start_time.elapsed().as_millis() as u64;
    let status: u16 = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(%method, %path, status, duration_ms, "request failed");
    } else {
        info!(%method, %path, status, duration_ms, "request served");
    }

    Ok(response)
}

// End of file: /src/middlewares/request_logger.rs
