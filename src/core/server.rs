// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
    serve,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};
use tracing::info;

use crate::api::home::home_routes;
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::core::logging::init_tracing;
use crate::middlewares::request_logger::request_logger;
use crate::utils::error_handler::handle_global_error;

/// Printed to stdout once the listener is bound
pub const STARTUP_MESSAGE: &str = "Mani Project is running successfully!";

/// Creates and configures the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    // Add new routes here
    let routes: Router<AppState> = Router::new()
        .merge(home_routes());

    with_middleware(routes, state)
}

/// Wraps `routes` in the logging, error, timeout and body-limit layers
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Router {
    let env: &EnvironmentVariables = &state.environment;

    routes
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_logger))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
                .layer(DefaultBodyLimit::max(env.max_request_body_size))
        )
        .with_state(state)
}

/// Sets up the TCP listener from an inherited socket or binds to a new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd
        .take_tcp_listener(0)
        .context("Failed to take inherited TCP listener")?
    {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            info!("Using inherited TCP listener");
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = env.bind_address();
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install TERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}

/// Boots the whole service: logging, config, router, listener, serve
pub async fn run() -> Result<()> {
    init_tracing();

    let state: AppState = AppState::from_env()?;
    info!(environment = %state.environment.environment, "Configuration loaded");

    let listener: TcpListener = setup_listener(&state.environment).await?;
    let app: Router = create_app(state);

    println!("{STARTUP_MESSAGE}");
    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}
