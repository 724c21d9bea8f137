//! tests/mod.rs
//! A shared test helper to spawn the app on an ephemeral port.

use event_management_api::{create_app, setup_listener, AppState, EnvironmentVariables};

use axum::{serve, Router};
use tokio::net::TcpListener;

/// Spawns the app on a random unused port and returns its base URL.
#[allow(dead_code)]
pub async fn spawn_app() -> String {
    // * Loopback only, port 0 lets the OS pick a free port.
    let env: EnvironmentVariables = EnvironmentVariables {
        host: "127.0.0.1".into(),
        port: 0,
        ..EnvironmentVariables::default()
    };

    // * Build the application exactly the way the binary does.
    let app: Router = create_app(AppState::new(env.clone()));

    let listener: TcpListener = setup_listener(&env)
        .await
        .expect("Failed to bind random port");

    let addr: std::net::SocketAddr = listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
