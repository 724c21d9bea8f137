// Library root for the Event Management API service

pub mod api;
pub mod config;
pub mod core;
pub mod middlewares;
pub mod utils;

pub use crate::api::home::{HELLO_MESSAGE, HOME_MESSAGE};
pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::{create_app, run, setup_listener, with_middleware, STARTUP_MESSAGE};
