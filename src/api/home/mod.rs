// Root liveness and hello endpoints

pub mod handler;
pub mod routes;

pub use handler::{HELLO_MESSAGE, HOME_MESSAGE};
pub use routes::home_routes;
