// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting helpers used by the server setup.
*/

pub mod error_handler;

// End of file: /src/utils/mod.rs
