// Start of file: /src/middlewares/mod.rs

/*
    * Middleware module entry file. Re-exports our custom middlewares:
    * - request_logger
*/

pub mod request_logger;

// End of file: /src/middlewares/mod.rs
