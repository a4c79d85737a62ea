//! asciify-server - HTTP front end for the asciify converter
//!
//! Accepts a multipart image upload on `POST /api/convert` and answers with
//! the ASCII rendering as JSON.

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::{AppState, app, router};
