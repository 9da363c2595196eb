//! HTTP surface
//!
//! A single catch-all GET route: every request path is mapped onto the
//! workspace tree and answered with that directory's container description.

mod handler;
mod server;

pub use handler::{container_handler, ApiError, AppState};
pub use server::HttpServer;
