//! # HTTP Server Module
//!
//! Axum server exposing the record store.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/records*` - Record CRUD and search
//! - `/observability/*` - Health and counters

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod record_routes;
pub mod request_log;
pub mod response;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
