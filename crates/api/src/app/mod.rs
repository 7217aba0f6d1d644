//! HTTP API application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store loading and query services
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Loads the inventory store once; a malformed dataset fails the build.
pub fn build_app() -> anyhow::Result<Router> {
    let services = Arc::new(services::build_services()?);

    Ok(routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new()))
}
