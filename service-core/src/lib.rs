//! service-core: Shared infrastructure for excuse-service.
pub mod error;
pub mod middleware;

pub use axum;
pub use tracing;
