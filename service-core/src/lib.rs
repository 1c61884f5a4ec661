//! service-core: Shared infrastructure for the commission backend.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
