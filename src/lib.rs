//! RetailTech product catalog microservice.
//!
//! A single-binary HTTP service exposing CRUD over an in-memory product
//! collection, plus health, Prometheus metrics, and Swagger documentation.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Request error taxonomy and JSON error bodies
//! - [`store`]: Product model and the in-memory store
//! - [`api`]: HTTP routes, handlers, and OpenAPI docs
//! - [`metrics`]: Prometheus request metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use store::ProductStore;
