//! Startup, configuration and shutdown of the simulated backend.

pub mod config;
pub mod storefront_system;
pub mod tracing;

pub use self::config::ServiceConfig;
pub use self::storefront_system::{ShutdownError, StorefrontSystem};
pub use self::tracing::setup_tracing;
