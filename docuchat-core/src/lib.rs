//! DocuChat Core - shared data structures and infrastructure
//!
//! This crate defines the data model, error handling, configuration and
//! logging used across the DocuChat client.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;

// Re-export commonly used external types
pub use tracing;
