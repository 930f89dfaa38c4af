//! Backoffice Core - Shared error handling, logging and configuration
//!
//! This crate defines the cross-cutting pieces used by every other
//! Backoffice crate: the structured error type, the tracing-based logging
//! setup and the TOML configuration loader.

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
pub use logging::*;
