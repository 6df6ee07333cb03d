//! # PulseBoard UI Library
//!
//! Presentation layer for the PulseBoard well-being analysis console.
//! Renders nothing itself; it owns the state and logic that any front-end
//! shell would bind to: themes, navigation, configuration and input
//! validation, on top of the session and transport layer in
//! `pulseboard-client`.
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and typed access
//! - [`error`] - Error types for the presentation layer
//! - [`logger`] - Logging setup
//! - [`menu`] - Navigation tree and role-based filtering
//! - [`theme`] - Theme registry, switching and style variables
//! - [`utils`] - Formatting and call-rate limiting helpers
//! - [`validation`] - Input validation (email, phone, ID number)
//!
//! This library interface enables integration testing by providing access
//! to internal modules.

pub mod config;
pub mod error;
pub mod logger;
pub mod menu;
pub mod theme;
pub mod utils;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use error::{AppError, AppResult};

// Re-export validation trait for broader use
pub use validation::Validator;

pub use theme::ThemeManager;
