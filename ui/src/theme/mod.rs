//! # Theme System Module
//!
//! Theming for the PulseBoard console: a static table of named palettes,
//! a process-wide manager with runtime switching, and a change bus for
//! components that restyle themselves.
//!
//! ## Architecture
//!
//! - **[`ThemeManager`]** - Global theme state and runtime switching
//! - **[`ThemeRegistry`]** - Static theme table parsed from embedded TOML
//! - **Theme Validation** - Structural checks over every definition
//!
//! Six palettes ship built in: `default` (blue-violet), `green`, `orange`,
//! `purple`, `business` and `minimal`. Every theme defines the same color
//! and gradient roles; a switch rewrites the `--theme-<role>` and
//! `--theme-gradient-<role>` style variables in one step.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use client::storage::LocalStore;
//! use pulseboard::theme::ThemeManager;
//!
//! // Initialize at application startup; the persisted selection (or the
//! // default) is applied before this returns.
//! ThemeManager::init_global(LocalStore::open_default())?;
//!
//! // Switch at runtime. Unknown keys warn and resolve to the default.
//! ThemeManager::global_switch_theme("green");
//!
//! // Read the applied variables anywhere.
//! let primary = ThemeManager::global_style_variable("--theme-primary");
//! # Ok::<(), pulseboard::error::AppError>(())
//! ```
//!
//! ## Failure semantics
//!
//! Theming never blocks a page render: an unknown key substitutes the
//! default with a warning, and the static accessors fall back to safe
//! values when the manager is unavailable. Only a corrupt built-in theme
//! table is a real error, and that is a build defect.

pub mod loader;
pub mod manager;
pub mod types;
pub mod validation;

pub use loader::{DEFAULT_THEME_KEY, ThemeRegistry};
pub use manager::{ThemeEvent, ThemeManager};
pub use types::{Theme, ThemeColors, ThemeGradients};
