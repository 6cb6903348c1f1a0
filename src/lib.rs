//! Tower wind load calculator and synthetic weather forecast.
//!
//! The engine and its collaborators live in workspace crates; this facade re-exports
//! them so the command-line front-ends (and any future GUI or web front-end) share
//! one entry point.

pub mod charts;

pub use tower_config as config;
pub use tower_core as common;
pub use tower_export as export;
pub use tower_forecast as forecast;
pub use tower_windload as windload;
