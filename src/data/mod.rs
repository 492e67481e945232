//! Data loading and external configuration
//!
//! Run tunables live in a RON file so a run can be reshaped without
//! recompiling.

pub mod config;
pub mod loader;

pub use config::{ConfigError, GameConfig, Span};
pub use loader::{config_path, export_default_config, load_config, ExportError};
