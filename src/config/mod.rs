// src/config/mod.rs

//! Configuration loading, merging and validation for pollrun.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the resolved settings types
//!   (`model.rs`).
//! - Load/save a config file on disk (`loader.rs`).
//! - Validate resolved settings before the watch starts (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_from_path, save_to_path};
pub use model::{
    ConfigFile, DisplayOptions, FilterConfig, RunConfig, resolve, DEFAULT_POLL_INTERVAL_MS,
    MIN_POLL_INTERVAL_MS,
};
pub use validate::validate_settings;
