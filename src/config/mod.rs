// src/config/mod.rs

//! Configuration loading and validation for benchseq.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate it into a [`ConfigFile`] (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    DEFAULT_CONFIG_FILE, default_config_path, load_and_validate, load_from_path,
    resolve_config_path,
};
pub use model::{CommandConfig, ConfigFile, ConfigSection, RawConfigFile, ReportSection};
