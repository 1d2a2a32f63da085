// src/config/loader.rs

//! Reading `Benchseq.toml`.
//!
//! A run takes its config from `--config` when given, otherwise from
//! [`DEFAULT_CONFIG_FILE`] in the working directory if that file exists.
//! With neither, the built-in defaults apply and the commands must come
//! from the command line.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;

/// Config file picked up from the working directory without `--config`.
pub const DEFAULT_CONFIG_FILE: &str = "Benchseq.toml";

/// Parse the `[config]`, `[report]` and `[[command]]` tables of `path`.
///
/// Missing tables fall back to their defaults. Nothing is checked beyond
/// TOML syntax and field types: a file with blank commands or a bad
/// `timeout` string still loads here.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading config");
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Parse `path` and check it is runnable.
///
/// An unreadable file gives `IoError`, bad TOML gives `TomlError`, and a
/// report window that doesn't fit in `max_lines`, a blank `cmd` or an
/// unparseable or zero duration gives `ConfigError`.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    ConfigFile::try_from(load_from_path(path)?)
}

/// [`DEFAULT_CONFIG_FILE`] relative to the working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// The config file a run should read, if any.
///
/// An explicit path is returned as is, so a missing `--config` file is
/// reported instead of silently ignored. The default file is only used when
/// it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(default_config_path()).filter(|p| p.is_file()),
    }
}
