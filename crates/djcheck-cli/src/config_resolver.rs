//! Finding the configuration that governs a checked path.
//!
//! `--config` wins outright. Otherwise the directories from the checked path
//! up to the filesystem root are searched, nearest first. Each directory is
//! asked for `djcheck.toml`, then `.djcheck.toml`, then a `pyproject.toml`
//! carrying a `[tool.djcheck]` table. The global `config.toml`
//! (`$DJCHECK_CONFIG_DIR` or `~/.djcheck/`) is the last resort.

use anyhow::{Context, Result};
use djcheck_core::{Config, PYPROJECT};
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed with `--config`.
    Explicit(PathBuf),
    /// A `djcheck.toml` or `.djcheck.toml` next to or above the checked path.
    Project(PathBuf),
    /// A `pyproject.toml` with a `[tool.djcheck]` table.
    PyProject(PathBuf),
    /// The per-user configuration.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Loads the configuration this source points at.
    pub fn load(&self) -> Result<Config> {
        let path = match self {
            Self::Default => return Ok(Config::default()),
            Self::Explicit(p) | Self::Project(p) | Self::PyProject(p) | Self::Global(p) => p,
        };

        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        } else {
            tracing::debug!("Using config: {}", path.display());
        }

        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

const CONFIG_NAMES: &[&str] = &["djcheck.toml", ".djcheck.toml"];

/// Resolves the configuration for `checked`, a file or a directory.
#[must_use]
pub fn resolve(checked: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(checked, explicit, global_config_dir())
}

fn resolve_inner(checked: &Path, explicit: Option<&Path>, global_dir: Option<PathBuf>) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let start = search_start(checked);
    if let Some(found) = start.ancestors().find_map(config_in) {
        return found;
    }

    global_dir
        .map(|dir| dir.join("config.toml"))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// The absolute directory the upward search begins in.
fn search_start(checked: &Path) -> PathBuf {
    let dir = if checked.is_file() {
        checked.parent().unwrap_or(Path::new(""))
    } else {
        checked
    };
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf())
}

fn config_in(dir: &Path) -> Option<ConfigSource> {
    if let Some(found) = CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        return Some(ConfigSource::Project(found));
    }

    let pyproject = dir.join(PYPROJECT);
    let content = std::fs::read_to_string(&pyproject).ok()?;
    // A malformed pyproject still claims the directory so that loading
    // reports the error instead of silently falling through.
    match Config::from_pyproject(&content) {
        Ok(None) => None,
        Ok(Some(_)) | Err(_) => Some(ConfigSource::PyProject(pyproject)),
    }
}

/// Returns the global config directory: `$DJCHECK_CONFIG_DIR`, else `~/.djcheck/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("DJCHECK_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".djcheck"))
}
