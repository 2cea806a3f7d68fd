//! Configuration read from `djcheck.toml` or a `pyproject.toml` `[tool.djcheck]` table.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name whose configuration lives under `[tool.djcheck]`.
pub const PYPROJECT: &str = "pyproject.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File discovery settings.
    pub analyzer: AnalyzerConfig,

    /// Per-checker sections, keyed by checker name.
    pub checkers: HashMap<String, CheckerConfig>,
}

impl Config {
    /// Reads a configuration file.
    ///
    /// A file named `pyproject.toml` is read from its `[tool.djcheck]` table
    /// and yields the defaults when the table is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = if path.file_name().is_some_and(|n| n == PYPROJECT) {
            Self::from_pyproject(&content).map(Option::unwrap_or_default)
        } else {
            Self::parse(&content)
        };

        parsed.map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses a `djcheck.toml` document.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the document is malformed or mistyped.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parses the `[tool.djcheck]` table of a `pyproject.toml` document.
    ///
    /// Returns `Ok(None)` when the project does not configure djcheck.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the document is malformed or the table is
    /// mistyped.
    pub fn from_pyproject(content: &str) -> Result<Option<Self>, toml::de::Error> {
        #[derive(Deserialize)]
        struct PyProject {
            #[serde(default)]
            tool: Tools,
        }

        #[derive(Default, Deserialize)]
        struct Tools {
            djcheck: Option<Config>,
        }

        toml::from_str::<PyProject>(content).map(|doc| doc.tool.djcheck)
    }

    /// Checkers run unless their section sets `enabled = false`.
    #[must_use]
    pub fn is_checker_enabled(&self, name: &str) -> bool {
        self.checker(name).map_or(true, CheckerConfig::is_enabled)
    }

    /// Returns the section of checker `name`, if configured.
    #[must_use]
    pub fn checker(&self, name: &str) -> Option<&CheckerConfig> {
        self.checkers.get(name)
    }
}

/// `[analyzer]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Glob patterns, relative to the checked directory, that are skipped.
    pub exclude: Vec<String>,

    /// Skip files ignored by git.
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: ["**/.venv/**", "**/venv/**", "**/node_modules/**"]
                .map(String::from)
                .to_vec(),
            respect_gitignore: true,
        }
    }
}

/// `[checkers.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckerConfig {
    /// `enabled = false` turns the checker off.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Remaining keys, interpreted by the checker.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl CheckerConfig {
    /// Returns false only for an explicit `enabled = false`.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }

    /// Reads a list of strings. Missing keys and non-string entries are skipped.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        self.options
            .get(key)
            .and_then(toml::Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|v| v.as_str().map(String::from))
            .collect()
    }
}

/// Errors loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        /// Configuration file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not a valid configuration.
    #[error("invalid configuration in {}: {source}", path.display())]
    Invalid {
        /// Configuration file.
        path: PathBuf,
        /// TOML error with its location.
        source: toml::de::Error,
    },
}
