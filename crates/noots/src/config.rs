// Chunk: docs/chunks/config_file - TOML configuration
//!
//! Startup configuration.
//!
//! Read once from `$NOOTS_CONFIG` or `~/.noots.toml`:
//!
//! ```toml
//! [noots]
//! note_path = "~/notes"
//! editor = "vim"
//! ```
//!
//! Both keys are required. The resulting [`Config`] is handed by reference to
//! whatever needs it; there is no global configuration state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV: &str = "NOOTS_CONFIG";

const CONFIG_FILE_NAME: &str = ".noots.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHome,

    #[error("configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required key `{key}` in {}", path.display())]
    Missing { key: &'static str, path: PathBuf },
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the `.noot` files, with `~/` expanded.
    pub note_path: PathBuf,
    /// Shell command the note path is appended to for external editing.
    pub editor: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    noots: Option<NootsSection>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct NootsSection {
    note_path: Option<String>,
    editor: Option<String>,
}

/// Location of the configuration file.
///
/// `$NOOTS_CONFIG` wins; otherwise `~/.noots.toml`.
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Expands a leading `~` or `~/` against `home`. Other paths pass through.
pub fn expand_tilde(value: &str, home: Option<&Path>) -> PathBuf {
    match (value, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (value, Some(home)) if value.starts_with("~/") => home.join(&value[2..]),
        (value, _) => PathBuf::from(value),
    }
}

impl Config {
    /// Loads the configuration from its default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_file_path().ok_or(ConfigError::NoHome)?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::from_toml_str(&text, path, dirs::home_dir().as_deref())
    }

    /// Parses and validates configuration text.
    ///
    /// `path` is only used in error messages; `home` is used for `~` expansion.
    pub fn from_toml_str(text: &str, path: &Path, home: Option<&Path>) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let section = file.noots.ok_or_else(|| ConfigError::Missing {
            key: "noots",
            path: path.to_path_buf(),
        })?;

        let required = |value: Option<String>, key: &'static str| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::Missing {
                    key,
                    path: path.to_path_buf(),
                })
        };
        let note_path = required(section.note_path, "note_path")?;
        let editor = required(section.editor, "editor")?;

        Ok(Self {
            note_path: expand_tilde(&note_path, home),
            editor,
        })
    }
}
