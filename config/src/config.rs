//! Optional `tokensmith.toml` project configuration.
//!
//! Every field overrides one layout convention. A project without the file
//! uses the conventions unchanged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "tokensmith.toml";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokensmithConfig {
    /// Directory holding token documents. Default: `tokens`.
    pub tokens_dir: Option<PathBuf>,
    /// Global document, relative to `tokens_dir`. Default: `global.json`.
    pub global_file: Option<PathBuf>,
    /// Brand documents directory, relative to `tokens_dir`. Default: `brands`.
    pub brands_dir: Option<PathBuf>,
    /// Generated stylesheet path. Default: `styles/tokens.css`.
    pub output: Option<PathBuf>,
    /// Brand compiled when none is given. Default: `echo`.
    pub default_brand: Option<String>,
    /// Namespace segment for every generated name. Default: none.
    pub prefix: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl TokensmithConfig {
    /// Load `tokensmith.toml` from `root`. `Ok(None)` when the file is absent.
    pub fn load(root: &Path) -> Result<Option<Self>, ConfigError> {
        let path = Self::path(root);
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match Self::parse(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded project config");
                Ok(Some(config))
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }
}
