//! Reading token documents from disk.
//!
//! Loading is strict: a missing file, invalid JSON, or a structural problem
//! each abort the run with the offending path.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tokensmith_types::{BrandDocument, MalformedTokens, TokenDocument};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("token document not found: {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to read token document {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in token document {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid token document {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: MalformedTokens,
    },
}

impl LoadError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Missing { path }
            | LoadError::Read { path, .. }
            | LoadError::Parse { path, .. }
            | LoadError::Malformed { path, .. } => path,
        }
    }
}

/// Load the global foundation document.
pub fn load_global(path: &Path) -> Result<TokenDocument, LoadError> {
    let value = read_json(path)?;
    let document = TokenDocument::from_json(&value).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        tokens = document.root().leaf_count(),
        "Loaded global tokens"
    );
    Ok(document)
}

/// Load a brand document (`{ "brand": { ... } }`).
pub fn load_brand(path: &Path) -> Result<BrandDocument, LoadError> {
    let value = read_json(path)?;
    let document = BrandDocument::from_json(&value).map_err(|source| LoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        tokens = document.root().leaf_count(),
        "Loaded brand tokens"
    );
    Ok(document)
}

fn read_json(path: &Path) -> Result<Value, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            LoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
