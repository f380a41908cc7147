//! Where token documents live and where the stylesheet goes.

use std::path::{Path, PathBuf};

use tokensmith_types::{BrandId, DEFAULT_BRAND, InvalidBrandId};

use crate::config::TokensmithConfig;

const TOKENS_DIR: &str = "tokens";
const GLOBAL_FILE: &str = "global.json";
const BRANDS_DIR: &str = "brands";
const OUTPUT_FILE: &str = "styles/tokens.css";
const DOCUMENT_EXTENSION: &str = "json";

/// Resolved project paths.
///
/// Relative paths are anchored at the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    tokens_dir: PathBuf,
    global_file: PathBuf,
    brands_dir: PathBuf,
    output: PathBuf,
    default_brand: String,
    prefix: String,
}

impl ProjectLayout {
    /// The conventional layout under `root`.
    #[must_use]
    pub fn conventional(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, &TokensmithConfig::default())
    }

    /// The conventional layout with any overrides from `config` applied.
    #[must_use]
    pub fn with_config(root: impl Into<PathBuf>, config: &TokensmithConfig) -> Self {
        let root = root.into();
        let tokens_dir = root.join(config.tokens_dir.as_deref().unwrap_or(Path::new(TOKENS_DIR)));
        let global_file =
            tokens_dir.join(config.global_file.as_deref().unwrap_or(Path::new(GLOBAL_FILE)));
        let brands_dir =
            tokens_dir.join(config.brands_dir.as_deref().unwrap_or(Path::new(BRANDS_DIR)));
        let output = root.join(config.output.as_deref().unwrap_or(Path::new(OUTPUT_FILE)));

        Self {
            root,
            tokens_dir,
            global_file,
            brands_dir,
            output,
            default_brand: config
                .default_brand
                .clone()
                .unwrap_or_else(|| DEFAULT_BRAND.to_string()),
            prefix: config.prefix.clone().unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn tokens_dir(&self) -> &Path {
        &self.tokens_dir
    }

    #[must_use]
    pub fn global_file(&self) -> &Path {
        &self.global_file
    }

    /// `<brands_dir>/<brand>.json`
    #[must_use]
    pub fn brand_file(&self, brand: &BrandId) -> PathBuf {
        self.brands_dir
            .join(brand.as_str())
            .with_extension(DOCUMENT_EXTENSION)
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The brand to compile: `requested` if given, else the configured default.
    pub fn brand_id(&self, requested: Option<&str>) -> Result<BrandId, InvalidBrandId> {
        BrandId::new(requested.unwrap_or(&self.default_brand))
    }
}
