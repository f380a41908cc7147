//! Project configuration and token document loading for tokensmith.
//!
//! - [`TokensmithConfig`]: optional `tokensmith.toml` overrides
//! - [`ProjectLayout`]: conventional input/output paths
//! - [`load_global`] / [`load_brand`]: strict JSON document loading

mod config;
mod layout;
mod loader;

pub use config::{CONFIG_FILE_NAME, ConfigError, TokensmithConfig};
pub use layout::ProjectLayout;
pub use loader::{LoadError, load_brand, load_global};
