//! Core domain types for tokensmith.
//!
//! Token trees, brand documents, and the records the compiler emits. This
//! crate does no IO; parsing starts from an already-decoded `serde_json::Value`.

mod brand;
mod output;
mod path;
mod token;

pub use brand::{BRAND_KEY, BrandDocument, BrandId, DEFAULT_BRAND, InvalidBrandId, TokenDocument};
pub use output::{AliasLine, AliasRecord, FlattenedVariable};
pub use path::{TokenPath, variable_name};
pub use token::{Category, MalformedTokens, Token, TokenNode, VALUE_KEY};
