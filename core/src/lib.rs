//! Design-token compiler.
//!
//! Turns a global token document and a brand token document into one flat
//! stylesheet of CSS custom properties:
//!
//! ```text
//! global doc ──flatten──┐
//! brand doc  ──flatten──┼──assemble──> GeneratedStylesheet ──render──> String
//! brand group ─aliases──┘
//! ```
//!
//! Everything here is pure. Reading documents and writing the result live in
//! `tokensmith-config` and `tokensmith-utils`.

pub mod aliases;
mod flatten;
mod stylesheet;

pub use aliases::{AliasEntry, AliasRegistry, AliasSet, AliasSpec, generate_aliases};
pub use flatten::flatten;
pub use stylesheet::{Collision, GeneratedStylesheet, Section, assemble};

use tokensmith_types::{BrandDocument, BrandId, TokenDocument};
use tracing::{debug, warn};

/// Knobs for a compile run.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Namespace segment prepended to every generated name. Empty by default.
    pub prefix: String,
    pub registry: AliasRegistry,
}

/// Run the whole pipeline: flatten both documents, generate aliases, and
/// collect the result.
///
/// Name collisions across sections are logged, not rejected.
#[must_use]
pub fn compile(
    global: &TokenDocument,
    brand: &BrandDocument,
    brand_id: &BrandId,
    options: &CompileOptions,
) -> GeneratedStylesheet {
    let brand_vars = flatten(brand.root(), &options.prefix);
    let global_vars = flatten(global.root(), &options.prefix);
    let aliases = options
        .registry
        .generate(brand.brand(), brand_id, &options.prefix);

    let sheet = GeneratedStylesheet {
        brand_id: brand_id.clone(),
        brand_vars,
        global_vars,
        aliases: aliases.lines,
    };

    for collision in sheet.collisions() {
        let sections = collision
            .sections
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        warn!(
            name = %collision.name,
            sections = %sections,
            "Custom property declared more than once; the last declaration wins"
        );
    }

    debug!(
        brand = %brand_id,
        brand_tokens = sheet.brand_vars.len(),
        global_tokens = sheet.global_vars.len(),
        declarations = sheet.declaration_count(),
        "Compiled stylesheet"
    );
    sheet
}
