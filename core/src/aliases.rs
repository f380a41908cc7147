//! Backward-compatibility aliases.
//!
//! Brand migrations rename tokens; consumers still referencing the old names
//! keep working through `--old: var(--new);` redirections. Each known brand
//! has a declarative [`AliasSpec`] in the [`AliasRegistry`]. Adding a brand
//! means adding a table here, not a new code path.

use tokensmith_types::{AliasLine, AliasRecord, BrandId, Category, TokenPath};
use tracing::{debug, warn};

/// One row of an alias table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasEntry {
    /// Section header; only emitted if an alias below it survives.
    Section(&'static str),
    Alias {
        /// Legacy custom property name, including `--`.
        legacy: &'static str,
        /// Dotted path of the canonical token from the document root.
        canonical: &'static str,
        /// Dotted path that must exist inside the brand group, if any.
        requires: Option<&'static str>,
    },
}

impl AliasEntry {
    pub const fn guarded(
        legacy: &'static str,
        canonical: &'static str,
        requires: &'static str,
    ) -> Self {
        Self::Alias {
            legacy,
            canonical,
            requires: Some(requires),
        }
    }

    pub const fn always(legacy: &'static str, canonical: &'static str) -> Self {
        Self::Alias {
            legacy,
            canonical,
            requires: None,
        }
    }
}

/// The alias table for one brand.
#[derive(Debug, Clone, Copy)]
pub struct AliasSpec {
    pub brand: &'static str,
    pub entries: &'static [AliasEntry],
}

const ECHO: AliasSpec = AliasSpec {
    brand: "echo",
    entries: &[
        AliasEntry::Section("Echo legacy palette"),
        AliasEntry::guarded("--primary-color", "brand.primary.main", "primary.main"),
        AliasEntry::guarded("--primary-color-light", "brand.primary.light", "primary.light"),
        AliasEntry::guarded("--primary-color-dark", "brand.primary.dark", "primary.dark"),
        AliasEntry::guarded("--secondary-color", "brand.secondary.main", "secondary.main"),
        AliasEntry::guarded(
            "--secondary-color-light",
            "brand.secondary.light",
            "secondary.light",
        ),
        AliasEntry::Section("Echo legacy shades"),
        AliasEntry::guarded("--blue-100", "brand.primary.100", "primary.100"),
        AliasEntry::guarded("--blue-200", "brand.primary.200", "primary.200"),
        AliasEntry::guarded("--blue-300", "brand.primary.300", "primary.300"),
        AliasEntry::guarded("--blue-400", "brand.primary.400", "primary.400"),
        AliasEntry::guarded("--blue-500", "brand.primary.500", "primary.500"),
        AliasEntry::guarded("--blue-600", "brand.primary.600", "primary.600"),
        AliasEntry::guarded("--blue-700", "brand.primary.700", "primary.700"),
        AliasEntry::guarded("--blue-800", "brand.primary.800", "primary.800"),
        AliasEntry::guarded("--blue-900", "brand.primary.900", "primary.900"),
        AliasEntry::Section("Echo legacy typography"),
        AliasEntry::guarded(
            "--font-family-base",
            "brand.typography.font-family",
            "typography.font-family",
        ),
        AliasEntry::guarded(
            "--font-family-heading",
            "brand.typography.heading-font-family",
            "typography.heading-font-family",
        ),
    ],
};

const ATLAS: AliasSpec = AliasSpec {
    brand: "atlas",
    entries: &[
        AliasEntry::Section("Atlas legacy palette"),
        AliasEntry::guarded(
            "--primary-color",
            "brand.primary.sky-blue.500",
            "primary.sky-blue.500",
        ),
        AliasEntry::guarded(
            "--primary-color-light",
            "brand.primary.sky-blue.300",
            "primary.sky-blue.300",
        ),
        AliasEntry::guarded(
            "--primary-color-dark",
            "brand.primary.sky-blue.700",
            "primary.sky-blue.700",
        ),
        AliasEntry::guarded("--secondary-color", "brand.secondary.main", "secondary.main"),
        AliasEntry::Section("Atlas legacy accents"),
        AliasEntry::guarded(
            "--accent-sky",
            "brand.primary.sky-blue.500",
            "primary.sky-blue.500",
        ),
        AliasEntry::guarded(
            "--accent-yellow",
            "brand.primary.yellow.500",
            "primary.yellow.500",
        ),
        AliasEntry::guarded(
            "--accent-seafoam",
            "brand.primary.seafoam.500",
            "primary.seafoam.500",
        ),
        AliasEntry::Section("Atlas legacy typography"),
        AliasEntry::guarded(
            "--font-family-base",
            "brand.typography.font-family",
            "typography.font-family",
        ),
    ],
};

const BUILTIN: &[AliasSpec] = &[ECHO, ATLAS];

const COMMON: &[AliasEntry] = &[
    AliasEntry::Section("Common"),
    AliasEntry::always("--white", "base.white"),
    AliasEntry::always("--black", "base.black"),
    AliasEntry::always("--gray-100", "base.neutral.100"),
    AliasEntry::always("--gray-200", "base.neutral.200"),
    AliasEntry::always("--gray-300", "base.neutral.300"),
    AliasEntry::always("--gray-400", "base.neutral.400"),
    AliasEntry::always("--gray-500", "base.neutral.500"),
    AliasEntry::always("--gray-600", "base.neutral.600"),
    AliasEntry::always("--gray-700", "base.neutral.700"),
    AliasEntry::always("--gray-800", "base.neutral.800"),
    AliasEntry::always("--gray-900", "base.neutral.900"),
];

/// Brand id to alias table, plus the shared table every brand gets.
#[derive(Debug, Clone, Copy)]
pub struct AliasRegistry {
    specs: &'static [AliasSpec],
    common: &'static [AliasEntry],
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasRegistry {
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            specs: BUILTIN,
            common: COMMON,
        }
    }

    #[must_use]
    pub const fn new(specs: &'static [AliasSpec], common: &'static [AliasEntry]) -> Self {
        Self { specs, common }
    }

    #[must_use]
    pub fn lookup(&self, brand_id: &BrandId) -> Option<&'static AliasSpec> {
        self.specs.iter().find(|spec| spec.brand == brand_id.as_str())
    }

    pub fn known_brands(&self) -> impl Iterator<Item = &'static str> {
        self.specs.iter().map(|spec| spec.brand)
    }

    /// Brand-specific aliases (if the brand is registered) followed by the
    /// common aliases.
    #[must_use]
    pub fn generate(&self, brand: &Category, brand_id: &BrandId, prefix: &str) -> AliasSet {
        let mut lines = Vec::new();
        let spec = self.lookup(brand_id);
        match spec {
            Some(spec) => emit(spec.entries, brand, prefix, &mut lines),
            None => warn!(
                brand = %brand_id,
                known = ?self.known_brands().collect::<Vec<_>>(),
                "No compatibility aliases registered for brand; emitting common aliases only"
            ),
        }
        emit(self.common, brand, prefix, &mut lines);
        AliasSet {
            lines,
            known_brand: spec.is_some(),
        }
    }
}

/// Generated alias lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasSet {
    pub lines: Vec<AliasLine>,
    /// Whether the brand had a registered table.
    pub known_brand: bool,
}

impl AliasSet {
    pub fn records(&self) -> impl Iterator<Item = &AliasRecord> {
        self.lines.iter().filter_map(AliasLine::as_alias)
    }
}

/// Aliases for `brand_id` from the built-in registry.
#[must_use]
pub fn generate_aliases(brand: &Category, brand_id: &BrandId, prefix: &str) -> AliasSet {
    AliasRegistry::builtin().generate(brand, brand_id, prefix)
}

fn emit(entries: &[AliasEntry], brand: &Category, prefix: &str, lines: &mut Vec<AliasLine>) {
    let mut pending_section = None;
    for entry in entries {
        match *entry {
            AliasEntry::Section(label) => pending_section = Some(label),
            AliasEntry::Alias {
                legacy,
                canonical,
                requires,
            } => {
                if let Some(requires) = requires
                    && brand.lookup(&TokenPath::parse(requires)).is_none()
                {
                    debug!(legacy, requires, "Skipping alias; brand has no such token");
                    continue;
                }
                if let Some(label) = pending_section.take() {
                    lines.push(AliasLine::Section(label.to_string()));
                }
                let canonical = TokenPath::parse(canonical).variable_name(prefix);
                lines.push(AliasLine::Alias(AliasRecord::new(legacy, canonical)));
            }
        }
    }
}
