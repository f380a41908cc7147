//! Stylesheet assembly.

use std::collections::BTreeMap;
use std::fmt;

use tokensmith_types::{AliasLine, BrandId, FlattenedVariable};

const INDENT: &str = "  ";
const SCOPE: &str = ":root";

/// The three blocks of a generated stylesheet, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Brand,
    Global,
    Aliases,
}

impl Section {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Section::Brand => "Brand tokens",
            Section::Global => "Global tokens",
            Section::Aliases => "Compatibility aliases",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A custom property declared more than once. The last declaration wins in
/// the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub name: String,
    /// Every section declaring the name, in output order.
    pub sections: Vec<Section>,
}

/// A fully computed stylesheet, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedStylesheet {
    pub brand_id: BrandId,
    pub brand_vars: Vec<FlattenedVariable>,
    pub global_vars: Vec<FlattenedVariable>,
    pub aliases: Vec<AliasLine>,
}

impl GeneratedStylesheet {
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("/**\n");
        out.push_str(&format!(" * Design tokens for brand \"{}\".\n", self.brand_id));
        out.push_str(" * Generated by tokensmith. Do not edit by hand.\n");
        out.push_str(" */\n");
        out.push_str(SCOPE);
        out.push_str(" {\n");

        push_section(&mut out, Section::Brand, &self.brand_vars);
        out.push('\n');
        push_section(&mut out, Section::Global, &self.global_vars);
        out.push('\n');
        push_section(&mut out, Section::Aliases, &self.aliases);

        out.push_str("}\n");
        out
    }

    /// Total number of `--name: ...;` declarations.
    #[must_use]
    pub fn declaration_count(&self) -> usize {
        self.brand_vars.len()
            + self.global_vars.len()
            + self.aliases.iter().filter(|line| line.as_alias().is_some()).count()
    }

    /// Names declared more than once, sorted by name.
    #[must_use]
    pub fn collisions(&self) -> Vec<Collision> {
        let mut seen: BTreeMap<&str, Vec<Section>> = BTreeMap::new();
        let brand = self.brand_vars.iter().map(|v| (v.name.as_str(), Section::Brand));
        let global = self.global_vars.iter().map(|v| (v.name.as_str(), Section::Global));
        let aliases = self
            .aliases
            .iter()
            .filter_map(AliasLine::as_alias)
            .map(|record| (record.legacy(), Section::Aliases));

        for (name, section) in brand.chain(global).chain(aliases) {
            seen.entry(name).or_default().push(section);
        }

        seen.into_iter()
            .filter(|(_, sections)| sections.len() > 1)
            .map(|(name, sections)| Collision {
                name: name.to_string(),
                sections,
            })
            .collect()
    }
}

impl fmt::Display for GeneratedStylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn push_section<T: fmt::Display>(out: &mut String, section: Section, lines: &[T]) {
    out.push_str(INDENT);
    out.push_str(&format!("/* {section} */\n"));
    for line in lines {
        out.push_str(INDENT);
        out.push_str(&line.to_string());
        out.push('\n');
    }
}

/// Render brand, global and alias blocks into one stylesheet.
#[must_use]
pub fn assemble(
    brand_vars: &[FlattenedVariable],
    global_vars: &[FlattenedVariable],
    aliases: &[AliasLine],
    brand_id: &BrandId,
) -> String {
    GeneratedStylesheet {
        brand_id: brand_id.clone(),
        brand_vars: brand_vars.to_vec(),
        global_vars: global_vars.to_vec(),
        aliases: aliases.to_vec(),
    }
    .render()
}
