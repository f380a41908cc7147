//! tokensmith CLI - compile one brand's design tokens into a stylesheet.
//!
//! ```text
//! tokensmith [BRAND]
//!   tokens/global.json ─┐
//!   tokens/brands/<BRAND>.json ─┴─> compile ─> styles/tokens.css
//! ```
//!
//! The stylesheet is rendered in memory and written in one atomic step, so a
//! failed run leaves any previous output untouched.

use std::env;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tokensmith_config::{ProjectLayout, TokensmithConfig, load_brand, load_global};
use tokensmith_core::{CompileOptions, compile};
use tokensmith_types::BrandId;
use tokensmith_utils::atomic_write;

#[derive(Parser)]
#[command(name = "tokensmith", version)]
#[command(about = "Compile design tokens into CSS custom properties")]
struct Cli {
    /// Brand to compile; defaults to the project's default brand ("echo")
    brand: Option<String>,
}

/// What a successful run produced.
struct Generated {
    brand_id: BrandId,
    output: PathBuf,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the result line; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .with(env_filter)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version also arrive here; they are not failures.
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let root = match env::current_dir() {
        Ok(root) => root,
        Err(err) => {
            eprintln!("error: failed to determine the current directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&root, cli.brand.as_deref()) {
        Ok(generated) => {
            let shown = generated
                .output
                .strip_prefix(&root)
                .unwrap_or(&generated.output);
            println!(
                "Generated {} for brand \"{}\"",
                shown.display(),
                generated.brand_id
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(root: &Path, requested_brand: Option<&str>) -> Result<Generated> {
    let config = TokensmithConfig::load(root)?.unwrap_or_default();
    let layout = ProjectLayout::with_config(root, &config);
    let brand_id = layout.brand_id(requested_brand)?;

    let global = load_global(layout.global_file())?;
    let brand = load_brand(&layout.brand_file(&brand_id))?;

    let options = CompileOptions {
        prefix: layout.prefix().to_string(),
        ..CompileOptions::default()
    };
    let sheet = compile(&global, &brand, &brand_id, &options);
    let css = sheet.render();

    atomic_write(layout.output(), css.as_bytes())
        .with_context(|| format!("failed to write {}", layout.output().display()))?;

    tracing::info!(
        brand = %brand_id,
        path = %layout.output().display(),
        declarations = sheet.declaration_count(),
        "Stylesheet written"
    );

    Ok(Generated {
        brand_id,
        output: layout.output().to_path_buf(),
    })
}
