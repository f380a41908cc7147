//! `tokensmith.toml` overrides.

use crate::common::{Project, stderr, stdout};

#[test]
fn config_moves_output_and_default_brand() {
    let project = Project::minimal();
    project.write(
        "tokens/brands/nova.json",
        r##"{ "brand": { "accent": { "$value": "#FF00AA" } } }"##,
    );
    project.write(
        "tokensmith.toml",
        r#"
output = "dist/brand.css"
default_brand = "nova"
"#,
    );

    let output = project.run(&[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("dist/brand.css"));
    assert!(project.read("dist/brand.css").contains("  --brand-accent: #FF00AA;\n"));
    assert!(!project.path("styles/tokens.css").exists());
}

#[test]
fn config_relocates_token_documents() {
    let project = Project::new();
    project.write(
        "design/foundation.json",
        r##"{ "space": { "sm": { "$value": "4px" } } }"##,
    );
    project.write(
        "design/themes/echo.json",
        r##"{ "brand": { "primary": { "main": { "$value": "#2F42BD" } } } }"##,
    );
    project.write(
        "tokensmith.toml",
        r#"
tokens_dir = "design"
global_file = "foundation.json"
brands_dir = "themes"
prefix = "ds"
"#,
    );

    let output = project.run(&["echo"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let css = project.stylesheet();
    assert!(css.contains("  --ds-space-sm: 4px;\n"));
    assert!(css.contains("  --ds-brand-primary-main: #2F42BD;\n"));
    assert!(css.contains("  --primary-color: var(--ds-brand-primary-main);\n"));
    assert!(css.contains("  --white: var(--ds-base-white);\n"));
}

#[test]
fn broken_config_is_fatal() {
    let project = Project::minimal();
    project.write("tokensmith.toml", "output = [");

    let output = project.run(&[]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("failed to parse"), "stderr: {err}");
    assert!(err.contains("tokensmith.toml"), "stderr: {err}");
    assert!(!project.path("styles/tokens.css").exists());
}

#[test]
fn requested_brand_overrides_configured_default() {
    let project = Project::minimal();
    project.write("tokensmith.toml", "default_brand = \"nova\"\n");

    let output = project.run(&["echo"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("brand \"echo\""));
}
