//! End-to-end runs of the `tokensmith` binary.

use insta::assert_snapshot;

use crate::common::{MINIMAL_BRAND, Project, stderr, stdout};

#[test]
fn minimal_brand_round_trip() {
    let project = Project::minimal();
    let output = project.run(&["echo"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim(),
        "Generated styles/tokens.css for brand \"echo\""
    );
    assert_snapshot!(project.stylesheet(), @r#"
    /**
     * Design tokens for brand "echo".
     * Generated by tokensmith. Do not edit by hand.
     */
    :root {
      /* Brand tokens */
      --brand-primary-main: #2F42BD;

      /* Global tokens */
      --base-white: #FFFFFF;

      /* Compatibility aliases */
      /* Echo legacy palette */
      --primary-color: var(--brand-primary-main);
      /* Common */
      --white: var(--base-white);
      --black: var(--base-black);
      --gray-100: var(--base-neutral-100);
      --gray-200: var(--base-neutral-200);
      --gray-300: var(--base-neutral-300);
      --gray-400: var(--base-neutral-400);
      --gray-500: var(--base-neutral-500);
      --gray-600: var(--base-neutral-600);
      --gray-700: var(--base-neutral-700);
      --gray-800: var(--base-neutral-800);
      --gray-900: var(--base-neutral-900);
    }
    "#);
}

#[test]
fn brand_defaults_to_echo() {
    let project = Project::minimal();
    let output = project.run(&[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("brand \"echo\""));
    assert!(project.stylesheet().contains("Design tokens for brand \"echo\"."));
}

#[test]
fn missing_brand_document_fails_without_output() {
    let project = Project::minimal();
    let output = project.run(&["nova"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("token document not found"), "stderr: {err}");
    assert!(err.contains("nova.json"), "stderr: {err}");
    assert!(!project.path("styles/tokens.css").exists());
}

#[test]
fn failed_run_keeps_previous_output() {
    let project = Project::minimal();
    assert!(project.run(&["echo"]).status.success());
    let before = project.stylesheet();

    project.write("tokens/global.json", "{ not json");
    let output = project.run(&["echo"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid JSON"));
    assert_eq!(project.stylesheet(), before);
}

#[test]
fn malformed_document_reports_the_token_path() {
    let project = Project::minimal();
    project.write(
        "tokens/brands/echo.json",
        r#"{ "brand": { "primary": { "main": { "$value": null } } } }"#,
    );
    let output = project.run(&["echo"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("echo.json"), "stderr: {err}");
    assert!(err.contains("brand.primary.main.$value"), "stderr: {err}");
}

#[test]
fn missing_global_document_fails() {
    let project = Project::new();
    project.write("tokens/brands/echo.json", MINIMAL_BRAND);
    let output = project.run(&[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("global.json"));
}

#[test]
fn unknown_brand_gets_common_aliases_only() {
    let project = Project::minimal();
    project.write(
        "tokens/brands/nova.json",
        r##"{ "brand": { "primary": { "main": { "$value": "#FF00AA" } } } }"##,
    );
    let output = project.run(&["nova"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("No compatibility aliases registered"));

    let css = project.stylesheet();
    assert!(css.contains("  --brand-primary-main: #FF00AA;\n"));
    assert!(css.contains("  /* Common */\n  --white: var(--base-white);\n"));
    assert!(!css.contains("--primary-color"));
}

#[test]
fn invalid_brand_id_is_rejected_before_reading() {
    let project = Project::minimal();
    let output = project.run(&["../echo"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid brand identifier"));
    assert!(!project.path("styles/tokens.css").exists());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let project = Project::minimal();
    assert!(project.run(&["echo"]).status.success());
    let first = project.stylesheet();
    assert!(project.run(&["echo"]).status.success());
    assert_eq!(project.stylesheet(), first);
}

#[test]
fn stale_output_is_replaced() {
    let project = Project::minimal();
    project.write("styles/tokens.css", "/* hand edits */\n");
    assert!(project.run(&["echo"]).status.success());

    let css = project.stylesheet();
    assert!(!css.contains("hand edits"));
    assert!(css.starts_with("/**\n * Design tokens"));
}

#[test]
fn collisions_are_warned_not_fatal() {
    let project = Project::minimal();
    project.write(
        "tokens/global.json",
        r##"{ "brand": { "primary": { "main": { "$value": "#000000" } } } }"##,
    );
    let output = project.run(&["echo"]);

    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("declared more than once"), "stderr: {err}");
    assert!(err.contains("--brand-primary-main"), "stderr: {err}");
}

#[test]
fn usage_errors_exit_with_failure() {
    let project = Project::minimal();
    let output = project.run(&["echo", "atlas"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("error:"), "stderr: {}", stderr(&output));
    assert!(!project.path("styles/tokens.css").exists());
}

#[test]
fn help_is_not_an_error() {
    let project = Project::minimal();
    let output = project.run(&["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));
}
