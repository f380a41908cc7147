//! The sample documents shipped under `tokens/`.

use crate::common::{Project, stderr};

#[test]
fn echo_sample_compiles_cleanly() {
    let project = Project::with_sample_tokens();
    let output = project.run(&["echo"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).is_empty(), "unexpected warnings: {}", stderr(&output));

    let css = project.stylesheet();
    for line in [
        "  --brand-primary-main: #2F42BD;\n",
        "  --base-white: #FFFFFF;\n",
        "  --primary-color: var(--brand-primary-main);\n",
        "  --blue-600: var(--brand-primary-600);\n",
        "  --font-family-base: var(--brand-typography-font-family);\n",
        "  --gray-500: var(--base-neutral-500);\n",
    ] {
        assert!(css.contains(line), "missing {line:?}");
    }
}

#[test]
fn atlas_sample_compiles_cleanly() {
    let project = Project::with_sample_tokens();
    let output = project.run(&["atlas"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stderr(&output).is_empty(), "unexpected warnings: {}", stderr(&output));

    let css = project.stylesheet();
    for line in [
        "  /* Atlas legacy accents */\n",
        "  --accent-sky: var(--brand-primary-sky-blue-500);\n",
        "  --accent-yellow: var(--brand-primary-yellow-500);\n",
        "  --accent-seafoam: var(--brand-primary-seafoam-500);\n",
        "  --primary-color: var(--brand-primary-sky-blue-500);\n",
    ] {
        assert!(css.contains(line), "missing {line:?}");
    }
    assert!(!css.contains("Echo legacy"));
}

#[test]
fn every_alias_in_samples_points_at_a_declared_token() {
    for brand in ["echo", "atlas"] {
        let project = Project::with_sample_tokens();
        assert!(project.run(&[brand]).status.success());
        let css = project.stylesheet();

        let declared: Vec<&str> = css
            .lines()
            .filter_map(|line| line.trim().split_once(':'))
            .map(|(name, _)| name)
            .filter(|name| name.starts_with("--"))
            .collect();

        for line in css.lines().map(str::trim) {
            let Some((_, value)) = line.split_once(": var(") else {
                continue;
            };
            let target = value.trim_end_matches(");");
            assert!(
                declared.contains(&target),
                "{brand}: alias target {target} is not declared"
            );
        }
    }
}
