//! Rendering documentation trees end to end.

use predicates::prelude::*;

use crate::common::TestProject;

const INSTALL_PAGE: &str = r#"# Install k0s {{ k0s_version }}

Kubernetes {{ k8s_version }} with etcd {{ literal(name="EtcdVersion") }}.

    docker run k0sproject/k0s:{{ k0s_docker_version }}

Data lives in {{ literal(name="DataDirDefault") }}, etcd image {{ build_var(name="etcd_version") }}.
"#;

#[cfg(unix)]
#[test]
fn test_render_substitutes_all_value_kinds() {
    let project = TestProject::with_defaults().unwrap();
    project.write_file("docs/install.md", INSTALL_PAGE).unwrap();

    project
        .docvars()
        .args(["render", "docs", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 1 page(s), copied 0 file(s)"));

    let rendered = project.read_file("site/install.md").unwrap();
    assert!(rendered.contains("# Install k0s v1.28.4+k0s.0"));
    assert!(rendered.contains("Kubernetes v1.28.4 with etcd 3.5.9."));
    assert!(rendered.contains("k0sproject/k0s:v1.28.4-k0s.0"));
    assert!(rendered.contains("Data lives in /var/lib/k0s, etcd image 3.5.9."));
}

#[cfg(unix)]
#[test]
fn test_render_mirrors_tree_and_copies_assets() {
    let project = TestProject::with_defaults().unwrap();
    project.write_file("docs/index.md", "k0s {{ k0s_version }}\n").unwrap();
    project
        .write_file("docs/guides/airgap.md", "konnectivity {{ literal(name=\"KonnectivityImageVersion\") }}\n")
        .unwrap();
    project.write_file("docs/img/logo.svg", "<svg>{{ not_rendered }}</svg>").unwrap();

    project
        .docvars()
        .args(["render", "docs", "site"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 2 page(s), copied 1 file(s)"));

    assert_eq!(project.read_file("site/index.md").unwrap(), "k0s v1.28.4+k0s.0\n");
    assert_eq!(project.read_file("site/guides/airgap.md").unwrap(), "konnectivity v0.1.4\n");
    assert_eq!(project.read_file("site/img/logo.svg").unwrap(), "<svg>{{ not_rendered }}</svg>");
}

#[cfg(unix)]
#[test]
fn test_render_keeps_literal_fences_verbatim() {
    let project = TestProject::with_defaults().unwrap();
    project
        .write_file(
            "docs/templating.md",
            "Version {{ k0s_version }}\n\n```literal\n{{ literal(name=\"NoSuchThing\") }}\n```\n",
        )
        .unwrap();

    project.docvars().args(["render", "docs", "site"]).assert().success();

    let rendered = project.read_file("site/templating.md").unwrap();
    assert!(rendered.contains("Version v1.28.4+k0s.0"));
    assert!(rendered.contains("```\n{{ literal(name=\"NoSuchThing\") }}\n```"));
}

#[cfg(unix)]
#[test]
fn test_render_unknown_literal_aborts() {
    let project = TestProject::with_defaults().unwrap();
    project.write_file("docs/a.md", "{{ literal(name=\"EtcdVersoin\") }}\n").unwrap();

    project
        .docvars()
        .args(["render", "docs", "site"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown literal 'EtcdVersoin'"))
        .stderr(predicate::str::contains("EtcdVersion"));
}

#[cfg(unix)]
#[test]
fn test_render_failing_build_var_aborts() {
    let project = TestProject::with_defaults().unwrap();
    project.write_file("docs/a.md", "{{ build_var(name=\"missing_var\") }}\n").unwrap();

    project
        .docvars()
        .args(["render", "docs", "site"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resolver command for 'missing_var' failed"));
}

#[cfg(unix)]
#[test]
fn test_render_without_version_env_fails() {
    let project = TestProject::with_defaults().unwrap();
    project.write_file("docs/a.md", "{{ k0s_version }}\n").unwrap();

    project
        .docvars_without_version()
        .args(["render", "docs", "site"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("K0S_VERSION"));

    assert!(!project.path().join("site/a.md").exists());
}

#[cfg(unix)]
#[test]
fn test_render_missing_input_dir() {
    let project = TestProject::with_defaults().unwrap();

    project
        .docvars()
        .args(["render", "nowhere", "site"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input directory not found: nowhere"))
        .stderr(predicate::str::contains("source_file").not());
}

#[test]
fn test_render_missing_source_file() {
    let project = TestProject::new().unwrap();
    project.write_file("docs/a.md", "plain\n").unwrap();

    project
        .docvars()
        .args(["render", "docs", "site"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("constant_shared.go"));
}
