//! `docvars.toml` handling.

use predicates::prelude::*;

use crate::common::TestProject;

#[cfg(unix)]
#[test]
fn test_config_relocates_source_and_resolver() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "build/docvars.toml",
            r#"
source_file = "../src/versions.txt"
version_env = "PRODUCT_VERSION"
declaration_pattern = '^(?P<name>[A-Z_]+):\s*"(?P<value>[^"]*)"'

[resolver]
program = "./resolve.sh"
args = ["--plain"]

[variables]
version = "product_version"
normalized_version = "image_tag"
prefixed_version = "runtime_version"
prefixed_source = "runtime"
prefix = "r"
"#,
        )
        .unwrap();
    project.write_file("src/versions.txt", "RUNTIME: \"4.2\"\n").unwrap();
    project
        .write_script(
            "build/resolve.sh",
            "#!/bin/sh\n[ \"$1\" = \"--plain\" ] || exit 9\necho \"$2-resolved\"\n",
        )
        .unwrap();
    project
        .write_file(
            "docs/page.md",
            "{{ product_version }} {{ image_tag }} {{ runtime_version }} {{ literal(name=\"RUNTIME\") }}\n",
        )
        .unwrap();

    project
        .docvars_without_version()
        .env("PRODUCT_VERSION", "2.0+build.7")
        .args(["--config", "build/docvars.toml", "render", "docs", "site"])
        .assert()
        .success();

    assert_eq!(
        project.read_file("site/page.md").unwrap(),
        "2.0+build.7 2.0-build.7 rruntime-resolved 4.2\n"
    );
}

#[test]
fn test_explicit_config_must_exist() {
    let project = TestProject::new().unwrap();

    project
        .docvars_without_version()
        .args(["-c", "missing.toml", "literals"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_unknown_config_key_rejected() {
    let project = TestProject::new().unwrap();
    project.write_file("docvars.toml", "source_fil = \"x.go\"\n").unwrap();

    project
        .docvars_without_version()
        .arg("literals")
        .assert()
        .failure()
        .stderr(predicate::str::contains("source_fil"));
}

#[test]
fn test_invalid_pattern_rejected() {
    let project = TestProject::new().unwrap();
    project.write_file("docvars.toml", "declaration_pattern = '(?P<name>\\w+)'\n").unwrap();
    project.write_file("pkg/constant/constant_shared.go", "const A = \"1\"\n").unwrap();

    project
        .docvars_without_version()
        .arg("literals")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid declaration pattern"));
}
