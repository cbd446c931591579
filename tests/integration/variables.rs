//! The `var` and `vars` commands.

use predicates::prelude::*;

use crate::common::TestProject;

#[cfg(unix)]
#[test]
fn test_var_trims_script_output() {
    let project = TestProject::with_defaults().unwrap();

    project
        .docvars_without_version()
        .args(["var", "etcd_version", "kubernetes_version"])
        .assert()
        .success()
        .stdout("etcd_version = 3.5.9\nkubernetes_version = 1.28.4\n");
}

#[cfg(unix)]
#[test]
fn test_var_runs_script_once_per_name() {
    let project = TestProject::new().unwrap();
    project
        .write_script(
            "vars.sh",
            "#!/bin/sh\necho \"$1\" >> calls.log\necho \"value-of-$1\"\n",
        )
        .unwrap();

    project
        .docvars_without_version()
        .args(["var", "a", "b", "a", "a"])
        .assert()
        .success()
        .stdout("a = value-of-a\nb = value-of-b\na = value-of-a\na = value-of-a\n");

    assert_eq!(project.read_file("calls.log").unwrap(), "a\nb\n");
}

#[cfg(unix)]
#[test]
fn test_var_failing_script() {
    let project = TestProject::with_defaults().unwrap();

    project
        .docvars_without_version()
        .args(["var", "unknown_thing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Resolver command for 'unknown_thing' failed"))
        .stderr(predicate::str::contains("unknown variable unknown_thing"));
}

#[test]
fn test_var_missing_script() {
    let project = TestProject::new().unwrap();

    project
        .docvars_without_version()
        .args(["var", "kubernetes_version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to invoke resolver"));
}

#[cfg(unix)]
#[test]
fn test_var_json() {
    let project = TestProject::with_defaults().unwrap();

    let output = project
        .docvars_without_version()
        .args(["var", "kubernetes_version", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["kubernetes_version"], "1.28.4");
}

#[cfg(unix)]
#[test]
fn test_vars_precomputed_values() {
    let project = TestProject::with_defaults().unwrap();

    project
        .docvars()
        .arg("vars")
        .assert()
        .success()
        .stdout(
            "k0s_docker_version = v1.28.4-k0s.0\nk0s_version = v1.28.4+k0s.0\nk8s_version = v1.28.4\n",
        );
}

#[cfg(unix)]
#[test]
fn test_vars_empty_version_is_accepted() {
    let project = TestProject::with_defaults().unwrap();

    project
        .docvars_without_version()
        .env("K0S_VERSION", "")
        .arg("vars")
        .assert()
        .success()
        .stdout(predicate::str::contains("k0s_version = \n"));
}

#[test]
fn test_vars_without_version_env() {
    let project = TestProject::with_defaults().unwrap();

    project
        .docvars_without_version()
        .arg("vars")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Required environment variable 'K0S_VERSION' is not set"));
}
