//! The `literals` command.

use predicates::prelude::*;

use crate::common::{SAMPLE_CONSTANTS, TestProject};

#[test]
fn test_literals_lists_every_declaration() {
    let project = TestProject::new().unwrap();
    project.write_file("pkg/constant/constant_shared.go", SAMPLE_CONSTANTS).unwrap();

    project
        .docvars_without_version()
        .arg("literals")
        .assert()
        .success()
        .stdout(predicate::str::contains("CalicoImage = quay.io/k0sproject/calico-node\n"))
        .stdout(predicate::str::contains("DataDirDefault = /var/lib/k0s\n"))
        .stdout(predicate::str::contains("EtcdVersion = 3.5.9\n"))
        .stdout(predicate::str::contains("KonnectivityImageVersion = v0.1.4\n"));
}

#[test]
fn test_literals_json() {
    let project = TestProject::new().unwrap();
    project.write_file("pkg/constant/constant_shared.go", SAMPLE_CONSTANTS).unwrap();

    let output = project
        .docvars_without_version()
        .args(["literals", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["KineUser"], "kube-apiserver");
    assert_eq!(parsed.as_object().unwrap().len(), 5);
}

#[test]
fn test_literals_later_declaration_wins() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "pkg/constant/constant_shared.go",
            "const Version = \"1\"\nvar Other = \"x\"\nVersion = \"2\"\n",
        )
        .unwrap();

    project
        .docvars_without_version()
        .args(["literals", "Version"])
        .assert()
        .success()
        .stdout("Version = 2\n");
}

#[test]
fn test_literals_unknown_name_fails() {
    let project = TestProject::new().unwrap();
    project.write_file("pkg/constant/constant_shared.go", SAMPLE_CONSTANTS).unwrap();

    project
        .docvars_without_version()
        .args(["literals", "EtcdVersion", "KubeVersion"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown literal 'KubeVersion'"));
}

#[test]
fn test_literals_missing_source_file() {
    let project = TestProject::new().unwrap();

    project
        .docvars_without_version()
        .arg("literals")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source file not found"));
}

#[test]
fn test_literals_invalid_utf8_source() {
    let project = TestProject::new().unwrap();
    let path = project.path().join("pkg/constant/constant_shared.go");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"const A = \"\xff\xfe\"\n").unwrap();

    project
        .docvars_without_version()
        .arg("literals")
        .assert()
        .failure()
        .stderr(predicate::str::contains("UTF-8"));
}
