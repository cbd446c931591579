//! Common fixtures for docvars integration tests
//!
//! [`TestProject`] lays out a throwaway documentation project: a Go constants
//! file, a resolver script, a `docs/` tree and an optional `docvars.toml`.

// Not every helper is used by every test file
#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Constants file shaped like a real Go source tree.
pub const SAMPLE_CONSTANTS: &str = r#"package constant

const (
	// DataDirDefault folder contains all the data
	DataDirDefault = "/var/lib/k0s"
	EtcdVersion    = "3.5.9"
	KineUser       = "kube-apiserver"
)

var KonnectivityImageVersion = "v0.1.4"
const CalicoImage = "quay.io/k0sproject/calico-node"
"#;

/// Resolver script answering a few names and failing on everything else.
pub const SAMPLE_RESOLVER: &str = r#"#!/bin/sh
case "$1" in
  kubernetes_version) echo "1.28.4" ;;
  etcd_version) printf '  3.5.9  \n' ;;
  *) echo "unknown variable $1" >&2; exit 3 ;;
esac
"#;

pub struct TestProject {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestProject {
    /// Empty project directory.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path().to_path_buf();
        Ok(Self {
            _temp_dir: temp_dir,
            root,
        })
    }

    /// Project with the sample constants file and resolver script in their
    /// default locations.
    pub fn with_defaults() -> Result<Self> {
        let project = Self::new()?;
        project.write_file("pkg/constant/constant_shared.go", SAMPLE_CONSTANTS)?;
        project.write_script("vars.sh", SAMPLE_RESOLVER)?;
        Ok(project)
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Write a file relative to the project root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write an executable script.
    pub fn write_script(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.write_file(relative, content)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
        }
        Ok(path)
    }

    pub fn read_file(&self, relative: &str) -> Result<String> {
        Ok(fs::read_to_string(self.root.join(relative))?)
    }

    /// `docvars` running in the project root with a clean, colorless environment
    /// and `K0S_VERSION` set.
    pub fn docvars(&self) -> Command {
        let mut cmd = self.docvars_without_version();
        cmd.env("K0S_VERSION", "v1.28.4+k0s.0");
        cmd
    }

    /// Like [`docvars`](Self::docvars) but with `K0S_VERSION` removed.
    pub fn docvars_without_version(&self) -> Command {
        let mut cmd = Command::cargo_bin("docvars").unwrap();
        cmd.current_dir(&self.root)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("K0S_VERSION");
        cmd
    }
}
