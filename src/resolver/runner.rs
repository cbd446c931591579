//! The injectable capability of running the resolver script for one name.

use std::path::{Component, Path, PathBuf};

use super::command_builder::{CommandOutput, ScriptCommand};
use crate::core::DocvarsError;

/// Runs the external resolver for a single variable name.
///
/// Implementations must be thread-safe because the resolver is shared with
/// the template engine.
pub trait CommandRunner: Send + Sync {
    /// Invoke the resolver for `name` and return its captured output.
    ///
    /// # Errors
    ///
    /// Returns [`DocvarsError::Invocation`] if the resolver cannot be started.
    fn run(&self, name: &str) -> Result<CommandOutput, DocvarsError>;
}

/// Runs `<program> [args...] <name>` as a real child process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    /// Fixed arguments placed before the variable name.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Directory the script runs in; relative program paths resolve against it.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Locate the program: paths are taken as-is, bare names are searched in `PATH`.
    fn locate(&self) -> Result<PathBuf, DocvarsError> {
        let path = Path::new(&self.program);
        let is_bare_name = path.components().count() == 1
            && matches!(path.components().next(), Some(Component::Normal(_)));

        if !is_bare_name {
            let resolved = match (&self.working_dir, path.is_relative()) {
                (Some(dir), true) => dir.join(path),
                _ => path.to_path_buf(),
            };
            // Absolute, so the child's working directory cannot shift it again.
            return resolved.canonicalize().map_err(|e| DocvarsError::Invocation {
                program: self.program.clone(),
                reason: match e.kind() {
                    std::io::ErrorKind::NotFound => format!("{} does not exist", resolved.display()),
                    _ => format!("{}: {e}", resolved.display()),
                },
            });
        }

        which::which(&self.program).map_err(|e| DocvarsError::Invocation {
            program: self.program.clone(),
            reason: e.to_string(),
        })
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, name: &str) -> Result<CommandOutput, DocvarsError> {
        let program = self.locate()?;

        let mut cmd = ScriptCommand::new(program).args(self.args.iter().cloned()).arg(name);
        if let Some(ref dir) = self.working_dir {
            cmd = cmd.current_dir(dir);
        }

        cmd.with_context(name).execute()
    }
}
