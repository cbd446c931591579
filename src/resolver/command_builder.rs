//! Builder for running the resolver script with consistent logging and errors.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::core::DocvarsError;

/// Captured result of one external command.
///
/// A non-zero exit is *not* an error at this level; callers inspect
/// [`success`](Self::success) and decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status 0
    pub success: bool,
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Standard output; strictly UTF-8 on success, lossily decoded otherwise
    pub stdout: String,
    /// Standard error, lossily decoded
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output carrying `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Human readable exit status, e.g. `exit status: 2`.
    pub fn describe_status(&self) -> String {
        match self.code {
            Some(code) => format!("exit status: {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Fluent builder for a blocking, output-capturing process invocation.
///
/// ```rust,no_run
/// use docvars::resolver::ScriptCommand;
///
/// # fn example() -> Result<(), docvars::core::DocvarsError> {
/// let output = ScriptCommand::new("./vars.sh")
///     .arg("kubernetes_version")
///     .current_dir("/path/to/repo")
///     .with_context("kubernetes_version")
///     .execute()?;
/// assert!(output.success);
/// # Ok(())
/// # }
/// ```
///
/// There is no timeout: the call returns only once the child exits.
#[derive(Debug, Clone)]
pub struct ScriptCommand {
    program: PathBuf,
    args: Vec<String>,
    current_dir: Option<PathBuf>,
    context: Option<String>,
}

impl ScriptCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
            context: None,
        }
    }

    /// Working directory for the child process.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set a context for logging (typically the variable name).
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    fn describe(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Run the command to completion and capture its output.
    ///
    /// # Errors
    ///
    /// - [`DocvarsError::Invocation`] if the process cannot be spawned
    /// - [`DocvarsError::Decode`] if a successful run's standard output is not
    ///   valid UTF-8
    pub fn execute(self) -> Result<CommandOutput, DocvarsError> {
        let start = Instant::now();
        let description = self.describe();
        let ctx = self.context.as_deref().unwrap_or("-");

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());

        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(target: "resolver", "({}) Executing command: {}", ctx, description);

        let output = cmd.output().map_err(|e| DocvarsError::Invocation {
            program: self.program.display().to_string(),
            reason: e.to_string(),
        })?;

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if !stderr.trim().is_empty() {
            tracing::debug!(target: "resolver", "({}) {}", ctx, stderr.trim());
        }

        let success = output.status.success();

        // Only a successful run's stdout is a value; a failure's is diagnostic.
        let stdout = if success {
            String::from_utf8(output.stdout).map_err(|e| DocvarsError::Decode {
                what: format!("output of `{description}`"),
                reason: e.utf8_error().to_string(),
            })?
        } else {
            String::from_utf8_lossy(&output.stdout).into_owned()
        };

        let elapsed = start.elapsed();
        if elapsed.as_secs() > 1 {
            tracing::info!(target: "resolver::perf", "({}) {} took {:.2}s", ctx, description, elapsed.as_secs_f64());
        } else {
            tracing::debug!(target: "resolver::perf", "({}) {} took {}ms", ctx, description, elapsed.as_millis());
        }

        if !success {
            tracing::debug!(target: "resolver", "({}) Command failed with exit code: {:?}", ctx, output.status.code());
        }

        Ok(CommandOutput {
            success,
            code: output.status.code(),
            stdout,
            stderr,
        })
    }
}
