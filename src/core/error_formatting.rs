//! Error formatting utilities for docvars
//!
//! Converts internal errors into clear, actionable messages for the operator
//! running the documentation build.

use super::error::{DocvarsError, ErrorContext};

/// Keywords that indicate template-related errors
const TEMPLATE_ERROR_KEYWORDS: &[&str] = &["template", "Template", "filter", "function"];

/// Convert any error into a user-friendly format with contextual suggestions
///
/// The error chain is walked so that a [`DocvarsError`] buried inside an
/// [`anyhow`] context or a Tera rendering error is still recognised.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(docvars_error) = error.downcast_ref::<DocvarsError>() {
        return create_error_context(docvars_error);
    }

    let mut current_error: &dyn std::error::Error = error.as_ref();
    loop {
        if let Some(docvars_error) = current_error.downcast_ref::<DocvarsError>() {
            return create_error_context(docvars_error);
        }

        match current_error.source() {
            Some(source) => current_error = source,
            None => break,
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        return ErrorContext::new(DocvarsError::Io {
            operation: "file access".to_string(),
            path: "unknown".into(),
            reason: io_error.to_string(),
        })
        .with_suggestion("Check that the path exists and you have the necessary permissions");
    }

    let error_msg = format!("{error:#}");

    if TEMPLATE_ERROR_KEYWORDS.iter().any(|&keyword| error_msg.contains(keyword)) {
        return ErrorContext::new(DocvarsError::TemplateError {
            template: "unknown".to_string(),
            message: error_msg,
        })
        .with_suggestion("Check your template syntax and the names passed to literal() and build_var()");
    }

    ErrorContext::new(DocvarsError::ConfigError {
        message: error_msg,
    })
    .with_suggestion("Re-run with --verbose for more details")
}

/// Create a user-friendly error context from a [`DocvarsError`]
pub fn create_error_context(error: &DocvarsError) -> ErrorContext {
    let ctx = ErrorContext::new(error.clone());
    match error {
        DocvarsError::FileNotFound {
            path,
        } => ctx
            .with_suggestion("Check `source_file` in docvars.toml; relative paths resolve against the config file")
            .with_details(format!("Could not open {}", path.display())),
        DocvarsError::Decode {
            what,
            ..
        } => ctx
            .with_suggestion("Make sure the input is UTF-8 encoded text")
            .with_details(format!("{what} contains invalid UTF-8")),
        DocvarsError::Io {
            ..
        } => ctx.with_suggestion("Check file permissions and disk space"),
        DocvarsError::InvalidPattern {
            ..
        } => ctx.with_suggestion(
            "Declaration patterns must compile and define the named groups `name` and `value`",
        ),
        DocvarsError::MissingKey {
            name,
            table,
            suggestions,
        } => {
            let ctx = ctx.with_details(format!(
                "No {table} named '{name}' is known; a source constant may have been renamed or removed"
            ));
            if suggestions.is_empty() {
                ctx.with_suggestion(format!("Update the documentation that references '{name}'"))
            } else {
                ctx.with_suggestion(format!("Did you mean: {}?", suggestions.join(", ")))
            }
        }
        DocvarsError::InvalidVariableName => {
            ctx.with_suggestion("Pass a non-empty name, e.g. build_var(name=\"kubernetes_version\")")
        }
        DocvarsError::Invocation {
            program,
            ..
        } => ctx
            .with_suggestion(format!(
                "Make sure '{program}' exists and is executable, or set [resolver].program in docvars.toml"
            ))
            .with_details("The build variable resolver could not be started"),
        DocvarsError::Command {
            stderr,
            ..
        } => {
            let ctx = ctx.with_suggestion("Run the resolver script by hand to see why it fails");
            if stderr.trim().is_empty() {
                ctx
            } else {
                ctx.with_details(stderr.trim().to_string())
            }
        }
        DocvarsError::MissingEnvironmentVariable {
            name,
        } => ctx
            .with_suggestion(format!("Export {name} before building the documentation"))
            .with_details("The primary version string is read from the environment"),
        DocvarsError::ConfigError {
            ..
        } => ctx.with_suggestion("Check the syntax of docvars.toml"),
        DocvarsError::InputDirectoryNotFound {
            path,
        } => ctx.with_suggestion(format!(
            "Pass the directory holding the Markdown pages, e.g. `docvars render docs site` (got {})",
            path.display()
        )),
        DocvarsError::TemplateError {
            ..
        } => ctx.with_suggestion("Check your template syntax and variable names"),
    }
}
