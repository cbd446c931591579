//! Page rendering with Tera.
//!
//! [`DocsRenderer`] renders Markdown pages against a [`TemplateVariables`]
//! namespace, one page at a time, and can mirror a whole documentation tree
//! into an output directory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tera::Tera;
use walkdir::WalkDir;

use super::TemplateVariables;
use crate::core::DocvarsError;

/// Fence opening a block that must not be rendered.
const LITERAL_FENCE: &str = "```literal";

/// Counts reported after rendering a documentation tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Markdown pages rendered
    pub rendered: usize,
    /// Other files copied verbatim
    pub copied: usize,
}

/// Renders documentation pages with the registered variables and functions.
pub struct DocsRenderer {
    variables: TemplateVariables,
}

impl DocsRenderer {
    pub fn new(variables: TemplateVariables) -> Self {
        Self {
            variables,
        }
    }

    pub fn variables(&self) -> &TemplateVariables {
        &self.variables
    }

    /// Replace ```` ```literal ```` blocks with placeholders.
    ///
    /// Returns the protected content and the placeholder → block body map.
    pub(crate) fn protect_literal_blocks(content: &str) -> (String, HashMap<String, String>) {
        let mut placeholders = HashMap::new();
        let mut result = String::with_capacity(content.len());
        let mut in_literal_fence = false;
        let mut current_block = String::new();

        for line in content.lines() {
            let trimmed = line.trim();

            if !in_literal_fence && trimmed.starts_with(LITERAL_FENCE) {
                in_literal_fence = true;
                current_block.clear();
            } else if in_literal_fence && trimmed.starts_with("```") {
                in_literal_fence = false;

                let placeholder_id = format!("__DOCVARS_LITERAL_BLOCK_{}__", placeholders.len());
                result.push_str(&placeholder_id);
                result.push('\n');
                placeholders.insert(placeholder_id, std::mem::take(&mut current_block));
            } else if in_literal_fence {
                if !current_block.is_empty() {
                    current_block.push('\n');
                }
                current_block.push_str(line);
            } else {
                result.push_str(line);
                result.push('\n');
            }
        }

        if in_literal_fence {
            tracing::warn!("Unclosed literal fence found - treating as regular content");
            result.push_str(LITERAL_FENCE);
            result.push('\n');
            result.push_str(&current_block);
        }

        if !content.ends_with('\n') && result.ends_with('\n') {
            result.pop();
        }

        tracing::trace!("Protected {} literal block(s)", placeholders.len());
        (result, placeholders)
    }

    /// Put protected blocks back as plain code fences.
    pub(crate) fn restore_literal_blocks(
        content: &str,
        placeholders: HashMap<String, String>,
    ) -> String {
        let mut result = content.to_string();
        for (placeholder_id, original) in placeholders {
            result = result.replace(&placeholder_id, &format!("```\n{original}\n```"));
        }
        result
    }

    /// Render one page.
    ///
    /// `page` only labels errors and logs.
    ///
    /// # Errors
    ///
    /// A [`DocvarsError`] raised by `literal()` or `build_var()` is returned
    /// as-is (e.g. [`DocvarsError::MissingKey`]); any other Tera failure
    /// becomes [`DocvarsError::TemplateError`].
    pub fn render_page(&self, page: &str, content: &str) -> Result<String, DocvarsError> {
        let (protected, placeholders) = Self::protect_literal_blocks(content);

        // Fresh engine per page; registration only clones two `Arc`s.
        let mut tera = Tera::default();
        self.variables.register_functions(&mut tera);

        let rendered = tera
            .render_str(&protected, &self.variables.context())
            .map_err(|e| Self::convert_tera_error(page, &e))?;

        tracing::debug!("Rendered {}", page);
        Ok(Self::restore_literal_blocks(&rendered, placeholders))
    }

    fn convert_tera_error(page: &str, error: &tera::Error) -> DocvarsError {
        let mut messages = vec![error.to_string()];
        let mut source = std::error::Error::source(error);

        while let Some(current) = source {
            if let Some(docvars_error) = current.downcast_ref::<DocvarsError>() {
                return docvars_error.clone();
            }
            messages.push(current.to_string());
            source = current.source();
        }

        DocvarsError::TemplateError {
            template: page.to_string(),
            message: messages.join(": "),
        }
    }

    /// Render every `*.md` file under `input` into the same relative path under
    /// `output`; other files are copied unchanged.
    ///
    /// Pages are processed in sorted order and the first failure aborts the run.
    ///
    /// # Errors
    ///
    /// Returns the first rendering or I/O failure.
    pub fn render_tree(&self, input: &Path, output: &Path) -> Result<RenderSummary, DocvarsError> {
        if !input.is_dir() {
            return Err(DocvarsError::InputDirectoryNotFound {
                path: input.to_path_buf(),
            });
        }

        let mut summary = RenderSummary::default();

        let walker = WalkDir::new(input)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !entry.path().starts_with(output));

        for entry in walker {
            let entry = entry.map_err(|e| DocvarsError::Io {
                operation: "walk".to_string(),
                path: e.path().unwrap_or(input).to_path_buf(),
                reason: e.to_string(),
            })?;

            let relative = entry.path().strip_prefix(input).unwrap_or(entry.path());
            let target = output.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).map_err(|e| DocvarsError::io("create directory", &target, &e))?;
                continue;
            }

            let is_markdown = entry.path().extension().is_some_and(|ext| ext == "md");
            if is_markdown {
                let content = fs::read_to_string(entry.path()).map_err(|e| match e.kind() {
                    std::io::ErrorKind::InvalidData => DocvarsError::Decode {
                        what: entry.path().display().to_string(),
                        reason: e.to_string(),
                    },
                    _ => DocvarsError::io("read", entry.path(), &e),
                })?;
                let rendered = self.render_page(&relative.display().to_string(), &content)?;
                fs::write(&target, rendered).map_err(|e| DocvarsError::io("write", &target, &e))?;
                summary.rendered += 1;
            } else {
                fs::copy(entry.path(), &target).map_err(|e| DocvarsError::io("copy", &target, &e))?;
                summary.copied += 1;
            }
        }

        tracing::info!(
            "Rendered {} page(s) and copied {} file(s) into {}",
            summary.rendered,
            summary.copied,
            output.display()
        );
        Ok(summary)
    }
}
