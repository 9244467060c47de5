//! Template renderer and rendering orchestration.
//! Sequences the passes: placeholder substitution, optional artwork
//! wrapping, conditional block evaluation, then per-line right-trim.

use crate::constants::ART_PLACEHOLDER;
use crate::context::Context;
use crate::error::NfoResult;
use crate::template::{apply_conditionals, substitute};
use crate::value::Value;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `art` - Optional artwork template wrapped around the result
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `NfoResult<String>` - Rendered output text
    fn render(&self, template: &str, art: Option<&str>, context: &Context) -> NfoResult<String>;
}

/// The nfogen rendering engine.
///
/// Rendering is a pure function of its inputs: no state is retained
/// between calls and identical inputs produce identical output.
pub struct NfoRenderer;

impl NfoRenderer {
    /// Creates a new NfoRenderer instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for NfoRenderer {
    fn default() -> Self {
        NfoRenderer::new()
    }
}

impl TemplateRenderer for NfoRenderer {
    /// Renders a template, optionally wrapped in an artwork template.
    ///
    /// The artwork template holds a single `{nfo}` placeholder which
    /// receives the fully substituted body. Conditional blocks are
    /// evaluated after wrapping, against the original context. Every
    /// output line is right-trimmed; leading indentation is preserved.
    fn render(&self, template: &str, art: Option<&str>, context: &Context) -> NfoResult<String> {
        let mut rendered = substitute(template, context)?;

        if let Some(art) = art {
            let mut art_context = Context::new();
            art_context.insert(ART_PLACEHOLDER.to_string(), Value::from(rendered));
            rendered = substitute(art, &art_context)?;
        }

        rendered = apply_conditionals(&rendered, context)?;

        Ok(rendered
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
