//! Template rendering for Lathe.
//! Renders registry templates by id with MiniJinja.

use crate::error::{Error, Result};
use crate::templates;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the registry template named by `template_id` with the
    /// given context.
    fn render(&self, template_id: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let env = Environment::new();
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a registry template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::TemplateError` if `template_id` names no registered
    ///   template
    /// * `Error::MinijinjaError` if compilation or rendering fails
    fn render(&self, template_id: &str, context: &serde_json::Value) -> Result<String> {
        // Resolve the registry entry itself so both the name and the
        // source carry the 'static lifetime the environment expects.
        let (id, source) = templates::TEMPLATES
            .iter()
            .find(|(name, _)| *name == template_id)
            .copied()
            .ok_or_else(|| {
                Error::TemplateError(format!("unknown template id '{}'", template_id))
            })?;

        let mut env = self.env.clone();
        env.add_template(id, source)?;

        let tmpl = env.get_template(id)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
