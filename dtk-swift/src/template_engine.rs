//! Handlebars wrapper used by the Swift renderer.

use dtk_core::{DtkError, Result};
use handlebars::Handlebars;
use serde::Serialize;

use crate::templates::TEMPLATES;

/// Compiled Swift templates.
///
/// Escaping is disabled because the output is Swift, not HTML, and strict
/// mode turns a missing template variable into an error instead of an empty
/// string.
#[derive(Debug)]
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    /// Compile all built-in templates.
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        for (name, source) in TEMPLATES {
            registry
                .register_template_string(name, *source)
                .map_err(|e| DtkError::render(*name, e.to_string()))?;
        }

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.registry.render(template, data).map_err(|e| DtkError::render(template, e.to_string()))
    }

    pub fn has_template(&self, template: &str) -> bool {
        self.registry.has_template(template)
    }
}
