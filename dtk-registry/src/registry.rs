//! Format registry: the registration side of the emitter.

use std::collections::BTreeMap;
use std::sync::Arc;

use dtk_core::{DtkError, FormatOptions, Result, TokenSource};
use tracing::{info, instrument};

use crate::formatter::{Formatter, TypographyFormatter};

/// Formatters keyed by name. Names are kept sorted so listings are stable.
#[derive(Clone, Default)]
pub struct FormatRegistry {
    formats: BTreeMap<String, Arc<dyn Formatter>>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in `swift/typography` format.
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(Arc::new(TypographyFormatter::swift()?));
        Ok(registry)
    }

    /// Register `formatter` under its own name, returning the formatter it
    /// replaced, if any.
    pub fn register(&mut self, formatter: Arc<dyn Formatter>) -> Option<Arc<dyn Formatter>> {
        let name = formatter.name().to_string();
        info!(format = %name, "registering format");
        self.formats.insert(name, formatter)
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Formatter>> {
        self.formats.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.formats.keys().map(String::as_str).collect()
    }

    /// Run the format registered as `name` over `source`.
    #[instrument(skip(self, source, options))]
    pub fn format(
        &self,
        name: &str,
        source: &dyn TokenSource,
        options: &FormatOptions,
    ) -> Result<String> {
        let formatter = self
            .formats
            .get(name)
            .ok_or_else(|| DtkError::unknown_format(name, &self.names()))?;
        formatter.format(source, options)
    }
}

impl std::fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRegistry").field("formats", &self.names()).finish()
    }
}
