//! Output formatters that can be registered by name.

use std::sync::Arc;

use dtk_core::{
    DesignToken, FormatOptions, PlatformRenderer, Result, TYPOGRAPHY_CATEGORY, TokenSource,
    TypographyToken, emit_with,
};
use dtk_swift::SwiftUiKitRenderer;
use tracing::debug;

/// A named output format over a whole token dictionary.
pub trait Formatter: Send + Sync {
    fn name(&self) -> &str;

    fn format(&self, source: &dyn TokenSource, options: &FormatOptions) -> Result<String>;
}

/// Decides which dictionary tokens a formatter sees.
pub type TokenPredicate = Arc<dyn Fn(&DesignToken) -> bool + Send + Sync>;

/// Keep tokens whose category attribute equals `category`.
pub fn category_predicate(category: impl Into<String>) -> TokenPredicate {
    let category = category.into();
    Arc::new(move |token: &DesignToken| token.has_category(&category))
}

/// Typography format: filters the dictionary down to typography tokens and
/// hands them to a platform renderer.
#[derive(Clone)]
pub struct TypographyFormatter {
    renderer: Arc<dyn PlatformRenderer>,
    predicate: TokenPredicate,
}

impl TypographyFormatter {
    pub fn new(renderer: Arc<dyn PlatformRenderer>) -> Self {
        Self { renderer, predicate: category_predicate(TYPOGRAPHY_CATEGORY) }
    }

    /// The `swift/typography` format.
    pub fn swift() -> Result<Self> {
        Ok(Self::new(Arc::new(SwiftUiKitRenderer::new()?)))
    }

    /// Replace the default category filter.
    pub fn with_predicate(mut self, predicate: TokenPredicate) -> Self {
        self.predicate = predicate;
        self
    }

    /// Typography tokens of `source` that pass the filter, in dictionary order.
    /// Matching tokens without a composite typography value are skipped.
    pub fn select_tokens(&self, source: &dyn TokenSource) -> Vec<TypographyToken> {
        source
            .all_tokens()
            .iter()
            .filter(|token| (self.predicate)(*token))
            .filter_map(|token| {
                let typography = token.as_typography();
                if typography.is_none() {
                    debug!(token = %token.name, "skipping token without a typography value");
                }
                typography
            })
            .collect()
    }
}

impl std::fmt::Debug for TypographyFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypographyFormatter")
            .field("format", &self.renderer.format_name())
            .finish_non_exhaustive()
    }
}

impl Formatter for TypographyFormatter {
    fn name(&self) -> &str {
        self.renderer.format_name()
    }

    fn format(&self, source: &dyn TokenSource, options: &FormatOptions) -> Result<String> {
        let tokens = self.select_tokens(source);
        debug!(format = self.name(), tokens = tokens.len(), "formatting typography tokens");
        emit_with(self.renderer.as_ref(), &tokens, source, options)
    }
}

type FormatFn = dyn Fn(&dyn TokenSource, &FormatOptions) -> Result<String> + Send + Sync;

/// A formatter backed by a closure.
pub struct FnFormatter {
    name: String,
    format: Box<FormatFn>,
}

impl FnFormatter {
    pub fn new<F>(name: impl Into<String>, format: F) -> Self
    where
        F: Fn(&dyn TokenSource, &FormatOptions) -> Result<String> + Send + Sync + 'static,
    {
        Self { name: name.into(), format: Box::new(format) }
    }
}

impl std::fmt::Debug for FnFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFormatter").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Formatter for FnFormatter {
    fn name(&self) -> &str {
        &self.name
    }

    fn format(&self, source: &dyn TokenSource, options: &FormatOptions) -> Result<String> {
        (self.format)(source, options)
    }
}
