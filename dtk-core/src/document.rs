//! Platform-neutral output model.
//!
//! [`TypographyDocument::build`] does all resolution and conversion. A
//! [`PlatformRenderer`] only turns the finished document into source text, so
//! adding a target platform never touches the conversion code.

use serde::Serialize;

use crate::error::Result;
use crate::options::{AccessLevel, FormatOptions, HeaderContext};
use crate::resolver::ReferenceResolver;
use crate::token::TypographyToken;
use crate::typography::ResolvedTypographyStyle;

/// Everything a renderer needs, in output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographyDocument {
    pub header_lines: Vec<String>,
    pub imports: Vec<String>,
    pub access_level: AccessLevel,
    /// One entry per input token, in input order.
    pub styles: Vec<ResolvedTypographyStyle>,
}

impl TypographyDocument {
    /// Resolve `tokens` in order and collect the options that shape the output.
    pub fn build<R>(
        tokens: &[TypographyToken],
        resolver: &R,
        options: &FormatOptions,
        format_name: &str,
    ) -> Result<Self>
    where
        R: ReferenceResolver + ?Sized,
    {
        let styles = tokens
            .iter()
            .map(|token| ResolvedTypographyStyle::resolve(token, resolver))
            .collect::<Result<Vec<_>>>()?;

        let ctx = HeaderContext { format_name: format_name.to_string(), token_count: tokens.len() };

        Ok(Self {
            header_lines: options.header_lines(&ctx),
            imports: options.imports.clone(),
            access_level: options.access_level(),
            styles,
        })
    }
}

/// Renders a [`TypographyDocument`] as source text for one platform.
pub trait PlatformRenderer: Send + Sync {
    /// Format name this renderer is registered under, e.g. `swift/typography`.
    fn format_name(&self) -> &str;

    fn render(&self, document: &TypographyDocument) -> Result<String>;
}

/// Resolve `tokens` and render them with `renderer`.
pub fn emit_with<P, R>(
    renderer: &P,
    tokens: &[TypographyToken],
    resolver: &R,
    options: &FormatOptions,
) -> Result<String>
where
    P: PlatformRenderer + ?Sized,
    R: ReferenceResolver + ?Sized,
{
    let document = TypographyDocument::build(tokens, resolver, options, renderer.format_name())?;
    renderer.render(&document)
}
