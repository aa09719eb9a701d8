//! # DTK Swift
//!
//! Generates Swift/UIKit typography extensions from design tokens.
//!
//! For every token the output contains a `UIFont` constructor that loads the
//! custom font file and falls back to the system font at the same size and
//! weight, plus a `String` accessor returning a styled `NSAttributedString`.
//!
//! ```rust,ignore
//! use dtk_core::{FormatOptions, LiteralResolver, TypographyToken};
//!
//! let tokens =
//!     vec![TypographyToken::new("Title1Bold", "Pretendard", "Bold", "28", "135%", "-2%")];
//! let options = FormatOptions::builder().import("UIKit").build();
//! let swift = dtk_swift::emit(&tokens, &LiteralResolver, &options)?;
//! ```

pub mod literal;
pub mod renderer;
pub mod template_engine;
pub mod templates;

use dtk_core::{FormatOptions, ReferenceResolver, Result, TypographyToken, emit_with};

pub use renderer::SwiftUiKitRenderer;
pub use template_engine::TemplateEngine;

/// Format name of the Swift/UIKit typography output.
pub const SWIFT_TYPOGRAPHY_FORMAT: &str = "swift/typography";

/// Emit Swift typography extensions for `tokens`, in order.
///
/// Every token field is passed through `resolver`. Resolver errors are the
/// only failures; unknown weights and malformed numbers fall back to defaults.
pub fn emit<R>(tokens: &[TypographyToken], resolver: &R, options: &FormatOptions) -> Result<String>
where
    R: ReferenceResolver + ?Sized,
{
    let renderer = SwiftUiKitRenderer::new()?;
    emit_with(&renderer, tokens, resolver, options)
}
