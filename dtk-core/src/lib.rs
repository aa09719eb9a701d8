//! # DTK Core
//!
//! Token model and typography conversions shared by every DTK output format.
//!
//! ## Modules
//!
//! - **`token`**: Design tokens as supplied by an external dictionary.
//! - **`resolver`**: The injected reference-resolution capability and token source.
//! - **`typography`**: Weight mapping, font file names, percentage and spacing conversion.
//! - **`options`**: File header, import and access-level options.
//! - **`document`**: The platform-neutral document handed to platform renderers.
//! - **`error`**: Error type shared across the workspace.

pub mod document;
pub mod error;
pub mod options;
pub mod resolver;
pub mod token;
pub mod typography;

pub use document::{PlatformRenderer, TypographyDocument, emit_with};
pub use error::{DtkError, Result};
pub use options::{AccessLevel, FileHeader, FormatOptions, FormatOptionsBuilder, HeaderContext};
pub use resolver::{LiteralResolver, ReferenceResolver, TokenSource};
pub use token::{
    DesignToken, DesignTokenValue, TYPOGRAPHY_CATEGORY, TokenValue, TypographyToken,
    TypographyValue,
};
pub use typography::{
    FontWeight, ResolvedTypographyStyle, compute_letter_spacing, convert_percentage,
    font_file_name, map_weight, parse_number,
};
