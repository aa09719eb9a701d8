//! # DTK Registry
//!
//! Named output formats over a design-token dictionary.
//!
//! [`FormatRegistry::with_defaults`] registers `swift/typography`, which keeps
//! only the dictionary's typography tokens and emits Swift/UIKit extensions.
//! Calling [`dtk_swift::emit`] directly produces the same text for an already
//! filtered token list.
//!
//! ## Modules
//!
//! - **`formatter`**: The `Formatter` trait, category filtering and the typography formatter.
//! - **`registry`**: Name-to-formatter registry.
//! - **`telemetry`**: Console `tracing` subscriber setup.

pub mod formatter;
pub mod registry;
pub mod telemetry;

pub use formatter::{
    FnFormatter, Formatter, TokenPredicate, TypographyFormatter, category_predicate,
};
pub use registry::FormatRegistry;
pub use telemetry::{TelemetryConfig, init_telemetry, init_with_config};
