//! Error types for DTK.
//!
//! Conversions never fail: unknown weights and unparseable numbers degrade to
//! defaults. Errors only come from the collaborators around the conversion
//! core.
//!
//! # Error Categories
//!
//! - **Resolution**: the injected reference resolver could not dereference a field
//! - **Rendering**: a platform template failed to register or render
//! - **Registry**: an output format was requested by a name nobody registered
//! - **Configuration**: a format option could not be interpreted

use thiserror::Error;

/// Errors that can occur while emitting generated sources.
#[derive(Debug, Error)]
pub enum DtkError {
    /// A token field could not be dereferenced.
    #[error("Failed to resolve '{reference}': {reason}")]
    Resolve {
        /// The raw field value, usually a `{path.to.token}` reference
        reference: String,
        /// Why the resolver gave up
        reason: String,
    },

    /// A platform template failed to register or render.
    #[error("Template '{template}' failed: {reason}")]
    Render {
        /// Name of the template
        template: String,
        /// Underlying template engine message
        reason: String,
    },

    /// No formatter is registered under the requested name.
    #[error("Unknown format '{name}'. Registered formats: {available}")]
    UnknownFormat {
        /// The requested format name
        name: String,
        /// Comma separated list of registered names
        available: String,
    },

    /// A format option holds a value the emitter cannot use.
    #[error("Invalid option '{field}': {reason}")]
    InvalidOption {
        /// The option name as it appears in configuration
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl DtkError {
    /// Create a resolution error.
    pub fn resolve(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Resolve { reference: reference.into(), reason: reason.into() }
    }

    /// Create a template error.
    pub fn render(template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Render { template: template.into(), reason: reason.into() }
    }

    /// Create an unknown-format error from the registered names.
    pub fn unknown_format<S: AsRef<str>>(name: impl Into<String>, available: &[S]) -> Self {
        let available = if available.is_empty() {
            "(none)".to_string()
        } else {
            available.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", ")
        };
        Self::UnknownFormat { name: name.into(), available }
    }

    /// Create an invalid-option error.
    pub fn invalid_option(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption { field: field.into(), reason: reason.into() }
    }

    /// Returns true if the error came from the reference resolver.
    pub fn is_resolve_error(&self) -> bool {
        matches!(self, Self::Resolve { .. })
    }
}

/// Result type alias for DTK operations.
pub type Result<T> = std::result::Result<T, DtkError>;
