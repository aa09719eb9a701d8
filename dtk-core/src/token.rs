//! Design-token data model.
//!
//! Tokens arrive from an external dictionary already parsed. Every field is a
//! [`TokenValue`] that may still be a `{path.to.token}` reference; resolving it
//! is the job of a [`ReferenceResolver`](crate::ReferenceResolver).

use serde::{Deserialize, Serialize};

/// Category attribute carried by typography tokens.
pub const TYPOGRAPHY_CATEGORY: &str = "typography";

/// A single token field: either a string (literal or reference) or a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

impl TokenValue {
    /// Returns the string form if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(s) => Some(s),
            TokenValue::Number(_) => None,
        }
    }

    /// True for values written in brace-reference syntax, e.g. `{font.size.lg}`.
    pub fn is_reference(&self) -> bool {
        self.reference_path().is_some()
    }

    /// The path inside a brace reference, without the braces.
    pub fn reference_path(&self) -> Option<&str> {
        let text = self.as_text()?.trim();
        let inner = text.strip_prefix('{')?.strip_suffix('}')?;
        if inner.is_empty() || inner.contains(['{', '}']) {
            return None;
        }
        Some(inner)
    }

    /// The text before the trailing `%` of a percentage value, e.g. `"135"`
    /// for `"135%"`. `None` for numbers and non-percentage text.
    pub fn percentage_text(&self) -> Option<&str> {
        self.as_text()?.trim_end().strip_suffix('%')
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Number(n) => write!(f, "{}", n),
            TokenValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(s: &str) -> Self {
        TokenValue::Text(s.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(s: String) -> Self {
        TokenValue::Text(s)
    }
}

impl From<f64> for TokenValue {
    fn from(n: f64) -> Self {
        TokenValue::Number(n)
    }
}

/// The composite value of a typography token, before reference resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyValue {
    pub font_family: TokenValue,
    pub font_weight: TokenValue,
    pub font_size: TokenValue,
    pub line_height: TokenValue,
    pub letter_spacing: TokenValue,
}

/// A typography token as handed to the emitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypographyToken {
    /// Unique token name, used verbatim for generated symbol names.
    pub name: String,
    #[serde(flatten)]
    pub value: TypographyValue,
}

impl TypographyToken {
    pub fn new(
        name: impl Into<String>,
        font_family: impl Into<TokenValue>,
        font_weight: impl Into<TokenValue>,
        font_size: impl Into<TokenValue>,
        line_height: impl Into<TokenValue>,
        letter_spacing: impl Into<TokenValue>,
    ) -> Self {
        Self {
            name: name.into(),
            value: TypographyValue {
                font_family: font_family.into(),
                font_weight: font_weight.into(),
                font_size: font_size.into(),
                line_height: line_height.into(),
                letter_spacing: letter_spacing.into(),
            },
        }
    }
}

/// Original value of a dictionary token.
///
/// `Typography` must stay before `Scalar` so that `#[serde(untagged)]` tries
/// the composite shape first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DesignTokenValue {
    Typography(TypographyValue),
    Scalar(TokenValue),
}

/// Any token of the external dictionary, with the category attribute used for
/// filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignToken {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub value: DesignTokenValue,
}

impl DesignToken {
    pub fn typography(name: impl Into<String>, value: TypographyValue) -> Self {
        Self {
            name: name.into(),
            category: Some(TYPOGRAPHY_CATEGORY.to_string()),
            value: DesignTokenValue::Typography(value),
        }
    }

    pub fn scalar(
        name: impl Into<String>,
        category: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Self {
        Self {
            name: name.into(),
            category: Some(category.into()),
            value: DesignTokenValue::Scalar(value.into()),
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category.as_deref() == Some(category)
    }

    /// View this token as a typography token, if its value is composite.
    pub fn as_typography(&self) -> Option<TypographyToken> {
        match &self.value {
            DesignTokenValue::Typography(value) => {
                Some(TypographyToken { name: self.name.clone(), value: value.clone() })
            }
            DesignTokenValue::Scalar(_) => None,
        }
    }
}
