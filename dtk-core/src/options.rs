//! Format options: file header, imports and access level.
//!
//! All options are optional. A missing option removes the matching section
//! of the output; it never causes an error.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DtkError;

/// Information handed to a generated file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderContext {
    /// Name of the format producing the file, e.g. `swift/typography`.
    pub format_name: String,
    /// Number of tokens going into the file.
    pub token_count: usize,
}

/// Produces header lines from the emission context.
pub type HeaderFn = Arc<dyn Fn(&HeaderContext) -> Vec<String> + Send + Sync>;

/// Comment block placed verbatim at the top of the generated file.
#[derive(Clone)]
pub enum FileHeader {
    /// Fixed lines.
    Lines(Vec<String>),
    /// Lines computed per emission.
    Generated(HeaderFn),
}

impl FileHeader {
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Lines(lines.into_iter().map(Into::into).collect())
    }

    pub fn generated<F>(f: F) -> Self
    where
        F: Fn(&HeaderContext) -> Vec<String> + Send + Sync + 'static,
    {
        Self::Generated(Arc::new(f))
    }

    pub fn render(&self, ctx: &HeaderContext) -> Vec<String> {
        match self {
            Self::Lines(lines) => lines.clone(),
            Self::Generated(f) => f(ctx),
        }
    }
}

impl std::fmt::Debug for FileHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lines(lines) => f.debug_tuple("Lines").field(lines).finish(),
            Self::Generated(_) => f.write_str("Generated(<fn>)"),
        }
    }
}

/// Accepted JSON shapes: `["line", ...]` or `{"text": ["line", ...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FileHeaderRepr {
    Lines(Vec<String>),
    Text { text: Vec<String> },
}

impl<'de> Deserialize<'de> for FileHeader {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match FileHeaderRepr::deserialize(deserializer)? {
            FileHeaderRepr::Lines(lines) | FileHeaderRepr::Text { text: lines } => {
                Self::Lines(lines)
            }
        })
    }
}

impl Serialize for FileHeader {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Lines(lines) => lines.serialize(serializer),
            Self::Generated(_) => {
                Err(serde::ser::Error::custom("generated file headers cannot be serialized"))
            }
        }
    }
}

/// Visibility keyword for generated symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AccessLevel {
    Private,
    Fileprivate,
    #[default]
    Internal,
    Package,
    Public,
    Open,
}

impl AccessLevel {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Fileprivate => "fileprivate",
            Self::Internal => "internal",
            Self::Package => "package",
            Self::Public => "public",
            Self::Open => "open",
        }
    }
}

impl FromStr for AccessLevel {
    type Err = DtkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "private" => Ok(Self::Private),
            "fileprivate" => Ok(Self::Fileprivate),
            "internal" => Ok(Self::Internal),
            "package" => Ok(Self::Package),
            "public" => Ok(Self::Public),
            "open" => Ok(Self::Open),
            other => Err(DtkError::invalid_option(
                "accessLevel",
                format!(
                    "'{other}' is not one of private, fileprivate, internal, package, public, open"
                ),
            )),
        }
    }
}

impl TryFrom<String> for AccessLevel {
    type Error = DtkError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<AccessLevel> for String {
    fn from(level: AccessLevel) -> Self {
        level.keyword().to_string()
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Options recognised by the typography formats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_header: Option<FileHeader>,
    #[serde(default, alias = "import", skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,
}

impl FormatOptions {
    pub fn builder() -> FormatOptionsBuilder {
        FormatOptionsBuilder::default()
    }

    /// Access level to emit, `internal` when unset.
    pub fn access_level(&self) -> AccessLevel {
        self.access_level.unwrap_or_default()
    }

    /// Header lines for this emission, empty when no header is configured.
    pub fn header_lines(&self, ctx: &HeaderContext) -> Vec<String> {
        self.file_header.as_ref().map(|header| header.render(ctx)).unwrap_or_default()
    }
}

/// Builder for [`FormatOptions`].
#[derive(Debug, Clone, Default)]
pub struct FormatOptionsBuilder {
    options: FormatOptions,
}

impl FormatOptionsBuilder {
    pub fn file_header(mut self, header: FileHeader) -> Self {
        self.options.file_header = Some(header);
        self
    }

    /// Add one module import.
    pub fn import(mut self, module: impl Into<String>) -> Self {
        self.options.imports.push(module.into());
        self
    }

    pub fn access_level(mut self, level: AccessLevel) -> Self {
        self.options.access_level = Some(level);
        self
    }

    pub fn build(self) -> FormatOptions {
        self.options
    }
}
