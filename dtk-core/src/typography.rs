//! Typography value conversions.
//!
//! Everything here is a pure function of the resolved field values. Unknown
//! weights fall back to [`FontWeight::Regular`] and unparseable numbers to
//! `0.0`; nothing in this module returns an error except the resolver call in
//! [`ResolvedTypographyStyle::resolve`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::resolver::ReferenceResolver;
use crate::token::{TokenValue, TypographyToken};

/// The four weights the generated code distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Bold,
    Semibold,
    Medium,
    #[default]
    Regular,
}

impl FontWeight {
    pub const ALL: [FontWeight; 4] =
        [FontWeight::Bold, FontWeight::Semibold, FontWeight::Medium, FontWeight::Regular];

    /// Parse a recognised weight name, ignoring case. `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bold" => Some(Self::Bold),
            "semibold" => Some(Self::Semibold),
            "medium" => Some(Self::Medium),
            "regular" => Some(Self::Regular),
            _ => None,
        }
    }

    /// Lowercase name, as used by platform weight constants.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Semibold => "semibold",
            Self::Medium => "medium",
            Self::Regular => "regular",
        }
    }

    /// Suffix appended to the family name to form the font file name.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Semibold => "SemiBold",
            Self::Medium => "Medium",
            Self::Regular => "Regular",
        }
    }
}

impl std::fmt::Display for FontWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a weight name to a [`FontWeight`], case-insensitively.
/// Unrecognised names, including the empty string, map to `Regular`.
pub fn map_weight(name: &str) -> FontWeight {
    FontWeight::from_name(name).unwrap_or_default()
}

/// Remove brace-reference wrapper characters.
pub fn strip_reference_braces(value: &str) -> String {
    value.replace(['{', '}'], "")
}

/// Font file name for a family/weight pair, e.g. `Pretendard-SemiBold`.
/// The bare family is returned when the weight is not recognised.
pub fn font_file_name(family: &str, weight: &str) -> String {
    let family = strip_reference_braces(family);
    let weight = strip_reference_braces(weight);

    match FontWeight::from_name(&weight) {
        Some(weight) => format!("{}-{}", family, weight.file_suffix()),
        None => family,
    }
}

/// Parse the leading number of a string: optional sign, digits with an
/// optional fraction, optional exponent. Trailing text such as units is
/// ignored, so `"16px"` parses as 16.
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Numeric value of a token field, `0.0` when it has no numeric prefix.
pub fn parse_number(value: &TokenValue) -> f64 {
    match value {
        TokenValue::Number(n) => *n,
        TokenValue::Text(s) => parse_leading_number(s).unwrap_or_else(|| {
            warn!(value = %s, "non-numeric token value, using 0.0");
            0.0
        }),
    }
}

/// Split a percentage string into its numeric part, or `None` if the value is
/// not a percentage.
fn percentage(value: &TokenValue) -> Option<f64> {
    let number = value.percentage_text()?;
    Some(parse_number(&TokenValue::from(number)))
}

/// `"42.5%"` becomes `0.425`; anything else is parsed as a plain number.
pub fn convert_percentage(value: &TokenValue) -> f64 {
    match percentage(value) {
        Some(pct) => pct / 100.0,
        None => parse_number(value),
    }
}

/// Letter spacing in points. Percentages are relative to the font size;
/// other values are already absolute.
pub fn compute_letter_spacing(font_size: f64, value: &TokenValue) -> f64 {
    match percentage(value) {
        Some(pct) => (pct / 100.0) * font_size,
        None => parse_number(value),
    }
}

/// A typography token after resolution and conversion. Computed fresh for
/// every emission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTypographyStyle {
    pub name: String,
    pub font_family_name: String,
    pub font_weight_name: String,
    pub font_size_points: f64,
    pub line_height_multiple: f64,
    pub letter_spacing_points: f64,
    pub platform_weight: FontWeight,
    pub font_file_name: String,
}

impl ResolvedTypographyStyle {
    /// Resolve every field of `token` through `resolver` and convert it.
    pub fn resolve<R>(token: &TypographyToken, resolver: &R) -> Result<Self>
    where
        R: ReferenceResolver + ?Sized,
    {
        let value = &token.value;
        let family = resolver.resolve(&value.font_family)?;
        let weight = resolver.resolve(&value.font_weight)?;
        let size = resolver.resolve(&value.font_size)?;
        let line_height = resolver.resolve(&value.line_height)?;
        let letter_spacing = resolver.resolve(&value.letter_spacing)?;

        let font_family_name = strip_reference_braces(&family.to_string());
        let raw_weight = strip_reference_braces(&weight.to_string());
        let font_size_points = parse_number(&size);

        let style = Self {
            name: token.name.clone(),
            font_file_name: font_file_name(&font_family_name, &raw_weight),
            platform_weight: map_weight(&raw_weight),
            font_weight_name: raw_weight.to_lowercase(),
            font_family_name,
            font_size_points,
            line_height_multiple: convert_percentage(&line_height),
            letter_spacing_points: compute_letter_spacing(font_size_points, &letter_spacing),
        };

        debug!(
            token = %style.name,
            file = %style.font_file_name,
            weight = %style.platform_weight,
            size = style.font_size_points,
            "resolved typography token"
        );
        Ok(style)
    }
}
