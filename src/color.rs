//! Validated paint values for strokes, fills and backgrounds.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A paint value accepted by the style parameters.
///
/// Accepts CSS hex colors (`#rgb`, `#rrggbb`), CSS color names and the
/// keywords `none` and `transparent`. The text is kept exactly as entered
/// (minus surrounding whitespace) because it is written verbatim into the
/// SVG markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[cfg_attr(
    feature = "jsonschema",
    derive(schemars::JsonSchema),
    schemars(transparent)
)]
pub struct Color(String);

impl Color {
    /// Parses and validates a paint value.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if resolve(value).is_some() || is_keyword(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(Error::InvalidColor(value.to_string()))
        }
    }

    pub fn black() -> Self {
        Self("black".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_keyword(value: &str) -> bool {
    value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("transparent")
}

fn resolve(value: &str) -> Option<Srgb<u8>> {
    match value.strip_prefix('#') {
        Some(hex) if is_hex_digits(hex) => value.parse::<Srgb<u8>>().ok(),
        Some(_) => None,
        None => palette::named::from_str(&value.to_ascii_lowercase()),
    }
}

/// Three or six ASCII hex digits, the only shapes palette slices safely.
fn is_hex_digits(hex: &str) -> bool {
    matches!(hex.len(), 3 | 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}
