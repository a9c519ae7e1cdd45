//! The icon as the user supplied it.
//!
//! A [`SourceIcon`] is immutable once created. Every styled variant is
//! derived from it, and resetting the editor goes back to it.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Smallest viewport edge assumed for any icon, in user units.
pub const MIN_ICON_SIZE: u32 = 24;

static WIDTH_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"width="(\d+)""#).expect("valid width pattern"));
static HEIGHT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"height="(\d+)""#).expect("valid height pattern"));

/// Original SVG markup together with its derived viewport size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIcon {
    markup: String,
    size: u32,
}

impl SourceIcon {
    /// Wraps markup without checking that it looks like SVG.
    pub fn new(markup: impl Into<String>) -> Self {
        let markup = markup.into();
        let size = derive_icon_size(&markup);
        Self { markup, size }
    }

    /// Accepts pasted text if it contains an `<svg` element.
    pub fn from_paste(text: &str) -> Option<Self> {
        text.contains("<svg").then(|| Self::new(text))
    }

    /// Reads an icon from an `.svg` file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let is_svg = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if !is_svg {
            return Err(Error::NotSvgFile(path.to_path_buf()));
        }

        let markup = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(markup))
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// The square viewport edge the geometry and background steps work in.
    pub fn size(&self) -> u32 {
        self.size
    }
}

/// Largest of the first integral `width`/`height` attributes, never below
/// [`MIN_ICON_SIZE`].
///
/// Only the first match of each pattern counts, wherever it appears, so
/// `stroke-width="2"` can win when the root element has no `width`.
pub fn derive_icon_size(markup: &str) -> u32 {
    let first = |re: &Regex| {
        re.captures(markup)
            .and_then(|caps| parse_saturating(&caps[1]))
            .unwrap_or(0)
    };
    first(&WIDTH_ATTR)
        .max(first(&HEIGHT_ATTR))
        .max(MIN_ICON_SIZE)
}

/// Parses ASCII digits, saturating at `u32::MAX`. `\d` also matches
/// non-ASCII digits, which are not numbers here.
fn parse_saturating(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_uses_largest_dimension() {
        assert_eq!(derive_icon_size(r#"<svg width="48" height="32">"#), 48);
        assert_eq!(derive_icon_size(r#"<svg width="32" height="64">"#), 64);
    }

    #[test]
    fn size_has_floor() {
        assert_eq!(derive_icon_size(r#"<svg width="16" height="16">"#), 24);
        assert_eq!(derive_icon_size(r#"<svg viewBox="0 0 10 10">"#), 24);
    }

    #[test]
    fn size_ignores_fractional_values() {
        // "1.6" does not match the integral pattern at all
        assert_eq!(derive_icon_size(r#"<svg stroke-width="1.6">"#), 24);
    }

    #[test]
    fn oversized_dimension_saturates() {
        assert_eq!(derive_icon_size(r#"<svg width="5000000000" height="24">"#), u32::MAX);
        assert_eq!(
            derive_icon_size(&format!(r#"<svg height="{}">"#, "9".repeat(40))),
            u32::MAX
        );
        // Arabic-Indic digits match `\d` but are not a size
        assert_eq!(derive_icon_size("<svg width=\"\u{663}\u{662}\">"), 24);
    }

    #[test]
    fn size_takes_first_match_anywhere() {
        let markup = r#"<svg viewBox="0 0 24 24"><path stroke-width="30"/></svg>"#;
        assert_eq!(derive_icon_size(markup), 30);
    }

    #[test]
    fn paste_requires_svg_element() {
        assert!(SourceIcon::from_paste("hello world").is_none());
        let icon = SourceIcon::from_paste(r#"<svg width="32"></svg>"#).unwrap();
        assert_eq!(icon.size(), 32);
    }

    #[test]
    fn file_requires_svg_extension() {
        let err = SourceIcon::from_file(Path::new("icon.png")).unwrap_err();
        assert!(matches!(err, Error::NotSvgFile(_)));
    }

    #[test]
    fn file_roundtrip() {
        let path = std::env::temp_dir().join(format!("icon2logo-icon-{}.svg", std::process::id()));
        std::fs::write(&path, r#"<svg width="40" height="40"></svg>"#).unwrap();
        let icon = SourceIcon::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(icon.size(), 40);
        assert!(icon.markup().starts_with("<svg"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SourceIcon::from_file(Path::new("/definitely/not/here.svg")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("here.svg"));
    }
}
