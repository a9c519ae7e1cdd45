//! Padding, expressed as a uniform scale about the viewport center.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{RewriteContext, RewriteStep, format_number};

static SHAPE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(rect|circle|path|ellipse|polygon|polyline|line)(\s[^>]*)?>")
        .expect("valid shape tag pattern")
});

/// Maps a padding offset in `[-10, 10]` to a scale in `[0.25, 1.25]`.
///
/// Lower padding gives a larger icon; `-5` is the identity.
pub fn scale_factor(padding: f64) -> f64 {
    (-padding + 15.0) / 20.0
}

/// Offset that keeps a shape scaled by `scale` centered in the viewport.
pub fn translate_value(icon_size: u32, scale: f64) -> f64 {
    f64::from(icon_size) * (1.0 - scale) / 2.0
}

/// Prepends a `transform` attribute to every shape element.
///
/// Both translate axes use the same value since the viewport is treated as
/// square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryTransform {
    pub padding: f64,
}

impl GeometryTransform {
    /// The attribute written into every shape, e.g.
    /// `transform="translate(3, 3) scale(0.75)"`.
    pub fn transform_attribute(&self, icon_size: u32) -> String {
        let scale = scale_factor(self.padding);
        let translate = format_number(translate_value(icon_size, scale));
        format!(
            r#"transform="translate({translate}, {translate}) scale({})""#,
            format_number(scale)
        )
    }
}

impl RewriteStep for GeometryTransform {
    fn name(&self) -> &'static str {
        "geometry"
    }

    fn rewrite(&self, svg: &str, ctx: &RewriteContext) -> String {
        let attribute = self.transform_attribute(ctx.icon_size);
        SHAPE_TAG
            .replace_all(svg, |caps: &Captures| {
                let rest = caps.get(2).map_or("", |m| m.as_str());
                format!("<{} {attribute}{rest}>", &caps[1])
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(padding: f64, size: u32, svg: &str) -> String {
        GeometryTransform { padding }.rewrite(svg, &RewriteContext::new(size))
    }

    #[test]
    fn zero_padding_on_24() {
        let scale = scale_factor(0.0);
        assert_eq!(scale, 0.75);
        assert_eq!(translate_value(24, scale), 3.0);
        assert_eq!(
            GeometryTransform { padding: 0.0 }.transform_attribute(24),
            r#"transform="translate(3, 3) scale(0.75)""#
        );
    }

    #[test]
    fn scale_range_and_monotonicity() {
        assert_eq!(scale_factor(-10.0), 1.25);
        assert_eq!(scale_factor(10.0), 0.25);

        let mut previous = f64::INFINITY;
        for step in -20..=20 {
            let padding = f64::from(step) * 0.5;
            let scale = scale_factor(padding);
            assert!((0.25..=1.25).contains(&scale), "{padding} -> {scale}");
            assert!(scale < previous, "not decreasing at {padding}");
            previous = scale;
        }
    }

    #[test]
    fn enlarging_translates_negatively() {
        assert_eq!(
            GeometryTransform { padding: -10.0 }.transform_attribute(24),
            r#"transform="translate(-3, -3) scale(1.25)""#
        );
    }

    #[test]
    fn every_shape_kind_gets_transform() {
        let svg = r#"<svg width="24"><g><rect x="1"/><circle r="2"/><path d="M0"/><ellipse rx="1"/><polygon points="1"/><polyline points="2"/><line x1="0"/></g></svg>"#;
        let out = rewrite(-5.0, 24, svg);
        assert_eq!(out.matches(r#"transform="translate(0, 0) scale(1)""#).count(), 7);
        assert!(out.starts_with(r#"<svg width="24"><g><rect transform="#));
    }

    #[test]
    fn preserves_tag_and_attributes() {
        let out = rewrite(0.0, 24, r#"<circle cx="12" cy="12" r="3"/>"#);
        assert_eq!(
            out,
            r#"<circle transform="translate(3, 3) scale(0.75)" cx="12" cy="12" r="3"/>"#
        );
    }

    #[test]
    fn bare_tags_and_lookalikes() {
        let out = rewrite(0.0, 24, "<path></path><linearGradient id=\"g\"/><lines/>");
        assert_eq!(
            out,
            r#"<path transform="translate(3, 3) scale(0.75)"></path><linearGradient id="g"/><lines/>"#
        );
    }

    #[test]
    fn translate_uses_icon_size() {
        let out = rewrite(0.0, 48, r#"<rect width="48"/>"#);
        assert!(out.contains("translate(6, 6)"));
    }
}
