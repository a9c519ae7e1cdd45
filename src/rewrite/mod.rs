//! Text rewriting pipeline that turns an icon into a styled logo.
//!
//! The markup is never parsed into a tree. Each step is a small set of
//! regular-expression substitutions over the raw text, applied in a fixed
//! order:
//!
//! ```text
//! SourceIcon markup
//!     │
//!     ▼
//! ┌────────────┐
//! │ Normalize  │ ◄── camelCase attributes, `{`/`}` quoting artifacts
//! └─────┬──────┘
//!       ▼
//! ┌────────────┐
//! │   Style    │ ◄── stroke color, fill, stroke width
//! └─────┬──────┘
//!       ▼
//! ┌────────────┐
//! │  Geometry  │ ◄── padding as scale + translate on every shape
//! └─────┬──────┘
//!       ▼
//! ┌────────────┐
//! │ Background │ ◄── optional circle / rounded rect under the shapes
//! └────────────┘
//! ```
//!
//! Every step is total: if its patterns do not match, the text passes
//! through unchanged.

pub mod background;
pub mod geometry;
pub mod normalize;
pub mod style;

pub use background::{BackgroundConfig, BackgroundShape};
pub use geometry::GeometryTransform;
pub use normalize::NormalizeAttributes;
pub use style::StyleRewrite;

use crate::icon::SourceIcon;
use crate::params::StyleParameters;

/// Values shared by every step of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteContext {
    /// Square viewport edge of the source icon.
    pub icon_size: u32,
}

impl RewriteContext {
    pub fn new(icon_size: u32) -> Self {
        Self { icon_size }
    }

    pub fn for_icon(icon: &SourceIcon) -> Self {
        Self::new(icon.size())
    }
}

/// One substitution stage of the pipeline.
pub trait RewriteStep {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Rewrites `svg`, returning the new text.
    fn rewrite(&self, svg: &str, ctx: &RewriteContext) -> String;
}

/// The four steps, configured from one set of [`StyleParameters`].
#[derive(Debug, Clone, PartialEq)]
pub struct RewritePipeline {
    pub normalize: NormalizeAttributes,
    pub style: StyleRewrite,
    pub geometry: GeometryTransform,
    /// `None` when the background is disabled.
    pub background: Option<BackgroundConfig>,
}

impl RewritePipeline {
    pub fn from_params(params: &StyleParameters) -> Self {
        Self {
            normalize: NormalizeAttributes,
            style: StyleRewrite {
                stroke_color: params.stroke_color.clone(),
                stroke_width: params.stroke_width,
                fill: params.fill_enabled.then(|| params.fill_color.clone()),
            },
            geometry: GeometryTransform {
                padding: params.padding,
            },
            background: params.background_enabled.then(|| BackgroundConfig {
                color: params.background_color.clone(),
                corner_radius: params.corner_radius,
            }),
        }
    }

    /// Runs every configured step in order.
    pub fn render(&self, svg: &str, ctx: &RewriteContext) -> String {
        let mut steps: Vec<&dyn RewriteStep> = vec![&self.normalize, &self.style, &self.geometry];
        if let Some(background) = &self.background {
            steps.push(background);
        }

        steps.into_iter().fold(svg.to_string(), |text, step| {
            log::trace!("applying rewrite step `{}`", step.name());
            step.rewrite(&text, ctx)
        })
    }
}

/// Styles `icon` with `params`.
///
/// This is a pure function of its inputs; the same icon and parameters
/// always produce the same text.
///
/// ```
/// use icon2logo::{transform_svg, SourceIcon, StyleParameters};
///
/// let icon = SourceIcon::new(r#"<svg width="24" height="24"><path stroke="red"/></svg>"#);
/// let styled = transform_svg(&icon, &StyleParameters::default());
/// assert!(styled.contains(r#"stroke="black""#));
/// ```
pub fn transform_svg(icon: &SourceIcon, params: &StyleParameters) -> String {
    let ctx = RewriteContext::for_icon(icon);
    let out = RewritePipeline::from_params(params).render(icon.markup(), &ctx);
    log::debug!(
        "transformed icon ({} bytes -> {} bytes, size {})",
        icon.markup().len(),
        out.len(),
        ctx.icon_size
    );
    out
}

/// Formats a number the way it is written into attributes: shortest form,
/// no trailing `.0`, and never `-0`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::params::StyleChange;
    use crate::samples::SAMPLES;

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.75), "0.75");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1.5), "1.5");
    }

    #[test]
    fn steps_run_in_order() {
        // camelCase width must be normalized before the style step replaces it
        let icon = SourceIcon::new(r#"<svg width="24"><path strokeWidth={4} stroke="red"/></svg>"#);
        let params = StyleParameters::default()
            .apply(StyleChange::StrokeWidth(2.0))
            .apply(StyleChange::Padding(0.0));
        let out = transform_svg(&icon, &params);
        assert_eq!(
            out,
            r#"<svg width="24"><path transform="translate(3, 3) scale(0.75)" stroke-width="2" stroke="black"/></svg>"#
        );
    }

    #[test]
    fn background_is_not_transformed() {
        let icon = SourceIcon::new(r#"<svg width="24" height="24"><path stroke="red"/></svg>"#);
        let params = StyleParameters::default()
            .apply(StyleChange::BackgroundEnabled(true))
            .apply(StyleChange::Padding(0.0));
        let out = transform_svg(&icon, &params);
        assert!(out.starts_with(
            r#"<svg width="24" height="24"><circle cx="12" cy="12" r="11" fill="black" stroke="none" stroke-width="0" /><path transform="#
        ));
    }

    #[test]
    fn seeded_defaults_only_add_identity_transform() {
        for sample in SAMPLES {
            let icon = SourceIcon::new(sample.markup);
            let params = StyleParameters::seeded_from(icon.markup());
            let out = transform_svg(&icon, &params);

            let expected = normalize::normalize_attributes(icon.markup());
            let stripped = out.replace(r#" transform="translate(0, 0) scale(1)""#, "");
            assert_eq!(stripped, expected, "sample `{}` changed", sample.name);
        }
    }

    #[test]
    fn recolor_scenario() {
        let icon = SourceIcon::new(
            r##"<svg width="24" height="24"><g stroke="#333"><path stroke-width="2" stroke="#000"/></g></svg>"##,
        );
        let params = StyleParameters::seeded_from(icon.markup())
            .apply(StyleChange::StrokeColor(Color::parse("#ff0000").unwrap()));
        let out = transform_svg(&icon, &params);
        assert_eq!(out.matches(r##"stroke="#ff0000""##).count(), 2);
        assert!(!out.contains(r##"stroke="#000""##));
        assert!(out.contains(r#"stroke-width="2""#));
    }

    #[test]
    fn pipeline_skips_disabled_background() {
        let pipeline = RewritePipeline::from_params(&StyleParameters::default());
        assert!(pipeline.background.is_none());
        assert!(pipeline.style.fill.is_none());

        let params = StyleParameters::default().apply(StyleChange::BackgroundEnabled(true));
        assert!(RewritePipeline::from_params(&params).background.is_some());
    }
}
