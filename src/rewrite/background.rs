//! Background shape injected beneath the icon.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{RewriteContext, RewriteStep, format_number};
use crate::color::Color;

static SVG_OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg([^>]+)>").expect("valid svg tag pattern"));

/// The shape drawn behind the icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundShape {
    /// A circle inset by one unit so its edge is not clipped.
    Circle { center: f64, radius: f64 },
    /// A square covering the whole viewport with rounded corners.
    RoundedRect { size: f64, corner: f64 },
}

impl BackgroundShape {
    /// Picks the shape for a corner radius percentage.
    ///
    /// The corner radius is `corner_radius / 20 * icon_size`. Once it reaches
    /// half the icon the rectangle would already be a circle, so a circle is
    /// drawn instead; with the usual `[0, 10]` range that is exactly
    /// `corner_radius >= 10`.
    pub fn for_icon(corner_radius: f64, icon_size: u32) -> Self {
        let size = f64::from(icon_size);
        let corner = corner_radius / 20.0 * size;
        if corner >= size / 2.0 {
            Self::Circle {
                center: size / 2.0,
                radius: size / 2.0 - 1.0,
            }
        } else {
            Self::RoundedRect { size, corner }
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Self::Circle { .. })
    }

    /// Markup for the shape filled with `color` and no stroke.
    pub fn markup(&self, color: &Color) -> String {
        match *self {
            Self::Circle { center, radius } => {
                let c = format_number(center);
                format!(
                    r#"<circle cx="{c}" cy="{c}" r="{}" fill="{color}" stroke="none" stroke-width="0" />"#,
                    format_number(radius)
                )
            }
            Self::RoundedRect { size, corner } => {
                let size = format_number(size);
                let corner = format_number(corner);
                format!(
                    r#"<rect x="0" y="0" width="{size}" height="{size}" rx="{corner}" ry="{corner}" fill="{color}" stroke="none" stroke-width="0" />"#
                )
            }
        }
    }
}

/// Inserts a [`BackgroundShape`] right after the opening `<svg ...>` tag so
/// it paints first.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundConfig {
    pub color: Color,
    pub corner_radius: f64,
}

impl RewriteStep for BackgroundConfig {
    fn name(&self) -> &'static str {
        "background"
    }

    fn rewrite(&self, svg: &str, ctx: &RewriteContext) -> String {
        let shape = BackgroundShape::for_icon(self.corner_radius, ctx.icon_size).markup(&self.color);
        SVG_OPEN_TAG
            .replace(svg, |caps: &Captures| format!("<svg{}>{shape}", &caps[1]))
            .into_owned()
    }
}
