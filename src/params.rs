//! User-adjustable style parameters and the reducer that updates them.

use std::ops::RangeInclusive;

use crate::color::Color;
use crate::rewrite::normalize::normalize_attributes;
use crate::rewrite::style::{first_stroke_value, first_stroke_width_value};

/// Allowed stroke widths, in user units.
pub const STROKE_WIDTH_RANGE: RangeInclusive<f64> = 0.0..=3.0;

/// Allowed corner radius percentages. `10` or more draws a full circle.
pub const CORNER_RADIUS_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// Allowed padding offsets. Lower values enlarge the icon.
pub const PADDING_RANGE: RangeInclusive<f64> = -10.0..=10.0;

/// Padding offset at which the geometry step is the identity transform.
pub const NEUTRAL_PADDING: f64 = -5.0;

/// Every knob the editor exposes.
///
/// Values are clamped into their ranges whenever they enter through
/// [`StyleParameters::apply`] or [`StyleParameters::seeded_from`].
#[derive(Debug, Clone, PartialEq)]
pub struct StyleParameters {
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub fill_enabled: bool,
    pub fill_color: Color,
    pub background_enabled: bool,
    pub background_color: Color,
    /// Fraction of `icon_size / 20` used as the background corner radius.
    pub corner_radius: f64,
    pub padding: f64,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self::with_stroke(Color::black(), 1.0)
    }
}

impl StyleParameters {
    /// Defaults derived from a stroke color and width.
    ///
    /// The fill and background colors start out equal to the stroke color.
    pub fn with_stroke(stroke_color: Color, stroke_width: f64) -> Self {
        Self {
            fill_color: stroke_color.clone(),
            background_color: stroke_color.clone(),
            stroke_color,
            stroke_width: clamp_to(stroke_width, &STROKE_WIDTH_RANGE),
            fill_enabled: false,
            background_enabled: false,
            corner_radius: *CORNER_RADIUS_RANGE.end(),
            padding: NEUTRAL_PADDING,
        }
    }

    /// Defaults seeded from the first stroke color and width in the markup.
    ///
    /// Falls back to [`StyleParameters::default`] values for anything that is
    /// missing or does not parse.
    pub fn seeded_from(markup: &str) -> Self {
        let normalized = normalize_attributes(markup);
        let defaults = Self::default();

        let stroke_color = first_stroke_value(&normalized)
            .and_then(|value| Color::parse(value).ok())
            .unwrap_or(defaults.stroke_color);
        let stroke_width = first_stroke_width_value(&normalized)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|width| width.is_finite())
            .unwrap_or(defaults.stroke_width);

        Self::with_stroke(stroke_color, stroke_width)
    }

    /// Returns the parameters with one change applied.
    pub fn apply(mut self, change: StyleChange) -> Self {
        match change {
            StyleChange::StrokeColor(color) => self.stroke_color = color,
            StyleChange::StrokeWidth(width) => {
                self.stroke_width = clamp_to(width, &STROKE_WIDTH_RANGE)
            }
            StyleChange::FillEnabled(enabled) => self.fill_enabled = enabled,
            StyleChange::FillColor(color) => self.fill_color = color,
            StyleChange::BackgroundEnabled(enabled) => self.background_enabled = enabled,
            StyleChange::BackgroundColor(color) => self.background_color = color,
            StyleChange::CornerRadius(radius) => {
                self.corner_radius = clamp_to(radius, &CORNER_RADIUS_RANGE)
            }
            StyleChange::Padding(padding) => self.padding = clamp_to(padding, &PADDING_RANGE),
        }
        self
    }
}

/// A single edit to [`StyleParameters`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleChange {
    StrokeColor(Color),
    StrokeWidth(f64),
    FillEnabled(bool),
    FillColor(Color),
    BackgroundEnabled(bool),
    BackgroundColor(Color),
    CornerRadius(f64),
    Padding(f64),
}

/// Clamps into `range`; NaN collapses to the lower bound.
fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}
