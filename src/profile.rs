//! Serializable style profile.
//!
//! A [`StyleProfile`] captures the editor's style settings as JSON so they
//! can be saved, shared, or passed to the command-line tool.
//!
//! # Example
//!
//! ```
//! use icon2logo::{BackgroundSettings, Color, StrokeSettings, StyleProfile};
//!
//! let profile = StyleProfile::new()
//!     .with_stroke(StrokeSettings {
//!         color: Color::parse("#ffffff").unwrap(),
//!         width: 2.0,
//!     })
//!     .with_background(BackgroundSettings {
//!         color: Color::parse("#1e293b").unwrap(),
//!         corner_radius: 4.0,
//!         enabled: true,
//!     });
//!
//! let json = profile.to_json().unwrap();
//! let restored = StyleProfile::from_json(&json).unwrap();
//! assert_eq!(restored, profile);
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::params::{CORNER_RADIUS_RANGE, StyleChange, StyleParameters};

// ============================================================================
// Section Settings
// ============================================================================

/// Stroke color and thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct StrokeSettings {
    pub color: Color,
    pub width: f64,
}

/// Fill color, applied to filled shapes when enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct FillSettings {
    pub color: Color,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Background shape behind the icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct BackgroundSettings {
    pub color: Color,

    /// Corner radius percentage; `10` draws a circle.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

fn default_corner_radius() -> f64 {
    *CORNER_RADIUS_RANGE.end()
}

// ============================================================================
// StyleProfile
// ============================================================================

/// A serializable set of style settings.
///
/// Every section is optional; a missing section leaves the matching
/// parameters untouched when the profile is applied.
///
/// # JSON Format
///
/// ```json
/// {
///   "stroke": { "color": "#ffffff", "width": 2.0 },
///   "fill": { "color": "#f59e0b", "enabled": false },
///   "background": { "color": "#1e293b", "cornerRadius": 4.0, "enabled": true },
///   "padding": -2.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct StyleProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundSettings>,

    /// Padding offset; lower values enlarge the icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

impl StyleProfile {
    /// Creates an empty profile with no sections set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke(mut self, settings: StrokeSettings) -> Self {
        self.stroke = Some(settings);
        self
    }

    pub fn with_fill(mut self, settings: FillSettings) -> Self {
        self.fill = Some(settings);
        self
    }

    pub fn with_background(mut self, settings: BackgroundSettings) -> Self {
        self.background = Some(settings);
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    /// A profile with every section filled in from `params`.
    pub fn from_params(params: &StyleParameters) -> Self {
        Self {
            stroke: Some(StrokeSettings {
                color: params.stroke_color.clone(),
                width: params.stroke_width,
            }),
            fill: Some(FillSettings {
                color: params.fill_color.clone(),
                enabled: params.fill_enabled,
            }),
            background: Some(BackgroundSettings {
                color: params.background_color.clone(),
                corner_radius: params.corner_radius,
                enabled: params.background_enabled,
            }),
            padding: Some(params.padding),
        }
    }

    /// The changes this profile makes, in application order.
    pub fn changes(&self) -> Vec<StyleChange> {
        let mut changes = Vec::new();
        if let Some(ref stroke) = self.stroke {
            changes.push(StyleChange::StrokeColor(stroke.color.clone()));
            changes.push(StyleChange::StrokeWidth(stroke.width));
        }
        if let Some(ref fill) = self.fill {
            changes.push(StyleChange::FillColor(fill.color.clone()));
            changes.push(StyleChange::FillEnabled(fill.enabled));
        }
        if let Some(ref background) = self.background {
            changes.push(StyleChange::BackgroundColor(background.color.clone()));
            changes.push(StyleChange::CornerRadius(background.corner_radius));
            changes.push(StyleChange::BackgroundEnabled(background.enabled));
        }
        if let Some(padding) = self.padding {
            changes.push(StyleChange::Padding(padding));
        }
        changes
    }

    /// Applies the profile's sections on top of `params`.
    pub fn apply_to(&self, params: StyleParameters) -> StyleParameters {
        self.changes().into_iter().fold(params, StyleParameters::apply)
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn color(value: &str) -> Color {
        Color::parse(value).unwrap()
    }

    #[test]
    fn profile_serialization_roundtrip() {
        let profile = StyleProfile::new()
            .with_fill(FillSettings {
                color: color("#f59e0b"),
                enabled: false,
            })
            .with_padding(-2.0);

        let json = profile.to_json().unwrap();
        let restored = StyleProfile::from_json(&json).unwrap();

        assert_eq!(restored, profile);
        assert!(restored.stroke.is_none());
        assert!(restored.background.is_none());
    }

    #[test]
    fn profile_json_format() {
        let profile = StyleProfile::new().with_background(BackgroundSettings {
            color: color("navy"),
            corner_radius: 3.0,
            enabled: true,
        });

        let json = profile.to_json_pretty().unwrap();

        assert!(json.contains("\"background\""));
        assert!(json.contains("\"cornerRadius\""));
        assert!(json.contains("\"navy\""));
        assert!(!json.contains("\"stroke\""));
    }

    #[test]
    fn defaults_for_missing_fields() {
        let profile =
            StyleProfile::from_json(r##"{"background":{"color":"#000"},"fill":{"color":"red"}}"##)
                .unwrap();
        let background = profile.background.unwrap();
        assert_eq!(background.corner_radius, 10.0);
        assert!(background.enabled);
        assert!(profile.fill.unwrap().enabled);
    }

    #[test]
    fn invalid_color_is_rejected() {
        let err = StyleProfile::from_json(r#"{"stroke":{"color":"blurple","width":1}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::Profile(_)));
    }

    #[test]
    fn empty_profile_changes_nothing() {
        let profile = StyleProfile::from_json("{}").unwrap();
        assert!(profile.changes().is_empty());

        let params = StyleParameters::seeded_from(r#"<svg stroke="red" stroke-width="2">"#);
        assert_eq!(profile.apply_to(params.clone()), params);
    }

    #[test]
    fn partial_profile_applies_its_sections() {
        let params = StyleParameters::default();
        let updated = StyleProfile::new()
            .with_stroke(StrokeSettings {
                color: color("white"),
                width: 9.0,
            })
            .with_padding(0.0)
            .apply_to(params.clone());

        assert_eq!(updated.stroke_color, color("white"));
        assert_eq!(updated.stroke_width, 3.0);
        assert_eq!(updated.padding, 0.0);
        assert_eq!(updated.fill_color, params.fill_color);
        assert_eq!(updated.background_enabled, params.background_enabled);
    }

    #[test]
    fn export_then_apply_restores_params() {
        let params = StyleParameters::default()
            .apply(StyleChange::FillEnabled(true))
            .apply(StyleChange::BackgroundColor(color("#334155")))
            .apply(StyleChange::CornerRadius(2.5))
            .apply(StyleChange::Padding(1.0));

        let profile = StyleProfile::from_params(&params);
        assert_eq!(profile.apply_to(StyleParameters::default()), params);
    }
}
