//! icon2logo: turn a line icon into a logo
//!
//! This crate restyles SVG icons (stroke color and thickness, fill, padding,
//! and a circular or rounded-square background) and exports the result as
//! SVG text or PNG bitmaps.
//!
//! # Example
//!
//! ```
//! use icon2logo::{transform_svg, Color, SourceIcon, StyleChange, StyleParameters};
//!
//! let icon = SourceIcon::new(
//!     r#"<svg width="24" height="24" stroke="black" stroke-width="2"><circle cx="12" cy="12" r="8"/></svg>"#,
//! );
//!
//! let params = StyleParameters::seeded_from(icon.markup())
//!     .apply(StyleChange::StrokeColor(Color::parse("#ffffff").unwrap()))
//!     .apply(StyleChange::BackgroundEnabled(true))
//!     .apply(StyleChange::BackgroundColor(Color::parse("#2563eb").unwrap()));
//!
//! let logo = transform_svg(&icon, &params);
//! assert!(logo.contains(r##"<circle cx="12" cy="12" r="11" fill="#2563eb""##));
//! ```
//!
//! # Editing Sessions
//!
//! [`Editor`] keeps one icon, its parameters, and the rendered previews in
//! sync, and can be driven by a [`StyleProfile`] through [`Configurable`]:
//!
//! ```
//! use icon2logo::{Configurable, Editor, StyleProfile};
//!
//! let mut editor = Editor::new(2.0);
//! editor.pick_example(3).unwrap();
//!
//! let profile = StyleProfile::from_json(r#"{"padding": 0}"#).unwrap();
//! editor.apply_profile(&profile);
//!
//! let json = editor.export_profile().to_json().unwrap();
//! assert!(json.contains("\"padding\":0.0"));
//! ```

mod color;
mod editor;
mod error;
mod export;
mod icon;
mod params;
mod profile;
mod raster;
pub mod rewrite;
mod samples;
mod slot;

pub use color::Color;
pub use editor::{
    ColorField, Configurable, Confirm, DELETE_PROMPT, Editor, EditorState, RESET_PROMPT,
};
pub use error::{Error, Result};
pub use export::{
    Artifact, Clipboard, ExportFormat, ExportPreset, ExportSize, MAX_EXPORT_SIZE, file_name,
};
pub use icon::{MIN_ICON_SIZE, SourceIcon, derive_icon_size};
pub use params::{
    CORNER_RADIUS_RANGE, NEUTRAL_PADDING, PADDING_RANGE, STROKE_WIDTH_RANGE, StyleChange,
    StyleParameters,
};
pub use profile::{BackgroundSettings, FillSettings, StrokeSettings, StyleProfile};
pub use raster::{Bitmap, EncodedBitmap, PREVIEW_SIZE, RasterEncoding, Rasterizer, data_uri};
pub use rewrite::{RewriteContext, RewritePipeline, RewriteStep, transform_svg};
pub use samples::{SAMPLES, Sample, sample};
pub use slot::{RenderOutcome, RenderRequest, RenderSlot, SlotKind};
