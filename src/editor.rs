//! Editing session: the loaded icon, its style, and the rendered previews.

use std::path::Path;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::export::{Artifact, Clipboard, ExportPreset, ExportSize};
use crate::icon::SourceIcon;
use crate::params::{StyleChange, StyleParameters};
use crate::profile::StyleProfile;
use crate::raster::{Bitmap, PREVIEW_SIZE, Rasterizer};
use crate::rewrite::transform_svg;
use crate::samples::sample;
use crate::slot::{RenderOutcome, RenderRequest, RenderSlot, SlotKind};

/// Question asked before discarding style changes.
pub const RESET_PROMPT: &str = "reset your changes?";

/// Question asked before discarding the loaded icon.
pub const DELETE_PROMPT: &str = "delete your work?";

// ============================================================================
// Traits
// ============================================================================

/// Trait for types that can be configured from a [`StyleProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    fn apply_profile(&mut self, profile: &StyleProfile);

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> StyleProfile;
}

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

// ============================================================================
// Editor
// ============================================================================

/// Whether an icon is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Empty,
    Editing,
}

/// A color parameter that can be copied to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Stroke,
    Fill,
    Background,
}

/// Holds one icon being styled and keeps its derived outputs current.
///
/// The styled markup is recomputed synchronously on every change. Bitmaps
/// are produced through [`RenderRequest`]s so the caller decides where
/// rendering runs; see [`Editor::render_requests`] and [`Editor::complete`],
/// or [`Editor::render_now`] to do it inline.
///
/// # Example
///
/// ```
/// use icon2logo::{Editor, EditorState, StyleChange};
///
/// let mut editor = Editor::new(1.0);
/// editor.pick_example(0).unwrap();
/// assert_eq!(editor.state(), EditorState::Editing);
///
/// editor.update(StyleChange::Padding(0.0)).unwrap();
/// assert!(editor.transformed().unwrap().contains("scale(0.75)"));
///
/// editor.render_now();
/// assert_eq!(editor.preview().unwrap().pixel_size(), 500);
/// ```
#[derive(Debug)]
pub struct Editor {
    original: Option<SourceIcon>,
    params: StyleParameters,
    transformed: Option<String>,
    export_size: ExportSize,
    rasterizer: Rasterizer,

    preview: RenderSlot,
    export: RenderSlot,
    preview_stale: bool,
    export_stale: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Editor {
    /// Creates an empty editor for a display with the given pixel ratio.
    pub fn new(device_pixel_ratio: f32) -> Self {
        Self {
            original: None,
            params: StyleParameters::default(),
            transformed: None,
            export_size: ExportSize::default(),
            rasterizer: Rasterizer::new(device_pixel_ratio),
            preview: RenderSlot::default(),
            export: RenderSlot::default(),
            preview_stale: false,
            export_stale: false,
        }
    }

    pub fn state(&self) -> EditorState {
        if self.original.is_some() {
            EditorState::Editing
        } else {
            EditorState::Empty
        }
    }

    pub fn original(&self) -> Option<&SourceIcon> {
        self.original.as_ref()
    }

    pub fn params(&self) -> &StyleParameters {
        &self.params
    }

    /// The styled markup, if an icon is loaded.
    pub fn transformed(&self) -> Option<&str> {
        self.transformed.as_deref()
    }

    pub fn export_size(&self) -> ExportSize {
        self.export_size
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    /// Starts editing `icon` with parameters seeded from its markup.
    pub fn load(&mut self, icon: SourceIcon) -> Result<()> {
        if self.original.is_some() {
            return Err(Error::IconAlreadyLoaded);
        }
        log::info!("loaded icon ({} bytes, size {})", icon.markup().len(), icon.size());
        self.params = StyleParameters::seeded_from(icon.markup());
        self.original = Some(icon);
        self.refresh();
        Ok(())
    }

    /// Loads an `.svg` file.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        if self.original.is_some() {
            return Err(Error::IconAlreadyLoaded);
        }
        self.load(SourceIcon::from_file(path)?)
    }

    /// Loads pasted text. Ignored unless the editor is empty and the text
    /// contains `<svg`; returns whether it was taken.
    pub fn paste(&mut self, text: &str) -> bool {
        if self.original.is_some() {
            log::debug!("ignoring paste while editing");
            return false;
        }
        match SourceIcon::from_paste(text) {
            Some(icon) => self.load(icon).is_ok(),
            None => {
                log::debug!("ignoring paste without svg markup");
                false
            }
        }
    }

    /// Loads one of the built-in examples.
    pub fn pick_example(&mut self, index: usize) -> Result<()> {
        let example = sample(index)?;
        self.load(SourceIcon::new(example.markup))
    }

    // ------------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------------

    /// Applies one parameter change and restyles the icon.
    pub fn update(&mut self, change: StyleChange) -> Result<()> {
        if self.original.is_none() {
            return Err(Error::NoIcon);
        }
        self.params = std::mem::take(&mut self.params).apply(change);
        self.refresh();
        Ok(())
    }

    /// Sets the export size from user input.
    pub fn set_export_size(&mut self, size: i64) -> Result<()> {
        self.set_size(ExportSize::new(size)?);
        Ok(())
    }

    pub fn select_preset(&mut self, preset: ExportPreset) {
        self.set_size(preset.into());
    }

    fn set_size(&mut self, size: ExportSize) {
        if size != self.export_size {
            self.export_size = size;
            self.export_stale = self.transformed.is_some();
        }
    }

    /// Restores the parameters seeded from the original icon.
    ///
    /// Returns `false` if nothing is loaded or the prompt is declined.
    pub fn reset(&mut self, confirm: &mut impl Confirm) -> bool {
        let Some(icon) = &self.original else {
            return false;
        };
        if !confirm.confirm(RESET_PROMPT) {
            return false;
        }
        log::info!("reset style parameters");
        self.params = StyleParameters::seeded_from(icon.markup());
        self.refresh();
        true
    }

    /// Discards the icon and returns to the empty state.
    ///
    /// Returns `false` if nothing is loaded or the prompt is declined.
    pub fn delete(&mut self, confirm: &mut impl Confirm) -> bool {
        if self.original.is_none() || !confirm.confirm(DELETE_PROMPT) {
            return false;
        }
        log::info!("deleted icon");
        self.original = None;
        self.params = StyleParameters::default();
        self.transformed = None;
        self.preview.clear();
        self.export.clear();
        self.preview_stale = false;
        self.export_stale = false;
        true
    }

    /// Recomputes the styled markup from scratch.
    fn refresh(&mut self) {
        self.transformed = self
            .original
            .as_ref()
            .map(|icon| transform_svg(icon, &self.params));
        self.preview_stale = self.transformed.is_some();
        self.export_stale = self.transformed.is_some();
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Issues a request for every bitmap that is out of date.
    pub fn render_requests(&mut self) -> Vec<RenderRequest> {
        let Some(svg) = self.transformed.as_deref() else {
            return Vec::new();
        };

        let mut requests = Vec::with_capacity(2);
        if self.preview_stale {
            self.preview_stale = false;
            requests.push(self.preview.request(
                SlotKind::Preview,
                svg,
                PREVIEW_SIZE,
                true,
                self.rasterizer,
            ));
        }
        if self.export_stale {
            self.export_stale = false;
            requests.push(self.export.request(
                SlotKind::Export,
                svg,
                self.export_size.get(),
                true,
                self.rasterizer,
            ));
        }
        requests
    }

    /// Hands back a finished render. Returns whether it was stored.
    pub fn complete(&mut self, outcome: RenderOutcome) -> bool {
        let slot = match outcome.slot {
            SlotKind::Preview => &mut self.preview,
            SlotKind::Export => &mut self.export,
        };
        slot.complete(outcome.ticket, outcome.result)
    }

    /// Runs every pending render on the current thread.
    pub fn render_now(&mut self) {
        for request in self.render_requests() {
            let outcome = request.run();
            self.complete(outcome);
        }
    }

    /// Latest fixed-size preview bitmap.
    pub fn preview(&self) -> Option<&Bitmap> {
        self.preview.bitmap()
    }

    /// Latest bitmap at the export size.
    pub fn export_preview(&self) -> Option<&Bitmap> {
        self.export.bitmap()
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    /// Copies the styled markup.
    pub fn copy_svg(&self, clipboard: &mut impl Clipboard) -> Result<()> {
        let svg = self.transformed.as_deref().ok_or(Error::NoIcon)?;
        clipboard.write_text(svg);
        Ok(())
    }

    /// Copies one of the color values as text.
    pub fn copy_color(&self, field: ColorField, clipboard: &mut impl Clipboard) {
        clipboard.write_text(self.color(field).as_str());
    }

    pub fn color(&self, field: ColorField) -> &Color {
        match field {
            ColorField::Stroke => &self.params.stroke_color,
            ColorField::Fill => &self.params.fill_color,
            ColorField::Background => &self.params.background_color,
        }
    }

    /// The styled markup as a download.
    pub fn download_svg(&self) -> Result<Artifact> {
        let svg = self.transformed.as_deref().ok_or(Error::NoIcon)?;
        Ok(Artifact::svg(self.export_size, svg))
    }

    /// The styled icon rendered at exactly the export size.
    pub fn download_png(&self) -> Result<Artifact> {
        let svg = self.transformed.as_deref().ok_or(Error::NoIcon)?;
        let bitmap = self.rasterizer.render(svg, self.export_size.get(), false)?;
        Ok(Artifact::png(self.export_size, bitmap.to_png()?))
    }
}

impl Configurable for Editor {
    /// Applies the profile's sections on top of the current parameters.
    ///
    /// Ignored while no icon is loaded, like any other parameter change.
    fn apply_profile(&mut self, profile: &StyleProfile) {
        if self.original.is_none() {
            log::debug!("ignoring profile while empty");
            return;
        }
        self.params = profile.apply_to(std::mem::take(&mut self.params));
        self.refresh();
    }

    fn export_profile(&self) -> StyleProfile {
        StyleProfile::from_params(&self.params)
    }
}

// ============================================================================
// Tests
// ============================================================================
