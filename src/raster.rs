//! SVG rasterization using resvg.
//!
//! Rendering always fills a square surface: the SVG's own size is
//! stretched to `target × target` pixels, multiplied by the device pixel
//! ratio for high-resolution output.

use std::io::Cursor;
use std::sync::{Arc, LazyLock};

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::fontdb::Database;
use resvg::usvg::{Options, Tree};

use crate::error::{Error, Result};

/// Edge of the live preview bitmap, in logical pixels.
pub const PREVIEW_SIZE: u32 = 500;

/// Parse options shared by every render, with the system fonts loaded so
/// `<text>` elements are drawn.
static OPTIONS: LazyLock<Options<'static>> = LazyLock::new(|| {
    let mut fontdb = Database::new();
    fontdb.load_system_fonts();
    log::debug!("loaded {} system font faces", fontdb.len());

    Options {
        fontdb: Arc::new(fontdb),
        ..Options::default()
    }
});

// ============================================================================
// Rasterizer
// ============================================================================

/// Renders SVG text to square bitmaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rasterizer {
    device_pixel_ratio: f32,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Rasterizer {
    /// Creates a rasterizer for a display with the given pixel ratio.
    ///
    /// Non-finite or non-positive ratios fall back to 1.
    pub fn new(device_pixel_ratio: f32) -> Self {
        let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self { device_pixel_ratio }
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Ratio applied to a render: the device ratio in high resolution, else 1.
    pub fn pixel_ratio(&self, high_resolution: bool) -> f32 {
        if high_resolution {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    /// Renders `svg` into a `target_size`-wide square bitmap.
    ///
    /// Fails if the markup cannot be decoded or the surface would be empty.
    pub fn render(&self, svg: &str, target_size: u32, high_resolution: bool) -> Result<Bitmap> {
        let pixel_ratio = self.pixel_ratio(high_resolution);

        let tree = Tree::from_str(svg, &OPTIONS)?;

        // Surface dimensions truncate like a canvas width assignment
        let pixels = (target_size as f32 * pixel_ratio) as u32;
        let mut pixmap = Pixmap::new(pixels, pixels).ok_or(Error::Surface(pixels))?;

        let svg_size = tree.size();
        let transform = Transform::from_scale(
            pixels as f32 / svg_size.width(),
            pixels as f32 / svg_size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(Bitmap {
            image: pixmap_to_rgba_image(&pixmap),
            logical_size: target_size,
            pixel_ratio,
        })
    }
}

// ============================================================================
// Bitmap
// ============================================================================

/// How a [`Bitmap`] should be handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterEncoding {
    /// A `data:image/png;base64,...` URI.
    #[default]
    DataUri,
    /// Raw PNG bytes.
    Blob,
}

/// An encoded [`Bitmap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedBitmap {
    DataUri(String),
    Blob(Vec<u8>),
}

/// A rendered, straight-alpha RGBA bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    image: RgbaImage,
    logical_size: u32,
    pixel_ratio: f32,
}

impl Bitmap {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Requested edge length before the pixel ratio was applied.
    pub fn logical_size(&self) -> u32 {
        self.logical_size
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Edge length of the pixel data.
    pub fn pixel_size(&self) -> u32 {
        self.image.width()
    }

    /// Encodes the bitmap as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
        Ok(buffer)
    }

    /// Encodes the bitmap as a PNG data URI.
    pub fn to_data_uri(&self) -> Result<String> {
        Ok(data_uri("image/png", &self.to_png()?))
    }

    pub fn encode(&self, encoding: RasterEncoding) -> Result<EncodedBitmap> {
        match encoding {
            RasterEncoding::DataUri => self.to_data_uri().map(EncodedBitmap::DataUri),
            RasterEncoding::Blob => self.to_png().map(EncodedBitmap::Blob),
        }
    }
}

/// Builds a base64 `data:` URI.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        let (r, g, b, a) = unpremultiply(src.red(), src.green(), src.blue(), src.alpha());
        *dst = Rgba([r, g, b, a]);
    }
    img
}

/// tiny_skia stores premultiplied alpha.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED_DOT: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><circle cx="50" cy="50" r="40" fill="#ff0000"/></svg>"##;
    const WIDE_BAR: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100"><rect width="200" height="100" fill="#0000ff"/></svg>"##;

    #[test]
    fn renders_requested_size() {
        let bitmap = Rasterizer::default().render(RED_DOT, 50, false).unwrap();
        assert_eq!(bitmap.pixel_size(), 50);
        assert_eq!(bitmap.image().height(), 50);
        assert_eq!(bitmap.logical_size(), 50);

        let center = bitmap.image().get_pixel(25, 25);
        assert_eq!(center.0, [255, 0, 0, 255]);
        assert_eq!(bitmap.image().get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn high_resolution_uses_device_ratio() {
        let rasterizer = Rasterizer::new(2.0);
        assert_eq!(rasterizer.render(RED_DOT, 40, true).unwrap().pixel_size(), 80);
        assert_eq!(rasterizer.render(RED_DOT, 40, false).unwrap().pixel_size(), 40);
    }

    #[test]
    fn fractional_ratio_truncates() {
        let bitmap = Rasterizer::new(1.5).render(RED_DOT, 33, true).unwrap();
        assert_eq!(bitmap.pixel_size(), 49);
        assert_eq!(bitmap.pixel_ratio(), 1.5);
    }

    #[test]
    fn invalid_ratio_falls_back() {
        assert_eq!(Rasterizer::new(0.0).device_pixel_ratio(), 1.0);
        assert_eq!(Rasterizer::new(f32::NAN).device_pixel_ratio(), 1.0);
    }

    #[test]
    fn non_square_svg_is_stretched() {
        let bitmap = Rasterizer::default().render(WIDE_BAR, 20, false).unwrap();
        assert_eq!(bitmap.pixel_size(), 20);
        // the bar covers the full square, corners included
        assert_eq!(bitmap.image().get_pixel(0, 19).0, [0, 0, 255, 255]);
        assert_eq!(bitmap.image().get_pixel(19, 0).0, [0, 0, 255, 255]);
    }

    #[test]
    fn malformed_markup_is_an_error() {
        let err = Rasterizer::default().render("<svg", 32, false).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn zero_size_is_an_error() {
        let err = Rasterizer::default().render(RED_DOT, 0, false).unwrap_err();
        assert!(matches!(err, Error::Surface(0)));
    }

    #[test]
    fn encodings() {
        let bitmap = Rasterizer::default().render(RED_DOT, 8, false).unwrap();

        let Ok(EncodedBitmap::Blob(png)) = bitmap.encode(RasterEncoding::Blob) else {
            panic!("expected blob");
        };
        assert_eq!(&png[..4], b"\x89PNG");
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded, *bitmap.image());

        let Ok(EncodedBitmap::DataUri(uri)) = bitmap.encode(RasterEncoding::DataUri) else {
            panic!("expected data uri");
        };
        assert!(uri.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn text_is_drawn_with_system_fonts() {
        if OPTIONS.fontdb.is_empty() {
            return;
        }
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><text x="5" y="80" font-size="80" fill="#000000">W</text></svg>"##;
        let bitmap = Rasterizer::default().render(svg, 100, false).unwrap();
        assert!(bitmap.image().pixels().any(|p| p.0[3] > 0));
    }

    #[test]
    fn unpremultiply_roundtrip() {
        assert_eq!(unpremultiply(0, 0, 0, 0), (0, 0, 0, 0));
        assert_eq!(unpremultiply(51, 10, 0, 51), (255, 50, 0, 51));
    }
}
