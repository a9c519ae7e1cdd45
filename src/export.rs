//! Export sizes, file naming and the downloadable artifacts.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::raster::data_uri;

/// Largest PNG edge that can be exported.
pub const MAX_EXPORT_SIZE: u32 = 512;

/// Prefix of every exported file name.
pub const FILE_STEM: &str = "icon2logo";

// ============================================================================
// Export Size
// ============================================================================

/// Edge length of an exported PNG, in pixels.
///
/// Always within `0..=MAX_EXPORT_SIZE`. A size of zero is representable but
/// renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExportSize(u32);

impl ExportSize {
    /// Validates a user-entered size.
    ///
    /// Negative input is rejected; anything above [`MAX_EXPORT_SIZE`] is
    /// clamped down to it.
    pub fn new(size: i64) -> Result<Self> {
        if size < 0 {
            return Err(Error::NegativeExportSize(size));
        }
        let clamped = size.min(i64::from(MAX_EXPORT_SIZE));
        Ok(Self(clamped as u32))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for ExportSize {
    fn default() -> Self {
        Self(MAX_EXPORT_SIZE)
    }
}

impl fmt::Display for ExportSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One-click export sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportPreset {
    Px16,
    Px32,
    Px48,
    Px64,
    Px128,
    Px500,
}

impl ExportPreset {
    pub const ALL: [ExportPreset; 6] = [
        Self::Px16,
        Self::Px32,
        Self::Px48,
        Self::Px64,
        Self::Px128,
        Self::Px500,
    ];

    pub fn pixels(self) -> u32 {
        match self {
            Self::Px16 => 16,
            Self::Px32 => 32,
            Self::Px48 => 48,
            Self::Px64 => 64,
            Self::Px128 => 128,
            Self::Px500 => 500,
        }
    }
}

impl From<ExportPreset> for ExportSize {
    fn from(preset: ExportPreset) -> Self {
        Self(preset.pixels())
    }
}

// ============================================================================
// Format & Artifacts
// ============================================================================

/// File format of a download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ExportFormat {
    #[default]
    Svg,
    Png,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Download file name, e.g. `icon2logo-128.png`.
///
/// The SVG download carries the export size too even though it is vector.
pub fn file_name(size: ExportSize, format: ExportFormat) -> String {
    format!("{FILE_STEM}-{size}.{}", format.extension())
}

/// A finished download: name, media type and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn svg(size: ExportSize, markup: &str) -> Self {
        Self {
            file_name: file_name(size, ExportFormat::Svg),
            format: ExportFormat::Svg,
            bytes: markup.as_bytes().to_vec(),
        }
    }

    pub fn png(size: ExportSize, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name(size, ExportFormat::Png),
            format: ExportFormat::Png,
            bytes,
        }
    }

    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    /// The content as a `data:` URI, suitable for a download link.
    pub fn data_uri(&self) -> String {
        data_uri(self.mime(), &self.bytes)
    }

    /// Writes the content to `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the content into `dir` under its own file name.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        self.write_to(&path)?;
        log::info!("wrote {}", path.display());
        Ok(path)
    }
}

// ============================================================================
// Clipboard
// ============================================================================

/// Destination for copied text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str);
}

impl Clipboard for String {
    fn write_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

// ============================================================================
// Tests
// ============================================================================
