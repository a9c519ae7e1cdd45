//! Error type shared by every fallible operation in the crate.

use std::path::PathBuf;

use resvg::usvg;
use thiserror::Error;

/// Errors produced while loading, styling, rendering or exporting an icon.
#[derive(Debug, Error)]
pub enum Error {
    /// A color string that is neither hex, a CSS color name, `none` nor `transparent`.
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("export size must not be negative (got {0})")]
    NegativeExportSize(i64),

    /// An editing or export action was attempted with no icon loaded.
    #[error("no icon loaded")]
    NoIcon,

    /// A load action was attempted while an icon is already being edited.
    #[error("an icon is already loaded, delete it first")]
    IconAlreadyLoaded,

    #[error("no example icon at index {0}")]
    UnknownExample(usize),

    #[error("`{}` is not an .svg file", .0.display())]
    NotSvgFile(PathBuf),

    /// Text that does not contain an `<svg` element.
    #[error("input does not contain SVG markup")]
    NotSvgMarkup,

    #[error("i/o error on `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The markup could not be decoded as an image.
    #[error("failed to decode SVG: {0}")]
    Decode(#[from] usvg::Error),

    #[error("cannot allocate a {0}x{0} render surface")]
    Surface(u32),

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("invalid style profile: {0}")]
    Profile(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
