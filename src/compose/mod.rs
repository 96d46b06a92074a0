//! Card image composition.
//!
//! Everything that turns a card's paired art asset into the final PNG lives
//! here:
//!
//! | Module | Role |
//! |--------|------|
//! | [`geometry`] | aspect-ratio preserving fit of source dimensions into the drawing area |
//! | [`orient`] | undoing embedded EXIF rotation before any geometry is computed |
//! | [`media`] | loading SVG/raster art and drawing it fitted and centered |
//! | [`card`] | the compositor: white canvas, art, title band, text, PNG encode |
//! | [`font`] | locating the system sans-serif face used for titles |
//!
//! All composition happens on a fixed-size canvas: a 450×470 drawing area
//! with a 52px title band appended below it. The canvas never varies per
//! card.

pub mod card;
pub mod font;
pub mod geometry;
pub mod media;
pub mod orient;

pub use card::compose;
pub use media::MediaAsset;

use std::path::PathBuf;
use thiserror::Error;

/// Width of the drawing area (and of the whole canvas).
pub const DRAWING_WIDTH: u32 = 450;
/// Height of the drawing area, excluding the title band.
pub const DRAWING_HEIGHT: u32 = 470;
/// Height of the title band appended below the drawing area.
pub const TITLE_BAND_HEIGHT: u32 = 52;
/// Total canvas height: drawing area plus title band.
pub const CANVAS_HEIGHT: u32 = DRAWING_HEIGHT + TITLE_BAND_HEIGHT;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("degenerate source geometry ({width}x{height})")]
    DegenerateGeometry { width: u32, height: u32 },
    #[error("unsupported raster orientation tag: {0:?}")]
    UnsupportedOrientation(image::metadata::Orientation),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("SVG parse error in {}: {source}", .path.display())]
    Svg { path: PathBuf, source: usvg::Error },
    #[error("pixmap allocation failed ({0}x{1})")]
    PixmapAlloc(u32, u32),
    #[error("no usable sans-serif font found on this system")]
    FontUnavailable,
}
