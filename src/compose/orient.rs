//! EXIF orientation normalization.
//!
//! Raster assets may carry a rotation tag from the capturing device. The tag
//! is undone here, before any fit geometry is computed, so the rest of the
//! pipeline only ever sees upright pixel data.

use super::ComposeError;
use image::DynamicImage;
use image::metadata::Orientation;

/// Return `img` as if it had been captured upright.
///
/// Only the four pure rotations are accepted. Mirrored tags (and anything
/// else a decoder might report) fail with
/// [`ComposeError::UnsupportedOrientation`], which aborts the affected card's
/// render but not the run. Raw EXIF values outside 1–8 never reach this
/// function: the `image` decoder already folds them to
/// [`Orientation::NoTransforms`].
pub fn normalize(img: DynamicImage, tag: Orientation) -> Result<DynamicImage, ComposeError> {
    match tag {
        Orientation::NoTransforms => Ok(img),
        Orientation::Rotate90 => Ok(img.rotate90()),
        Orientation::Rotate180 => Ok(img.rotate180()),
        Orientation::Rotate270 => Ok(img.rotate270()),
        other => Err(ComposeError::UnsupportedOrientation(other)),
    }
}
