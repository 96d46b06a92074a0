//! Art asset loading and fitted, centered drawing.
//!
//! An asset is either vector (SVG) or raster (JPEG/PNG), dispatched once at
//! render time. Both paths share the same geometry: fit the source into the
//! drawing area via [`geometry::fit_size`], then center the fitted box. The
//! caller pre-fills the canvas, so any unpainted periphery keeps the
//! background color.

use super::geometry;
use super::orient;
use super::{ComposeError, DRAWING_HEIGHT, DRAWING_WIDTH};
use image::{DynamicImage, ImageDecoder, ImageReader, Rgba, RgbaImage, imageops};
use resvg::tiny_skia::{Pixmap, Transform};
use std::fs;
use std::path::Path;

/// A card's illustration, ready to draw.
pub enum MediaAsset {
    /// Parsed SVG tree. Intrinsic size is in arbitrary units; rendering is
    /// resolution-independent.
    Vector(usvg::Tree),
    /// Decoded raster pixels, already orientation-normalized.
    Raster(DynamicImage),
}

impl MediaAsset {
    /// Load an asset from disk, dispatching on the file extension.
    ///
    /// Raster images have their EXIF rotation undone here, so all later
    /// geometry sees upright dimensions.
    pub fn load(path: &Path) -> Result<Self, ComposeError> {
        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

        if is_svg {
            let data = fs::read(path)?;
            let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).map_err(|e| {
                ComposeError::Svg {
                    path: path.to_path_buf(),
                    source: e,
                }
            })?;
            Ok(Self::Vector(tree))
        } else {
            let mut decoder = ImageReader::open(path)?.into_decoder()?;
            let tag = decoder.orientation()?;
            let img = DynamicImage::from_decoder(decoder)?;
            Ok(Self::Raster(orient::normalize(img, tag)?))
        }
    }

    /// Draw the asset fitted and centered into the drawing area of `canvas`.
    ///
    /// The title band below the drawing area is never touched.
    pub fn draw(&self, canvas: &mut RgbaImage) -> Result<(), ComposeError> {
        match self {
            Self::Vector(tree) => draw_vector(tree, canvas),
            Self::Raster(img) => draw_raster(img, canvas),
        }
    }
}

fn draw_vector(tree: &usvg::Tree, canvas: &mut RgbaImage) -> Result<(), ComposeError> {
    let size = tree.size();
    let (src_w, src_h) = (size.width().round() as u32, size.height().round() as u32);
    let (out_w, out_h) = geometry::fit_size((src_w, src_h), (DRAWING_WIDTH, DRAWING_HEIGHT))?;

    // Rasterize directly at the fitted size; no intermediate resolution.
    let mut pixmap =
        Pixmap::new(out_w, out_h).ok_or(ComposeError::PixmapAlloc(out_w, out_h))?;
    let scale = vector_scale(size, (out_w, out_h));
    resvg::render(tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied RGBA; demultiply before compositing.
    let mut tile = RgbaImage::new(out_w, out_h);
    for (px, out) in pixmap.pixels().iter().zip(tile.pixels_mut()) {
        let c = px.demultiply();
        *out = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    overlay_centered(canvas, &tile);
    Ok(())
}

/// One uniform rasterization factor for both axes.
///
/// The fitted box preserves the aspect ratio only up to integer flooring, so
/// per-axis factors would skew the art by a sub-pixel amount. The clamped
/// axis is exact; its ratio is always the larger of the two.
fn vector_scale(size: usvg::Size, fitted: (u32, u32)) -> f32 {
    (fitted.0 as f32 / size.width()).max(fitted.1 as f32 / size.height())
}

fn draw_raster(img: &DynamicImage, canvas: &mut RgbaImage) -> Result<(), ComposeError> {
    let (src_w, src_h) = (img.width(), img.height());
    let (out_w, out_h) = geometry::fit_size((src_w, src_h), (DRAWING_WIDTH, DRAWING_HEIGHT))?;

    // to_rgba8 synthesizes a fully opaque alpha channel for alpha-less
    // sources, so the overlay below behaves the same either way.
    let tile = img
        .resize_exact(out_w, out_h, imageops::FilterType::Lanczos3)
        .to_rgba8();

    overlay_centered(canvas, &tile);
    Ok(())
}

/// Composite `tile` onto `canvas`, centered within the drawing area.
///
/// `fit_size` guarantees the tile is no larger than the drawing area, so the
/// offsets are never negative.
fn overlay_centered(canvas: &mut RgbaImage, tile: &RgbaImage) {
    let x = i64::from((DRAWING_WIDTH - tile.width()) / 2);
    let y = i64::from((DRAWING_HEIGHT - tile.height()) / 2);
    imageops::overlay(canvas, tile, x, y);
}
