//! The card compositor.
//!
//! Builds the final card image: a white canvas, the fitted illustration in
//! the drawing area, the accent-colored title band below it, and the title
//! text centered in the band. The result is encoded as an RGB (no-alpha)
//! PNG.

use super::media::MediaAsset;
use super::{CANVAS_HEIGHT, ComposeError, DRAWING_HEIGHT, DRAWING_WIDTH, TITLE_BAND_HEIGHT};
use crate::types::Card;
use ab_glyph::{Font, PxScale};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::io::Cursor;

/// Accent green of the title band.
const BAND_COLOR: Rgba<u8> = Rgba([207, 227, 158, 255]);
const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Compose one card into encoded PNG bytes.
///
/// Output dimensions are always the fixed canvas size regardless of the
/// source asset's aspect ratio. Failures (degenerate geometry, unsupported
/// orientation, decode errors) abort this card only; the caller skips it and
/// continues with the rest of the deck.
pub fn compose(card: &Card, asset: &MediaAsset, font: &impl Font) -> Result<Vec<u8>, ComposeError> {
    let mut canvas = RgbaImage::from_pixel(
        DRAWING_WIDTH,
        CANVAS_HEIGHT,
        Rgba([255, 255, 255, 255]),
    );

    asset.draw(&mut canvas)?;

    draw_filled_rect_mut(
        &mut canvas,
        Rect::at(0, DRAWING_HEIGHT as i32).of_size(DRAWING_WIDTH, TITLE_BAND_HEIGHT),
        BAND_COLOR,
    );

    // Title at half the band height, horizontally centered, with its top
    // edge 20% of the band height below the band's top.
    let scale = PxScale::from(TITLE_BAND_HEIGHT as f32 * 0.5);
    let (text_w, _) = text_size(scale, font, &card.title);
    let x = (DRAWING_WIDTH as i32 - text_w as i32) / 2;
    let y = DRAWING_HEIGHT as i32 + (TITLE_BAND_HEIGHT as f32 * 0.2) as i32;
    draw_text_mut(&mut canvas, TEXT_COLOR, x, y, scale, font, &card.title);

    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
    let mut buf = Cursor::new(Vec::new());
    rgb.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
