//! Shared test utilities for the kartaro test suite.

use crate::compose::media::MediaAsset;
use crate::compose::{CANVAS_HEIGHT, DRAWING_WIDTH};
use crate::types::Card;
use ab_glyph::FontVec;
use image::{Rgba, RgbaImage};
use std::io::Cursor;

/// A card with `count` placeholder features.
pub fn card_with_features(title: &str, count: usize) -> Card {
    Card {
        title: title.to_string(),
        features: (1..=count).map(|i| format!("trajto {i}")).collect(),
    }
}

/// A square SVG asset with a solid fill, parsed and ready to draw.
pub fn square_svg_asset(fill: &str) -> MediaAsset {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><rect width="100" height="100" fill="{fill}"/></svg>"#
    );
    let tree = usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).unwrap();
    MediaAsset::Vector(tree)
}

/// A white full-size canvas, as the compositor prepares it.
pub fn blank_canvas() -> RgbaImage {
    RgbaImage::from_pixel(DRAWING_WIDTH, CANVAS_HEIGHT, Rgba([255, 255, 255, 255]))
}

/// Encode `img` as a JPEG carrying an EXIF orientation tag.
///
/// An APP1 segment is spliced in right after SOI: a little-endian TIFF
/// header and a single IFD entry for tag 0x0112 (Orientation).
pub fn jpeg_with_orientation(img: &image::RgbImage, orientation: u16) -> Vec<u8> {
    let mut encoded = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut encoded, image::ImageFormat::Jpeg)
        .unwrap();
    let encoded = encoded.into_inner();

    let mut exif: Vec<u8> = b"Exif\0\0".to_vec();
    exif.extend(b"II*\0"); // little-endian TIFF
    exif.extend(8u32.to_le_bytes()); // IFD0 offset
    exif.extend(1u16.to_le_bytes()); // entry count
    exif.extend(0x0112u16.to_le_bytes()); // Orientation
    exif.extend(3u16.to_le_bytes()); // SHORT
    exif.extend(1u32.to_le_bytes());
    exif.extend(orientation.to_le_bytes());
    exif.extend([0u8; 2]); // value field padding
    exif.extend(0u32.to_le_bytes()); // no next IFD

    let mut out = Vec::with_capacity(encoded.len() + exif.len() + 4);
    out.extend_from_slice(&encoded[..2]); // SOI
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&(exif.len() as u16 + 2).to_be_bytes());
    out.extend_from_slice(&exif);
    out.extend_from_slice(&encoded[2..]);
    out
}

/// The system sans-serif font, or `None` when the host has no fonts at all
/// (minimal CI containers). Tests that draw text return early in that case.
pub fn load_test_font() -> Option<FontVec> {
    match crate::compose::font::load_system_sans() {
        Ok(font) => Some(font),
        Err(_) => {
            eprintln!("no system font available; skipping text rendering test");
            None
        }
    }
}
