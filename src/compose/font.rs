//! Title font lookup.
//!
//! The compositor wants "the system sans-serif face" rather than a font
//! shipped in the binary. fontdb (already linked for SVG text support) does
//! the platform-specific discovery; the face bytes are then handed to
//! ab_glyph for layout and rasterization.

use super::ComposeError;
use ab_glyph::FontVec;
use usvg::fontdb;

/// Load the system sans-serif font.
///
/// Falls back to the first face fontdb found at all; errors only when the
/// host has no usable fonts whatsoever.
pub fn load_system_sans() -> Result<FontVec, ComposeError> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))
        .ok_or(ComposeError::FontUnavailable)?;

    db.with_face_data(id, |data, index| {
        FontVec::try_from_vec_and_index(data.to_vec(), index)
    })
    .ok_or(ComposeError::FontUnavailable)?
    .map_err(|_| ComposeError::FontUnavailable)
}
