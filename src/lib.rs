//! # Kartaro
//!
//! A static gallery generator for illustrated card decks. The filesystem is
//! the data source: one plain-text description per card, paired by filename
//! stem with an SVG or JPEG/PNG illustration. Kartaro composes one PNG per
//! card (illustration plus a title band), one HTML page per card with a
//! numbered feature list and prev/home/next navigation, and an index page.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Scan      cards/   →  Manifest          (pairing + text parsing)
//! 2. Compose   manifest →  RenderedCard[]    (one PNG per card, in memory)
//! 3. Order     deck     →  deck              (deterministic title shuffle)
//! 4. Assemble  deck     →  OutputFile[]      (HTML + PNGs + static assets)
//! ```
//!
//! A thin shell ([`assemble::write_site`]) applies the final manifest of
//! (path, bytes) pairs to the output directory. All composition and page
//! generation is pure, so unit tests exercise the pipeline without touching
//! disk.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — content discovery, asset pairing, card text parsing |
//! | [`compose`] | Stage 2 — geometry fitting, orientation correction, canvas composition |
//! | [`order`] | Stage 3 — stable pseudo-random ordering by title digest |
//! | [`assemble`] | Stage 4 — maud HTML pages and the output manifest |
//! | [`report`] | Pure CLI output formatting for all stages |
//! | [`types`] | Shared `Card` / `RenderedCard` values |
//!
//! # Design Decisions
//!
//! ## Ordinals Are Assigned Last
//!
//! Cards are rendered with no identity beyond their title and collected in
//! memory. Only after the whole deck is sorted does a card get its
//! three-digit ordinal, which names its PNG and page and appears in every
//! cross-link. Nothing is ever renamed on disk.
//!
//! ## Deterministic Shuffle
//!
//! The presentation order is the sort of SHA-256 title digests: visually
//! indistinguishable from a random permutation, identical across runs for
//! the same titles, and independent of how the filesystem enumerates the
//! content directory.
//!
//! ## One Card's Failure Is One Card's Problem
//!
//! A missing asset, an unsupported EXIF orientation, or a degenerate SVG
//! aborts that card with a stderr diagnostic. The run always attempts every
//! discovered card and reports a best-effort result; the only externally
//! observable effect of a failure is an incomplete output set.
//!
//! ## Pure-Rust Imaging
//!
//! Raster work uses the `image` crate (Lanczos3 resampling, PNG encoding),
//! vector work uses `usvg`/`resvg`, and titles are drawn with `imageproc` +
//! `ab_glyph` using the system sans-serif face found via fontdb. No system
//! image libraries, no subprocesses.

pub mod assemble;
pub mod compose;
pub mod order;
pub mod report;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
