//! Shared types used across all pipeline stages.

use serde::{Deserialize, Serialize};

/// Number of features a well-formed card carries.
///
/// A different count is a warning, not an error — the card is still rendered
/// and indexed.
pub const EXPECTED_FEATURES: usize = 10;

/// A card parsed from its text source.
///
/// The title is the first blank-line-delimited single-line paragraph of the
/// source file (falling back to the filename stem); the features are the
/// remaining lines with any leading `N. ` numbering stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub features: Vec<String>,
}

/// A fully composed card: the parsed text plus its encoded PNG.
///
/// Rendered cards carry no ordinal. File names are resolved only after the
/// whole deck has been collected and sorted into its final presentation
/// order, so nothing on disk ever needs renaming.
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub card: Card,
    pub png: Vec<u8>,
}
