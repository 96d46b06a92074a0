//! Content discovery and card text parsing.
//!
//! The content directory is flat: one `.txt` file per card, paired by
//! filename stem with exactly one image asset whose extension is on the
//! allow-list (`svg`, `jpeg`, `jpg`, `png` — first match wins, in that
//! order). A text file with no paired asset is recorded as skipped and
//! excluded from output entirely.
//!
//! ## Text format
//!
//! ```text
//! Kato
//!
//! 1. Havas voston
//! 2. Ronronas
//! ...
//! ```
//!
//! The title is the first blank-line-delimited single-line paragraph.
//! Feature lines may carry a leading `N. ` numbering, which is stripped. If
//! no distinct title paragraph resolves, the filename stem becomes the title
//! and every line is a feature.
//!
//! Discovered cards are sorted by filename so discovery order itself is
//! deterministic (the presentation order is decided later, by the title
//! shuffle).

use crate::types::Card;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Asset extensions tried for each text file, in priority order.
pub const ASSET_EXTENSIONS: &[&str] = &["svg", "jpeg", "jpg", "png"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("content directory not found: {0}")]
    MissingRoot(PathBuf),
}

/// Everything the scan stage discovered.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Cards with a paired asset, in filename order.
    pub cards: Vec<CardSource>,
    /// Text files skipped because no paired image asset exists.
    pub missing_asset: Vec<PathBuf>,
}

/// One discovered card and the files it came from.
#[derive(Debug, Clone, Serialize)]
pub struct CardSource {
    pub card: Card,
    pub text_path: PathBuf,
    pub asset_path: PathBuf,
}

/// Scan a content directory for card sources.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let mut text_files: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("txt"))
                    .unwrap_or(false)
        })
        .collect();
    text_files.sort();

    let mut cards = Vec::new();
    let mut missing_asset = Vec::new();

    for text_path in text_files {
        let Some(asset_path) = find_asset(&text_path) else {
            missing_asset.push(text_path);
            continue;
        };

        let content = fs::read_to_string(&text_path)?;
        let stem = text_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        cards.push(CardSource {
            card: parse_card_text(&content, &stem),
            text_path,
            asset_path,
        });
    }

    Ok(Manifest {
        cards,
        missing_asset,
    })
}

/// Find the image asset paired with a text file, if any.
pub fn find_asset(text_path: &Path) -> Option<PathBuf> {
    for ext in ASSET_EXTENSIONS {
        let candidate = text_path.with_extension(ext);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Parse a card's text source.
///
/// `fallback_title` (the filename stem) is used when the file has no
/// blank-line-delimited single-line first paragraph.
pub fn parse_card_text(content: &str, fallback_title: &str) -> Card {
    let mut title: Option<String> = None;
    let mut features: Vec<String> = Vec::new();

    for raw in content.lines() {
        let line = raw.trim();

        if line.is_empty() {
            // A blank line after exactly one accumulated line promotes that
            // line to the title.
            if title.is_none() && features.len() == 1 {
                title = features.pop();
            }
            continue;
        }

        features.push(strip_feature_number(line).to_string());
    }

    Card {
        title: title.unwrap_or_else(|| fallback_title.to_string()),
        features,
    }
}

/// Strip a leading `N. ` numbering prefix from a feature line.
fn strip_feature_number(line: &str) -> &str {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return line;
    }
    match line[digits..].strip_prefix('.') {
        Some(rest) => rest.trim_start_matches(' '),
        None => line,
    }
}
