//! CLI output formatting.
//!
//! Format functions are pure (no I/O) and return strings; `main` decides
//! where they go. Per-card anomalies — missing assets, render failures,
//! feature-count mismatches — are diagnostics on stderr and never stop the
//! run; stage progress goes to stdout.

use crate::scan::{ASSET_EXTENSIONS, Manifest};
use crate::types::EXPECTED_FEATURES;
use std::path::Path;

/// Scan summary: every discovered card with its sources, plus skips.
pub fn format_scan(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec![format!("Cards ({})", manifest.cards.len())];

    for (i, source) in manifest.cards.iter().enumerate() {
        lines.push(format!("{i:03} {}", source.card.title));
        lines.push(format!(
            "    Source: {} + {}",
            file_name(&source.text_path),
            file_name(&source.asset_path)
        ));
    }

    if !manifest.missing_asset.is_empty() {
        lines.push(format!("Skipped ({})", manifest.missing_asset.len()));
        for path in &manifest.missing_asset {
            lines.push(format!("    {}", file_name(path)));
        }
    }

    lines
}

/// Diagnostic for a text file with no paired image asset.
pub fn format_missing_asset(text_path: &Path) -> String {
    format!(
        "skipping “{}”: no paired image asset ({})",
        text_path.display(),
        ASSET_EXTENSIONS.join(", ")
    )
}

/// Diagnostic for a card whose render failed.
pub fn format_render_failure(title: &str, error: &impl std::fmt::Display) -> String {
    format!("failed to render “{title}”: {error}")
}

/// Warning for a card with an unexpected feature count.
///
/// The ordinal is present only once the final order is known (the `check`
/// command warns before any ordering exists).
pub fn format_feature_warning(ordinal: Option<usize>, title: &str, count: usize) -> String {
    match ordinal {
        Some(n) => format!(
            "warning: card “{n:03}: {title}” has {count} features (expected {EXPECTED_FEATURES})"
        ),
        None => {
            format!("warning: card “{title}” has {count} features (expected {EXPECTED_FEATURES})")
        }
    }
}

/// Build summary printed after the site is written.
pub fn format_build_summary(cards: usize, files: usize, out_dir: &Path) -> String {
    format!(
        "Generated {cards} cards ({files} files) at {}",
        out_dir.display()
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::CardSource;
    use crate::test_helpers::card_with_features;
    use std::path::PathBuf;

    fn manifest() -> Manifest {
        Manifest {
            cards: vec![CardSource {
                card: card_with_features("Kato", 10),
                text_path: PathBuf::from("cards/kato.txt"),
                asset_path: PathBuf::from("cards/kato.svg"),
            }],
            missing_asset: vec![PathBuf::from("cards/hundo.txt")],
        }
    }

    #[test]
    fn scan_report_lists_cards_and_skips() {
        let lines = format_scan(&manifest());
        assert_eq!(lines[0], "Cards (1)");
        assert_eq!(lines[1], "000 Kato");
        assert_eq!(lines[2], "    Source: kato.txt + kato.svg");
        assert_eq!(lines[3], "Skipped (1)");
        assert_eq!(lines[4], "    hundo.txt");
    }

    #[test]
    fn feature_warning_names_ordinal_title_and_count() {
        let line = format_feature_warning(Some(3), "Kato", 7);
        assert_eq!(
            line,
            "warning: card “003: Kato” has 7 features (expected 10)"
        );
    }

    #[test]
    fn feature_warning_without_ordinal() {
        let line = format_feature_warning(None, "Kato", 12);
        assert_eq!(line, "warning: card “Kato” has 12 features (expected 10)");
    }

    #[test]
    fn missing_asset_diagnostic_names_the_file() {
        let line = format_missing_asset(Path::new("cards/hundo.txt"));
        assert!(line.contains("cards/hundo.txt"));
        assert!(line.contains("svg, jpeg, jpg, png"));
    }
}
