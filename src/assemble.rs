//! HTML page assembly.
//!
//! Pure functions from the ordered deck to an output manifest: a list of
//! (relative path, bytes) pairs. Nothing here touches the filesystem except
//! [`write_site`], the thin shell that applies a manifest to an output
//! directory.
//!
//! Pages are generated with [maud](https://maud.lambda.xyz/) — compile-time
//! checked templates with automatic escaping, so card titles and features
//! can never break the markup.
//!
//! ## Output layout
//!
//! ```text
//! site/
//! ├── index.html        # all cards by final ordinal and title
//! ├── 000.png           # composed card images …
//! ├── 000.html          # … and their pages, named by final ordinal
//! ├── 001.png
//! ├── 001.html
//! ├── kartaro.css       # static assets, passed through unchanged
//! └── kartaro.js
//! ```

use crate::types::{Card, RenderedCard};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Site name used in page titles.
pub const SITE_NAME: &str = "Kartaro";

pub const STYLESHEET_NAME: &str = "kartaro.css";
pub const SCRIPT_NAME: &str = "kartaro.js";

const STYLESHEET: &str = include_str!("../static/kartaro.css");
const SCRIPT: &str = include_str!("../static/kartaro.js");

/// Zero-padded ordinals cap the deck at 1000 cards. An explicit boundary,
/// not silently handled.
pub const MAX_CARDS: usize = 1000;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("deck has {0} cards; zero-padded ordinals support at most {MAX_CARDS}")]
    TooManyCards(usize),
}

/// One file of the generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Build the full output manifest for an ordered deck.
///
/// `cards` must already be in final presentation order; ordinals are simply
/// their positions here.
pub fn assemble(cards: &[RenderedCard]) -> Result<Vec<OutputFile>, AssembleError> {
    if cards.len() > MAX_CARDS {
        return Err(AssembleError::TooManyCards(cards.len()));
    }

    let mut files = Vec::with_capacity(cards.len() * 2 + 3);

    for (ordinal, rendered) in cards.iter().enumerate() {
        files.push(OutputFile {
            path: image_name(ordinal).into(),
            bytes: rendered.png.clone(),
        });
        files.push(OutputFile {
            path: page_name(ordinal).into(),
            bytes: card_page(&rendered.card, ordinal, cards.len())
                .into_string()
                .into_bytes(),
        });
    }

    files.push(OutputFile {
        path: "index.html".into(),
        bytes: index_page(cards).into_string().into_bytes(),
    });
    files.push(OutputFile {
        path: STYLESHEET_NAME.into(),
        bytes: STYLESHEET.as_bytes().to_vec(),
    });
    files.push(OutputFile {
        path: SCRIPT_NAME.into(),
        bytes: SCRIPT.as_bytes().to_vec(),
    });

    Ok(files)
}

/// Apply an output manifest to a directory.
///
/// Creates the directory if absent and overwrites existing files. Every card
/// owns its own files, so writes are disjoint.
pub fn write_site(out_dir: &Path, files: &[OutputFile]) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;
    for file in files {
        fs::write(out_dir.join(&file.path), &file.bytes)?;
    }
    Ok(())
}

pub fn image_name(ordinal: usize) -> String {
    format!("{ordinal:03}.png")
}

pub fn page_name(ordinal: usize) -> String {
    format!("{ordinal:03}.html")
}

fn page_shell(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                link rel="stylesheet" type="text/css" href=(STYLESHEET_NAME);
                title { (SITE_NAME) " – " (title) }
                script src=(SCRIPT_NAME) {}
            }
            body { (content) }
        }
    }
}

/// One card's page: image, numbered feature list, prev/home/next links.
fn card_page(card: &Card, ordinal: usize, deck_size: usize) -> Markup {
    page_shell(
        &card.title,
        html! {
            img src=(image_name(ordinal)) alt=(card.title);
            ol {
                @for feature in &card.features {
                    li { (feature) }
                }
            }
            div class="navigation" {
                @if ordinal > 0 {
                    a href=(page_name(ordinal - 1)) { "🠜" }
                    " | "
                }
                a href="index.html" { "🏠" }
                @if ordinal + 1 < deck_size {
                    " | "
                    a href=(page_name(ordinal + 1)) { "🠊" }
                }
            }
        },
    )
}

/// The index: every card by ordinal and title, in presentation order.
fn index_page(cards: &[RenderedCard]) -> Markup {
    page_shell(
        "Indekso",
        html! {
            ul {
                @for (ordinal, rendered) in cards.iter().enumerate() {
                    li {
                        (format!("{ordinal:03}. "))
                        a href=(page_name(ordinal)) { (rendered.card.title) }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::card_with_features;

    fn deck(titles: &[&str]) -> Vec<RenderedCard> {
        titles
            .iter()
            .map(|t| RenderedCard {
                card: card_with_features(t, 10),
                png: vec![0x89, b'P', b'N', b'G'],
            })
            .collect()
    }

    fn file<'a>(files: &'a [OutputFile], name: &str) -> &'a OutputFile {
        files
            .iter()
            .find(|f| f.path == Path::new(name))
            .unwrap_or_else(|| panic!("no output file named {name}"))
    }

    fn page_html(files: &[OutputFile], name: &str) -> String {
        String::from_utf8(file(files, name).bytes.clone()).unwrap()
    }

    #[test]
    fn emits_png_page_index_and_static_assets() {
        let files = assemble(&deck(&["Kato", "Hundo"])).unwrap();
        let names: Vec<&Path> = files.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(
            names,
            vec![
                Path::new("000.png"),
                Path::new("000.html"),
                Path::new("001.png"),
                Path::new("001.html"),
                Path::new("index.html"),
                Path::new("kartaro.css"),
                Path::new("kartaro.js"),
            ]
        );
    }

    #[test]
    fn first_card_has_no_prev_link() {
        let files = assemble(&deck(&["Kato", "Hundo", "Birdo"])).unwrap();
        let first = page_html(&files, "000.html");
        assert!(!first.contains("🠜"));
        assert!(first.contains("index.html"));
        assert!(first.contains("001.html"));
    }

    #[test]
    fn last_card_has_no_next_link() {
        let files = assemble(&deck(&["Kato", "Hundo", "Birdo"])).unwrap();
        let last = page_html(&files, "002.html");
        assert!(last.contains("001.html"));
        assert!(!last.contains("🠊"));
    }

    #[test]
    fn middle_card_links_both_neighbors() {
        let files = assemble(&deck(&["Kato", "Hundo", "Birdo"])).unwrap();
        let middle = page_html(&files, "001.html");
        assert!(middle.contains("000.html"));
        assert!(middle.contains("002.html"));
        assert!(middle.contains("🏠"));
    }

    #[test]
    fn card_page_embeds_its_image_and_features() {
        let files = assemble(&deck(&["Kato"])).unwrap();
        let page = page_html(&files, "000.html");
        assert!(page.contains(r#"src="000.png""#));
        assert!(page.contains("<ol>"));
        assert!(page.contains("trajto 1"));
        assert!(page.contains("trajto 10"));
    }

    #[test]
    fn index_lists_cards_by_ordinal_and_title() {
        let files = assemble(&deck(&["Kato", "Hundo"])).unwrap();
        let index = page_html(&files, "index.html");
        assert!(index.contains("000. "));
        assert!(index.contains(r#"<a href="000.html">Kato</a>"#));
        assert!(index.contains(r#"<a href="001.html">Hundo</a>"#));
    }

    #[test]
    fn titles_are_html_escaped() {
        let files = assemble(&deck(&["A<B & C"])).unwrap();
        let index = page_html(&files, "index.html");
        assert!(index.contains("A&lt;B &amp; C"));
        assert!(!index.contains("A<B"));
    }

    #[test]
    fn static_assets_pass_through_unchanged() {
        let files = assemble(&deck(&["Kato"])).unwrap();
        assert_eq!(file(&files, "kartaro.css").bytes, STYLESHEET.as_bytes());
        assert_eq!(file(&files, "kartaro.js").bytes, SCRIPT.as_bytes());
    }

    #[test]
    fn oversized_deck_is_rejected() {
        let titles: Vec<String> = (0..1001).map(|i| format!("Karto {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(|s| s.as_str()).collect();
        assert!(matches!(
            assemble(&deck(&refs)),
            Err(AssembleError::TooManyCards(1001))
        ));
    }

    #[test]
    fn a_full_deck_of_1000_is_still_in_range() {
        let titles: Vec<String> = (0..1000).map(|i| format!("Karto {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(|s| s.as_str()).collect();
        let files = assemble(&deck(&refs)).unwrap();
        assert!(files.iter().any(|f| f.path == Path::new("999.html")));
    }
}
