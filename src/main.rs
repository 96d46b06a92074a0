use clap::{Parser, Subcommand};
use kartaro::compose::{self, MediaAsset};
use kartaro::scan::CardSource;
use kartaro::types::{EXPECTED_FEATURES, RenderedCard};
use kartaro::{assemble, order, report, scan};
use rayon::prelude::*;
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "kartaro")]
#[command(about = "Static gallery generator for illustrated card decks")]
#[command(long_about = "\
Static gallery generator for illustrated card decks

Your filesystem is the data source. Each card is a plain-text file paired by
filename stem with an illustration (SVG, JPEG, or PNG):

  cards/
  ├── kato.txt                     # Title paragraph + 10 feature lines
  ├── kato.svg                     # Paired by stem; svg > jpeg > jpg > png
  ├── hundo.txt
  └── hundo.jpg                    # EXIF rotation is corrected automatically

Each card becomes a composed PNG (illustration + title band) and an HTML
page with prev/home/next navigation, plus a deck index. Cards are presented
in a pseudo-random order derived from their titles — stable across runs,
reshuffled only when titles change.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "cards", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "site", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: scan → compose → order → assemble
    Build,
    /// Scan the content directory into a manifest
    Scan {
        /// Where to write the JSON manifest
        #[arg(long, default_value = "manifest.json")]
        manifest: PathBuf,
    },
    /// Validate the content directory without building
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Build => build(&cli)?,
        Command::Scan { manifest } => {
            let result = scan::scan(&cli.source)?;
            let json = serde_json::to_string_pretty(&result)?;
            std::fs::write(manifest, json)?;
            for line in report::format_scan(&result) {
                println!("{line}");
            }
            println!("Manifest written to {}", manifest.display());
        }
        Command::Check => {
            let result = scan::scan(&cli.source)?;
            for path in &result.missing_asset {
                eprintln!("{}", report::format_missing_asset(path));
            }
            for source in &result.cards {
                let count = source.card.features.len();
                if count != EXPECTED_FEATURES {
                    eprintln!(
                        "{}",
                        report::format_feature_warning(None, &source.card.title, count)
                    );
                }
            }
            for line in report::format_scan(&result) {
                println!("{line}");
            }
            println!("Content is valid");
        }
    }

    Ok(())
}

fn build(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    println!("==> Stage 1: Scanning {}", cli.source.display());
    let manifest = scan::scan(&cli.source)?;
    for path in &manifest.missing_asset {
        eprintln!("{}", report::format_missing_asset(path));
    }
    for line in report::format_scan(&manifest) {
        println!("{line}");
    }

    println!("==> Stage 2: Composing {} cards", manifest.cards.len());
    let font = compose::font::load_system_sans()?;
    let mut deck = render_deck(&manifest.cards, &font);

    println!("==> Stage 3: Ordering deck");
    order::sort_cards(&mut deck);
    for (ordinal, rendered) in deck.iter().enumerate() {
        let count = rendered.card.features.len();
        if count != EXPECTED_FEATURES {
            eprintln!(
                "{}",
                report::format_feature_warning(Some(ordinal), &rendered.card.title, count)
            );
        }
    }

    println!("==> Stage 4: Generating HTML → {}", cli.output.display());
    let files = assemble::assemble(&deck)?;
    assemble::write_site(&cli.output, &files)?;

    println!(
        "{}",
        report::format_build_summary(deck.len(), files.len(), &cli.output)
    );
    Ok(())
}

/// Compose every card in parallel, skipping failures with a diagnostic.
///
/// Results come back in manifest order regardless of which worker finished
/// first; the presentation order is decided later and depends only on
/// titles.
fn render_deck(sources: &[CardSource], font: &ab_glyph::FontVec) -> Vec<RenderedCard> {
    let results: Vec<Result<Vec<u8>, compose::ComposeError>> = sources
        .par_iter()
        .map(|source| {
            let asset = MediaAsset::load(&source.asset_path)?;
            compose::compose(&source.card, &asset, font)
        })
        .collect();

    let mut deck = Vec::with_capacity(sources.len());
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(png) => deck.push(RenderedCard {
                card: source.card.clone(),
                png,
            }),
            Err(e) => eprintln!("{}", report::format_render_failure(&source.card.title, &e)),
        }
    }
    deck
}
