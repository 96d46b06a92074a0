//! Deterministic pseudo-random card ordering.
//!
//! Cards are presented in an order that looks random to someone stepping
//! through the deck but is fully reproducible: each card sorts by the
//! SHA-256 digest of its title's UTF-8 bytes. The order depends on the
//! multiset of titles only — never on filesystem discovery order — and
//! changes unpredictably when any title changes. That sensitivity is the
//! point, not a bug.

use crate::types::RenderedCard;
use sha2::{Digest, Sha256};

/// Digest of a title's UTF-8 bytes; the card's sort key.
pub fn title_digest(title: &str) -> [u8; 32] {
    Sha256::digest(title.as_bytes()).into()
}

/// Sort the deck into its final presentation order.
///
/// The sort is stable, so two titles with colliding digests (a
/// cryptographically negligible case) keep their discovery order.
pub fn sort_cards(cards: &mut [RenderedCard]) {
    cards.sort_by_cached_key(|c| title_digest(&c.card.title));
}
