//! Transient per-view state for a single quote card.
//!
//! Nothing here writes back to the [`Catalog`]; a fresh view starts again
//! from the stored like count.

use crate::catalog::Catalog;
use crate::model::Quote;

/// Local like toggle layered over a quote's stored like count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeState {
    liked: bool,
    count: u32,
}

impl LikeState {
    pub fn for_quote(quote: &Quote) -> Self {
        Self {
            liked: false,
            count: quote.likes_count,
        }
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Flip the liked flag and adjust the local count to match.
    pub fn toggle(&mut self) {
        if self.liked {
            self.count = self.count.saturating_sub(1);
        } else {
            self.count = self.count.saturating_add(1);
        }
        self.liked = !self.liked;
    }
}

/// Copy/share payload: `"<text>" - <author>`.
pub fn share_text(catalog: &Catalog, quote: &Quote) -> String {
    let author = catalog.author_name(quote).unwrap_or("");
    format!("\"{}\" - {}", quote.text, author)
}
