//! Liked quotes
//!
//! The user's saved quotes, newest first, mirrored to the store after every
//! change.

use crate::storage::KeyValueStore;
use crate::types::quote::Quote;
use std::collections::HashSet;
use std::sync::Arc;

/// Store key holding the JSON-serialized liked list
pub const LIKED_QUOTES_KEY: &str = "liked_quotes";

/// Owner of the liked quote list
pub struct LikedQuotes {
    quotes: Vec<Quote>,
    ids: HashSet<String>,
    store: Arc<dyn KeyValueStore>,
}

impl LikedQuotes {
    /// Restore the list from `store`
    ///
    /// A missing key, a failing store or malformed content all yield an
    /// empty list.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let quotes = match store.get(LIKED_QUOTES_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Quote>>(&json) {
                Ok(quotes) => quotes,
                Err(e) => {
                    tracing::warn!("Ignoring malformed liked quotes: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read liked quotes, starting empty: {}", e);
                Vec::new()
            }
        };

        let mut ids = HashSet::with_capacity(quotes.len());
        let quotes: Vec<Quote> = quotes
            .into_iter()
            .filter(|q| ids.insert(q.id.clone()))
            .collect();

        tracing::info!("Loaded {} liked quotes", quotes.len());
        Self { quotes, ids, store }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Unlike `quote` if it is saved, otherwise save it at the front.
    /// Returns whether the quote is liked afterwards.
    pub fn toggle_like(&mut self, quote: Option<&Quote>) -> bool {
        let Some(quote) = quote else {
            return false;
        };

        if self.is_liked(&quote.id) {
            self.remove_entry(&quote.id);
            self.persist();
            false
        } else {
            self.ids.insert(quote.id.clone());
            self.quotes.insert(
                0,
                Quote::new(quote.id.clone(), quote.content.clone(), quote.author.clone()),
            );
            self.persist();
            true
        }
    }

    /// Remove the quote with `id`; nothing happens when it is not saved
    pub fn remove(&mut self, id: &str) {
        if self.remove_entry(id) {
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        self.quotes.clear();
        self.ids.clear();
        self.persist();
    }

    /// Saved quotes, most recently liked first
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn liked_ids(&self) -> &HashSet<String> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    fn remove_entry(&mut self, id: &str) -> bool {
        if !self.ids.remove(id) {
            return false;
        }
        self.quotes.retain(|q| q.id != id);
        true
    }

    /// Best-effort write of the whole list; the in-memory copy stays
    /// authoritative when it fails.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.quotes) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize liked quotes: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(LIKED_QUOTES_KEY, &json) {
            tracing::warn!("Failed to save liked quotes: {}", e);
        }
    }
}
