//! Quote model and the build-time embedded fallback pool.
//!
//! The pool is parsed once from `assets/fallback_quotes.json` and never
//! mutated afterwards; it backs the no-repeat selection in
//! [`crate::selector`].

use serde::Deserialize;

/// A single quote, either from the remote API or from the fallback pool.
///
/// Immutable once constructed. The API response may carry extra fields;
/// they are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

/// Where a displayed quote came from. Never shown to the user; kept for
/// diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteSource {
    Api,
    Fallback,
}

/// Fixed, ordered collection of quotes embedded at build time.
#[derive(Debug, Clone)]
pub struct FallbackPool {
    quotes: Vec<Quote>,
}

impl FallbackPool {
    /// Parse the embedded fallback list.
    ///
    /// The asset ships inside the binary, so a parse failure means a broken
    /// build; callers treat it as fatal at startup.
    pub fn builtin() -> Result<Self, serde_json::Error> {
        const FALLBACK_JSON: &str = include_str!("../assets/fallback_quotes.json");
        let quotes = serde_json::from_str(FALLBACK_JSON)?;
        Ok(Self { quotes })
    }

    /// Build a pool from explicit quotes. Used by tests and callers that
    /// want a custom list.
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quote at `index`. Panics if out of bounds; the selector only produces
    /// in-range indices.
    pub fn quote_at(&self, index: usize) -> &Quote {
        &self.quotes[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.quotes.iter()
    }
}
