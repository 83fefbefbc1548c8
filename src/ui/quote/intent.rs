//! Intents for the quote cycle.

use crate::quotes::{Quote, QuoteSource};
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the quote cycle reducer.
#[derive(Debug)]
pub enum QuoteIntent {
    /// A fetch was started; disables the trigger and opens a new cycle.
    FetchStarted,

    /// The fetch produced a quote, from the API or from the fallback pool.
    /// Begins the fade-out of the current text.
    FetchResolved { quote: Quote, source: QuoteSource },

    /// Fade-out wait elapsed; swap the pending quote in and re-enable the
    /// trigger.
    FadeOutFinished,

    /// Fade-in finished; the cycle is complete.
    FadeInFinished,
}

impl Intent for QuoteIntent {}
