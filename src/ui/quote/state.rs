//! State for the quote cycle.

use crate::quotes::{Quote, QuoteSource};
use crate::ui::mvi::UiState;

/// Phase of the current quote swap.
///
/// A resolved fetch does not replace the displayed text immediately: the
/// old text fades out first, then the pending quote is swapped in and
/// fades back up. The pending quote is parked inside `FadingOut` until
/// the swap point.
#[derive(Debug, Clone, PartialEq)]
pub enum QuotePhase {
    /// Nothing in flight; the trigger is enabled.
    Idle,

    /// Request sent, response not yet in. Old text stays fully visible.
    Fetching,

    /// Response in hand, old text fading out.
    FadingOut { pending: Quote, source: QuoteSource },

    /// Swap done, new text fading in. The trigger is enabled again.
    FadingIn,
}

impl Default for QuotePhase {
    fn default() -> Self {
        QuotePhase::Idle
    }
}

/// The quote on screen and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayedQuote {
    pub quote: Quote,
    pub source: QuoteSource,
}

/// Full quote cycle state.
///
/// `cycle` counts started fetches; async completions carry the value they
/// were started under so stale ones can be told apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuoteCycleState {
    pub phase: QuotePhase,
    /// Currently displayed quote. `None` until the first swap; the view
    /// shows placeholder text in that case.
    pub displayed: Option<DisplayedQuote>,
    pub cycle: u64,
}

impl UiState for QuoteCycleState {}

impl QuoteCycleState {
    /// True while a new quote is being produced and the trigger must stay
    /// disabled. Covers Fetching and FadingOut; the busy flag drops at the
    /// text swap, not when the fade-in completes.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, QuotePhase::Fetching | QuotePhase::FadingOut { .. })
    }

    /// True while either fade animation is running.
    pub fn is_fading(&self) -> bool {
        matches!(self.phase, QuotePhase::FadingOut { .. } | QuotePhase::FadingIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> Quote {
        Quote {
            content: "In the middle of difficulty lies opportunity.".to_string(),
            author: "Albert Einstein".to_string(),
        }
    }

    #[test]
    fn default_is_idle_with_nothing_displayed() {
        let state = QuoteCycleState::default();
        assert_eq!(state.phase, QuotePhase::Idle);
        assert!(state.displayed.is_none());
        assert_eq!(state.cycle, 0);
    }

    #[test]
    fn busy_covers_fetching_and_fading_out() {
        let mut state = QuoteCycleState::default();
        assert!(!state.is_busy());

        state.phase = QuotePhase::Fetching;
        assert!(state.is_busy());

        state.phase = QuotePhase::FadingOut {
            pending: quote(),
            source: QuoteSource::Api,
        };
        assert!(state.is_busy());

        state.phase = QuotePhase::FadingIn;
        assert!(!state.is_busy());
    }

    #[test]
    fn fading_covers_both_directions() {
        let mut state = QuoteCycleState::default();
        assert!(!state.is_fading());

        state.phase = QuotePhase::FadingOut {
            pending: quote(),
            source: QuoteSource::Fallback,
        };
        assert!(state.is_fading());

        state.phase = QuotePhase::FadingIn;
        assert!(state.is_fading());

        state.phase = QuotePhase::Fetching;
        assert!(!state.is_fading());
    }
}
