//! Reducer for the quote cycle.

use crate::ui::mvi::Reducer;

use super::intent::QuoteIntent;
use super::state::{DisplayedQuote, QuoteCycleState, QuotePhase};

/// Reducer for quote cycle transitions.
///
/// Pure function. The caller handles side effects around the dispatch:
/// spawning the fetch task before `FetchStarted`, arming the fade timers,
/// and recording fade start times for rendering.
pub struct QuoteCycleReducer;

impl Reducer for QuoteCycleReducer {
    type State = QuoteCycleState;
    type Intent = QuoteIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // The trigger re-enables at the swap, so a new fetch may start
            // while the previous fade-in is still running. Busy phases drop
            // the intent here as well as at the input layer.
            QuoteIntent::FetchStarted => {
                if matches!(state.phase, QuotePhase::Idle | QuotePhase::FadingIn) {
                    state.phase = QuotePhase::Fetching;
                    state.cycle = state.cycle.wrapping_add(1);
                }
                state
            }

            QuoteIntent::FetchResolved { quote, source } => {
                if matches!(state.phase, QuotePhase::Fetching) {
                    state.phase = QuotePhase::FadingOut {
                        pending: quote,
                        source,
                    };
                }
                state
            }

            QuoteIntent::FadeOutFinished => match std::mem::take(&mut state.phase) {
                QuotePhase::FadingOut { pending, source } => {
                    state.displayed = Some(DisplayedQuote {
                        quote: pending,
                        source,
                    });
                    state.phase = QuotePhase::FadingIn;
                    state
                }
                other => {
                    state.phase = other;
                    state
                }
            },

            QuoteIntent::FadeInFinished => {
                if matches!(state.phase, QuotePhase::FadingIn) {
                    state.phase = QuotePhase::Idle;
                }
                state
            }
        }
    }
}
