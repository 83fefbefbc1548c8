//! Model-View-Intent primitives for the UI layer.
//!
//! All quote-cycle behavior flows one way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Key presses, clicks, and async completions become intents; the reducer
//! folds them into a new state; the render pass reads only state. Side
//! effects (HTTP fetches, timers, clipboard) live in the caller around the
//! dispatch, never in a reducer.

/// Marker trait for UI state objects.
///
/// A state value is self-contained: rendering needs nothing else. `Default`
/// gives the pre-interaction state and lets dispatch take the current value
/// out by swap.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents.
///
/// An intent is something that happened: a user action (activate, share) or
/// a system event (fetch finished, animation timer elapsed).
pub trait Intent: Send + 'static {}

/// Transforms state in response to intents.
///
/// `reduce` is the only place state transitions happen and must stay a pure
/// function of `(State, Intent)`.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
