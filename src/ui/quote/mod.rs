//! Quote cycle feature module.
//!
//! Manages the lifecycle of swapping in a new quote: request the API,
//! fade the old text out, swap, fade the new text in. The trigger stays
//! disabled until the swap has happened.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Cycle phase machine (Idle → Fetching → FadingOut → FadingIn)
//! - `intent.rs` - System events (FetchStarted, FetchResolved, fade timers)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::QuoteIntent;
pub use reducer::QuoteCycleReducer;
pub use state::{DisplayedQuote, QuoteCycleState, QuotePhase};
