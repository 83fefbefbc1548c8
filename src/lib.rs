//! Terminal app that shows a random inspirational quote on demand.
//!
//! Each activation asks the configured quote API for a fresh quote; any
//! failure is absorbed by an embedded fallback pool that never repeats a
//! quote until every entry has been shown. The swap is animated: old text
//! fades out, new text fades in, and the trigger stays disabled until the
//! swap has happened.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod quotes;
pub mod selector;
pub mod share;
pub mod shutdown;
pub mod ui;
