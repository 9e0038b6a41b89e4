//! FlowNet — daily winnings tracker with threshold-triggered mode.
//!
//! Library crate exposing all modules for use by integration tests
//! and the demo binaries.

pub mod config;
pub mod types;
pub mod clock;
pub mod tracker;
pub mod logging;
