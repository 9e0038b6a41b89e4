//! Shared types for FlowNet.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Render `amount` with exactly two decimal places, rounding half away
/// from zero (`12.999` -> `13.00`, `0.005` -> `0.01`).
pub fn format_cents(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}

// ---------------------------------------------------------------------------
// Activation report
// ---------------------------------------------------------------------------

/// Outcome of evaluating a single date against the threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationReport {
    pub date: String,
    pub total: Decimal,
    pub threshold: Decimal,
    pub activated: bool,
}

impl fmt::Display for ActivationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.activated {
            write!(f, "Mode ACTIVATED!")?;
        } else {
            write!(f, "Mode NOT activated.")?;
        }
        write!(
            f,
            " Total winnings for {}: {} (threshold: {})",
            self.date,
            format_cents(self.total),
            self.threshold,
        )
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for FlowNet.
#[derive(Debug, thiserror::Error)]
pub enum FlownetError {
    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
