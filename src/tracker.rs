//! Winnings tracker — per-date totals and threshold-triggered mode.
//!
//! Records amounts under a date-key, sums them on demand, and flips the
//! mode flag when a day's total strictly exceeds the configured threshold.
//! Omitted dates resolve to today through the tracker's [`Clock`].
//!
//! The tracker keeps two views of activation state:
//! - a single flag holding the result of the most recent evaluation,
//!   whichever date it targeted ([`WinningsTracker::is_mode_active`]);
//! - the last result per date ([`WinningsTracker::is_mode_active_for`]),
//!   which later evaluations of other dates never overwrite.

use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::clock::{date_key, Clock, SystemClock};
use crate::config::{TrackerConfig, DEFAULT_THRESHOLD};
use crate::types::ActivationReport;

pub struct WinningsTracker<C: Clock = SystemClock> {
    threshold: Decimal,
    winnings: HashMap<String, Vec<Decimal>>,
    activations: HashMap<String, bool>,
    mode_active: bool,
    clock: C,
}

impl Default for WinningsTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl WinningsTracker {
    /// Create a tracker that resolves "today" from the local wall clock.
    pub fn new(threshold: Decimal) -> Self {
        Self::with_clock(threshold, SystemClock)
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.threshold)
    }
}

impl<C: Clock> WinningsTracker<C> {
    /// Create a tracker with an explicit date source.
    pub fn with_clock(threshold: Decimal, clock: C) -> Self {
        Self {
            threshold,
            winnings: HashMap::new(),
            activations: HashMap::new(),
            mode_active: false,
            clock,
        }
    }

    pub fn threshold(&self) -> Decimal {
        self.threshold
    }

    /// Today's date-key according to the tracker's clock.
    pub fn today(&self) -> String {
        date_key(self.clock.today())
    }

    fn resolve(&self, date: Option<&str>) -> String {
        match date {
            Some(d) => d.to_string(),
            None => self.today(),
        }
    }

    /// Record `amount` under `date` (today if omitted).
    ///
    /// Amounts are not validated: zero and negative values are summed as-is.
    pub fn add_winning(&mut self, amount: Decimal, date: Option<&str>) {
        let date = self.resolve(date);
        debug!(date = %date, amount = %amount, "Winning recorded");
        self.winnings.entry(date).or_default().push(amount);
    }

    /// Amounts recorded under `date`, in insertion order.
    pub fn winnings(&self, date: Option<&str>) -> &[Decimal] {
        let date = self.resolve(date);
        self.winnings.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Sum of all amounts recorded under `date`. Unknown dates total zero.
    ///
    /// Saturates at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
    pub fn total_winnings(&self, date: Option<&str>) -> Decimal {
        self.winnings(date)
            .iter()
            .fold(Decimal::ZERO, |acc, amount| saturating_add(acc, *amount))
    }

    /// Evaluate `date` against the threshold and update the mode flag.
    ///
    /// Returns true iff the date's total is strictly greater than the
    /// threshold. The shared flag is overwritten on every call.
    pub fn check_and_activate_mode(&mut self, date: Option<&str>) -> bool {
        let date = self.resolve(date);
        let total = self.total_winnings(Some(&date));
        let active = total > self.threshold;

        if active != self.mode_active {
            info!(
                date = %date,
                total = %total,
                threshold = %self.threshold,
                active,
                "Mode flag changed"
            );
        } else {
            debug!(date = %date, total = %total, active, "Mode evaluated");
        }

        self.mode_active = active;
        self.activations.insert(date, active);
        active
    }

    /// Result of the most recent evaluation, whichever date it targeted.
    pub fn is_mode_active(&self) -> bool {
        self.mode_active
    }

    /// Result of the most recent evaluation of `date`. False if never evaluated.
    pub fn is_mode_active_for(&self, date: Option<&str>) -> bool {
        let date = self.resolve(date);
        self.activations.get(&date).copied().unwrap_or(false)
    }

    /// Evaluate today and return the structured outcome.
    pub fn activation_report(&mut self) -> ActivationReport {
        let today = self.today();
        let total = self.total_winnings(Some(&today));
        let activated = self.check_and_activate_mode(Some(&today));
        ActivationReport {
            date: today,
            total,
            threshold: self.threshold,
            activated,
        }
    }

    /// Evaluate today and describe the outcome.
    pub fn activate_mode(&mut self) -> String {
        self.activation_report().to_string()
    }
}

fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or(if b.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
