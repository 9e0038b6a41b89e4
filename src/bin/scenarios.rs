//! Scenario walkthrough: four fresh trackers, one per threshold case.
//!
//! The scenarios are written around the stock threshold, so this binary
//! always uses `DEFAULT_THRESHOLD` and ignores `config.toml` overrides.

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use flownet::config::DEFAULT_THRESHOLD;
use flownet::logging::init_logging;
use flownet::tracker::WinningsTracker;
use flownet::types::format_cents;

struct Scenario {
    title: &'static str,
    amounts: Vec<Decimal>,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            title: "Adding winnings totaling 900",
            amounts: vec![dec!(400), dec!(300), dec!(200)],
        },
        Scenario {
            title: "Adding winnings totaling exactly 1000",
            amounts: vec![dec!(1000)],
        },
        Scenario {
            title: "Adding winnings totaling 1050 (>1000)",
            amounts: vec![dec!(500), dec!(300), dec!(250)],
        },
        Scenario {
            title: "Adding multiple winnings totaling 2500 (>1000)",
            amounts: vec![dec!(800), dec!(700), dec!(500), dec!(500)],
        },
    ]
}

fn main() -> Result<()> {
    let _ = dotenv::dotenv();
    init_logging();

    let threshold = DEFAULT_THRESHOLD;
    let rule = "=".repeat(60);

    println!("{rule}");
    println!("FlowNet: Activate Mode When Winnings > {threshold} Today");
    println!("{rule}");
    println!();

    let today = WinningsTracker::new(threshold).today();
    println!("Date: {today}");
    println!("Threshold: {threshold}");
    println!();

    for (i, scenario) in scenarios().iter().enumerate() {
        println!("Scenario {}: {}", i + 1, scenario.title);
        println!("{}", "-".repeat(60));

        let mut tracker = WinningsTracker::new(threshold);
        for amount in &scenario.amounts {
            tracker.add_winning(*amount, None);
        }

        println!("Total winnings: {}", format_cents(tracker.total_winnings(None)));
        println!("Status: {}", tracker.activate_mode());
        println!("Mode Active: {}", tracker.is_mode_active());
        println!();
    }

    println!("{rule}");
    println!("Summary: Mode activates when winnings > {threshold} for today");
    println!("{rule}");

    Ok(())
}
