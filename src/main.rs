//! FlowNet — default walkthrough.
//!
//! Loads configuration, records the sample winnings for today and
//! reports whether the day's total activates the mode.

use anyhow::Result;
use tracing::info;

use flownet::config::AppConfig;
use flownet::logging::init_logging;
use flownet::tracker::WinningsTracker;
use flownet::types::format_cents;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let cfg = AppConfig::load_or_default(CONFIG_PATH)?;
    let mut tracker = WinningsTracker::from_config(&cfg.tracker);
    info!(threshold = %tracker.threshold(), "FlowNet starting up");

    println!("FlowNet Winnings Mode Activation System");
    println!("{}", "=".repeat(50));
    println!("Threshold: {}", tracker.threshold());
    println!();

    let today = tracker.today();
    for amount in &cfg.demo.sample_winnings {
        tracker.add_winning(*amount, None);
    }

    println!(
        "Total winnings for today ({today}): {}",
        format_cents(tracker.total_winnings(None))
    );
    println!();

    println!("{}", tracker.activate_mode());
    println!("Mode active: {}", tracker.is_mode_active());

    Ok(())
}
