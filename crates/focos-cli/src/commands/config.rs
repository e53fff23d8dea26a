//! Planner configuration commands for CLI.

use clap::Subcommand;
use focos_core::PlannerConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current planner configuration
    Show,
    /// Update the day window or minimum gap
    Set {
        /// Leading cutoff for gap detection, e.g. "8:00 AM"
        #[arg(long)]
        day_start: Option<String>,
        /// Trailing cutoff for gap detection, e.g. "10:00 PM"
        #[arg(long)]
        day_end: Option<String>,
        /// Smallest free interval worth reporting, in minutes
        #[arg(long)]
        min_gap: Option<u16>,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = PlannerConfig::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Set {
            day_start,
            day_end,
            min_gap,
        } => {
            let mut config = PlannerConfig::load_or_default();
            if let Some(day_start) = day_start {
                config.day_start = day_start;
            }
            if let Some(day_end) = day_end {
                config.day_end = day_end;
            }
            if let Some(min_gap) = min_gap {
                config.min_gap_minutes = min_gap;
            }
            config.save()?;
            println!("Planner configuration updated.");
        }
    }
    Ok(())
}
