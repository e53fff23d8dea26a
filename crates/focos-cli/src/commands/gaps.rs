//! Free-time gap report for CLI.

use focos_core::{BlockStore, Day, GapDetector, PlannerConfig};

pub fn run(day: Day) -> Result<(), Box<dyn std::error::Error>> {
    let store = BlockStore::open()?;
    let config = PlannerConfig::load_or_default();

    let blocks = store.list_by_day(day);
    if blocks.is_empty() {
        println!("Nothing scheduled on {day} yet.");
        return Ok(());
    }

    let gaps = GapDetector::from_config(&config).find_gaps(&blocks);
    if gaps.is_empty() {
        println!("No free gaps on {day}.");
        return Ok(());
    }

    for gap in gaps {
        println!(
            "{} - {} ({} min)  {}",
            gap.start_label(),
            gap.end_label(),
            gap.duration_minutes(),
            gap.tier().suggestion(),
        );
    }
    Ok(())
}
