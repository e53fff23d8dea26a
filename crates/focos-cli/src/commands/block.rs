//! Block management commands for CLI.

use clap::Subcommand;
use focos_core::{BlockPatch, BlockStore, Category, Day, NewBlock, Priority, RecurrencePattern};

#[derive(Subcommand)]
pub enum BlockAction {
    /// Add a block (recurring blocks expand onto the implied days)
    Add {
        /// Activity title
        title: String,
        /// Start time, e.g. "5:30 PM"
        start: String,
        /// End time, e.g. "6:30 PM"
        end: String,
        /// Category (study, fitness, meditation, finance, wellness, break, spiritual, other)
        category: Category,
        /// Day of week (monday..sunday)
        day: Day,
        /// Repeat pattern (daily, weekdays, weekends, weekly)
        #[arg(long)]
        recurring: Option<RecurrencePattern>,
        /// Priority (low, medium, high)
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// List a day's blocks
    List {
        /// Day of week (monday..sunday)
        day: Day,
    },
    /// Edit fields of a block in place
    Edit {
        /// Block id
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        day: Option<Day>,
        /// Mark the block recurring or not (true/false)
        #[arg(long)]
        recurring: Option<bool>,
        /// Repeat pattern (daily, weekdays, weekends, weekly)
        #[arg(long)]
        pattern: Option<RecurrencePattern>,
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Delete a block
    Delete {
        /// Block id
        id: String,
        /// Also delete every block sharing the target's title and category
        #[arg(long)]
        all: bool,
    },
    /// Move a block to a new start time, preserving its duration
    Move {
        /// Block id
        id: String,
        /// New start time, e.g. "6:00 PM"
        start: String,
    },
}

pub fn run(action: BlockAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = BlockStore::open()?;

    match action {
        BlockAction::Add {
            title,
            start,
            end,
            category,
            day,
            recurring,
            priority,
        } => {
            let block = store.add(NewBlock {
                title,
                start,
                end,
                category,
                day,
                recurring: recurring.is_some(),
                pattern: recurring,
                priority,
            })?;
            println!("{}", serde_json::to_string_pretty(&block)?);
        }
        BlockAction::List { day } => {
            let blocks = store.list_by_day(day);
            if blocks.is_empty() {
                println!("No blocks on {day}.");
            } else {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            }
        }
        BlockAction::Edit {
            id,
            title,
            start,
            end,
            category,
            day,
            recurring,
            pattern,
            priority,
        } => {
            let block = store.edit(
                &id,
                BlockPatch {
                    title,
                    start,
                    end,
                    category,
                    day,
                    recurring,
                    pattern: pattern.map(Some),
                    priority,
                },
            )?;
            println!("{}", serde_json::to_string_pretty(&block)?);
        }
        BlockAction::Delete { id, all } => {
            store.delete(&id, all)?;
            if all {
                println!("Block and all matching instances deleted.");
            } else {
                println!("Block deleted.");
            }
        }
        BlockAction::Move { id, start } => {
            let block = store.move_block(&id, &start)?;
            println!("Moved to {} - {}.", block.start, block.end);
        }
    }
    Ok(())
}
