//! Day template management commands for CLI.

use clap::Subcommand;
use focos_core::{BlockStore, Day, TemplateManager};

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Snapshot a day's blocks into a named template
    Save {
        /// Day of week to snapshot (monday..sunday)
        day: Day,
        /// Template name
        name: String,
    },
    /// Materialize a template onto a day
    Apply {
        /// Template id
        id: String,
        /// Target day (monday..sunday)
        day: Day,
        /// Replace the target day's existing blocks
        #[arg(long)]
        overwrite: bool,
    },
    /// List saved templates
    List,
    /// Delete a template (day blocks are unaffected)
    Delete {
        /// Template id
        id: String,
    },
}

pub fn run(action: TemplateAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut templates = TemplateManager::open()?;

    match action {
        TemplateAction::Save { day, name } => {
            let store = BlockStore::open()?;
            let template = templates.save(&store, day, &name)?;
            println!("Saved template '{}' ({} blocks): {}", template.name, template.blocks.len(), template.id);
        }
        TemplateAction::Apply { id, day, overwrite } => {
            let mut store = BlockStore::open()?;
            let applied = templates.apply(&mut store, &id, day, overwrite)?;
            println!("Applied {} blocks to {day}.", applied.len());
        }
        TemplateAction::List => {
            if templates.list().is_empty() {
                println!("No templates saved. Use 'template save' to create one.");
            } else {
                for template in templates.list() {
                    println!("{}  {} ({} blocks)", template.id, template.name, template.blocks.len());
                }
            }
        }
        TemplateAction::Delete { id } => {
            templates.remove(&id)?;
            println!("Template deleted.");
        }
    }
    Ok(())
}
