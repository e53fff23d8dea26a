//! Scheduling surface: turns user gestures into block store mutations.
//!
//! A single drag gesture walks `Idle -> Dragging -> {dropped | cancelled}`.
//! A drop triggers exactly one duration-preserving move; a cancelled drag
//! or a stale block id mutates nothing.

use tracing::warn;

use crate::block::{Day, TimeBlock};
use crate::storage::PlannerConfig;
use crate::store::BlockStore;
use crate::time;

/// State of the current drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging { block_id: String },
}

/// Pre-filled values for the add flow opened from a slot click.
/// The actual insert goes through [`BlockStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDraft {
    pub day: Day,
    /// `H:MM AM|PM` label of the clicked slot.
    pub start: String,
}

/// Gesture-level controller over the block store. Performs no rendering.
pub struct SchedulingSurface {
    drag: DragState,
}

impl SchedulingSurface {
    pub fn new() -> Self {
        Self {
            drag: DragState::Idle,
        }
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Begin dragging a block.
    pub fn drag_start(&mut self, block_id: impl Into<String>) {
        self.drag = DragState::Dragging {
            block_id: block_id.into(),
        };
    }

    /// Drop the dragged block onto a slot, moving it to the slot's start
    /// time with its duration preserved.
    ///
    /// A drop with no active drag, or with a block id that no longer
    /// resolves (deleted mid-gesture), is a logged no-op. Either way the
    /// gesture ends and the surface returns to idle.
    pub fn drop_on(
        &mut self,
        store: &mut BlockStore,
        day: Day,
        slot_label: &str,
    ) -> Option<TimeBlock> {
        let block_id = match std::mem::replace(&mut self.drag, DragState::Idle) {
            DragState::Dragging { block_id } => block_id,
            DragState::Idle => {
                warn!(%day, slot_label, "drop without an active drag, ignoring");
                return None;
            }
        };

        match store.move_block(&block_id, slot_label) {
            Ok(block) => Some(block),
            Err(e) => {
                warn!(%day, slot_label, error = %e, "dragged block no longer resolves, ignoring drop");
                None
            }
        }
    }

    /// End the gesture without a drop. No mutation.
    pub fn cancel(&mut self) {
        self.drag = DragState::Idle;
    }

    /// A click on an empty slot opens the add flow pre-filled with the
    /// slot's day and start time.
    pub fn slot_click(&self, day: Day, slot_label: &str) -> AddDraft {
        AddDraft {
            day,
            start: slot_label.to_string(),
        }
    }

    /// Hourly slot labels spanning the configured day window.
    pub fn slot_labels(config: &PlannerConfig) -> Vec<String> {
        let start = config.day_start_minutes();
        let end = config.day_end_minutes();
        (start..end)
            .step_by(60)
            .map(time::format_minutes)
            .collect()
    }
}

impl Default for SchedulingSurface {
    fn default() -> Self {
        Self::new()
    }
}
