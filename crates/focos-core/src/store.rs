//! The block store: authoritative owner of the scheduled-block collection.
//!
//! All mutations go through this type. Every mutating operation is
//! synchronous and atomic from the caller's perspective, followed by a
//! best-effort snapshot write to the local key-value store; if the write
//! fails the in-memory state stays authoritative for the session and the
//! failure is logged, not rolled back.

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::block::{Category, Day, Priority, RecurrencePattern, TimeBlock};
use crate::error::{NotFoundError, StorageError, ValidationError};
use crate::storage::{kv, KvStore};
use crate::time;

/// Field values for [`BlockStore::add`].
#[derive(Debug, Clone)]
pub struct NewBlock {
    pub title: String,
    /// `H:MM AM|PM` label
    pub start: String,
    /// `H:MM AM|PM` label
    pub end: String,
    pub category: Category,
    pub day: Day,
    pub recurring: bool,
    pub pattern: Option<RecurrencePattern>,
    pub priority: Priority,
}

/// In-place update for [`BlockStore::edit`]. `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct BlockPatch {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub category: Option<Category>,
    pub day: Option<Day>,
    pub recurring: Option<bool>,
    /// `Some(None)` clears the pattern.
    pub pattern: Option<Option<RecurrencePattern>>,
    pub priority: Option<Priority>,
}

/// Authoritative in-memory collection of scheduled blocks, persisted as a
/// JSON snapshot under the `time_blocks` key.
pub struct BlockStore {
    blocks: Vec<TimeBlock>,
    kv: KvStore,
}

impl BlockStore {
    /// Open the store backed by the default database, loading any
    /// persisted blocks.
    pub fn open() -> Result<Self, StorageError> {
        Self::with_store(KvStore::open()?)
    }

    /// Open a non-persistent store (primarily for tests).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_store(KvStore::open_in_memory()?)
    }

    /// Load the block collection from an already-open key-value store.
    ///
    /// An unreadable snapshot starts the session empty rather than
    /// failing; the decode error is logged.
    pub fn with_store(kv: KvStore) -> Result<Self, StorageError> {
        let blocks = match kv.get(kv::TIME_BLOCKS)? {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!(error = %e, "unreadable time_blocks snapshot, starting empty");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Ok(Self { blocks, kv })
    }

    /// Best-effort snapshot write. Failure leaves memory authoritative.
    fn persist(&self) {
        let json = match serde_json::to_string(&self.blocks) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to encode time_blocks snapshot");
                return;
            }
        };
        if let Err(e) = self.kv.set(kv::TIME_BLOCKS, &json) {
            warn!(error = %e, "failed to persist time_blocks, keeping in-memory state");
        }
    }

    /// Create a block, expanding its recurrence pattern onto the implied
    /// days as independent copies with fresh ids.
    ///
    /// Returns the primary block; expansion copies are observable via
    /// [`BlockStore::list_by_day`].
    ///
    /// # Errors
    /// `ValidationError::MissingFields` when title/start/end are blank;
    /// nothing is inserted in that case.
    pub fn add(&mut self, spec: NewBlock) -> Result<TimeBlock, ValidationError> {
        let mut missing = Vec::new();
        if spec.title.trim().is_empty() {
            missing.push("title");
        }
        if spec.start.trim().is_empty() {
            missing.push("start");
        }
        if spec.end.trim().is_empty() {
            missing.push("end");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing.join(", ")));
        }

        let primary = TimeBlock {
            id: Uuid::new_v4().to_string(),
            title: spec.title,
            start: spec.start,
            end: spec.end,
            category: spec.category,
            day: spec.day,
            recurring: spec.recurring,
            pattern: spec.pattern,
            priority: spec.priority,
            created_at: Utc::now(),
        };
        self.blocks.push(primary.clone());

        if primary.recurring {
            if let Some(pattern) = primary.pattern {
                for day in pattern.expansion_days(primary.day) {
                    let mut copy = primary.clone();
                    copy.id = Uuid::new_v4().to_string();
                    copy.day = day;
                    self.blocks.push(copy);
                }
            }
        }

        self.persist();
        Ok(primary)
    }

    /// Apply a patch to one block in place.
    ///
    /// Recurrence siblings created by an earlier expansion are never
    /// touched; each copy is independently editable.
    pub fn edit(&mut self, id: &str, patch: BlockPatch) -> Result<TimeBlock, NotFoundError> {
        let block = self
            .blocks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| NotFoundError::Block(id.to_string()))?;

        if let Some(title) = patch.title {
            block.title = title;
        }
        if let Some(start) = patch.start {
            block.start = start;
        }
        if let Some(end) = patch.end {
            block.end = end;
        }
        if let Some(category) = patch.category {
            block.category = category;
        }
        if let Some(day) = patch.day {
            block.day = day;
        }
        if let Some(recurring) = patch.recurring {
            block.recurring = recurring;
        }
        if let Some(pattern) = patch.pattern {
            block.pattern = pattern;
        }
        if let Some(priority) = patch.priority {
            block.priority = priority;
        }

        let updated = block.clone();
        self.persist();
        Ok(updated)
    }

    /// Delete one block, or with `cascade` every block sharing the
    /// target's `(title, category)` pair across all days.
    ///
    /// Cascade is how "delete all recurring instances" works: no
    /// recurrence-group id is stored, so title+category is the match key.
    /// Coincidentally identical unrelated blocks will match too; callers
    /// decide cascade based on the target's `recurring` flag.
    pub fn delete(&mut self, id: &str, cascade: bool) -> Result<(), NotFoundError> {
        let target = self
            .blocks
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| NotFoundError::Block(id.to_string()))?;

        if cascade {
            let title = target.title.clone();
            let category = target.category;
            self.blocks
                .retain(|b| !(b.title == title && b.category == category));
        } else {
            self.blocks.retain(|b| b.id != id);
        }

        self.persist();
        Ok(())
    }

    /// Move a block to a new start time, preserving its duration
    /// (clamped to zero when the stored interval is inverted).
    pub fn move_block(&mut self, id: &str, new_start: &str) -> Result<TimeBlock, NotFoundError> {
        let block = self
            .blocks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| NotFoundError::Block(id.to_string()))?;

        let duration = block.duration_minutes();
        block.start = new_start.to_string();
        block.end = time::add_minutes(new_start, duration);

        let moved = block.clone();
        self.persist();
        Ok(moved)
    }

    /// All blocks scheduled on `day`. Order beyond insertion order is not
    /// guaranteed; the gap analyzer sorts explicitly.
    pub fn list_by_day(&self, day: Day) -> Vec<TimeBlock> {
        self.blocks.iter().filter(|b| b.day == day).cloned().collect()
    }

    /// The block occupying a start-time slot on `day`, if any.
    ///
    /// One block per slot is expected; should duplicates exist the lowest
    /// id wins, deterministically. Tolerated edge case, not an error.
    pub fn find_by_slot(&self, day: Day, start_label: &str) -> Option<&TimeBlock> {
        let slot = time::parse_label(start_label);
        self.blocks
            .iter()
            .filter(|b| b.day == day && b.start_minutes() == slot)
            .min_by(|a, b| a.id.cmp(&b.id))
    }

    pub fn get(&self, id: &str) -> Option<&TimeBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Remove every block on `day`, returning how many were removed.
    pub fn clear_day(&mut self, day: Day) -> usize {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.day != day);
        let removed = before - self.blocks.len();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    /// Insert already-materialized blocks verbatim (template application;
    /// no recurrence expansion, ids are the caller's responsibility).
    pub(crate) fn adopt_blocks(&mut self, blocks: Vec<TimeBlock>) {
        self.blocks.extend(blocks);
        self.persist();
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
