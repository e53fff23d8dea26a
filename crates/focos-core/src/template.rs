//! Named day templates: frozen snapshots of one day's block set.
//!
//! A template holds deep copies, not live references; applying one
//! re-materializes its blocks with fresh ids onto the target day, so
//! later edits to either side never bleed across.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::block::{Day, TimeBlock};
use crate::error::{CoreError, NotFoundError, StorageError, ValidationError};
use crate::storage::{kv, KvStore};
use crate::store::BlockStore;

/// A reusable snapshot of one day's blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayTemplate {
    pub id: String,
    pub name: String,
    pub blocks: Vec<TimeBlock>,
    pub created_at: DateTime<Utc>,
}

/// Owns the template collection, persisted as a JSON snapshot under the
/// `time_block_templates` key.
pub struct TemplateManager {
    templates: Vec<DayTemplate>,
    kv: KvStore,
}

impl TemplateManager {
    /// Open the manager backed by the default database.
    pub fn open() -> Result<Self, StorageError> {
        Self::with_store(KvStore::open()?)
    }

    /// Open a non-persistent manager (primarily for tests).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_store(KvStore::open_in_memory()?)
    }

    /// Load the template collection from an already-open key-value store.
    pub fn with_store(kv: KvStore) -> Result<Self, StorageError> {
        let templates = match kv.get(kv::TIME_BLOCK_TEMPLATES)? {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!(error = %e, "unreadable time_block_templates snapshot, starting empty");
                Vec::new()
            }),
            None => Vec::new(),
        };
        Ok(Self { templates, kv })
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.templates) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to encode time_block_templates snapshot");
                return;
            }
        };
        if let Err(e) = self.kv.set(kv::TIME_BLOCK_TEMPLATES, &json) {
            warn!(error = %e, "failed to persist templates, keeping in-memory state");
        }
    }

    /// Snapshot all of `day`'s blocks into a new named template.
    ///
    /// # Errors
    /// `BlankTemplateName` when `name` is blank, `EmptyDay` when the day
    /// has nothing to snapshot. State unchanged in both cases.
    pub fn save(
        &mut self,
        store: &BlockStore,
        day: Day,
        name: &str,
    ) -> Result<DayTemplate, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::BlankTemplateName);
        }
        let blocks = store.list_by_day(day);
        if blocks.is_empty() {
            return Err(ValidationError::EmptyDay(day));
        }

        let template = DayTemplate {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            blocks,
            created_at: Utc::now(),
        };
        self.templates.push(template.clone());
        self.persist();
        Ok(template)
    }

    /// Materialize a template onto `target_day` with fresh block ids.
    ///
    /// A populated target day is rejected unless `overwrite` is set
    /// (confirmation is the caller's concern); with `overwrite` the day's
    /// existing blocks are removed first, so applying twice never
    /// duplicates.
    pub fn apply(
        &self,
        store: &mut BlockStore,
        template_id: &str,
        target_day: Day,
        overwrite: bool,
    ) -> Result<Vec<TimeBlock>, CoreError> {
        let template = self
            .get(template_id)
            .ok_or_else(|| NotFoundError::Template(template_id.to_string()))?;

        if !store.list_by_day(target_day).is_empty() {
            if !overwrite {
                return Err(ValidationError::DayNotEmpty(target_day).into());
            }
            store.clear_day(target_day);
        }

        let copies: Vec<TimeBlock> = template
            .blocks
            .iter()
            .map(|b| {
                let mut copy = b.clone();
                copy.id = Uuid::new_v4().to_string();
                copy.day = target_day;
                copy.created_at = Utc::now();
                copy
            })
            .collect();
        store.adopt_blocks(copies.clone());
        Ok(copies)
    }

    /// Delete a template. Day blocks are unaffected; they were copies.
    pub fn remove(&mut self, template_id: &str) -> Result<(), NotFoundError> {
        let before = self.templates.len();
        self.templates.retain(|t| t.id != template_id);
        if self.templates.len() == before {
            return Err(NotFoundError::Template(template_id.to_string()));
        }
        self.persist();
        Ok(())
    }

    pub fn list(&self) -> &[DayTemplate] {
        &self.templates
    }

    pub fn get(&self, template_id: &str) -> Option<&DayTemplate> {
        self.templates.iter().find(|t| t.id == template_id)
    }
}
