//! # FOCOS Core Library
//!
//! Core business logic for the FOCOS time-blocking planner. All
//! operations are available through this library; binaries (the CLI, any
//! GUI shell) are thin layers over the same core.
//!
//! ## Architecture
//!
//! - **Time arithmetic**: total conversion between `H:MM AM|PM` labels
//!   and minute-of-day integers; every other component parses through it
//! - **Block store**: authoritative owner of scheduled blocks, with
//!   expand-on-create recurrence and cascade delete
//! - **Gap analyzer**: free-interval detection against a configurable day
//!   window, with duration-tiered suggestions
//! - **Template manager**: named snapshots of a day, re-materialized with
//!   fresh identities
//! - **Scheduling surface**: the drag/drop and slot-grid gesture layer
//! - **Storage**: sqlite-backed key-value blobs plus TOML planner config
//!
//! ## Key Components
//!
//! - [`BlockStore`]: block CRUD, recurrence expansion, slot lookup
//! - [`GapDetector`]: free-time gap analysis
//! - [`TemplateManager`]: day template save/apply/remove
//! - [`SchedulingSurface`]: gesture state machine over the store

pub mod block;
pub mod error;
pub mod gaps;
pub mod storage;
pub mod store;
pub mod surface;
pub mod template;
pub mod time;

pub use block::{Category, Day, Priority, RecurrencePattern, TimeBlock};
pub use error::{CoreError, NotFoundError, Result, StorageError, ValidationError};
pub use gaps::{compute_gaps, FreeGap, GapDetector, SuggestionTier};
pub use storage::{KvStore, PlannerConfig};
pub use store::{BlockPatch, BlockStore, NewBlock};
pub use surface::{AddDraft, DragState, SchedulingSurface};
pub use template::{DayTemplate, TemplateManager};
