//! Free-time gap detection over a day's blocks.
//!
//! Finds contiguous free intervals of at least the configured minimum
//! against a fixed day window, and classifies each by duration into a
//! suggestion tier.

use serde::{Deserialize, Serialize};

use crate::block::TimeBlock;
use crate::storage::PlannerConfig;
use crate::time;

/// Suggestion tier of a free gap, a pure function of its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionTier {
    /// 120+ minutes
    DeepWork,
    /// 60-119 minutes
    WorkoutStudy,
    /// 30-59 minutes
    MeditationBreak,
}

impl SuggestionTier {
    /// Categorize a gap by its duration in minutes.
    pub fn from_minutes(minutes: u16) -> Self {
        if minutes >= 120 {
            Self::DeepWork
        } else if minutes >= 60 {
            Self::WorkoutStudy
        } else {
            Self::MeditationBreak
        }
    }

    /// Suggestion text shown for gaps in this tier.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::DeepWork => "Long stretch free: schedule a deep work session",
            Self::WorkoutStudy => "About an hour free: fit in a workout or study sprint",
            Self::MeditationBreak => "Short window free: take a meditation or recharge break",
        }
    }
}

/// A contiguous free interval on a day's schedule. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeGap {
    /// Minutes since midnight.
    pub start: u16,
    /// Minutes since midnight.
    pub end: u16,
}

impl FreeGap {
    pub fn duration_minutes(&self) -> u16 {
        self.end.saturating_sub(self.start)
    }

    pub fn tier(&self) -> SuggestionTier {
        SuggestionTier::from_minutes(self.duration_minutes())
    }

    pub fn start_label(&self) -> String {
        time::format_minutes(self.start)
    }

    pub fn end_label(&self) -> String {
        time::format_minutes(self.end)
    }
}

/// Detector for free gaps within a day window.
pub struct GapDetector {
    day_start: u16,
    day_end: u16,
    min_gap_minutes: u16,
}

impl GapDetector {
    /// Detector with the default window (08:00-22:00) and 30 min minimum.
    pub fn new() -> Self {
        Self {
            day_start: 8 * 60,
            day_end: 22 * 60,
            min_gap_minutes: 30,
        }
    }

    /// Detector configured from the planner config.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            day_start: config.day_start_minutes(),
            day_end: config.day_end_minutes(),
            min_gap_minutes: config.min_gap_minutes,
        }
    }

    /// Set the day window, in minutes since midnight.
    pub fn with_window(mut self, day_start: u16, day_end: u16) -> Self {
        self.day_start = day_start;
        self.day_end = day_end;
        self
    }

    /// Set the minimum gap duration.
    pub fn with_min_gap(mut self, minutes: u16) -> Self {
        self.min_gap_minutes = minutes;
        self
    }

    /// Find free gaps between `blocks`, assumed to belong to one day.
    ///
    /// Blocks are stable-sorted by parsed start time. Gaps are emitted in
    /// chronological order: leading gap against the window start, then
    /// adjacent-pair gaps, then the trailing gap against the window end.
    /// A day with zero blocks yields no gaps.
    pub fn find_gaps(&self, blocks: &[TimeBlock]) -> Vec<FreeGap> {
        if blocks.is_empty() {
            return Vec::new();
        }

        let mut sorted: Vec<&TimeBlock> = blocks.iter().collect();
        sorted.sort_by_key(|b| b.start_minutes());

        let mut gaps = Vec::new();

        let first_start = sorted[0].start_minutes();
        let leading = first_start.saturating_sub(self.day_start);
        if leading > 0 && leading >= self.min_gap_minutes {
            gaps.push(FreeGap {
                start: self.day_start,
                end: first_start,
            });
        }

        for pair in sorted.windows(2) {
            let current_end = pair[0].end_minutes();
            let next_start = pair[1].start_minutes();
            let between = next_start.saturating_sub(current_end);
            if between > 0 && between >= self.min_gap_minutes {
                gaps.push(FreeGap {
                    start: current_end,
                    end: next_start,
                });
            }
        }

        let last_end = sorted[sorted.len() - 1].end_minutes();
        let trailing = self.day_end.saturating_sub(last_end);
        if trailing > 0 && trailing >= self.min_gap_minutes {
            gaps.push(FreeGap {
                start: last_end,
                end: self.day_end,
            });
        }

        gaps
    }
}

impl Default for GapDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function using the default window and minimum.
pub fn compute_gaps(blocks: &[TimeBlock]) -> Vec<FreeGap> {
    GapDetector::new().find_gaps(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Category, Day, Priority};
    use chrono::Utc;

    fn block(start: &str, end: &str) -> TimeBlock {
        TimeBlock {
            id: uuid::Uuid::new_v4().to_string(),
            title: "b".to_string(),
            start: start.to_string(),
            end: end.to_string(),
            category: Category::Other,
            day: Day::Monday,
            recurring: false,
            pattern: None,
            priority: Priority::Medium,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn tier_classification_boundaries() {
        assert_eq!(SuggestionTier::from_minutes(30), SuggestionTier::MeditationBreak);
        assert_eq!(SuggestionTier::from_minutes(59), SuggestionTier::MeditationBreak);
        assert_eq!(SuggestionTier::from_minutes(60), SuggestionTier::WorkoutStudy);
        assert_eq!(SuggestionTier::from_minutes(119), SuggestionTier::WorkoutStudy);
        assert_eq!(SuggestionTier::from_minutes(120), SuggestionTier::DeepWork);
        assert_eq!(SuggestionTier::from_minutes(600), SuggestionTier::DeepWork);
    }

    #[test]
    fn canonical_two_block_day_yields_three_gaps() {
        let blocks = vec![block("9:00 AM", "10:00 AM"), block("11:00 AM", "12:00 PM")];
        let gaps = compute_gaps(&blocks);

        assert_eq!(gaps.len(), 3);
        assert_eq!((gaps[0].start, gaps[0].end), (8 * 60, 9 * 60));
        assert_eq!(gaps[0].duration_minutes(), 60);
        assert_eq!((gaps[1].start, gaps[1].end), (10 * 60, 11 * 60));
        assert_eq!(gaps[1].duration_minutes(), 60);
        assert_eq!((gaps[2].start, gaps[2].end), (12 * 60, 22 * 60));
        assert_eq!(gaps[2].duration_minutes(), 600);
        assert_eq!(gaps[2].tier(), SuggestionTier::DeepWork);
    }

    #[test]
    fn empty_day_yields_no_gaps() {
        assert!(compute_gaps(&[]).is_empty());
    }

    #[test]
    fn sub_minimum_gaps_are_skipped() {
        // 20 minutes between blocks, 25 minutes of lead-in: neither reported.
        let blocks = vec![block("8:25 AM", "10:00 AM"), block("10:20 AM", "9:30 PM")];
        let gaps = compute_gaps(&blocks);
        assert_eq!(gaps.len(), 1); // only the trailing 30 min
        assert_eq!((gaps[0].start, gaps[0].end), (21 * 60 + 30, 22 * 60));
    }

    #[test]
    fn unsorted_input_is_sorted_before_sweeping() {
        let blocks = vec![block("11:00 AM", "12:00 PM"), block("9:00 AM", "10:00 AM")];
        let gaps = compute_gaps(&blocks);
        assert_eq!(gaps.len(), 3);
        assert!(gaps.windows(2).all(|g| g[0].start <= g[1].start));
    }

    #[test]
    fn oversized_minimum_yields_no_gaps() {
        // min_gap_minutes comes straight from user config; an absurd value
        // must mean "report nothing", not overflow.
        let blocks = vec![block("9:00 AM", "10:00 AM")];
        let gaps = GapDetector::new()
            .with_min_gap(u16::MAX)
            .find_gaps(&blocks);
        assert!(gaps.is_empty());
    }

    #[test]
    fn custom_window_and_minimum() {
        let blocks = vec![block("9:00 AM", "10:00 AM")];
        let gaps = GapDetector::new()
            .with_window(9 * 60, 11 * 60)
            .with_min_gap(45)
            .find_gaps(&blocks);
        assert_eq!(gaps.len(), 1);
        assert_eq!((gaps[0].start, gaps[0].end), (10 * 60, 11 * 60));
    }

    #[test]
    fn labels_render_from_minutes() {
        let gap = FreeGap {
            start: 8 * 60,
            end: 9 * 60 + 30,
        };
        assert_eq!(gap.start_label(), "8:00 AM");
        assert_eq!(gap.end_label(), "9:30 AM");
    }
}
