//! Block domain model: the scheduled-activity entity and its closed enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::time;

/// Activity category. Drives icon/color lookup only; no scheduling logic
/// branches on it outside display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Study,
    Fitness,
    Meditation,
    Finance,
    Wellness,
    Break,
    Spiritual,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Study => "study",
            Self::Fitness => "fitness",
            Self::Meditation => "meditation",
            Self::Finance => "finance",
            Self::Wellness => "wellness",
            Self::Break => "break",
            Self::Spiritual => "spiritual",
            Self::Other => "other",
        }
    }

    /// Display icon. Re-derivable from the category, never stored.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Study => "book",
            Self::Fitness => "dumbbell",
            Self::Meditation => "lotus",
            Self::Finance => "coins",
            Self::Wellness => "heart",
            Self::Break => "coffee",
            Self::Spiritual => "flame",
            Self::Other => "circle",
        }
    }

    /// Display color. Re-derivable from the category, never stored.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Study => "#4f8ef7",
            Self::Fitness => "#f76e4f",
            Self::Meditation => "#9b6ef7",
            Self::Finance => "#3dbf7a",
            Self::Wellness => "#f7b84f",
            Self::Break => "#8fa3b0",
            Self::Spiritual => "#e8743d",
            Self::Other => "#6b7280",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "study" => Ok(Self::Study),
            "fitness" => Ok(Self::Fitness),
            "meditation" => Ok(Self::Meditation),
            "finance" => Ok(Self::Finance),
            "wellness" => Ok(Self::Wellness),
            "break" => Ok(Self::Break),
            "spiritual" => Ok(Self::Spiritual),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// Day of week a block is scheduled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn all() -> [Day; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub fn weekdays() -> [Day; 5] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
        ]
    }

    pub fn weekend() -> [Day; 2] {
        [Self::Saturday, Self::Sunday]
    }

    pub fn is_weekday(&self) -> bool {
        !matches!(self, Self::Saturday | Self::Sunday)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            other => Err(format!("unknown day: {other}")),
        }
    }
}

/// Repeat pattern for a recurring block.
///
/// Recurrence is expand-on-create: the pattern is consumed once at add
/// time to materialize independent per-day copies, never a live link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrencePattern {
    Daily,
    Weekdays,
    Weekends,
    Weekly,
}

impl RecurrencePattern {
    /// The extra days a block created on `origin` fans out to.
    ///
    /// `origin` itself is never included; the primary block already
    /// occupies it.
    pub fn expansion_days(&self, origin: Day) -> Vec<Day> {
        let candidates: Vec<Day> = match self {
            Self::Daily => Day::all().to_vec(),
            Self::Weekdays => Day::weekdays().to_vec(),
            Self::Weekends => Day::weekend().to_vec(),
            Self::Weekly => Vec::new(),
        };
        candidates.into_iter().filter(|d| *d != origin).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekdays => "weekdays",
            Self::Weekends => "weekends",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecurrencePattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekdays" => Ok(Self::Weekdays),
            "weekends" => Ok(Self::Weekends),
            "weekly" => Ok(Self::Weekly),
            other => Err(format!("unknown recurrence pattern: {other}")),
        }
    }
}

/// Block priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// A single scheduled activity occupying a start-end interval on one day.
///
/// `start < end` is desired but not force-corrected; duration-preserving
/// operations treat a negative duration as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub id: String,
    pub title: String,
    /// `H:MM AM|PM` label
    pub start: String,
    /// `H:MM AM|PM` label
    pub end: String,
    pub category: Category,
    pub day: Day,
    pub recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<RecurrencePattern>,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl TimeBlock {
    /// Block length in minutes, clamped to zero when `end <= start`.
    pub fn duration_minutes(&self) -> i64 {
        let duration = time::parse_label(&self.end) as i64 - time::parse_label(&self.start) as i64;
        duration.max(0)
    }

    pub fn start_minutes(&self) -> u16 {
        time::parse_label(&self.start)
    }

    pub fn end_minutes(&self) -> u16 {
        time::parse_label(&self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_days_per_pattern() {
        let days = RecurrencePattern::Daily.expansion_days(Day::Monday);
        assert_eq!(days.len(), 6);
        assert!(!days.contains(&Day::Monday));

        // Weekday origin is excluded from its own fan-out.
        let days = RecurrencePattern::Weekdays.expansion_days(Day::Monday);
        assert_eq!(days.len(), 4);

        // Weekend origin keeps all five weekdays.
        let days = RecurrencePattern::Weekdays.expansion_days(Day::Saturday);
        assert_eq!(days.len(), 5);

        assert_eq!(
            RecurrencePattern::Weekends.expansion_days(Day::Saturday),
            vec![Day::Sunday]
        );
        assert_eq!(
            RecurrencePattern::Weekends.expansion_days(Day::Wednesday).len(),
            2
        );
        assert!(RecurrencePattern::Weekly.expansion_days(Day::Friday).is_empty());
    }

    #[test]
    fn enums_use_snake_case_wire_form() {
        assert_eq!(serde_json::to_string(&Category::Spiritual).unwrap(), "\"spiritual\"");
        assert_eq!(serde_json::to_string(&Day::Wednesday).unwrap(), "\"wednesday\"");
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        let pattern: RecurrencePattern = serde_json::from_str("\"weekdays\"").unwrap();
        assert_eq!(pattern, RecurrencePattern::Weekdays);
    }

    #[test]
    fn duration_clamps_negative_to_zero() {
        let block = TimeBlock {
            id: "b1".to_string(),
            title: "Backwards".to_string(),
            start: "3:00 PM".to_string(),
            end: "2:00 PM".to_string(),
            category: Category::Other,
            day: Day::Monday,
            recurring: false,
            pattern: None,
            priority: Priority::Low,
            created_at: Utc::now(),
        };
        assert_eq!(block.duration_minutes(), 0);
    }
}
