//! Minute-of-day arithmetic for `H:MM AM|PM` labels.
//!
//! Every component that touches block times goes through this module, so
//! the tolerant-parsing rules live in exactly one place. Parsing is total:
//! malformed input never propagates an error into a scheduling operation,
//! it defaults the offending field to 0, clamps, and logs a warning.

use tracing::warn;

/// Minutes in a day; valid minute-of-day values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 1440;

/// Parse a `H:MM AM|PM` label into minutes since midnight (0-1439).
///
/// `12 AM` maps to 0 and `12 PM` to 720. A malformed or missing component
/// defaults that field to 0; hours clamp to [0,23] and minutes to [0,59].
pub fn parse_label(label: &str) -> u16 {
    let trimmed = label.trim();
    let (clock, meridiem) = match trimmed.rsplit_once(' ') {
        Some((clock, meridiem)) => (clock.trim(), meridiem.trim().to_ascii_uppercase()),
        None => {
            warn!(label, "time label missing AM/PM marker, assuming AM");
            (trimmed, "AM".to_string())
        }
    };

    let (hour_part, minute_part) = clock.split_once(':').unwrap_or((clock, "0"));
    let hour12: u32 = hour_part.trim().parse().unwrap_or_else(|_| {
        warn!(label, "unreadable hour in time label, defaulting to 0");
        0
    });
    let minute: u32 = minute_part.trim().parse().unwrap_or_else(|_| {
        warn!(label, "unreadable minute in time label, defaulting to 0");
        0
    });

    let hour24 = match (hour12, meridiem.as_str()) {
        (12, "AM") => 0,
        (12, "PM") => 12,
        (h, "PM") => h.saturating_add(12),
        (h, _) => h,
    };

    let hour24 = hour24.min(23) as u16;
    let minute = minute.min(59) as u16;
    hour24 * 60 + minute
}

/// Format minutes since midnight as a 12-hour `H:MM AM|PM` label.
///
/// Inverse of [`parse_label`] on canonical inputs: minute 0 renders as
/// `12:00 AM`, minute 720 as `12:00 PM`.
pub fn format_minutes(minutes: u16) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let hour24 = minutes / 60;
    let minute = minutes % 60;
    let meridiem = if hour24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {meridiem}")
}

/// Shift a label by `delta` minutes, clamped to the day range.
///
/// Used to recompute a moved block's end time so its duration survives
/// the move.
pub fn add_minutes(label: &str, delta: i64) -> String {
    let shifted = (parse_label(label) as i64 + delta).clamp(0, MINUTES_PER_DAY as i64 - 1);
    format_minutes(shifted as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_canonical_labels() {
        assert_eq!(parse_label("12:00 AM"), 0);
        assert_eq!(parse_label("12:30 AM"), 30);
        assert_eq!(parse_label("1:00 AM"), 60);
        assert_eq!(parse_label("12:00 PM"), 720);
        assert_eq!(parse_label("2:30 PM"), 14 * 60 + 30);
        assert_eq!(parse_label("11:59 PM"), 1439);
    }

    #[test]
    fn parse_is_total_on_malformed_input() {
        // No panic, documented fallbacks.
        assert_eq!(parse_label(""), 0);
        assert_eq!(parse_label("garbage"), 0);
        assert_eq!(parse_label("2:30"), 150); // missing meridiem -> AM
        assert_eq!(parse_label(":30 AM"), 30); // missing hour -> 0
        assert_eq!(parse_label("2:xx PM"), 14 * 60); // bad minute -> 0
        assert_eq!(parse_label("25:99 PM"), 23 * 60 + 59); // clamped
        assert_eq!(parse_label("4294967295:00 PM"), 23 * 60); // u32::MAX hour
        assert_eq!(parse_label("99999999999999:00 PM"), 720); // unparseable hour -> 0, PM
    }

    #[test]
    fn round_trip_every_minute() {
        for m in 0..MINUTES_PER_DAY {
            assert_eq!(parse_label(&format_minutes(m)), m, "minute {m}");
        }
    }

    #[test]
    fn add_minutes_shifts_and_clamps() {
        assert_eq!(add_minutes("5:30 PM", 60), "6:30 PM");
        assert_eq!(add_minutes("12:00 AM", -30), "12:00 AM");
        assert_eq!(add_minutes("11:00 PM", 120), "11:59 PM");
    }

    proptest! {
        #[test]
        fn format_parse_round_trip(m in 0u16..MINUTES_PER_DAY) {
            prop_assert_eq!(parse_label(&format_minutes(m)), m);
        }

        #[test]
        fn parse_never_panics(label in ".*") {
            let minutes = parse_label(&label);
            prop_assert!(minutes < MINUTES_PER_DAY);
        }
    }
}
