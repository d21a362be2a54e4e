//! Wall-clock and calendar utilities.
//!
//! The wall clock is an external, continuously refreshing input to the
//! engine: every function here takes the instant as an argument rather than
//! reading the system clock itself.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;

use crate::catalog::DayKind;
use crate::error::{EngineError, EngineResult};

/// Converts a wall-clock time to a decimal hour.
///
/// Seconds are ignored; registration inputs are HH:MM resolution.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use shiftdesk::engine::decimal_hours;
///
/// let t = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(decimal_hours(t), Decimal::new(95, 1)); // 9.5
/// ```
pub fn decimal_hours(time: NaiveTime) -> Decimal {
    let minutes = i64::from(time.hour()) * 60 + i64::from(time.minute());
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Parses an `HH:MM` entry time.
///
/// Returns [`EngineError::InvalidInput`] for anything that is not a valid
/// 24-hour wall time.
pub fn parse_entry_time(raw: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| EngineError::InvalidInput {
        field: "entry_time".to_string(),
        message: format!("expected HH:MM, got '{raw}'"),
    })
}

/// Determines whether a date falls on the weekday or weekend catalog.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use shiftdesk::catalog::DayKind;
/// use shiftdesk::engine::day_kind;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(day_kind(saturday), DayKind::Weekend);
/// ```
pub fn day_kind(date: NaiveDate) -> DayKind {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayKind::Weekend,
        _ => DayKind::Weekday,
    }
}

/// Lays out a month as Sunday-first week rows.
///
/// Each row holds seven cells; cells outside the month are `None`. The
/// first row is padded so day 1 lands under its weekday column, and the
/// last row is padded to a full week.
pub fn month_grid(year: i32, month: u32) -> Vec<Vec<Option<NaiveDate>>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    // Sunday-first column index: Sun=0 .. Sat=6.
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    let mut day = first;
    while day.month() == month {
        cells.push(Some(day));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    cells.chunks(7).map(<[Option<NaiveDate>]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_decimal_hours_on_the_hour() {
        assert_eq!(decimal_hours(time("09:00")), dec("9"));
        assert_eq!(decimal_hours(time("00:00")), dec("0"));
        assert_eq!(decimal_hours(time("18:00")), dec("18"));
    }

    #[test]
    fn test_decimal_hours_with_minutes() {
        assert_eq!(decimal_hours(time("09:30")), dec("9.5"));
        assert_eq!(decimal_hours(time("15:45")), dec("15.75"));
        assert_eq!(decimal_hours(time("12:15")), dec("12.25"));
    }

    #[test]
    fn test_decimal_hours_ignores_seconds() {
        let t = NaiveTime::from_hms_opt(9, 30, 59).unwrap();
        assert_eq!(decimal_hours(t), dec("9.5"));
    }

    #[test]
    fn test_parse_entry_time_valid() {
        assert_eq!(parse_entry_time("09:05").unwrap(), time("09:05"));
        assert_eq!(parse_entry_time("23:59").unwrap(), time("23:59"));
    }

    #[test]
    fn test_parse_entry_time_invalid() {
        for raw in ["25:00", "9h30", "", "12:60"] {
            let result = parse_entry_time(raw);
            assert!(
                matches!(result, Err(EngineError::InvalidInput { ref field, .. }) if field == "entry_time"),
                "expected InvalidInput for {raw:?}"
            );
        }
    }

    #[test]
    fn test_day_kind_week() {
        // 2026-01-12 is a Monday
        assert_eq!(day_kind(date("2026-01-12")), DayKind::Weekday);
        assert_eq!(day_kind(date("2026-01-16")), DayKind::Weekday);
        // Saturday and Sunday
        assert_eq!(day_kind(date("2026-01-17")), DayKind::Weekend);
        assert_eq!(day_kind(date("2026-01-18")), DayKind::Weekend);
    }

    #[test]
    fn test_month_grid_shape() {
        // January 2026 starts on a Thursday and has 31 days.
        let grid = month_grid(2026, 1);
        assert_eq!(grid.len(), 5);
        for week in &grid {
            assert_eq!(week.len(), 7);
        }
        // Thursday column is index 4 (Sunday-first).
        assert_eq!(grid[0][4], Some(date("2026-01-01")));
        assert!(grid[0][..4].iter().all(Option::is_none));
        assert_eq!(grid[4][6], Some(date("2026-01-31")));
    }

    #[test]
    fn test_month_grid_counts_days_once() {
        let grid = month_grid(2026, 2);
        let days: Vec<NaiveDate> = grid.into_iter().flatten().flatten().collect();
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], date("2026-02-01"));
        assert_eq!(days[27], date("2026-02-28"));
    }

    #[test]
    fn test_month_grid_invalid_month() {
        assert!(month_grid(2026, 13).is_empty());
    }
}
