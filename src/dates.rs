//! Calendar-day date arithmetic.

use chrono::{Duration, NaiveDate};

/// Number of whole calendar days from `start` to `end`.
///
/// Negative when `end` is before `start`; zero on the same day.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Returns `date` offset by `n` days (`n` may be negative).
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_day_count_same_day() {
        assert_eq!(day_count(d(2024, 1, 1), d(2024, 1, 1)), 0);
    }

    #[test]
    fn test_day_count_forward() {
        assert_eq!(day_count(d(2024, 1, 1), d(2024, 1, 8)), 7);
        // Across a month boundary
        assert_eq!(day_count(d(2024, 1, 30), d(2024, 2, 2)), 3);
    }

    #[test]
    fn test_day_count_negative_when_reversed() {
        assert_eq!(day_count(d(2024, 1, 8), d(2024, 1, 1)), -7);
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(d(2024, 1, 1), 2), d(2024, 1, 3));
        assert_eq!(add_days(d(2024, 1, 3), -2), d(2024, 1, 1));
        assert_eq!(add_days(d(2024, 2, 28), 2), d(2024, 3, 1)); // leap year
    }
}
