//! Occurrence scanner
//!
//! Walks forward from a start instant one unit at a time (a second for the
//! 6-field form, a minute for the 5-field form) and yields every instant whose
//! calendar components all match. Times are local civil time; there is no
//! time-zone or DST handling.
//!
//! Day-of-month and day-of-week are combined with AND. Classic cron fires when
//! *either* matches if both are restricted; this scanner does not.

use crate::error::Result;
use crate::parser::ParsedExpression;
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike};

/// How far past the start a search may run before giving up
pub const SEARCH_HORIZON_DAYS: i64 = 366;

/// Default number of occurrences returned when the caller does not choose
pub const DEFAULT_COUNT: usize = 5;

impl ParsedExpression {
    /// Check if an instant matches every field of this expression
    ///
    /// Seconds are only compared for the 6-field form. A Sunday matches a
    /// day-of-week field containing either `0` or `7`.
    pub fn matches(&self, dt: &NaiveDateTime) -> bool {
        let second_ok = self
            .second
            .as_ref()
            .map_or(true, |second| second.contains(dt.second()));
        second_ok && self.matches_minute(dt) && self.matches_hour(dt) && self.matches_date(dt)
    }

    fn matches_minute(&self, dt: &NaiveDateTime) -> bool {
        self.minute.contains(dt.minute())
    }

    fn matches_hour(&self, dt: &NaiveDateTime) -> bool {
        self.hour.contains(dt.hour())
    }

    fn matches_date(&self, dt: &NaiveDateTime) -> bool {
        let weekday = dt.weekday().num_days_from_sunday();
        self.day_of_month.contains(dt.day())
            && self.month.contains(dt.month())
            && (self.day_of_week.contains(weekday)
                || (weekday == 0 && self.day_of_week.contains(7)))
    }

    /// Lazily iterate over matching instants strictly after `start`
    ///
    /// # Examples
    ///
    /// ```
    /// use a3s_cronexpr::ParsedExpression;
    /// use chrono::NaiveDate;
    ///
    /// let expr = ParsedExpression::parse("0 * * * *").unwrap();
    /// let start = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap().and_hms_opt(10, 30, 0).unwrap();
    /// let next = expr.occurrences_after(start).next().unwrap();
    /// assert_eq!(next.to_string(), "2026-02-05 11:00:00");
    /// ```
    pub fn occurrences_after(&self, start: NaiveDateTime) -> Occurrences<'_> {
        let start = start.with_nanosecond(0).unwrap_or(start);
        let cursor = if self.is_extended {
            start.checked_add_signed(Duration::seconds(1))
        } else {
            start
                .with_second(0)
                .unwrap_or(start)
                .checked_add_signed(Duration::minutes(1))
        };
        let horizon = cursor
            .and_then(|c| c.checked_add_signed(Duration::days(SEARCH_HORIZON_DAYS)))
            .unwrap_or(NaiveDateTime::MAX);
        Occurrences {
            expr: self,
            cursor,
            horizon,
        }
    }
}

/// Iterator over matching instants, in increasing order
///
/// Ends once the cursor passes the search horizon, so a schedule that can
/// never fire (e.g. `0 0 31 2 *`) yields nothing instead of looping. Also ends
/// at the last representable instant.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    expr: &'a ParsedExpression,
    /// `None` once the calendar runs out
    cursor: Option<NaiveDateTime>,
    horizon: NaiveDateTime,
}

impl Occurrences<'_> {
    /// First instant at or after `current` that is worth testing.
    ///
    /// Jumps past whole days, hours, or (6-field form) minutes that cannot
    /// match. Returns `current` itself when it is a candidate.
    fn next_candidate(&self, current: NaiveDateTime) -> Option<NaiveDateTime> {
        let expr = self.expr;
        if !expr.matches_date(&current) {
            current.date().succ_opt().map(|day| day.and_time(NaiveTime::MIN))
        } else if !expr.matches_hour(&current) {
            current
                .date()
                .and_time(NaiveTime::MIN)
                .checked_add_signed(Duration::hours(i64::from(current.hour()) + 1))
        } else if expr.is_extended && !expr.matches_minute(&current) {
            current
                .with_second(0)
                .unwrap_or(current)
                .checked_add_signed(Duration::minutes(1))
        } else {
            Some(current)
        }
    }

    fn step(&self) -> Duration {
        if self.expr.is_extended {
            Duration::seconds(1)
        } else {
            Duration::minutes(1)
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<NaiveDateTime> {
        while let Some(cursor) = self.cursor.filter(|c| *c < self.horizon) {
            let candidate = self.next_candidate(cursor);
            if candidate != Some(cursor) {
                self.cursor = candidate;
                continue;
            }
            self.cursor = cursor.checked_add_signed(self.step());
            if self.expr.matches(&cursor) {
                return Some(cursor);
            }
        }
        None
    }
}

/// Compute the next `count` instants after `start` that match `expression`
///
/// Fewer than `count` results (possibly none) come back when the schedule
/// does not fire often enough within [`SEARCH_HORIZON_DAYS`].
///
/// # Examples
///
/// ```
/// use a3s_cronexpr::next_occurrences;
/// use chrono::{NaiveDate, Timelike};
///
/// let start = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let runs = next_occurrences("0 12 * * *", 3, start).unwrap();
/// assert_eq!(runs.len(), 3);
/// assert!(runs.iter().all(|t| t.hour() == 12 && t.minute() == 0));
/// ```
pub fn next_occurrences(
    expression: &str,
    count: usize,
    start: NaiveDateTime,
) -> Result<Vec<NaiveDateTime>> {
    let parsed = ParsedExpression::parse(expression)?;
    let found: Vec<NaiveDateTime> = parsed.occurrences_after(start).take(count).collect();
    if found.len() < count {
        tracing::debug!(
            expression,
            requested = count,
            found = found.len(),
            "Search horizon reached before enough occurrences"
        );
    }
    Ok(found)
}

/// [`next_occurrences`] starting from the current local time
pub fn upcoming(expression: &str, count: usize) -> Result<Vec<NaiveDateTime>> {
    next_occurrences(expression, count, chrono::Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_next_after_specific_time() {
        let runs = next_occurrences("0 12 * * *", 3, at(2026, 2, 5, 10, 0, 0)).unwrap();
        assert_eq!(
            runs,
            vec![
                at(2026, 2, 5, 12, 0, 0),
                at(2026, 2, 6, 12, 0, 0),
                at(2026, 2, 7, 12, 0, 0),
            ]
        );
    }

    #[test]
    fn test_start_instant_never_returned() {
        let start = at(2026, 2, 5, 12, 0, 0);
        let runs = next_occurrences("0 12 * * *", 1, start).unwrap();
        assert_eq!(runs, vec![at(2026, 2, 6, 12, 0, 0)]);

        let runs = next_occurrences("* * * * * *", 2, start).unwrap();
        assert_eq!(runs, vec![at(2026, 2, 5, 12, 0, 1), at(2026, 2, 5, 12, 0, 2)]);
    }

    #[test]
    fn test_standard_form_clears_seconds() {
        let start = at(2026, 2, 5, 10, 30, 45);
        let runs = next_occurrences("* * * * *", 2, start).unwrap();
        assert_eq!(runs, vec![at(2026, 2, 5, 10, 31, 0), at(2026, 2, 5, 10, 32, 0)]);
    }

    #[test]
    fn test_sub_second_cleared() {
        let start = at(2026, 2, 5, 10, 30, 0) + Duration::milliseconds(750);
        let runs = next_occurrences("*/15 * * * * *", 2, start).unwrap();
        assert_eq!(runs, vec![at(2026, 2, 5, 10, 30, 15), at(2026, 2, 5, 10, 30, 30)]);
    }

    #[test]
    fn test_extended_seconds() {
        let runs = next_occurrences("30 0 9 * * *", 2, at(2026, 2, 5, 10, 0, 0)).unwrap();
        assert_eq!(runs, vec![at(2026, 2, 6, 9, 0, 30), at(2026, 2, 7, 9, 0, 30)]);
    }

    #[test]
    fn test_next_hour_rollover() {
        let runs = next_occurrences("0 * * * *", 1, at(2026, 2, 5, 10, 30, 0)).unwrap();
        assert_eq!(runs, vec![at(2026, 2, 5, 11, 0, 0)]);
    }

    #[test]
    fn test_month_and_year_rollover() {
        let runs = next_occurrences("0 0 1 * *", 2, at(2026, 12, 15, 0, 0, 0)).unwrap();
        assert_eq!(runs, vec![at(2027, 1, 1, 0, 0, 0), at(2027, 2, 1, 0, 0, 0)]);
    }

    #[test]
    fn test_weekday_sunday_alias() {
        // 2026-02-08 is a Sunday
        let start = at(2026, 2, 5, 0, 0, 0);
        let with_zero = next_occurrences("0 0 * * 0", 1, start).unwrap();
        let with_seven = next_occurrences("0 0 * * 7", 1, start).unwrap();
        assert_eq!(with_zero, vec![at(2026, 2, 8, 0, 0, 0)]);
        assert_eq!(with_seven, with_zero);
    }

    #[test]
    fn test_day_of_month_and_weekday_are_anded() {
        // Friday the 13th
        let runs = next_occurrences("0 0 13 * 5", 2, at(2026, 1, 1, 0, 0, 0)).unwrap();
        assert_eq!(runs, vec![at(2026, 2, 13, 0, 0, 0), at(2026, 3, 13, 0, 0, 0)]);
    }

    #[test]
    fn test_impossible_schedule_is_empty() {
        let runs = next_occurrences("0 0 31 2 *", 5, at(2026, 1, 1, 0, 0, 0)).unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn test_rare_schedule_is_short() {
        // Feb 29 only exists in 2028 within the next year and a bit
        let runs = next_occurrences("0 0 29 2 *", 3, at(2027, 6, 1, 0, 0, 0)).unwrap();
        assert_eq!(runs, vec![at(2028, 2, 29, 0, 0, 0)]);
    }

    #[test]
    fn test_zero_count() {
        let runs = next_occurrences("* * * * *", 0, at(2026, 1, 1, 0, 0, 0)).unwrap();
        assert!(runs.is_empty());
    }

    #[test]
    fn test_results_strictly_increasing() {
        let runs = next_occurrences("*/7 */3 * * *", 50, at(2026, 3, 1, 0, 0, 0)).unwrap();
        assert_eq!(runs.len(), 50);
        assert!(runs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_matches() {
        let expr = ParsedExpression::parse("30 14 * * 1").unwrap();
        // Monday, Feb 2, 2026 at 14:30
        assert!(expr.matches(&at(2026, 2, 2, 14, 30, 0)));
        // Same time but Tuesday
        assert!(!expr.matches(&at(2026, 2, 3, 14, 30, 0)));
        // Standard form ignores seconds
        assert!(expr.matches(&at(2026, 2, 2, 14, 30, 59)));
    }

    #[test]
    fn test_start_near_max_is_short() {
        let runs = next_occurrences("* * * * *", 1, NaiveDateTime::MAX).unwrap();
        assert!(runs.is_empty());
        let runs = next_occurrences("* * * * * *", 1, NaiveDateTime::MAX).unwrap();
        assert!(runs.is_empty());

        // 23:57, 23:58 and 23:59 on the last representable day
        let start = NaiveDateTime::MAX - Duration::minutes(3);
        let runs = next_occurrences("* * * * *", 5, start).unwrap();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[2].time(), NaiveTime::from_hms_opt(23, 59, 0).unwrap());

        let runs = next_occurrences("0 0 * * *", 5, start).unwrap();
        assert!(runs.is_empty());
    }

    /// Reference scan that tests every unit without skipping ahead
    fn scan_every_unit(expression: &str, count: usize, start: NaiveDateTime) -> Vec<NaiveDateTime> {
        let expr = ParsedExpression::parse(expression).unwrap();
        let step = if expr.is_extended {
            Duration::seconds(1)
        } else {
            Duration::minutes(1)
        };
        let mut cursor = if expr.is_extended {
            start + step
        } else {
            start.with_second(0).unwrap() + step
        };
        let mut found = Vec::new();
        while found.len() < count {
            if expr.matches(&cursor) {
                found.push(cursor);
            }
            cursor += step;
        }
        found
    }

    #[test]
    fn test_skip_ahead_matches_unit_scan() {
        let start = at(2026, 1, 30, 22, 47, 13);
        for (expression, count) in [
            ("*/7 */3 * * *", 20),
            ("0 12 * * 1-5", 20),
            ("15,45 8-10 1,15 * *", 20),
            ("0 0 13 * 5", 3),
            ("0 22-23 * feb,mar sun", 10),
            ("30 0 9 * * *", 5),
            ("*/20 59 23 * * *", 10),
            ("0 0 0 1 * 0,7", 2),
        ] {
            assert_eq!(
                next_occurrences(expression, count, start).unwrap(),
                scan_every_unit(expression, count, start),
                "{}",
                expression
            );
        }
    }

    #[test]
    fn test_invalid_expression_errors() {
        assert!(next_occurrences("bad", 1, at(2026, 1, 1, 0, 0, 0)).is_err());
    }

    #[test]
    fn test_upcoming_is_in_future() {
        let now = chrono::Local::now().naive_local();
        let runs = upcoming("* * * * *", 1).unwrap();
        assert_eq!(runs.len(), 1);
        assert!(runs[0] > now);
    }
}
