// Inclusive reporting range.
//
// Purpose
// - Validate the caller supplied [start, end] window before any data is fetched.
//
// Responsibilities
// - Reject inverted ranges and ranges wider than the configured maximum span.
// - Translate the local-date range into the UTC window that sources are queried with.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("start date {start} is after end date {end}")]
    StartAfterEnd { start: NaiveDate, end: NaiveDate },

    #[error("range of {days} days exceeds the maximum of {max_days} days")]
    TooLarge { days: i64, max_days: u32 },

    #[error("local midnight of {0} cannot be represented in UTC")]
    Unrepresentable(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

/// Half-open UTC window `[from, until)` covering a `DateRange` in a given offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl TimeWindow {
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        *instant >= self.from && *instant < self.until
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate, max_days: u32) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::StartAfterEnd { start, end });
        }
        let days = (end - start).num_days() + 1;
        if days > i64::from(max_days) {
            return Err(RangeError::TooLarge { days, max_days });
        }
        if end.checked_add_days(Days::new(1)).is_none() {
            return Err(RangeError::Unrepresentable(end));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Fails when either edge of the window falls outside the UTC calendar.
    pub fn window(&self, offset: &FixedOffset) -> Result<TimeWindow, RangeError> {
        let from = local_midnight(self.start, offset)?;
        let until = self
            .end
            .checked_add_days(Days::new(1))
            .ok_or(RangeError::Unrepresentable(self.end))
            .and_then(|next| local_midnight(next, offset))?;
        Ok(TimeWindow { from, until })
    }
}

fn local_midnight(day: NaiveDate, offset: &FixedOffset) -> Result<DateTime<Utc>, RangeError> {
    day.and_time(NaiveTime::MIN)
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
        .map(|naive| naive.and_utc())
        .ok_or(RangeError::Unrepresentable(day))
}

#[cfg(test)]
mod date_range_tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[rstest]
    fn it_should_reject_a_start_after_the_end() {
        let result = DateRange::new(date("2024-02-10"), date("2024-02-01"), 366);
        assert_eq!(
            result,
            Err(RangeError::StartAfterEnd {
                start: date("2024-02-10"),
                end: date("2024-02-01"),
            })
        );
    }

    #[rstest]
    #[case("2024-01-01", "2024-01-31", 31, true)]
    #[case("2024-01-01", "2024-02-01", 31, false)]
    #[case("2024-02-01", "2024-02-01", 1, true)]
    fn it_should_enforce_the_maximum_span(
        #[case] start: &str,
        #[case] end: &str,
        #[case] max_days: u32,
        #[case] accepted: bool,
    ) {
        let result = DateRange::new(date(start), date(end), max_days);
        assert_eq!(result.is_ok(), accepted);
        if !accepted {
            assert!(matches!(result, Err(RangeError::TooLarge { days: 32, max_days: 31 })));
        }
    }

    #[rstest]
    fn it_should_accept_a_single_day_range() {
        let range = DateRange::new(date("2024-02-01"), date("2024-02-01"), 1).unwrap();
        assert_eq!(range.len_days(), 1);
        assert_eq!(range.start(), range.end());
        assert!(range.contains(date("2024-02-01")));
        assert!(!range.contains(date("2024-02-02")));
    }

    #[rstest]
    fn it_should_build_the_utc_window_for_an_offset() {
        let range = DateRange::new(date("2024-02-01"), date("2024-02-02"), 366).unwrap();
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let window = range.window(&offset).unwrap();
        assert_eq!(window.from, Utc.with_ymd_and_hms(2024, 1, 31, 22, 0, 0).unwrap());
        assert_eq!(window.until, Utc.with_ymd_and_hms(2024, 2, 2, 22, 0, 0).unwrap());
        assert!(window.contains(&Utc.with_ymd_and_hms(2024, 2, 2, 21, 59, 59).unwrap()));
        assert!(!window.contains(&Utc.with_ymd_and_hms(2024, 2, 2, 22, 0, 0).unwrap()));
    }

    #[rstest]
    fn it_should_refuse_a_window_starting_before_the_utc_calendar() {
        let range = DateRange::new(NaiveDate::MIN, NaiveDate::MIN, 366).unwrap();
        let east = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(
            range.window(&east),
            Err(RangeError::Unrepresentable(NaiveDate::MIN))
        );
    }

    #[rstest]
    fn it_should_refuse_a_range_ending_on_the_last_representable_day() {
        assert_eq!(
            DateRange::new(NaiveDate::MAX, NaiveDate::MAX, 366),
            Err(RangeError::Unrepresentable(NaiveDate::MAX))
        );
    }
}
