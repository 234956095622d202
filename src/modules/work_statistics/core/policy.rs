// Business rules that parameterize one aggregation run.

use chrono::{FixedOffset, NaiveTime, Offset, TimeDelta, Utc};

pub const DEFAULT_MIN_SCAN_INTERVAL_SECS: i64 = 60;
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 366;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsPolicy {
    /// Swipes closer than this to the pending check-in are bounces.
    pub min_scan_interval: TimeDelta,
    /// Service-wide expected start, overridable per employee. `None` disables
    /// lateness evaluation for employees without their own start time.
    pub expected_start: Option<NaiveTime>,
    pub grace_period: TimeDelta,
    pub max_range_days: u32,
    pub utc_offset: FixedOffset,
}

impl Default for StatisticsPolicy {
    fn default() -> Self {
        Self {
            min_scan_interval: TimeDelta::seconds(DEFAULT_MIN_SCAN_INTERVAL_SECS),
            expected_start: NaiveTime::from_hms_opt(9, 0, 0),
            grace_period: TimeDelta::zero(),
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
            utc_offset: Utc.fix(),
        }
    }
}

/// Lateness rule resolved for one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatenessRule {
    pub expected_start: NaiveTime,
    pub grace_period: TimeDelta,
}

impl StatisticsPolicy {
    pub fn lateness_rule(&self, employee_start: Option<NaiveTime>) -> Option<LatenessRule> {
        employee_start
            .or(self.expected_start)
            .map(|expected_start| LatenessRule {
                expected_start,
                grace_period: self.grace_period,
            })
    }
}
