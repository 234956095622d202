// Workday aggregator: one summary per classified day.
//
// Responsibilities
// - Sum the worked time of closed sessions; open sessions contribute nothing.
// - Evaluate lateness against the day's first check-in.
// - Degrade a malformed day to zero worked minutes and surface a warning.
// - Without a lateness rule, never mark a day late and say so once.

use crate::modules::work_statistics::core::classify::ClassifiedDay;
use crate::modules::work_statistics::core::policy::LatenessRule;
use crate::modules::work_statistics::core::session::Session;
use crate::modules::work_statistics::core::statistics::StatisticsWarning;
use crate::shared::core::primitives::millis_to_minutes;
use chrono::{FixedOffset, NaiveDate, TimeDelta};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWorkSummary {
    pub day: NaiveDate,
    pub worked_minutes: Decimal,
    pub is_late: bool,
    pub late_minutes: Decimal,
}

impl DailyWorkSummary {
    fn empty(day: NaiveDate) -> Self {
        Self {
            day,
            worked_minutes: Decimal::ZERO,
            is_late: false,
            late_minutes: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkdayOutcome {
    pub summaries: Vec<DailyWorkSummary>,
    pub warnings: Vec<StatisticsWarning>,
}

pub fn summarize_day(
    day: NaiveDate,
    sessions: &[Session],
    rule: Option<&LatenessRule>,
    offset: &FixedOffset,
) -> DailyWorkSummary {
    let Some(first) = sessions.first() else {
        return DailyWorkSummary::empty(day);
    };
    let worked_millis: i64 = sessions.iter().map(Session::worked_millis).sum();

    let late_by = rule.and_then(|rule| {
        let check_in_local = first.check_in.with_timezone(offset).naive_local();
        let delay = check_in_local - day.and_time(rule.expected_start);
        (delay > rule.grace_period).then_some(delay)
    });

    DailyWorkSummary {
        day,
        worked_minutes: millis_to_minutes(worked_millis),
        is_late: late_by.is_some(),
        late_minutes: late_by
            .map(|delay: TimeDelta| millis_to_minutes(delay.num_milliseconds()))
            .unwrap_or(Decimal::ZERO),
    }
}

pub fn summarize(
    days: &[ClassifiedDay],
    rule: Option<&LatenessRule>,
    offset: &FixedOffset,
) -> WorkdayOutcome {
    let mut outcome = WorkdayOutcome::default();
    if rule.is_none() && !days.is_empty() {
        warn!("no expected start time configured; lateness not evaluated");
        outcome.warnings.push(StatisticsWarning::LatenessNotEvaluated);
    }
    for classified in days {
        match &classified.sessions {
            Ok(sessions) => outcome
                .summaries
                .push(summarize_day(classified.day, sessions, rule, offset)),
            Err(error) => {
                warn!(day = %classified.day, %error, "malformed day degraded to zero worked minutes");
                outcome.summaries.push(DailyWorkSummary::empty(classified.day));
                outcome.warnings.push(StatisticsWarning::MalformedDay {
                    day: classified.day,
                    reason: error.to_string(),
                });
            }
        }
    }
    outcome
}
