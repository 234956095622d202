// Interval classifier: turns an employee's raw swipes into sessions.
//
// Purpose
// - Reconcile untagged, possibly duplicated swipes into check-in / check-out pairs.
//
// Responsibilities
// - Group swipes by calendar day in the reporting offset; sessions never cross midnight.
// - Run one small state machine per day (idle, pending check-in, closed).
// - Discard bounces: a swipe closer than the minimum interval to the pending
//   check-in, or to the check-out that just closed a session.
// - Leave a trailing unmatched check-in as an open session.
// - Refuse to classify a day whose swipes are out of order or belong to someone else.

use crate::modules::work_statistics::core::scan_event::ScanEvent;
use crate::modules::work_statistics::core::session::Session;
use crate::shared::core::primitives::EmployeeId;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("swipe at {current} arrived after a later swipe at {previous}")]
    OutOfOrder {
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },

    #[error("swipe belongs to employee {found}, expected {expected}")]
    ForeignEmployee {
        expected: EmployeeId,
        found: EmployeeId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedDay {
    pub day: NaiveDate,
    pub sessions: Result<Vec<Session>, IntegrityError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayState {
    Idle,
    PendingCheckIn { check_in: DateTime<Utc> },
    Closed { check_out: DateTime<Utc> },
}

pub struct DayClassifier {
    employee_id: EmployeeId,
    day: NaiveDate,
    min_interval: TimeDelta,
    state: DayState,
    last_seen: Option<DateTime<Utc>>,
    sessions: Vec<Session>,
}

impl DayClassifier {
    pub fn new(employee_id: EmployeeId, day: NaiveDate, min_interval: TimeDelta) -> Self {
        Self {
            employee_id,
            day,
            min_interval,
            state: DayState::Idle,
            last_seen: None,
            sessions: Vec::new(),
        }
    }

    pub fn push(&mut self, event: &ScanEvent) -> Result<(), IntegrityError> {
        if event.employee_id != self.employee_id {
            return Err(IntegrityError::ForeignEmployee {
                expected: self.employee_id,
                found: event.employee_id,
            });
        }
        let at = event.timestamp;
        if let Some(previous) = self.last_seen
            && at < previous
        {
            return Err(IntegrityError::OutOfOrder {
                previous,
                current: at,
            });
        }
        self.last_seen = Some(at);

        self.state = match self.state {
            DayState::Idle => DayState::PendingCheckIn { check_in: at },
            DayState::PendingCheckIn { check_in } if at - check_in < self.min_interval => {
                trace!(day = %self.day, %at, "bounce after check-in discarded");
                DayState::PendingCheckIn { check_in }
            }
            DayState::PendingCheckIn { check_in } => {
                self.sessions.push(Session {
                    employee_id: self.employee_id,
                    day: self.day,
                    check_in,
                    check_out: Some(at),
                });
                DayState::Closed { check_out: at }
            }
            DayState::Closed { check_out } if at - check_out < self.min_interval => {
                trace!(day = %self.day, %at, "bounce after check-out discarded");
                DayState::Closed { check_out }
            }
            DayState::Closed { .. } => DayState::PendingCheckIn { check_in: at },
        };
        Ok(())
    }

    pub fn finish(mut self) -> Vec<Session> {
        if let DayState::PendingCheckIn { check_in } = self.state {
            self.sessions.push(Session {
                employee_id: self.employee_id,
                day: self.day,
                check_in,
                check_out: None,
            });
        }
        self.sessions
    }
}

pub fn classify_day<'a, I>(
    employee_id: EmployeeId,
    day: NaiveDate,
    events: I,
    min_interval: TimeDelta,
) -> Result<Vec<Session>, IntegrityError>
where
    I: IntoIterator<Item = &'a ScanEvent>,
{
    let mut classifier = DayClassifier::new(employee_id, day, min_interval);
    for event in events {
        classifier.push(event)?;
    }
    Ok(classifier.finish())
}

/// Classifies every day that has at least one swipe, in ascending day order.
pub fn classify(
    employee_id: EmployeeId,
    events: &[ScanEvent],
    offset: &FixedOffset,
    min_interval: TimeDelta,
) -> Vec<ClassifiedDay> {
    let mut by_day: BTreeMap<NaiveDate, Vec<&ScanEvent>> = BTreeMap::new();
    for event in events {
        by_day.entry(event.local_day(offset)).or_default().push(event);
    }
    by_day
        .into_iter()
        .map(|(day, day_events)| ClassifiedDay {
            day,
            sessions: classify_day(employee_id, day, day_events, min_interval),
        })
        .collect()
}
