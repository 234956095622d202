// A reconciled presence interval produced by the classifier.
//
// Sessions never span two calendar days and live only for the duration of
// one aggregation run.

use crate::shared::core::primitives::EmployeeId;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub employee_id: EmployeeId,
    pub day: NaiveDate,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }

    /// Worked milliseconds; zero for an open session.
    pub fn worked_millis(&self) -> i64 {
        match self.check_out {
            Some(check_out) => (check_out - self.check_in).num_milliseconds().max(0),
            None => 0,
        }
    }
}
