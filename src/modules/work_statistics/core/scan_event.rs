// Raw badge-scanner event as delivered by the event source.
//
// Purpose
// - Carry one turnstile swipe for one employee.
//
// Boundaries
// - The scanner's own direction flag is unreliable; it is kept for traceability
//   and never used to decide whether a swipe is a check-in or a check-out.

use crate::shared::core::primitives::EmployeeId;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawScanKind {
    #[default]
    Unknown,
    Entry,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEvent {
    pub employee_id: EmployeeId,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub raw_kind: RawScanKind,
}

impl ScanEvent {
    /// Calendar day of the swipe in the reporting offset.
    pub fn local_day(&self, offset: &FixedOffset) -> NaiveDate {
        self.timestamp.with_timezone(offset).date_naive()
    }
}
