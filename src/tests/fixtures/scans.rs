use crate::modules::work_statistics::core::scan_event::{RawScanKind, ScanEvent};
use crate::shared::core::primitives::EmployeeId;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, Utc};
use uuid::Uuid;

pub const EMPLOYEE: EmployeeId = Uuid::from_u128(1);

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Parses `YYYY-MM-DD HH:MM:SS` as a UTC instant.
pub fn at(s: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

pub fn offset_utc() -> FixedOffset {
    Utc.fix()
}

pub fn scan_for(employee_id: EmployeeId, s: &str) -> ScanEvent {
    ScanEvent {
        employee_id,
        timestamp: at(s),
        raw_kind: RawScanKind::Unknown,
    }
}

pub fn scan(s: &str) -> ScanEvent {
    scan_for(EMPLOYEE, s)
}
