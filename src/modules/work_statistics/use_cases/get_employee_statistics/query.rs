// Query data type for one employee's statistics over an inclusive date range.
//
// Purpose
// - Carry the caller's intent independently of HTTP or GraphQL.

use crate::shared::core::primitives::EmployeeId;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetEmployeeStatistics {
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
