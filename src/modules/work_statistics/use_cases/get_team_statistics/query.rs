// Query data type for a batch report over several employees.

use crate::shared::core::primitives::EmployeeId;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetTeamStatistics {
    pub employee_ids: Vec<EmployeeId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Requested number of employees computed at once; capped by the handler.
    pub concurrency: Option<usize>,
}
