// Ports define what the statistics core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the three read-only collaborators as narrow capability traits:
//   scan events and tasks fetched by employee and window, profiles resolved by id.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
// - Retries belong to the adapter's client, not to callers of these traits.
//
// Testing guidance
// - In memory implementations live in adapters/outbound.

use crate::modules::work_statistics::core::range::TimeWindow;
use crate::modules::work_statistics::core::scan_event::ScanEvent;
use crate::modules::work_statistics::core::statistics::EmployeeProfile;
use crate::modules::work_statistics::core::task::TaskRecord;
use crate::shared::core::primitives::EmployeeId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("employee {0} not found")]
    NotFound(EmployeeId),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ScanEventSource: Send + Sync {
    /// Swipes in `window`, ordered by timestamp.
    async fn fetch_scan_events(
        &self,
        employee_id: EmployeeId,
        window: TimeWindow,
    ) -> Result<Vec<ScanEvent>, SourceError>;
}

#[async_trait]
pub trait TaskSource: Send + Sync {
    async fn fetch_tasks(
        &self,
        employee_id: EmployeeId,
        window: TimeWindow,
    ) -> Result<Vec<TaskRecord>, SourceError>;
}

#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    async fn resolve(&self, employee_id: EmployeeId) -> Result<EmployeeProfile, SourceError>;
}
