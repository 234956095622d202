// Batch statistics handler.
//
// Responsibilities
// - Validate the shared range once; a caller error aborts the whole batch.
// - Run the single-employee flow for each id with a bounded number in flight.
// - Return one outcome per requested id, in request order. One employee failing
//   does not affect the others.

use crate::modules::work_statistics::core::ports::{EmployeeDirectory, ScanEventSource, TaskSource};
use crate::modules::work_statistics::core::range::DateRange;
use crate::modules::work_statistics::core::statistics::EmployeeTotalStatistics;
use crate::modules::work_statistics::use_cases::errors::StatisticsError;
use crate::modules::work_statistics::use_cases::get_employee_statistics::handler::EmployeeStatisticsHandler;
use crate::modules::work_statistics::use_cases::get_employee_statistics::query::GetEmployeeStatistics;
use crate::modules::work_statistics::use_cases::get_team_statistics::query::GetTeamStatistics;
use crate::shared::core::primitives::EmployeeId;
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{info, instrument};

pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeStatisticsOutcome {
    pub employee_id: EmployeeId,
    pub result: Result<EmployeeTotalStatistics, StatisticsError>,
}

pub struct TeamStatisticsHandler<TEvents, TTasks, TDirectory>
where
    TEvents: ScanEventSource + 'static,
    TTasks: TaskSource + 'static,
    TDirectory: EmployeeDirectory + 'static,
{
    employee_handler: Arc<EmployeeStatisticsHandler<TEvents, TTasks, TDirectory>>,
    max_concurrency: usize,
}

impl<TEvents, TTasks, TDirectory> TeamStatisticsHandler<TEvents, TTasks, TDirectory>
where
    TEvents: ScanEventSource + 'static,
    TTasks: TaskSource + 'static,
    TDirectory: EmployeeDirectory + 'static,
{
    pub fn new(
        employee_handler: Arc<EmployeeStatisticsHandler<TEvents, TTasks, TDirectory>>,
        max_concurrency: usize,
    ) -> Self {
        Self {
            employee_handler,
            max_concurrency: max_concurrency.max(1),
        }
    }

    fn effective_concurrency(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.max_concurrency)
            .clamp(1, self.max_concurrency)
    }

    #[instrument(skip(self, query), fields(employees = query.employee_ids.len()))]
    pub async fn handle(
        &self,
        query: GetTeamStatistics,
    ) -> Result<Vec<EmployeeStatisticsOutcome>, StatisticsError> {
        let policy = self.employee_handler.policy();
        DateRange::new(query.start_date, query.end_date, policy.max_range_days)?
            .window(&policy.utc_offset)?;
        let limit = self.effective_concurrency(query.concurrency);
        let handler = &self.employee_handler;
        let (start_date, end_date) = (query.start_date, query.end_date);

        let outcomes: Vec<EmployeeStatisticsOutcome> = stream::iter(query.employee_ids)
            .map(|employee_id| async move {
                let result = handler
                    .handle(GetEmployeeStatistics {
                        employee_id,
                        start_date,
                        end_date,
                    })
                    .await;
                EmployeeStatisticsOutcome {
                    employee_id,
                    result,
                }
            })
            .buffered(limit)
            .collect()
            .await;

        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        let retryable = outcomes
            .iter()
            .filter(|o| o.result.as_ref().is_err_and(StatisticsError::is_retryable))
            .count();
        info!(limit, failed, retryable, "team statistics computed");
        Ok(outcomes)
    }
}
