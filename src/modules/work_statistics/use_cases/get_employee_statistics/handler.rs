// Statistics query handler orchestrates the read flow for one employee.
//
// Responsibilities
// - Validate the range before touching any source.
// - Fetch profile, swipes and tasks concurrently, each under the fetch timeout.
// - Abort on any upstream failure; no partial statistics are returned.
// - Hand the fetched inputs to the pure aggregation.

use crate::modules::work_statistics::core::aggregate::aggregate_employee_statistics;
use crate::modules::work_statistics::core::policy::StatisticsPolicy;
use crate::modules::work_statistics::core::ports::{
    EmployeeDirectory, ScanEventSource, SourceError, TaskSource,
};
use crate::modules::work_statistics::core::range::DateRange;
use crate::modules::work_statistics::core::statistics::EmployeeTotalStatistics;
use crate::modules::work_statistics::use_cases::errors::{StatisticsError, Upstream};
use crate::modules::work_statistics::use_cases::get_employee_statistics::query::GetEmployeeStatistics;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument};

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub struct EmployeeStatisticsHandler<TEvents, TTasks, TDirectory>
where
    TEvents: ScanEventSource + 'static,
    TTasks: TaskSource + 'static,
    TDirectory: EmployeeDirectory + 'static,
{
    events: Arc<TEvents>,
    tasks: Arc<TTasks>,
    directory: Arc<TDirectory>,
    policy: StatisticsPolicy,
    fetch_timeout: Duration,
}

impl<TEvents, TTasks, TDirectory> EmployeeStatisticsHandler<TEvents, TTasks, TDirectory>
where
    TEvents: ScanEventSource + 'static,
    TTasks: TaskSource + 'static,
    TDirectory: EmployeeDirectory + 'static,
{
    pub fn new(
        events: Arc<TEvents>,
        tasks: Arc<TTasks>,
        directory: Arc<TDirectory>,
        policy: StatisticsPolicy,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            events,
            tasks,
            directory,
            policy,
            fetch_timeout,
        }
    }

    pub fn policy(&self) -> &StatisticsPolicy {
        &self.policy
    }

    #[instrument(
        skip(self),
        fields(
            employee_id = %query.employee_id,
            start = %query.start_date,
            end = %query.end_date,
        )
    )]
    pub async fn handle(
        &self,
        query: GetEmployeeStatistics,
    ) -> Result<EmployeeTotalStatistics, StatisticsError> {
        let range = DateRange::new(query.start_date, query.end_date, self.policy.max_range_days)?;
        let window = range.window(&self.policy.utc_offset)?;
        let employee_id = query.employee_id;

        let directory = guarded(
            Upstream::Directory,
            self.fetch_timeout,
            self.directory.resolve(employee_id),
        );
        let sources = async {
            tokio::join!(
                guarded(
                    Upstream::ScanEvents,
                    self.fetch_timeout,
                    self.events.fetch_scan_events(employee_id, window)
                ),
                guarded(
                    Upstream::Tasks,
                    self.fetch_timeout,
                    self.tasks.fetch_tasks(employee_id, window)
                ),
            )
        };
        tokio::pin!(directory, sources);

        // A directory failure wins over source failures and returns without
        // waiting for the sources.
        let (profile, fetched) = tokio::select! {
            biased;
            profile = &mut directory => (Some(profile?), None),
            fetched = &mut sources => (None, Some(fetched)),
        };
        let profile = match profile {
            Some(profile) => profile,
            None => directory.await?,
        };
        let (events, tasks) = match fetched {
            Some(fetched) => fetched,
            None => sources.await,
        };
        let events = events?;
        let tasks = tasks?;

        let statistics =
            aggregate_employee_statistics(profile, &range, &events, &tasks, &self.policy);
        debug!(
            days = range.len_days(),
            swipes = events.len(),
            tasks = tasks.len(),
            total_work_minutes = %statistics.total_work_minutes,
            warnings = statistics.warnings.len(),
            "statistics computed"
        );
        Ok(statistics)
    }
}

async fn guarded<T, F>(upstream: Upstream, timeout: Duration, fetch: F) -> Result<T, StatisticsError>
where
    F: Future<Output = Result<T, SourceError>>,
{
    match tokio::time::timeout(timeout, fetch).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(source_error)) => {
            let mapped = StatisticsError::from_source(upstream, source_error);
            if mapped.is_caller_error() {
                debug!(%upstream, error = %mapped, "upstream rejected the request");
            } else {
                error!(%upstream, error = %mapped, "upstream fetch failed");
            }
            Err(mapped)
        }
        Err(_) => {
            error!(%upstream, ?timeout, "upstream fetch timed out");
            Err(StatisticsError::UpstreamTimeout { upstream, timeout })
        }
    }
}
