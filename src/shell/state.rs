use crate::modules::work_statistics::adapters::outbound::in_memory_directory::InMemoryDirectory;
use crate::modules::work_statistics::adapters::outbound::in_memory_scan_events::InMemoryScanEvents;
use crate::modules::work_statistics::adapters::outbound::in_memory_tasks::InMemoryTasks;
use crate::modules::work_statistics::core::policy::StatisticsPolicy;
use crate::modules::work_statistics::use_cases::get_employee_statistics::handler::EmployeeStatisticsHandler;
use crate::modules::work_statistics::use_cases::get_team_statistics::handler::TeamStatisticsHandler;
use std::sync::Arc;
use std::time::Duration;

pub type InMemoryEmployeeStatistics =
    EmployeeStatisticsHandler<InMemoryScanEvents, InMemoryTasks, InMemoryDirectory>;
pub type InMemoryTeamStatistics =
    TeamStatisticsHandler<InMemoryScanEvents, InMemoryTasks, InMemoryDirectory>;

#[derive(Clone)]
pub struct AppState {
    pub employee_statistics: Arc<InMemoryEmployeeStatistics>,
    pub team_statistics: Arc<InMemoryTeamStatistics>,
}

impl AppState {
    pub fn new(
        events: Arc<InMemoryScanEvents>,
        tasks: Arc<InMemoryTasks>,
        directory: Arc<InMemoryDirectory>,
        policy: StatisticsPolicy,
        fetch_timeout: Duration,
        max_batch_concurrency: usize,
    ) -> Self {
        let employee_statistics = Arc::new(EmployeeStatisticsHandler::new(
            events,
            tasks,
            directory,
            policy,
            fetch_timeout,
        ));
        let team_statistics = Arc::new(TeamStatisticsHandler::new(
            employee_statistics.clone(),
            max_batch_concurrency,
        ));
        Self {
            employee_statistics,
            team_statistics,
        }
    }
}
