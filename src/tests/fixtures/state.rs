use crate::modules::work_statistics::adapters::outbound::in_memory_directory::InMemoryDirectory;
use crate::modules::work_statistics::adapters::outbound::in_memory_scan_events::InMemoryScanEvents;
use crate::modules::work_statistics::adapters::outbound::in_memory_tasks::InMemoryTasks;
use crate::modules::work_statistics::core::policy::StatisticsPolicy;
use crate::shell::state::AppState;
use crate::tests::fixtures::directory::profile;
use crate::tests::fixtures::scans::{EMPLOYEE, scan};
use crate::tests::fixtures::tasks::task;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_FETCH_TIMEOUT: Duration = Duration::from_millis(100);

pub struct TestSources {
    pub events: Arc<InMemoryScanEvents>,
    pub tasks: Arc<InMemoryTasks>,
    pub directory: Arc<InMemoryDirectory>,
}

/// One known employee with a single 09:00 to 17:00 day and one finished task.
pub async fn seeded_state() -> (AppState, TestSources) {
    let sources = TestSources {
        events: Arc::new(InMemoryScanEvents::new()),
        tasks: Arc::new(InMemoryTasks::new()),
        directory: Arc::new(InMemoryDirectory::new()),
    };
    sources.directory.register(profile(EMPLOYEE)).await;
    sources
        .events
        .record_all([scan("2024-02-01 09:00:00"), scan("2024-02-01 17:00:00")])
        .await;
    sources
        .tasks
        .upsert(task("t-1", Some(dec!(60)), dec!(45)))
        .await;

    let state = AppState::new(
        sources.events.clone(),
        sources.tasks.clone(),
        sources.directory.clone(),
        StatisticsPolicy::default(),
        TEST_FETCH_TIMEOUT,
        4,
    );
    (state, sources)
}
