// Composition root for the work statistics service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory sources and apply the optional seed.
// - Wire the sources into the statistics handlers.
// - Expose the HTTP and GraphQL routers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;

use crate::modules::work_statistics::adapters::outbound::in_memory_directory::InMemoryDirectory;
use crate::modules::work_statistics::adapters::outbound::in_memory_scan_events::InMemoryScanEvents;
use crate::modules::work_statistics::adapters::outbound::in_memory_tasks::InMemoryTasks;
use axum::Router;
use config::AppConfig;
use seed::{Seed, SeedError};
use state::AppState;
use std::sync::Arc;

/// Builds the full application from configuration, seeding the in memory
/// sources when a seed file is configured.
pub async fn build_app(config: &AppConfig) -> Result<Router, SeedError> {
    let events = Arc::new(InMemoryScanEvents::new());
    let tasks = Arc::new(InMemoryTasks::new());
    let directory = Arc::new(InMemoryDirectory::new());

    if let Some(path) = &config.seed_file {
        Seed::from_path(path)?
            .load_into(&events, &tasks, &directory)
            .await;
    }

    let state = AppState::new(
        events,
        tasks,
        directory,
        config.policy.clone(),
        config.fetch_timeout,
        config.max_batch_concurrency,
    );

    Ok(http::router(state.clone()).merge(graphql::router(graphql::schema(state))))
}
