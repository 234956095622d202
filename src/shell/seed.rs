// JSON seed for the in memory sources, so the binary can serve data without a
// real scanner backend, task store or directory.

use crate::modules::work_statistics::adapters::outbound::in_memory_directory::InMemoryDirectory;
use crate::modules::work_statistics::adapters::outbound::in_memory_scan_events::InMemoryScanEvents;
use crate::modules::work_statistics::adapters::outbound::in_memory_tasks::InMemoryTasks;
use crate::modules::work_statistics::core::scan_event::ScanEvent;
use crate::modules::work_statistics::core::statistics::EmployeeProfile;
use crate::modules::work_statistics::core::task::TaskRecord;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed seed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seed {
    pub employees: Vec<EmployeeProfile>,
    pub scan_events: Vec<ScanEvent>,
    pub tasks: Vec<TaskRecord>,
}

impl Seed {
    pub fn parse(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    pub async fn load_into(
        self,
        events: &InMemoryScanEvents,
        tasks: &InMemoryTasks,
        directory: &InMemoryDirectory,
    ) {
        info!(
            employees = self.employees.len(),
            scan_events = self.scan_events.len(),
            tasks = self.tasks.len(),
            "seeding in memory sources"
        );
        for profile in self.employees {
            directory.register(profile).await;
        }
        events.record_all(self.scan_events).await;
        for task in self.tasks {
            tasks.upsert(task).await;
        }
    }
}
