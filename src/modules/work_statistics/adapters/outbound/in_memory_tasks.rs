// In memory implementation of the TaskSource port.

use crate::modules::work_statistics::core::ports::{SourceError, TaskSource};
use crate::modules::work_statistics::core::range::TimeWindow;
use crate::modules::work_statistics::core::task::TaskRecord;
use crate::shared::core::primitives::EmployeeId;
use crate::shared::infrastructure::availability::Availability;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTasks {
    tasks: RwLock<HashMap<EmployeeId, Vec<TaskRecord>>>,
    pub availability: Availability,
}

impl InMemoryTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a task by id.
    pub async fn upsert(&self, task: TaskRecord) {
        let mut guard = self.tasks.write().await;
        let tasks = guard.entry(task.employee_id).or_default();
        match tasks.iter_mut().find(|t| t.task_id == task.task_id) {
            Some(existing) => *existing = task,
            None => tasks.push(task),
        }
    }
}

#[async_trait::async_trait]
impl TaskSource for InMemoryTasks {
    async fn fetch_tasks(
        &self,
        employee_id: EmployeeId,
        window: TimeWindow,
    ) -> Result<Vec<TaskRecord>, SourceError> {
        if !self.availability.reachable().await {
            return Err(SourceError::Unavailable("Task source offline".into()));
        }
        let guard = self.tasks.read().await;
        let mut tasks: Vec<TaskRecord> = guard
            .get(&employee_id)
            .map(|tasks| {
                tasks
                    .iter()
                    .filter(|task| window.contains(&task.updated_at))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        tasks.sort_by(|a, b| a.task_id.cmp(&b.task_id));
        Ok(tasks)
    }
}
