// Task aggregator.
//
// Purpose
// - Reduce an employee's task records to done / still-needed minutes and the
//   number of tasks nobody estimated.
//
// Responsibilities
// - Overrun tasks contribute zero to the needed total, never a negative amount.
// - Records with negative minutes are skipped and reported, not summed.

use crate::shared::core::primitives::EmployeeId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub task_id: String,
    pub employee_id: EmployeeId,
    pub estimated_minutes: Option<Decimal>,
    pub spent_minutes: Decimal,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTask {
    pub task_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskTotals {
    pub tasks_without_estimate: u32,
    pub minutes_done: Decimal,
    pub minutes_needed: Decimal,
    pub skipped: Vec<SkippedTask>,
}

fn rejection(task: &TaskRecord) -> Option<String> {
    if task.spent_minutes < Decimal::ZERO {
        return Some(format!("negative spent minutes {}", task.spent_minutes));
    }
    match task.estimated_minutes {
        Some(estimate) if estimate < Decimal::ZERO => {
            Some(format!("negative estimate {estimate}"))
        }
        _ => None,
    }
}

pub fn aggregate_tasks(tasks: &[TaskRecord]) -> TaskTotals {
    tasks.iter().fold(TaskTotals::default(), |mut totals, task| {
        if let Some(reason) = rejection(task) {
            warn!(task_id = %task.task_id, %reason, "task skipped");
            totals.skipped.push(SkippedTask {
                task_id: task.task_id.clone(),
                reason,
            });
            return totals;
        }
        totals.minutes_done += task.spent_minutes;
        match task.estimated_minutes {
            Some(estimate) => {
                totals.minutes_needed += (estimate - task.spent_minutes).max(Decimal::ZERO);
            }
            None => totals.tasks_without_estimate += 1,
        }
        totals
    })
}
