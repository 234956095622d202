// Statistics assembler and the report it produces.
//
// Purpose
// - Merge workday summaries and task totals into one flat per-employee record.
//
// Responsibilities
// - totalWorkMinutes is the exact sum of the daily worked minutes.
// - totalWorkDays counts days with positive worked minutes only.
// - Lateness figures come only from days flagged late.
// - Identity fields are copied from the directory profile; the image reference
//   is passed through untouched.

use crate::modules::work_statistics::core::range::DateRange;
use crate::modules::work_statistics::core::task::TaskTotals;
use crate::modules::work_statistics::core::workday::DailyWorkSummary;
use crate::shared::core::primitives::EmployeeId;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeProfile {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub department: String,
    #[serde(default)]
    pub image_reference: Option<String>,
    #[serde(default)]
    pub expected_start: Option<NaiveTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StatisticsWarning {
    MalformedDay { day: NaiveDate, reason: String },
    LatenessNotEvaluated,
    TaskSkipped { task_id: String, reason: String },
    EventsOutsideRange { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTotalStatistics {
    pub employee_id: EmployeeId,
    pub image_reference: Option<String>,
    pub full_name: String,
    pub department: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_work_minutes: Decimal,
    pub total_work_days: u32,
    pub total_tasks_without_estimate: u32,
    pub total_task_minutes_done: Decimal,
    pub total_task_minutes_needed: Decimal,
    pub late_count: u32,
    pub total_late_minutes: Decimal,
    pub warnings: Vec<StatisticsWarning>,
}

pub fn assemble(
    profile: EmployeeProfile,
    range: &DateRange,
    days: &[DailyWorkSummary],
    tasks: TaskTotals,
    mut warnings: Vec<StatisticsWarning>,
) -> EmployeeTotalStatistics {
    let total_work_minutes: Decimal = days.iter().map(|d| d.worked_minutes).sum();
    let total_work_days = days
        .iter()
        .filter(|d| d.worked_minutes > Decimal::ZERO)
        .count() as u32;
    let late_days = days.iter().filter(|d| d.is_late);
    let late_count = late_days.clone().count() as u32;
    let total_late_minutes: Decimal = late_days.map(|d| d.late_minutes).sum();

    warnings.extend(
        tasks
            .skipped
            .into_iter()
            .map(|skipped| StatisticsWarning::TaskSkipped {
                task_id: skipped.task_id,
                reason: skipped.reason,
            }),
    );

    EmployeeTotalStatistics {
        employee_id: profile.employee_id,
        image_reference: profile.image_reference,
        full_name: profile.full_name,
        department: profile.department,
        start_date: range.start(),
        end_date: range.end(),
        total_work_minutes: total_work_minutes.normalize(),
        total_work_days,
        total_tasks_without_estimate: tasks.tasks_without_estimate,
        total_task_minutes_done: tasks.minutes_done.normalize(),
        total_task_minutes_needed: tasks.minutes_needed.normalize(),
        late_count,
        total_late_minutes: total_late_minutes.normalize(),
        warnings,
    }
}
