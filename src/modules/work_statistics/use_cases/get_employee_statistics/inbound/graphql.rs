use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};
use uuid::Uuid;

use crate::modules::work_statistics::core::statistics::{
    EmployeeTotalStatistics, StatisticsWarning,
};
use crate::modules::work_statistics::use_cases::errors::StatisticsError;
use crate::modules::work_statistics::use_cases::get_employee_statistics::inbound::http::parse_day;
use crate::modules::work_statistics::use_cases::get_employee_statistics::query::GetEmployeeStatistics;
use crate::shell::state::AppState;

/// Decimals and dates travel as strings so no precision is lost on the way out.
#[derive(SimpleObject)]
pub struct EmployeeTotalStatisticsGql {
    pub employee_id: String,
    pub image_reference: Option<String>,
    pub full_name: String,
    pub department: String,
    pub start_date: String,
    pub end_date: String,
    pub total_work_minutes: String,
    pub total_work_days: u32,
    pub total_tasks_without_estimate: u32,
    pub total_task_minutes_done: String,
    pub total_task_minutes_needed: String,
    pub late_count: u32,
    pub total_late_minutes: String,
    pub warnings: Vec<StatisticsWarningGql>,
}

#[derive(SimpleObject)]
pub struct StatisticsWarningGql {
    pub kind: String,
    pub day: Option<String>,
    pub task_id: Option<String>,
    pub reason: Option<String>,
    pub count: Option<u64>,
}

impl From<StatisticsWarning> for StatisticsWarningGql {
    fn from(warning: StatisticsWarning) -> Self {
        let empty = |kind: &str| StatisticsWarningGql {
            kind: kind.to_string(),
            day: None,
            task_id: None,
            reason: None,
            count: None,
        };
        match warning {
            StatisticsWarning::MalformedDay { day, reason } => StatisticsWarningGql {
                day: Some(day.to_string()),
                reason: Some(reason),
                ..empty("malformedDay")
            },
            StatisticsWarning::LatenessNotEvaluated => empty("latenessNotEvaluated"),
            StatisticsWarning::TaskSkipped { task_id, reason } => StatisticsWarningGql {
                task_id: Some(task_id),
                reason: Some(reason),
                ..empty("taskSkipped")
            },
            StatisticsWarning::EventsOutsideRange { count } => StatisticsWarningGql {
                count: Some(count as u64),
                ..empty("eventsOutsideRange")
            },
        }
    }
}

impl From<EmployeeTotalStatistics> for EmployeeTotalStatisticsGql {
    fn from(statistics: EmployeeTotalStatistics) -> Self {
        Self {
            employee_id: statistics.employee_id.to_string(),
            image_reference: statistics.image_reference,
            full_name: statistics.full_name,
            department: statistics.department,
            start_date: statistics.start_date.to_string(),
            end_date: statistics.end_date.to_string(),
            total_work_minutes: statistics.total_work_minutes.to_string(),
            total_work_days: statistics.total_work_days,
            total_tasks_without_estimate: statistics.total_tasks_without_estimate,
            total_task_minutes_done: statistics.total_task_minutes_done.to_string(),
            total_task_minutes_needed: statistics.total_task_minutes_needed.to_string(),
            late_count: statistics.late_count,
            total_late_minutes: statistics.total_late_minutes.to_string(),
            warnings: statistics.warnings.into_iter().map(Into::into).collect(),
        }
    }
}

fn bad_request(message: String) -> async_graphql::Error {
    async_graphql::Error::new(message).extend_with(|_, e| e.set("code", "BadRequest"))
}

fn statistics_error(error: StatisticsError) -> async_graphql::Error {
    let code = error.code();
    async_graphql::Error::new(error.to_string()).extend_with(|_, e| e.set("code", code))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn employee_total_statistics(
        &self,
        context: &Context<'_>,
        employee_id: String,
        start: String,
        end: String,
    ) -> GqlResult<EmployeeTotalStatisticsGql> {
        let state = context.data_unchecked::<AppState>();
        let offset = state.employee_statistics.policy().utc_offset;

        let employee_id = Uuid::parse_str(&employee_id)
            .map_err(|e| bad_request(format!("invalid employee id: {e}")))?;
        let start_date = parse_day(&start, &offset).map_err(bad_request)?;
        let end_date = parse_day(&end, &offset).map_err(bad_request)?;

        let statistics = state
            .employee_statistics
            .handle(GetEmployeeStatistics {
                employee_id,
                start_date,
                end_date,
            })
            .await
            .map_err(statistics_error)?;

        Ok(statistics.into())
    }
}
