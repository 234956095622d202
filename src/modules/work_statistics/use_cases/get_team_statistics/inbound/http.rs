use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::work_statistics::core::statistics::EmployeeTotalStatistics;
use crate::modules::work_statistics::use_cases::get_employee_statistics::inbound::http::{
    ErrorBody, error_response, parse_range, status_for,
};
use crate::modules::work_statistics::use_cases::get_team_statistics::handler::EmployeeStatisticsOutcome;
use crate::modules::work_statistics::use_cases::get_team_statistics::query::GetTeamStatistics;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TeamStatisticsBody {
    pub employee_ids: Vec<Uuid>,
    pub start: String,
    pub end: String,
    pub concurrency: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatisticsEntry {
    pub employee_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<EmployeeTotalStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl From<EmployeeStatisticsOutcome> for TeamStatisticsEntry {
    fn from(outcome: EmployeeStatisticsOutcome) -> Self {
        match outcome.result {
            Ok(statistics) => Self {
                employee_id: outcome.employee_id,
                statistics: Some(statistics),
                status: None,
                error: None,
            },
            Err(error) => Self {
                employee_id: outcome.employee_id,
                statistics: None,
                status: Some(status_for(&error).as_u16()),
                error: Some(ErrorBody {
                    error: error.code().into(),
                    message: error.to_string(),
                }),
            },
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<TeamStatisticsBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let offset = state.employee_statistics.policy().utc_offset;
    let (start_date, end_date) = match parse_range(&body.start, &body.end, &offset) {
        Ok(range) => range,
        Err(response) => return response,
    };

    let query = GetTeamStatistics {
        employee_ids: body.employee_ids,
        start_date,
        end_date,
        concurrency: body.concurrency,
    };

    match state.team_statistics.handle(query).await {
        Ok(outcomes) => Json(
            outcomes
                .into_iter()
                .map(TeamStatisticsEntry::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(error) => error_response(&error),
    }
}
