use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::work_statistics::use_cases::errors::StatisticsError;
use crate::modules::work_statistics::use_cases::get_employee_statistics::query::GetEmployeeStatistics;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EmployeeStatisticsParams {
    pub employee_id: Uuid,
    pub start: String,
    pub end: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

/// Accepts `YYYY-MM-DD` or epoch milliseconds; an instant is read as the local
/// day it falls on in `offset`.
pub fn parse_day(raw: &str, offset: &FixedOffset) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(day);
    }
    raw.parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
        .map(|instant| instant.with_timezone(offset).date_naive())
        .ok_or_else(|| format!("`{raw}` is neither YYYY-MM-DD nor epoch milliseconds"))
}

pub fn parse_range(
    start: &str,
    end: &str,
    offset: &FixedOffset,
) -> Result<(NaiveDate, NaiveDate), Response> {
    let start_date = parse_day(start, offset).map_err(bad_request)?;
    let end_date = parse_day(end, offset).map_err(bad_request)?;
    Ok((start_date, end_date))
}

pub fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: "BadRequest".into(),
            message,
        }),
    )
        .into_response()
}

pub fn status_for(error: &StatisticsError) -> StatusCode {
    match error {
        StatisticsError::InvalidRange(_) => StatusCode::BAD_REQUEST,
        StatisticsError::NotFound(_) => StatusCode::NOT_FOUND,
        StatisticsError::UpstreamTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        StatisticsError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub fn error_response(error: &StatisticsError) -> Response {
    (
        status_for(error),
        Json(ErrorBody {
            error: error.code().into(),
            message: error.to_string(),
        }),
    )
        .into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<EmployeeStatisticsParams>,
) -> impl IntoResponse {
    let offset = state.employee_statistics.policy().utc_offset;
    let (start_date, end_date) = match parse_range(&params.start, &params.end, &offset) {
        Ok(range) => range,
        Err(response) => return response,
    };

    let query = GetEmployeeStatistics {
        employee_id: params.employee_id,
        start_date,
        end_date,
    };

    match state.employee_statistics.handle(query).await {
        Ok(statistics) => Json(statistics).into_response(),
        Err(error) => error_response(&error),
    }
}

#[cfg(test)]
mod employee_statistics_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use chrono::{FixedOffset, NaiveDate};
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::scans::{EMPLOYEE, day};
    use crate::tests::fixtures::state::seeded_state;

    use super::{handle, parse_day};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/employee-statistics", get(handle))
            .with_state(state)
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[rstest]
    #[case("2024-02-01", day("2024-02-01"))]
    #[case(" 2024-02-29 ", day("2024-02-29"))]
    #[case("1706745600000", day("2024-02-01"))]
    fn it_should_parse_dates_and_epoch_millis(#[case] raw: &str, #[case] expected: NaiveDate) {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(parse_day(raw, &utc), Ok(expected));
    }

    #[rstest]
    fn it_should_read_epoch_millis_as_the_local_day() {
        // 2024-01-31T23:30:00Z is already February 1st at UTC+1.
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(parse_day("1706743800000", &cet), Ok(day("2024-02-01")));
    }

    #[rstest]
    #[case("01/02/2024")]
    #[case("yesterday")]
    #[case("")]
    fn it_should_reject_unparsable_dates(#[case] raw: &str) {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert!(parse_day(raw, &utc).is_err());
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_statistics() {
        let (state, _) = seeded_state().await;
        let uri = format!("/employee-statistics?employee_id={EMPLOYEE}&start=2024-02-01&end=2024-02-29");

        let (status, json) = get_json(state, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["employeeId"], EMPLOYEE.to_string());
        assert_eq!(json["fullName"], "Ada Lovelace");
        assert_eq!(json["totalWorkMinutes"], "480");
        assert_eq!(json["totalWorkDays"], 1);
        assert_eq!(json["startDate"], "2024-02-01");
    }

    #[tokio::test]
    async fn it_should_accept_epoch_millis_bounds() {
        let (state, _) = seeded_state().await;
        let uri = format!(
            "/employee-statistics?employee_id={EMPLOYEE}&start=1706745600000&end=1709164800000"
        );

        let (status, json) = get_json(state, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["endDate"], "2024-02-29");
    }

    #[rstest]
    #[case("start=2024-02-10&end=2024-02-01", "InvalidRange")]
    #[case("start=2023-01-01&end=2024-12-31", "RangeTooLarge")]
    #[case("start=tomorrow&end=2024-02-01", "BadRequest")]
    #[tokio::test]
    async fn it_should_return_400_on_a_bad_range(#[case] range: &str, #[case] code: &str) {
        let (state, _) = seeded_state().await;
        let uri = format!("/employee-statistics?employee_id={EMPLOYEE}&{range}");

        let (status, json) = get_json(state, &uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], code);
    }

    #[tokio::test]
    async fn it_should_return_400_when_employee_id_is_missing() {
        let (state, _) = seeded_state().await;
        let (status, _) = get_json(state, "/employee-statistics?start=2024-02-01&end=2024-02-29").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_employee() {
        let (state, _) = seeded_state().await;
        let uri = "/employee-statistics?employee_id=00000000-0000-0000-0000-0000000000ff&start=2024-02-01&end=2024-02-29";

        let (status, json) = get_json(state, uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "NotFound");
    }

    #[tokio::test]
    async fn it_should_return_503_when_the_task_source_is_offline() {
        let (state, sources) = seeded_state().await;
        sources.tasks.availability.toggle_offline();
        let uri = format!("/employee-statistics?employee_id={EMPLOYEE}&start=2024-02-01&end=2024-02-29");

        let (status, json) = get_json(state, &uri).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"], "UpstreamUnavailable");
    }

    #[tokio::test]
    async fn it_should_return_504_when_a_source_is_too_slow() {
        let (state, sources) = seeded_state().await;
        sources.events.availability.set_delay_ms(1_000);
        let uri = format!("/employee-statistics?employee_id={EMPLOYEE}&start=2024-02-01&end=2024-02-29");

        let (status, json) = get_json(state, &uri).await;

        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(json["error"], "UpstreamTimeout");
    }
}
