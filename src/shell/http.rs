use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::work_statistics::use_cases::get_employee_statistics::inbound::http as employee_http;
use crate::modules::work_statistics::use_cases::get_team_statistics::inbound::http as team_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/employee-statistics", get(employee_http::handle))
        .route("/employee-statistics/batch", post(team_http::handle))
        .with_state(state)
}
