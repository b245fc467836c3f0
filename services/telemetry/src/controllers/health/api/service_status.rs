use crate::{app_state::AppState, services::SourceInfo};
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/info/status",
    tag = "health",
    description = "Get the active telemetry source.",
    responses(
        (status = OK, body = SourceInfo)
    )
)]
pub async fn get_service_status(State(state): State<AppState>) -> Json<SourceInfo> {
    Json(state.telemetry_service().source_info())
}
