use crate::{app_state::AppState, services::TelemetryReading};
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/getData",
    tag = "telemetry",
    description = "Get the current telemetry of the robot. A fallback reading is returned if the device is not available.",
    responses(
        (status = OK, body = TelemetryReading)
    )
)]
pub async fn get_data(State(state): State<AppState>) -> Json<TelemetryReading> {
    Json(state.telemetry_service().read().await)
}
