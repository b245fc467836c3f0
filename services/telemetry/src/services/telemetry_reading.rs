use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single telemetry sample as exchanged with the dashboard and the device.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "data": "T1:21.5 T2:19.08 AX:-12.4 AY:301.0 AZ:-880.15 GX:0.5 GY:-9.99 GZ:3.2 C:1250",
    "rssi": -67
}))]
pub struct TelemetryReading {
    /// Space separated `KEY:value` pairs
    pub data: String,
    /// Received signal strength of the device link
    pub rssi: i32,
}

impl TelemetryReading {
    pub fn new<S: Into<String>>(data: S, rssi: i32) -> Self {
        Self { data: data.into(), rssi }
    }
}
