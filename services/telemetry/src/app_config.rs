use crate::services::{FieldProfile, TelemetryReading};
use serde::{Deserialize, Serialize};
use solarbot_infra::web::FeatureConfig;
use thiserror::Error as ThisError;

pub const SERVICE_NAME: &str = "telemetry";

fn default_timeout_ms() -> u64 {
    2000
}

#[derive(Debug, ThisError)]
pub enum SourceConfigError {
    #[error("Missing `url` of the device source")]
    MissingUrl,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceSourceConfig {
    /// The `/getData` endpoint of the robot
    pub url: String,
    /// Upper bound of a single request in milliseconds, including the connection
    pub timeout_ms: u64,
    /// Reading returned when the device is unreachable, the canned reading of the profile is used if not given
    pub fallback: Option<TelemetryReading>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SourceConfigFields", into = "SourceConfigFields")]
pub enum SourceConfig {
    /// Fabricate random readings
    Simulated,
    /// Proxy the readings of the device
    Device(DeviceSourceConfig),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceType {
    Simulated,
    Device,
}

/// The `source` section as written in the config layers. It is a plain struct, the environment layer
/// provides strings and those are converted only when a field is read directly by the config deserializer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceConfigFields {
    #[serde(rename = "type")]
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<TelemetryReading>,
}

impl TryFrom<SourceConfigFields> for SourceConfig {
    type Error = SourceConfigError;

    fn try_from(fields: SourceConfigFields) -> Result<Self, Self::Error> {
        match fields.source_type {
            SourceType::Simulated => Ok(SourceConfig::Simulated),
            SourceType::Device => Ok(SourceConfig::Device(DeviceSourceConfig {
                url: fields.url.ok_or(SourceConfigError::MissingUrl)?,
                timeout_ms: fields.timeout_ms,
                fallback: fields.fallback,
            })),
        }
    }
}

impl From<SourceConfig> for SourceConfigFields {
    fn from(config: SourceConfig) -> Self {
        match config {
            SourceConfig::Simulated => SourceConfigFields {
                source_type: SourceType::Simulated,
                url: None,
                timeout_ms: default_timeout_ms(),
                fallback: None,
            },
            SourceConfig::Device(device) => SourceConfigFields {
                source_type: SourceType::Device,
                url: Some(device.url),
                timeout_ms: device.timeout_ms,
                fallback: device.fallback,
            },
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub profile: FieldProfile,
    pub source: SourceConfig,
}

impl FeatureConfig for AppConfig {
    const NAME: &'static str = SERVICE_NAME;
}
