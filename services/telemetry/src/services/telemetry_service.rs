use super::{FieldProfile, TelemetryReading, TelemetrySimulator};
use crate::{
    app_config::{AppConfig, SourceConfig},
    repositories::device::{DeviceClient, DeviceError},
};
use serde::Serialize;
use std::time::Duration;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SourceKind {
    Simulated,
    Device,
}

/// Description of the active telemetry source.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub source: SourceKind,
    pub profile: FieldProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

enum TelemetrySource {
    Simulated(TelemetrySimulator),
    Device {
        client: DeviceClient,
        fallback: TelemetryReading,
    },
}

pub struct TelemetryService {
    profile: FieldProfile,
    source: TelemetrySource,
}

impl TelemetryService {
    pub fn new(config: &AppConfig) -> Result<Self, DeviceError> {
        let profile = config.profile;
        let source = match &config.source {
            SourceConfig::Simulated => {
                log::info!("Using simulated {profile:?} telemetry");
                TelemetrySource::Simulated(TelemetrySimulator::new(profile))
            }
            SourceConfig::Device(device) => {
                let client = DeviceClient::new(&device.url, Duration::from_millis(device.timeout_ms))?;
                let fallback = device.fallback.clone().unwrap_or_else(|| profile.fallback());
                log::info!(
                    "Using {profile:?} telemetry of device {} (timeout: {}ms)",
                    client.url(),
                    device.timeout_ms
                );
                TelemetrySource::Device { client, fallback }
            }
        };

        Ok(Self { profile, source })
    }

    /// Get the current reading. Device failures are not reported, the fallback reading is returned instead.
    pub async fn read(&self) -> TelemetryReading {
        match &self.source {
            TelemetrySource::Simulated(simulator) => simulator.generate(),
            TelemetrySource::Device { client, fallback } => match client.fetch_reading().await {
                Ok(reading) => reading,
                Err(err) => {
                    log::warn!("Telemetry of {} is not available, using fallback: {err:?}", client.url());
                    fallback.clone()
                }
            },
        }
    }

    pub fn source_info(&self) -> SourceInfo {
        match &self.source {
            TelemetrySource::Simulated(_) => SourceInfo {
                source: SourceKind::Simulated,
                profile: self.profile,
                upstream: None,
                timeout_ms: None,
            },
            TelemetrySource::Device { client, .. } => SourceInfo {
                source: SourceKind::Device,
                profile: self.profile,
                upstream: Some(client.url().to_string()),
                timeout_ms: u64::try_from(client.timeout().as_millis()).ok(),
            },
        }
    }
}
