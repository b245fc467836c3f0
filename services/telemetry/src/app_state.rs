use crate::{app_config::AppConfig, services::TelemetryService};
use anyhow::Error as AnyError;
use solarbot_infra::web::WebAppConfig;
use std::sync::Arc;

struct Inner {
    telemetry_service: TelemetryService,
}

#[derive(Clone)]
pub struct AppState(Arc<Inner>);

impl AppState {
    pub fn new(config: &WebAppConfig<AppConfig>) -> Result<Self, AnyError> {
        Self::from_feature(&config.feature)
    }

    pub fn from_feature(config: &AppConfig) -> Result<Self, AnyError> {
        let telemetry_service = TelemetryService::new(config)?;

        Ok(Self(Arc::new(Inner { telemetry_service })))
    }

    pub fn telemetry_service(&self) -> &TelemetryService {
        &self.0.telemetry_service
    }
}
