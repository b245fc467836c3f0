mod api;
pub use self::api::ServiceVersion;

use axum::Extension;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Common health and version endpoints of a hosted application.
pub struct HealthController {
    version: ServiceVersion,
}

impl HealthController {
    pub fn new(app_name: &str, version: &str) -> Self {
        Self {
            version: ServiceVersion {
                app_name: app_name.to_string(),
                version: version.to_string(),
            },
        }
    }

    pub fn into_routes<S>(self) -> OpenApiRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let api = OpenApiRouter::new().routes(routes!(api::get_ready));

        let version_api = OpenApiRouter::new()
            .routes(routes!(api::get_version))
            .layer(Extension(self.version));

        api.merge(version_api)
    }
}
