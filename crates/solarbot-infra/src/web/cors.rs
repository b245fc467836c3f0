use super::ServiceConfig;
use anyhow::{anyhow, Error as AnyError};
use regex::bytes::Regex;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Create the cross-origin layer of the service.
///
/// Origins are matched against the configured regular expressions. Methods and headers are not restricted,
/// as credentials are allowed they are mirrored from the request instead of using a wildcard.
pub fn create_cors_layer(config: &ServiceConfig) -> Result<CorsLayer, AnyError> {
    let allowed_origins = config
        .allowed_origins
        .iter()
        .map(|r| Regex::new(r))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| anyhow!("Cors config error: {err}"))?;
    let allow_origin = AllowOrigin::predicate(move |origin, _| {
        let origin = origin.as_bytes();
        allowed_origins.iter().any(|r| r.is_match(origin))
    });

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
