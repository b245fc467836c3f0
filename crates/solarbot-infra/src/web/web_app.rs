use crate::{
    logging,
    web::{controllers::HealthController, create_cors_layer, middlewares::PoweredBy, FeatureConfig, WebAppConfig},
};
use anyhow::{anyhow, Error as AnyError};
use axum::{routing::get, Json, Router};
use serde::de::DeserializeOwned;
use std::{env, fmt::Debug, future::Future, net::SocketAddr};
use tokio::{net::TcpListener, runtime::Runtime, signal};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{instrument, Level};
use utoipa::{openapi::OpenApi as OpenApiDoc, OpenApi};
use utoipa_axum::router::OpenApiRouter;

#[derive(OpenApi)]
#[openapi(
    paths(),
    components(),
    tags(
        (name = "health", description = "Service health and version"),
    )
)]
struct ApiDoc;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
        log::warn!("Received ctrl-c, shutting down the server...")
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                log::warn!("Received SIGTERM, shutting down the server...")
            }
            Err(err) => {
                log::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// An application hosted by the web app, it provides the state and the routes of the feature.
pub trait WebApplication {
    type AppConfig: FeatureConfig + DeserializeOwned + Debug + Send + Sync + 'static;
    type AppState: Clone + Send + Sync + 'static;

    fn feature_name(&self) -> &'static str {
        Self::AppConfig::NAME
    }

    fn create_state(
        &self,
        config: &WebAppConfig<Self::AppConfig>,
    ) -> impl Future<Output = Result<Self::AppState, AnyError>> + Send;

    fn create_routes(
        &self,
        config: &WebAppConfig<Self::AppConfig>,
    ) -> impl Future<Output = Result<OpenApiRouter<Self::AppState>, AnyError>> + Send;
}

fn prepare_web_app<A: WebApplication>(app: &A) -> Result<WebAppConfig<A::AppConfig>, AnyError> {
    let stage = env::args().nth(1).ok_or(anyhow!("Missing config stage parameter"))?;

    let _pre_init_log_guard = logging::install_pre_init_logger();
    log::debug!("pre-init logger installed");

    let config = WebAppConfig::<A::AppConfig>::load(&stage, None)?;
    logging::install_logger(app.feature_name(), &config.logging)?;
    log::info!("pre-init completed");

    Ok(config)
}

/// Create the router of the application with the common routes and layers.
#[instrument(skip(config, app))]
pub async fn create_web_app<A: WebApplication>(
    config: &WebAppConfig<A::AppConfig>,
    app: &A,
) -> Result<Router<()>, AnyError> {
    log::trace!("Creating services...");

    let cors_layer = create_cors_layer(&config.service)?;
    let powered_by_layer = PoweredBy::from_service_info(app.feature_name(), &config.core.version)?;
    let log_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    log::info!("Creating application state...");
    let mut router = OpenApiRouter::with_openapi(ApiDoc::openapi());
    let app_state = app.create_state(config).await?;

    log::info!("Creating common routes...");
    let health_controller = HealthController::new(app.feature_name(), &config.core.version).into_routes();
    router = router.merge(health_controller);

    log::info!("Creating application routes...");
    let app_controller = app.create_routes(config).await?;
    router = router.merge(app_controller);

    let (router, doc) = router.split_for_parts();
    let doc_router = create_doc_router(doc);

    Ok(router
        .merge(doc_router)
        .layer(cors_layer)
        .layer(powered_by_layer)
        .layer(log_layer)
        .with_state(app_state))
}

fn create_doc_router<S>(doc: OpenApiDoc) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/doc/openapi.json",
        get(move || {
            let doc = doc.clone();
            async move { Json(doc) }
        }),
    )
}

async fn start_web_app<A: WebApplication>(app: A) -> Result<(), AnyError> {
    let config = prepare_web_app(&app)?;
    let router = create_web_app(&config, &app).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.service.port));

    log::info!("Starting service on http://{addr:?} ...");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!(e))
}

/// Run the application until a shutdown signal is received. Startup errors are reported with their causes
/// and the process exits with a failure code.
pub fn run_web_app<A: WebApplication>(app: A) {
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(err) => {
            eprintln!("[ERROR] Failed to create runtime: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = rt.block_on(start_web_app(app)) {
        eprintln!("[ERROR] {err}");
        if let Some(cause) = err.source() {
            eprintln!();
            eprintln!("Caused by:");
            let mut cause = Some(cause);
            let mut i = 0;
            while let Some(e) = cause {
                eprintln!("   {i}: {e}");
                cause = e.source();
                i += 1;
            }
        }
        std::process::exit(1);
    }
}
