use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
};
use serde::Deserialize;
use solarbot_infra::web::{
    create_web_app, middlewares::POWERED_BY_HEADER, FeatureConfig, WebAppConfig, WebApplication, DEFAULT_VERSION,
};
use solarbot_test::test;
use tower::ServiceExt;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Deserialize)]
struct Feature {}

impl FeatureConfig for Feature {
    const NAME: &'static str = "feature";
}

struct TestApp;

impl WebApplication for TestApp {
    type AppConfig = Feature;
    type AppState = ();

    async fn create_state(&self, _config: &WebAppConfig<Feature>) -> Result<(), anyhow::Error> {
        Ok(())
    }

    async fn create_routes(&self, _config: &WebAppConfig<Feature>) -> Result<OpenApiRouter<()>, anyhow::Error> {
        Ok(OpenApiRouter::new())
    }
}

async fn create_app() -> axum::Router {
    let config = WebAppConfig::<Feature>::load("test", Some("./tests/web_configs/minimal.json".into())).unwrap();
    create_web_app(&config, &TestApp).await.unwrap()
}

fn powered_by() -> String {
    format!("feature@{DEFAULT_VERSION}")
}

#[test]
async fn test_ready_is_tagged() {
    let response = create_app()
        .await
        .oneshot(Request::get("/info/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(POWERED_BY_HEADER).unwrap(), powered_by().as_str());
}

#[test]
async fn test_preflight_is_tagged() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/info/ready")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap();
    let response = create_app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(headers.get(POWERED_BY_HEADER).unwrap(), powered_by().as_str());
}

#[test]
async fn test_openapi_document_is_served() {
    let response = create_app()
        .await
        .oneshot(Request::get("/doc/openapi.json").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("/info/ready"), "{text}");
    assert!(text.contains("/info/version"), "{text}");
}
