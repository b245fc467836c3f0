use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};
use std::{net::SocketAddr, time::Duration};
use tokio::net::TcpListener;

/// A local http server standing in for the robot in tests.
pub struct MockDevice {
    addr: SocketAddr,
}

impl MockDevice {
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                log::error!("Mock device failed: {err}");
            }
        });
        Self { addr }
    }

    /// Respond with the given body after an optional delay.
    pub async fn responding(status: StatusCode, body: &'static str, delay: Option<Duration>) -> Self {
        let router = Router::new().route(
            "/getData",
            get(move || async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }),
        );
        Self::start(router).await
    }

    pub async fn with_reading(body: &'static str) -> Self {
        Self::responding(StatusCode::OK, body, None).await
    }

    pub fn url(&self) -> String {
        format!("http://{}/getData", self.addr)
    }

    /// An url where nothing is listening.
    pub async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/getData")
    }
}
