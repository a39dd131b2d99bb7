use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const CARBON_TXT: &str = r#"version = "0.4"

[org]
disclosures = [
    { doc_type = "sustainability-page", url = "https://example.com/sustainability" },
]
"#;

/// axum server on an ephemeral 127.0.0.1 port with the routes the HTTP
/// probe tests need.
pub struct TestHttpServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestHttpServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, routes())
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestHttpServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn routes() -> Router {
    Router::new()
        .route("/carbon.txt", get(carbon_txt))
        .route("/missing", get(missing))
        .route("/redirect", get(|| async { Redirect::temporary("/carbon.txt") }))
        .route("/loop", get(|| async { Redirect::temporary("/loop") }))
        .route("/delegating", get(delegating))
        .route("/user-agent", get(user_agent))
        .route("/slow", get(slow))
}

async fn carbon_txt() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], CARBON_TXT)
}

async fn missing() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "<html><body>Not found</body></html>")
}

async fn delegating() -> impl IntoResponse {
    (
        [("CarbonTxt-Location", "https://managed.example/carbon.txt")],
        "<html></html>",
    )
}

async fn user_agent(headers: HeaderMap) -> String {
    headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "too late"
}
