//! In-process HTTP server that records every request it gets and answers
//! all of them with the same canned response.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::sync::Mutex;
use video_channels_api::VideoChannelsClient;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub body: Bytes,
}

impl Recorded {
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Clone)]
struct Stub {
    status: StatusCode,
    content_type: &'static str,
    body: &'static str,
    log: Arc<Mutex<Vec<Recorded>>>,
}

pub struct TestServer {
    pub base_url: String,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl TestServer {
    pub async fn start(status: u16, content_type: &'static str, body: &'static str) -> Self {
        let log = Arc::new(Mutex::new(Vec::new()));
        let stub = Stub {
            status: StatusCode::from_u16(status).unwrap(),
            content_type,
            body,
            log: log.clone(),
        };

        let app = Router::new().fallback(record).with_state(stub);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            log,
        }
    }

    pub async fn json(status: u16, body: &'static str) -> Self {
        Self::start(status, "application/json; charset=utf-8", body).await
    }

    pub async fn no_content() -> Self {
        Self::start(204, "text/plain", "").await
    }

    pub fn client(&self) -> VideoChannelsClient {
        VideoChannelsClient::new(self.base_url.clone(), None).unwrap()
    }

    /// The single request the server received.
    pub async fn only_request(&self) -> Recorded {
        let log = self.log.lock().await;
        assert_eq!(log.len(), 1, "expected exactly one request, got {log:?}");
        log[0].clone()
    }
}

async fn record(
    State(stub): State<Stub>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_str = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    stub.log.lock().await.push(Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header_str(header::AUTHORIZATION),
        accept: header_str(header::ACCEPT),
        body,
    });

    let mut resp = (stub.status, stub.body).into_response();
    resp.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(stub.content_type),
    );
    resp
}
