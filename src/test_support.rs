// Local stand-in for the incoming webhook

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode};
use axum::routing::any;
use axum::Router;
use serde_json::Value;
use tokio::sync::Mutex;

pub enum Reply {
    Status(u16),
    // Holds the request far past any test deadline
    Stall,
}

#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub method: String,
    pub content_type: Option<String>,
    pub body: Value,
}

type ReplyFn = Arc<dyn Fn(&str) -> Reply + Send + Sync>;

#[derive(Clone)]
struct HookState {
    requests: Arc<Mutex<Vec<ReceivedRequest>>>,
    reply: ReplyFn,
}

pub struct HookServer {
    addr: SocketAddr,
    state: HookState,
}

impl HookServer {
    // Reply is chosen from the posted `text` field
    pub async fn start(reply: impl Fn(&str) -> Reply + Send + Sync + 'static) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind hook server");
        let addr = listener.local_addr().expect("local_addr");
        let state = HookState {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(reply),
        };
        let app = Router::new()
            .route("/hook", any(receive))
            .with_state(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}/hook", self.addr)
    }

    pub fn unused_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind free port");
        let port = listener.local_addr().expect("local_addr").port();
        drop(listener);
        format!("http://127.0.0.1:{port}/hook")
    }

    pub async fn requests(&self) -> Vec<ReceivedRequest> {
        self.state.requests.lock().await.clone()
    }
}

async fn receive(
    State(hook): State<HookState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let text = body["text"].as_str().unwrap_or_default().to_string();
    hook.requests.lock().await.push(ReceivedRequest {
        method: method.to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    match (hook.reply)(&text) {
        Reply::Status(code) => {
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Reply::Stall => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            StatusCode::OK
        }
    }
}
