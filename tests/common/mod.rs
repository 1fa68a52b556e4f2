#![allow(dead_code)]

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use dataset_loader::config::ServerConfig;
use serde_json::json;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// One multipart part as seen by the test endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedPart {
    pub field: String,
    pub file_name: Option<String>,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone)]
pub enum Reply {
    Accept,
    Reject(serde_json::Value),
    RejectWithText(String),
}

#[derive(Clone)]
struct Endpoint {
    reply: Reply,
    requests: Arc<Mutex<Vec<Vec<ReceivedPart>>>>,
}

/// In-process stand-in for the dataset upload endpoint.
pub struct TestServer {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Vec<ReceivedPart>>>>,
}

impl TestServer {
    pub async fn start(reply: Reply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route("/api/dataset/upload", post(upload))
            .with_state(Endpoint {
                reply,
                requests: requests.clone(),
            });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, requests }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            base_url: format!("http://{}", self.addr),
            ..ServerConfig::default()
        }
    }

    /// Parts of every request received so far, one entry per request.
    pub fn requests(&self) -> Vec<Vec<ReceivedPart>> {
        self.requests.lock().unwrap().clone()
    }
}

async fn upload(State(endpoint): State<Endpoint>, mut multipart: Multipart) -> Response {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content = field.bytes().await.unwrap().to_vec();
        parts.push(ReceivedPart {
            field: name,
            file_name,
            content,
        });
    }
    endpoint.requests.lock().unwrap().push(parts);

    match endpoint.reply {
        Reply::Accept => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
        Reply::Reject(body) => (StatusCode::BAD_REQUEST, Json(body)).into_response(),
        Reply::RejectWithText(text) => (StatusCode::INTERNAL_SERVER_ERROR, text).into_response(),
    }
}

/// Writes `content` to `name` inside a fresh temporary directory.
pub fn dataset_file(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
