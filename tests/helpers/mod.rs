//! In-process mock of the scoring service

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

use resume_filter_client::app_state::AppState;
use resume_filter_client::config::ClientConfig;
use resume_filter_client::services::logger::NoopLogger;
use resume_filter_client::services::scoring::ScoringClient;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: u16,
    pub body: String,
    pub delay: Duration,
}

impl MockReply {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Clone)]
pub struct CapturedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Multipart fields received by one request.
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub resumes: Vec<CapturedFile>,
    pub job_description: Option<String>,
    pub other_fields: Vec<String>,
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    hits: Arc<AtomicUsize>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockScoringService {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockScoringService {
    /// Start the mock on an ephemeral local port.
    pub async fn start(reply: MockReply) -> Self {
        let hits = Arc::new(AtomicUsize::new(0));
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            reply,
            hits: hits.clone(),
            captured: captured.clone(),
        };

        let app = Router::new()
            .route("/api/filter-resumes", post(filter_resumes))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock scoring service");
        let addr = listener.local_addr().expect("Mock has no local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server error");
        });

        Self {
            base_url: format!("http://{}", addr),
            hits,
            captured,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().expect("capture lock poisoned").clone()
    }

    pub fn client(&self, timeout: Duration) -> ScoringClient {
        client_for(&self.base_url, timeout)
    }
}

async fn filter_resumes(
    State(state): State<MockState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let mut request = CapturedRequest::default();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resumes" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
                request.resumes.push(CapturedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "job_description" => {
                request.job_description = field.text().await.ok();
            }
            _ => request.other_fields.push(name),
        }
    }
    state
        .captured
        .lock()
        .expect("capture lock poisoned")
        .push(request);

    if !state.reply.delay.is_zero() {
        tokio::time::sleep(state.reply.delay).await;
    }

    let status =
        StatusCode::from_u16(state.reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        state.reply.body.clone(),
    )
}

pub fn client_for(base_url: &str, timeout: Duration) -> ScoringClient {
    ScoringClient::new(ClientConfig::new(base_url, timeout), Arc::new(NoopLogger))
        .expect("Failed to build scoring client")
}

/// Base URL of a local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe");
    let addr = listener.local_addr().expect("Probe has no local address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn app_state() -> AppState {
    AppState::new(Arc::new(NoopLogger))
}
