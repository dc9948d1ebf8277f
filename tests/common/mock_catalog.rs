//! In-process catalog service for integration tests.
//!
//! Serves a stateful `/games` resource and can be told to fail upcoming
//! requests with a given status and body.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A request seen by the mock, for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
}

/// Canned failure returned instead of touching the resource.
#[derive(Debug, Clone)]
pub struct MockFailure {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockFailure {
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            delay_ms: 0,
        }
    }

    pub fn problem(status: u16, field: &str, message: &str) -> Self {
        Self {
            status,
            body: json!({
                "title": "One or more validation errors occurred.",
                "status": status,
                "errors": { field: [message] },
            })
            .to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct CatalogState {
    games: Arc<Mutex<Vec<Value>>>,
    next_id: Arc<Mutex<i64>>,
    failures: Arc<Mutex<VecDeque<MockFailure>>>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockCatalog {
    pub addr: SocketAddr,
    state: CatalogState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockCatalog {
    /// Start a mock catalog holding `games` (JSON records with ids).
    pub async fn start(games: Vec<Value>) -> Self {
        let next_id = games
            .iter()
            .filter_map(|g| g.get("id").and_then(Value::as_i64))
            .max()
            .unwrap_or(0)
            + 1;
        let state = CatalogState {
            games: Arc::new(Mutex::new(games)),
            next_id: Arc::new(Mutex::new(next_id)),
            failures: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/games", get(list_games).post(create_game))
            .route(
                "/games/{id}",
                get(get_game).put(update_game).delete(delete_game),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock catalog");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make the next request fail instead of being served.
    pub async fn fail_next(&self, failure: MockFailure) {
        self.state.failures.lock().await.push_back(failure);
    }

    /// Records currently held by the service.
    pub async fn games(&self) -> Vec<Value> {
        self.state.games.lock().await.clone()
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }
}

impl Drop for MockCatalog {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

/// Record the request and return the queued failure, if any.
async fn intercept(state: &CatalogState, method: Method, uri: &Uri) -> Option<Response> {
    state.requests.lock().await.push(CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
    });

    let failure = state.failures.lock().await.pop_front()?;
    if failure.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(failure.delay_ms)).await;
    }
    let status = StatusCode::from_u16(failure.status).unwrap();
    Some((status, failure.body).into_response())
}

async fn list_games(State(state): State<CatalogState>, method: Method, uri: Uri) -> Response {
    if let Some(failure) = intercept(&state, method, &uri).await {
        return failure;
    }
    Json(state.games.lock().await.clone()).into_response()
}

async fn get_game(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    method: Method,
    uri: Uri,
) -> Response {
    if let Some(failure) = intercept(&state, method, &uri).await {
        return failure;
    }
    let games = state.games.lock().await;
    match games.iter().find(|g| g["id"] == json!(id)) {
        Some(game) => Json(game.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_game(
    State(state): State<CatalogState>,
    method: Method,
    uri: Uri,
    Json(mut body): Json<Value>,
) -> Response {
    if let Some(failure) = intercept(&state, method, &uri).await {
        return failure;
    }
    let mut next_id = state.next_id.lock().await;
    body["id"] = json!(*next_id);
    *next_id += 1;
    state.games.lock().await.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_game(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    method: Method,
    uri: Uri,
    Json(body): Json<Value>,
) -> Response {
    if let Some(failure) = intercept(&state, method, &uri).await {
        return failure;
    }
    let mut games = state.games.lock().await;
    let Some(game) = games.iter_mut().find(|g| g["id"] == json!(id)) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if let (Some(target), Some(fields)) = (game.as_object_mut(), body.as_object()) {
        for (key, value) in fields {
            target.insert(key.clone(), value.clone());
        }
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn delete_game(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    method: Method,
    uri: Uri,
) -> Response {
    if let Some(failure) = intercept(&state, method, &uri).await {
        return failure;
    }
    let mut games = state.games.lock().await;
    let before = games.len();
    games.retain(|g| g["id"] != json!(id));
    if games.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}
