//! HTTP client for the remote catalog API.
//!
//! All operations target the fixed `/games` collection under the configured
//! base URL. No retries are attempted; failures are returned as-is.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::catalog::error::CatalogError;
use crate::catalog::game::{Game, GameDraft, GameId};
use crate::config::ApiConfig;

const COLLECTION_PATH: &str = "/games";

/// Remote operations the catalog store depends on.
pub trait CatalogApi: Send + Sync + 'static {
    /// Retrieve every known record.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Game>, CatalogError>> + Send;

    /// Retrieve a single record.
    fn fetch_one(&self, id: GameId) -> impl Future<Output = Result<Game, CatalogError>> + Send;

    /// Submit a new record. The remote assigns the id.
    fn create(&self, draft: &GameDraft)
        -> impl Future<Output = Result<Game, CatalogError>> + Send;

    /// Replace the fields of an existing record.
    fn update(
        &self,
        id: GameId,
        draft: &GameDraft,
    ) -> impl Future<Output = Result<(), CatalogError>> + Send;

    /// Remove a record.
    fn delete(&self, id: GameId) -> impl Future<Output = Result<(), CatalogError>> + Send;
}

/// [`CatalogApi`] implementation backed by reqwest.
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: Client,
    collection_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self, CatalogError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64));
        if let Some(seconds) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds as u64));
        }
        let client = builder.build().map_err(CatalogError::Client)?;

        Ok(Self {
            client,
            collection_url: format!(
                "{}{}",
                config.base_url.trim().trim_end_matches('/'),
                COLLECTION_PATH
            ),
        })
    }

    /// Full URL of the games collection.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: GameId) -> String {
        format!("{}/{}", self.collection_url, id)
    }
}

impl CatalogApi for HttpCatalogClient {
    async fn fetch_all(&self) -> Result<Vec<Game>, CatalogError> {
        let url = self.collection_url.clone();
        tracing::debug!(%url, "GET games");
        let response = send(self.client.get(&url), &url).await?;
        let response = check_status(response, &url, None).await?;
        decode(response, &url).await
    }

    async fn fetch_one(&self, id: GameId) -> Result<Game, CatalogError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "GET game");
        let response = send(self.client.get(&url), &url).await?;
        let response = check_status(response, &url, Some(id)).await?;
        decode(response, &url).await
    }

    async fn create(&self, draft: &GameDraft) -> Result<Game, CatalogError> {
        let url = self.collection_url.clone();
        tracing::debug!(%url, name = %draft.name, "POST game");
        let response = send(self.client.post(&url).json(draft), &url).await?;
        let response = check_status(response, &url, None).await?;
        decode(response, &url).await
    }

    async fn update(&self, id: GameId, draft: &GameDraft) -> Result<(), CatalogError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "PUT game");
        let response = send(self.client.put(&url).json(draft), &url).await?;
        check_status(response, &url, Some(id)).await?;
        Ok(())
    }

    async fn delete(&self, id: GameId) -> Result<(), CatalogError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "DELETE game");
        let response = send(self.client.delete(&url), &url).await?;
        check_status(response, &url, Some(id)).await?;
        Ok(())
    }
}

async fn send(request: reqwest::RequestBuilder, url: &str) -> Result<Response, CatalogError> {
    request.send().await.map_err(|e| CatalogError::Transport {
        url: url.to_string(),
        source: e,
    })
}

async fn decode<T: serde::de::DeserializeOwned>(
    response: Response,
    url: &str,
) -> Result<T, CatalogError> {
    response.json::<T>().await.map_err(|e| CatalogError::Transport {
        url: url.to_string(),
        source: e,
    })
}

/// Map a non-2xx response onto a [`CatalogError`].
///
/// 404 on an item URL means the id is unknown; 400 and 422 are remote-side
/// validation rejections. Everything else is reported with its status.
async fn check_status(
    response: Response,
    url: &str,
    id: Option<GameId>,
) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(classify(status, url, id, &body))
}

fn classify(status: StatusCode, url: &str, id: Option<GameId>, body: &str) -> CatalogError {
    match (status, id) {
        (StatusCode::NOT_FOUND, Some(id)) => CatalogError::NotFound { id },
        (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, _) => {
            CatalogError::Validation {
                message: problem_message(body),
            }
        }
        _ => CatalogError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            message: body.trim().to_string(),
        },
    }
}

/// Extract a readable message from an error body.
///
/// Understands problem-details documents (`{"title": .., "errors": {field: [..]}}`)
/// and falls back to the raw text.
fn problem_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback_message(body);
    };

    if let Some(errors) = value.get("errors").and_then(Value::as_object) {
        let parts: Vec<String> = errors
            .iter()
            .map(|(field, messages)| {
                let text = match messages {
                    Value::Array(items) => items
                        .iter()
                        .filter_map(Value::as_str)
                        .collect::<Vec<_>>()
                        .join(" "),
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!("{}: {}", field, text)
            })
            .collect();
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }

    for key in ["title", "message", "error"] {
        if let Some(text) = value.get(key).and_then(Value::as_str) {
            return text.to_string();
        }
    }

    fallback_message(body)
}

fn fallback_message(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "request rejected".to_string()
    } else {
        trimmed.to_string()
    }
}
