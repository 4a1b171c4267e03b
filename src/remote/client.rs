//! HTTP client for the remote category store.
//!
//! All methods are plain async calls; the UI layer never awaits them inline
//! but dispatches them from spawned tasks whose single result re-enters the
//! event loop. There is deliberately no retry or backoff here; a failure is
//! reported once and the optimistic local state stays authoritative.

use crate::model::{CategoryName, StudyItem};
use crate::remote::types::Category;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Remote returned status {0}")]
    HttpStatus(u16),
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Remote response missing field '{0}'")]
    MissingField(&'static str),
}

/// Client for the category store backend.
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteClient {
    /// Build a client against `base_url` with connection pooling and a
    /// per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch all categories owned by `token`.
    pub async fn fetch_categories(&self, token: &str) -> Result<Vec<Category>, RemoteError> {
        let url = format!("{}/categories/{}", self.base_url, token);
        tracing::debug!(%url, "Fetching categories");
        let resp = self.http.get(&url).send().await?;
        let resp = check_status(resp)?;
        Ok(resp.json().await?)
    }

    /// Create or update a category with the full current collection.
    ///
    /// `existing_id = None` creates (POST); `Some(id)` updates in place (PUT).
    pub async fn upsert_category<T: Serialize>(
        &self,
        token: &str,
        name: CategoryName,
        existing_id: Option<&str>,
        items: &[T],
    ) -> Result<(), RemoteError> {
        let payload = Category {
            id: existing_id.unwrap_or_default().to_string(),
            owner_token: token.to_string(),
            name: name.as_str().to_string(),
            content: serde_json::json!({ "items": items }),
        };

        let request = match existing_id {
            None => {
                let url = format!("{}/categories", self.base_url);
                tracing::debug!(%url, category = %name, "Creating category");
                self.http.post(&url)
            }
            Some(id) => {
                let url = format!("{}/categories/{}", self.base_url, id);
                tracing::debug!(%url, category = %name, "Updating category");
                self.http.put(&url)
            }
        };

        let resp = request.json(&payload).send().await?;
        check_status(resp)?;
        Ok(())
    }

    /// Generate a recipe from the given ingredient names.
    pub async fn generate_recipe(&self, ingredients: &[String]) -> Result<String, RemoteError> {
        let url = format!("{}/recipes/generate", self.base_url);
        tracing::debug!(%url, count = ingredients.len(), "Requesting recipe");
        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "ingredients": ingredients }))
            .send()
            .await?;
        let resp = check_status(resp)?;
        let mut body: HashMap<String, String> = resp.json().await?;
        body.remove("recipe")
            .ok_or(RemoteError::MissingField("recipe"))
    }

    /// Trigger the academics scraper for `token` and return the scraped
    /// deadlines. The backend persists the result itself; the caller only
    /// needs a follow-up fetch to learn the category id.
    pub async fn scrape_academics(&self, token: &str) -> Result<Vec<StudyItem>, RemoteError> {
        let url = format!("{}/scrapers/canvas?user_id={}", self.base_url, token);
        tracing::debug!(%url, "Triggering academics scrape");
        let resp = self.http.post(&url).send().await?;
        let resp = check_status(resp)?;
        let mut body: HashMap<String, Vec<StudyItem>> = resp.json().await?;
        body.remove("items").ok_or(RemoteError::MissingField("items"))
    }
}

/// Map any HTTP status ≥ 400 to a typed error.
fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = resp.status();
    if status.as_u16() >= 400 {
        tracing::warn!(status = status.as_u16(), url = %resp.url(), "Remote request failed");
        return Err(RemoteError::HttpStatus(status.as_u16()));
    }
    Ok(resp)
}
