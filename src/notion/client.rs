use serde_json::Value;

use super::page::CreatePage;
use crate::config::Notion;
use crate::error::NotionError;

const FALLBACK_MESSAGE: &str = "Notion API error";

#[derive(Clone)]
pub struct NotionClient {
    base_url: String,
    version: String,
    client: reqwest::Client,
}

impl NotionClient {
    pub fn new(cfg: &Notion) -> Self {
        Self {
            base_url: cfg.api_url.trim_end_matches('/').to_string(),
            version: cfg.version.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// Creates a page under `page.parent`, authenticated with the caller's token.
    #[tracing::instrument(skip_all, fields(database_id = %page.parent.database_id))]
    pub async fn create_page(&self, token: &str, page: &CreatePage) -> Result<Value, NotionError> {
        let url = format!("{}/pages", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("Notion-Version", &self.version)
            .json(page)
            .send()
            .await?;
        handle_response(response).await
    }
}

async fn handle_response(response: reqwest::Response) -> Result<Value, NotionError> {
    let status = response.status();

    if status.is_success() {
        tracing::info!(status = %status, "notion page created");
        return response.json::<Value>().await.map_err(NotionError::Decode);
    }

    let raw = response.text().await?;
    let details = serde_json::from_str::<Value>(&raw).unwrap_or(Value::String(raw));
    let message = details
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_MESSAGE)
        .to_string();

    Err(NotionError::Api {
        status,
        message,
        details,
    })
}
