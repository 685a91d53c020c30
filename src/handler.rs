use std::sync::Arc;

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::Value;
use tracing::info;

use crate::api::{APIResponse, SaveResponse};
use crate::config::{Config, Properties};
use crate::error::{AppError, ErrorDetail};
use crate::model::SaveRequest;
use crate::notion::{NotionClient, build_page};

#[derive(Clone)]
pub struct AppState {
    pub notion: Arc<NotionClient>,
    pub properties: Arc<Properties>,
    pub error_detail: ErrorDetail,
}

impl AppState {
    pub fn new(cfg: &Config) -> Self {
        AppState {
            notion: Arc::new(NotionClient::new(&cfg.notion)),
            properties: Arc::new(cfg.notion.properties.clone()),
            error_detail: cfg.errors.detail,
        }
    }
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(APIResponse::new_from_msg("ok"))
}

/// Upper bound for a `POST` body.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Accepts every method; only `OPTIONS` and `POST` do anything. The body is
/// read only once the method is known to be `POST`.
pub async fn save_to_notion(State(state): State<AppState>, method: Method, body: Body) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    if method != Method::POST {
        return AppError::MethodNotAllowed.into_response_with(state.error_detail);
    }

    let body = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => return AppError::UnreadableBody(e).into_response_with(state.error_detail),
    };

    match save(&state, &body).await {
        Ok(data) => (StatusCode::OK, Json(SaveResponse::new(data))).into_response(),
        Err(e) => e.into_response_with(state.error_detail),
    }
}

async fn save(state: &AppState, body: &[u8]) -> Result<Value, AppError> {
    let request = SaveRequest::from_body(body)?.validate()?;
    let today = Utc::now().date_naive();
    let page = build_page(&request.database_id, &request.book, &state.properties, today);

    info!(title = %request.book.title, database_id = %request.database_id, "saving book to notion");
    let data = state.notion.create_page(&request.token, &page).await?;
    Ok(data)
}
