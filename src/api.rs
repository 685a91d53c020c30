use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct APIResponse {
    pub status: String,
}

impl APIResponse {
    pub fn new_from_msg(msg: &str) -> Self {
        return APIResponse {
            status: msg.to_owned(),
        };
    }
}

/// Relayed Notion page on success.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    pub data: Value,
}

impl SaveResponse {
    pub fn new(data: Value) -> Self {
        SaveResponse {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}
