use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

impl Book {
    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or("")
    }

    pub fn cover(&self) -> &str {
        self.cover.as_deref().unwrap_or("")
    }
}

/// Body of `POST /api/save-to-notion`.
#[derive(Debug, Default, Deserialize)]
pub struct SaveRequest {
    #[serde(default, deserialize_with = "truthy_text")]
    pub token: Option<String>,
    #[serde(default, rename = "databaseId", deserialize_with = "truthy_text")]
    pub database_id: Option<String>,
    pub book: Option<Book>,
}

/// Reads any JSON value as text. `null`, `false`, `0` and `""` read as absent.
fn truthy_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    };
    Ok(text.filter(|t| !t.is_empty()))
}

/// A request that passed field validation.
#[derive(Debug)]
pub struct SaveBook {
    pub token: String,
    pub database_id: String,
    pub book: Book,
}

impl SaveRequest {
    /// An empty body reads as a request with no fields.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(SaveRequest::default());
        }
        serde_json::from_slice(body).map_err(AppError::InvalidBody)
    }

    pub fn validate(self) -> Result<SaveBook, AppError> {
        match (self.token, self.database_id, self.book) {
            (Some(token), Some(database_id), Some(book)) => Ok(SaveBook {
                token,
                database_id,
                book,
            }),
            _ => Err(AppError::MissingFields),
        }
    }
}
