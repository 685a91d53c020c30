//! Notion pages API
//!
//! Maps a [`Book`](crate::model::Book) onto the property schema of a Notion
//! database and creates the page through `POST /v1/pages`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notion_bookshelf::notion::{NotionClient, build_page};
//!
//! let client = NotionClient::new(&cfg.notion);
//! let page = build_page(&database_id, &book, &cfg.notion.properties, today);
//! let created = client.create_page(&token, &page).await?;
//! ```

mod client;
mod page;

pub use client::NotionClient;
pub use page::{CreatePage, Parent, PropertyValue, build_page};
