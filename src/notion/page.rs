use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::Properties;
use crate::model::Book;

#[derive(Debug, Serialize)]
pub struct CreatePage {
    pub parent: Parent,
    pub properties: BTreeMap<String, PropertyValue>,
}

#[derive(Debug, Serialize)]
pub struct Parent {
    pub database_id: String,
}

/// A page property value, serialized as `{ "<type>": <payload> }`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Select(NamedOption),
    Date(DateValue),
    Status(NamedOption),
    Files(Vec<FileObject>),
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RichText {
    pub text: TextContent,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct NamedOption {
    pub name: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DateValue {
    pub start: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileObject {
    External { name: String, external: ExternalFile },
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ExternalFile {
    pub url: String,
}

fn text(content: &str) -> Vec<RichText> {
    vec![RichText {
        text: TextContent {
            content: content.to_string(),
        },
    }]
}

fn named(name: &str) -> NamedOption {
    NamedOption {
        name: name.to_string(),
    }
}

pub fn build_page(database_id: &str, book: &Book, props: &Properties, today: NaiveDate) -> CreatePage {
    let mut properties = BTreeMap::new();
    properties.insert(props.title.clone(), PropertyValue::Title(text(&book.title)));
    properties.insert(props.author.clone(), PropertyValue::RichText(text(book.author())));
    properties.insert(props.category.clone(), PropertyValue::Select(named(&props.category_value)));
    properties.insert(
        props.started.clone(),
        PropertyValue::Date(DateValue {
            start: today.format("%Y-%m-%d").to_string(),
        }),
    );
    properties.insert(props.status.clone(), PropertyValue::Status(named(&props.status_value)));
    properties.insert(
        props.cover.clone(),
        PropertyValue::Files(vec![FileObject::External {
            name: props.cover_name.clone(),
            external: ExternalFile {
                url: book.cover().to_string(),
            },
        }]),
    );

    CreatePage {
        parent: Parent {
            database_id: database_id.to_string(),
        },
        properties,
    }
}
