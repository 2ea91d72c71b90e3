use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Read side: database query results
// ────────────────────────────────────────────────────────────────────────────

/// One page of a database query. Only the first page is ever read.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<PageObject>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageObject {
    pub id: Uuid,
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

/// A page property. Only the kinds this batch reads are modelled.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    Checkbox { checkbox: bool },
    #[serde(other)]
    Other,
}

impl PageObject {
    /// Text of the first rich-text run of a title property, if any.
    pub fn title_text(&self, property: &str) -> Option<&str> {
        match self.properties.get(property)? {
            PropertyValue::Title { title } => title.first().and_then(RichText::content),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Rich text (both directions)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type", default = "text_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextContent>,
    #[serde(default, skip_serializing)]
    pub plain_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

fn text_kind() -> String {
    "text".to_string()
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            kind: text_kind(),
            text: Some(TextContent {
                content: content.into(),
            }),
            plain_text: None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.text
            .as_ref()
            .map(|t| t.content.as_str())
            .or(self.plain_text.as_deref())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Write side: page creation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextBody {
    pub rich_text: Vec<RichText>,
}

/// A content block appended to a new page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: RichTextBody },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: RichTextBody },
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: RichTextBody },
}

impl Block {
    pub fn heading_1(text: impl Into<String>) -> Self {
        Block::Heading1 {
            heading_1: body(text),
        }
    }

    pub fn heading_2(text: impl Into<String>) -> Self {
        Block::Heading2 {
            heading_2: body(text),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            paragraph: body(text),
        }
    }

    /// Concatenated text of the block's rich-text runs.
    pub fn text(&self) -> String {
        let body = match self {
            Block::Heading1 { heading_1 } => heading_1,
            Block::Heading2 { heading_2 } => heading_2,
            Block::Paragraph { paragraph } => paragraph,
        };
        body.rich_text.iter().filter_map(RichText::content).collect()
    }
}

fn body(text: impl Into<String>) -> RichTextBody {
    RichTextBody {
        rich_text: vec![RichText::plain(text)],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseParent {
    pub database_id: String,
}

/// Request body for `POST /v1/pages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPage {
    pub parent: DatabaseParent,
    pub properties: Value,
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPage {
    pub id: Uuid,
}
