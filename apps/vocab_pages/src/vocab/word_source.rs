//! Word Source — reads the records that still need an explanation page.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::notion_client::models::{PageObject, PropertyValue};
use crate::notion_client::DocumentStore;

/// Title property holding the vocabulary word.
pub const WORD_PROPERTY: &str = "単語";
/// Checkbox property set once a page has been generated.
pub const CREATED_PROPERTY: &str = "ページ作成";

/// A vocabulary record awaiting (or having received) its explanation page.
#[derive(Debug, Clone, PartialEq)]
pub struct WordRecord {
    /// Lower-cased, trimmed.
    pub word: String,
    pub page_id: Uuid,
    pub processed: bool,
    pub created_time: Option<DateTime<Utc>>,
}

impl WordRecord {
    fn from_page(page: &PageObject) -> Result<Self, AppError> {
        let word = page
            .title_text(WORD_PROPERTY)
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::MissingTitle(page.id.to_string()))?;

        let processed = matches!(
            page.properties.get(CREATED_PROPERTY),
            Some(PropertyValue::Checkbox { checkbox: true })
        );

        Ok(Self {
            word,
            page_id: page.id,
            processed,
            created_time: page.created_time,
        })
    }
}

/// Filter selecting records whose page has not been created yet.
pub fn unprocessed_filter() -> Value {
    json!({
        "and": [
            {
                "property": CREATED_PROPERTY,
                "checkbox": { "equals": false }
            }
        ]
    })
}

/// Returns unprocessed records in the order the store returned them.
///
/// Only the first result page is read. Records without a word, or already
/// flagged as created, are logged and left out.
pub async fn fetch_unprocessed_words(
    store: &dyn DocumentStore,
    database_id: &str,
) -> Result<Vec<WordRecord>, AppError> {
    let response = store
        .query_database(database_id, &unprocessed_filter())
        .await
        .map_err(AppError::RemoteQuery)?;

    if response.has_more {
        warn!(
            "Query returned more than one page of results; only the first {} records are processed this run",
            response.results.len()
        );
    }

    let mut records = Vec::with_capacity(response.results.len());
    for page in &response.results {
        match WordRecord::from_page(page) {
            Ok(record) if record.processed => {
                warn!("Skipping '{}': page already created", record.word)
            }
            Ok(record) => {
                debug!(
                    "Queued '{}' (page {}, created {:?})",
                    record.word, record.page_id, record.created_time
                );
                records.push(record);
            }
            Err(e) => warn!("Skipping record: {e}"),
        }
    }

    info!("Found {} unprocessed words", records.len());
    Ok(records)
}
