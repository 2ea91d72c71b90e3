//! Page Writer — renders parsed sections into blocks and (re)creates the page.
//!
//! There is no update in place: an existing page is archived first and a new
//! one created in its place.

use serde_json::json;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::notion_client::models::{Block, DatabaseParent, NewPage};
use crate::notion_client::DocumentStore;
use crate::vocab::sections::{ExplanationSections, Section};
use crate::vocab::word_source::{CREATED_PROPERTY, WORD_PROPERTY};

/// Sections rendered as subheading + paragraph, in page order.
const BODY_SECTIONS: [Section; 4] = [
    Section::Meaning,
    Section::Etymology,
    Section::Example,
    Section::RelatedWords,
];

/// Builds the page body: `<word> (<part of speech>)` as the heading, then a
/// subheading and paragraph per remaining section.
pub fn render_blocks(word: &str, sections: &ExplanationSections) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(1 + BODY_SECTIONS.len() * 2);
    blocks.push(Block::heading_1(format!(
        "{} ({})",
        word,
        sections.get(Section::PartOfSpeech)
    )));
    for section in BODY_SECTIONS {
        blocks.push(Block::heading_2(section.label()));
        blocks.push(Block::paragraph(sections.get(section)));
    }
    blocks
}

pub fn build_page(database_id: &str, word: &str, sections: &ExplanationSections) -> NewPage {
    NewPage {
        parent: DatabaseParent {
            database_id: database_id.to_string(),
        },
        properties: json!({
            WORD_PROPERTY: { "title": [{ "text": { "content": word.to_lowercase() } }] },
            CREATED_PROPERTY: { "checkbox": true }
        }),
        children: render_blocks(word, sections),
    }
}

/// Archives `prior_page` (if any) and creates the explanation page.
///
/// A failed archive aborts before anything is created.
pub async fn write_page(
    store: &dyn DocumentStore,
    database_id: &str,
    word: &str,
    sections: &ExplanationSections,
    prior_page: Option<Uuid>,
) -> Result<Uuid, AppError> {
    if let Some(page_id) = prior_page {
        store
            .archive_page(page_id)
            .await
            .map_err(|source| AppError::Archive {
                page_id: page_id.to_string(),
                source,
            })?;
        info!("Archived page {}", page_id);
    }

    let page = build_page(database_id, word, sections);
    if let Some(heading) = page.children.first() {
        debug!("Page heading: {}", heading.text());
    }
    match store.create_page(&page).await {
        Ok(id) => {
            info!("Created page for '{}' ({})", word, id);
            Ok(id)
        }
        Err(source) => {
            error!("Page create failed for '{}'", word);
            Err(AppError::Create {
                word: word.to_string(),
                source,
            })
        }
    }
}
