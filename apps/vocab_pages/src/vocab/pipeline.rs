//! Batch driver — one pass over the unprocessed words.
//!
//! Flow per run: fetch_unprocessed_words → for each word, in order:
//!       generate_explanation → parse_sections → write_page.
//!
//! Every failure is logged and absorbed here. A failed word never stops the
//! batch, and the run itself always completes.

use tracing::{debug, error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppContext;
use crate::vocab::explainer::generate_explanation;
use crate::vocab::page_writer::write_page;
use crate::vocab::sections::parse_sections;
use crate::vocab::word_source::{fetch_unprocessed_words, WordRecord};

/// Counts reported in the final log line. The run's exit status does not
/// depend on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
}

pub async fn run_batch(ctx: &AppContext) -> BatchReport {
    info!("Starting vocabulary page generation");

    let records = match fetch_unprocessed_words(ctx.store.as_ref(), &ctx.config.notion_database_id)
        .await
    {
        Ok(records) => records,
        Err(e) => {
            error!(kind = e.kind(), "{e}");
            Vec::new()
        }
    };

    let mut report = BatchReport::default();
    for record in &records {
        match process_word(ctx, record).await {
            Ok(_) => report.processed += 1,
            Err(e) => {
                error!(kind = e.kind(), word = %record.word, "{e}");
                report.failed += 1;
            }
        }
    }

    info!(
        "All words handled: {} processed, {} failed",
        report.processed, report.failed
    );
    report
}

/// Generates, parses and writes the page for one record, replacing the
/// record's own page.
async fn process_word(ctx: &AppContext, record: &WordRecord) -> Result<Uuid, AppError> {
    info!("Generating explanation: {}", record.word);
    let explanation = generate_explanation(ctx.model.as_ref(), &record.word).await?;

    let sections = parse_sections(&explanation);
    for (section, value) in sections.iter() {
        debug!("{}: {}", section.label(), value);
    }

    write_page(
        ctx.store.as_ref(),
        &ctx.config.notion_database_id,
        &record.word,
        &sections,
        Some(record.page_id),
    )
    .await
}
