use thiserror::Error;

use crate::llm_client::LlmError;
use crate::notion_client::NotionError;

/// Batch-level error type.
///
/// Each variant is one failure mode of a remote round trip. None of them
/// abort the run: the pipeline logs the error and moves on to the next word.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to query unprocessed words: {0}")]
    RemoteQuery(#[source] NotionError),

    #[error("Failed to generate explanation for '{word}': {source}")]
    Generation {
        word: String,
        #[source]
        source: LlmError,
    },

    #[error("Failed to archive page {page_id}: {source}")]
    Archive {
        page_id: String,
        #[source]
        source: NotionError,
    },

    #[error("Failed to create page for '{word}': {source}")]
    Create {
        word: String,
        #[source]
        source: NotionError,
    },

    #[error("Record {0} has an empty title")]
    MissingTitle(String),
}

impl AppError {
    /// Short tag used in log lines so failures can be grepped by kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::RemoteQuery(_) => "REMOTE_QUERY",
            AppError::Generation { .. } => "GENERATION",
            AppError::Archive { .. } => "ARCHIVE",
            AppError::Create { .. } => "CREATE",
            AppError::MissingTitle(_) => "MISSING_TITLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_word_context() {
        let err = AppError::Generation {
            word: "ubiquitous".to_string(),
            source: LlmError::EmptyContent,
        };
        assert_eq!(err.kind(), "GENERATION");
        assert!(err.to_string().contains("'ubiquitous'"));
        assert!(err.to_string().contains("empty content"));
    }

    #[test]
    fn test_archive_error_names_page() {
        let err = AppError::Archive {
            page_id: "abc".to_string(),
            source: NotionError::Api {
                status: 404,
                code: "object_not_found".to_string(),
                message: "Could not find page".to_string(),
            },
        };
        assert_eq!(err.kind(), "ARCHIVE");
        assert!(err.to_string().contains("page abc"));
    }
}
