//! Explanation Generator — one completion call per word.

use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::prompts::{EXPLANATION_PROMPT_TEMPLATE, EXPLANATION_SYSTEM};
use crate::llm_client::CompletionModel;

pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

pub fn build_prompt(word: &str) -> String {
    EXPLANATION_PROMPT_TEMPLATE.replace("{word}", &normalize_word(word))
}

/// Asks the model for a free-text explanation of `word`.
/// The answer is returned as-is; section parsing happens later.
pub async fn generate_explanation(
    model: &dyn CompletionModel,
    word: &str,
) -> Result<String, AppError> {
    let prompt = build_prompt(word);
    let explanation = model
        .complete(EXPLANATION_SYSTEM, &prompt)
        .await
        .map_err(|source| AppError::Generation {
            word: normalize_word(word),
            source,
        })?;

    debug!("Model output for '{}':\n{}", word, explanation);
    Ok(explanation)
}
