use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionModel;
use crate::notion_client::DocumentStore;

/// Execution context built once in `main` and passed to every stage.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn DocumentStore>,
    pub model: Arc<dyn CompletionModel>,
}

impl AppContext {
    pub fn new(
        config: Config,
        store: Arc<dyn DocumentStore>,
        model: Arc<dyn CompletionModel>,
    ) -> Self {
        Self {
            config,
            store,
            model,
        }
    }
}
