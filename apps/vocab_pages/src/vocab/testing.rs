//! In-memory collaborators for stage and pipeline tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::llm_client::{CompletionModel, LlmError};
use crate::notion_client::models::{NewPage, QueryResponse};
use crate::notion_client::{DocumentStore, NotionError};

fn api_error(status: u16) -> NotionError {
    NotionError::Api {
        status,
        code: "internal_server_error".to_string(),
        message: "scripted failure".to_string(),
    }
}

/// A database page as the query endpoint returns it.
pub fn page_json(id: &str, word: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "created_time": "2024-03-01T09:30:00.000Z",
        "properties": {
            "単語": {"id": "title", "type": "title", "title": [
                {"type": "text", "text": {"content": word}, "plain_text": word}
            ]},
            "ページ作成": {"id": "chk", "type": "checkbox", "checkbox": false}
        }
    })
}

#[derive(Default)]
pub struct FakeStore {
    pages: Vec<Value>,
    fail_query: bool,
    fail_archive: bool,
    fail_create: bool,
    queries: Mutex<Vec<(String, Value)>>,
    archived: Mutex<Vec<Uuid>>,
    created: Mutex<Vec<NewPage>>,
}

impl FakeStore {
    pub fn with_pages(pages: Vec<Value>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn failing_query(mut self) -> Self {
        self.fail_query = true;
        self
    }

    pub fn failing_archive(mut self) -> Self {
        self.fail_archive = true;
        self
    }

    pub fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn queries(&self) -> Vec<(String, Value)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn archived(&self) -> Vec<Uuid> {
        self.archived.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<NewPage> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn query_database(
        &self,
        database_id: &str,
        filter: &Value,
    ) -> Result<QueryResponse, NotionError> {
        self.queries
            .lock()
            .unwrap()
            .push((database_id.to_string(), filter.clone()));
        if self.fail_query {
            return Err(api_error(500));
        }
        let response = serde_json::from_value(json!({
            "results": self.pages,
            "has_more": false
        }))?;
        Ok(response)
    }

    async fn archive_page(&self, page_id: Uuid) -> Result<(), NotionError> {
        if self.fail_archive {
            return Err(api_error(404));
        }
        self.archived.lock().unwrap().push(page_id);
        Ok(())
    }

    async fn create_page(&self, page: &NewPage) -> Result<Uuid, NotionError> {
        if self.fail_create {
            return Err(api_error(400));
        }
        self.created.lock().unwrap().push(page.clone());
        Ok(Uuid::new_v4())
    }
}

/// Scripted model: answers are handed out in order; `None` is a failure.
#[derive(Default)]
pub struct FakeModel {
    answers: Mutex<VecDeque<Option<String>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeModel {
    pub fn scripted(answers: Vec<Option<&str>>) -> Self {
        Self {
            answers: Mutex::new(
                answers
                    .into_iter()
                    .map(|a| a.map(str::to_string))
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn answering(answer: &str) -> Self {
        Self::scripted(vec![Some(answer)])
    }

    pub fn failing() -> Self {
        Self::scripted(vec![None])
    }

    /// `(system, prompt)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for FakeModel {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), prompt.to_string()));
        match self.answers.lock().unwrap().pop_front().flatten() {
            Some(answer) => Ok(answer),
            None => Err(LlmError::Api {
                status: 500,
                message: "scripted failure".to_string(),
            }),
        }
    }
}
