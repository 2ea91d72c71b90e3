//! Notion Client — database query, page archive and page create over the
//! public REST API.
//!
//! The batch depends on the `DocumentStore` trait only; `NotionClient` is the
//! production implementation.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

pub mod models;

use models::{CreatedPage, NewPage, QueryResponse};

const NOTION_VERSION: &str = "2022-06-28";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum NotionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}, {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    code: String,
    message: String,
}

/// The remote document store the batch reads records from and writes pages to.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Runs one filtered query. No cursor is followed.
    async fn query_database(
        &self,
        database_id: &str,
        filter: &Value,
    ) -> Result<QueryResponse, NotionError>;

    /// Soft-deletes a page.
    async fn archive_page(&self, page_id: Uuid) -> Result<(), NotionError>;

    /// Creates a page and returns its id.
    async fn create_page(&self, page: &NewPage) -> Result<Uuid, NotionError>;
}

#[derive(Clone)]
pub struct NotionClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NotionClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, NotionError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            base_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, NotionError> {
        let response = self.authorized(request).send().await?;
        let body = check_status(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Maps a non-2xx response to `NotionError::Api`, otherwise returns the body.
async fn check_status(response: Response) -> Result<String, NotionError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        return Ok(body);
    }

    let (code, message) = match serde_json::from_str::<NotionErrorBody>(&body) {
        Ok(e) => (e.code, e.message),
        Err(_) => ("unknown".to_string(), body),
    };
    Err(NotionError::Api {
        status: status.as_u16(),
        code,
        message,
    })
}

#[async_trait]
impl DocumentStore for NotionClient {
    async fn query_database(
        &self,
        database_id: &str,
        filter: &Value,
    ) -> Result<QueryResponse, NotionError> {
        let request = self
            .client
            .post(self.url(&format!("databases/{database_id}/query")))
            .json(&json!({ "filter": filter }));
        let response: QueryResponse = self.send(request).await?;
        debug!(
            "Notion query returned {} results (has_more={})",
            response.results.len(),
            response.has_more
        );
        Ok(response)
    }

    async fn archive_page(&self, page_id: Uuid) -> Result<(), NotionError> {
        let request = self
            .client
            .patch(self.url(&format!("pages/{page_id}")))
            .json(&json!({ "archived": true }));
        let _: Value = self.send(request).await?;
        Ok(())
    }

    async fn create_page(&self, page: &NewPage) -> Result<Uuid, NotionError> {
        let request = self.client.post(self.url("pages")).json(page);
        let created: CreatedPage = self.send(request).await?;
        Ok(created.id)
    }
}
