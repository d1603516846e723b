use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use trivia_common::api::{CategoryDetail, CategoryRecord};
use trivia_common::models::CategoryId;

use crate::Result;
use crate::source::TriviaSource;

/// Base URL of the public jService instance.
pub const DEFAULT_API_URL: &str = "https://jservice.io";

/// HTTP client for a jService-style trivia API
pub struct JServiceClient {
    client: Client,
    base_url: Url,
}

impl JServiceClient {
    /// Create a new client connecting to the specified API URL
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::new();

        Ok(Self { client, base_url })
    }

    /// URL of the category pool listing
    pub fn categories_url(&self, count: usize) -> Result<Url> {
        let mut url = self.base_url.join("/api/categories")?;
        url.set_query(Some(&format!("count={count}")));
        Ok(url)
    }

    /// URL of a single category fetch
    pub fn category_url(&self, id: CategoryId) -> Result<Url> {
        let mut url = self.base_url.join("/api/category")?;
        url.set_query(Some(&format!("id={id}")));
        Ok(url)
    }
}

#[async_trait]
impl TriviaSource for JServiceClient {
    async fn category_pool(&self, count: usize) -> Result<Vec<CategoryRecord>> {
        let url = self.categories_url(count)?;
        debug!("Fetching category pool from {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let records: Vec<CategoryRecord> = response.json().await?;

        debug!("Received {} categories", records.len());
        Ok(records)
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail> {
        let url = self.category_url(id)?;
        debug!("Fetching category {} from {}", id, url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}
