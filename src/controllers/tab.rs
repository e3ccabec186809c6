// Ultimate Guitar API controller
use futures::future::BoxFuture;
use reqwest::{Client, RequestBuilder, StatusCode, header::ACCEPT};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::tab::{SearchResultItem, TabDetail, UpstreamSearchResponse, UpstreamTab};
use crate::secrets::Settings;

/// Mimics the mobile app; the API rejects unknown clients.
const USER_AGENT: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) AppleWebKit/605.1.15";

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type TabFuture<'a, T> = BoxFuture<'a, Result<T, UpstreamError>>;

/// Where tabs come from. The router only talks to this trait.
pub trait TabSource: Send + Sync {
    fn search<'a>(&'a self, query: &'a str) -> TabFuture<'a, Vec<SearchResultItem>>;
    fn fetch_tab(&self, id: i64) -> TabFuture<'_, TabDetail>;
}

pub struct TabController {
    client: Client,
    base_url: String,
}

impl TabController {
    pub fn new(settings: &Settings) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = settings.upstream_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(TabController {
            client: builder.build()?,
            base_url: settings.upstream_base_url.clone(),
        })
    }

    /// Search chord sheets by free text, first page only.
    pub async fn search_tabs(&self, query: &str) -> Result<Vec<SearchResultItem>, UpstreamError> {
        let request = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("query", query), ("page", "1"), ("type", "Chords")]);

        let response: UpstreamSearchResponse = self.get_json(request).await?;
        let items = response.into_items();
        debug!(query, results = items.len(), "Upstream search finished");
        Ok(items)
    }

    /// Fetch a single tab by its upstream id.
    pub async fn get_tab(&self, id: i64) -> Result<TabDetail, UpstreamError> {
        let request = self.client.get(format!("{}/{}", self.base_url, id));

        let response: UpstreamTab = self.get_json(request).await?;
        debug!(id, content_len = response.content.len(), "Upstream tab fetched");
        Ok(TabDetail::from(response))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, UpstreamError> {
        let response = request.header(ACCEPT, "application/json").send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl TabSource for TabController {
    fn search<'a>(&'a self, query: &'a str) -> TabFuture<'a, Vec<SearchResultItem>> {
        Box::pin(self.search_tabs(query))
    }

    fn fetch_tab(&self, id: i64) -> TabFuture<'_, TabDetail> {
        Box::pin(self.get_tab(id))
    }
}
