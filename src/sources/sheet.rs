use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::Opportunity;

use super::rows::parse_csv;

/// A spreadsheet published as CSV. Fetched fresh on every call, with no
/// caching and no retry.
pub struct SheetSource {
    client: Client,
    url: Url,
}

impl SheetSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| AppError::Config(format!("invalid sheet url {:?}: {}", url, e)))?;
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10).min(timeout))
            .user_agent(concat!("opportunity-board/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, url })
    }

    pub async fn fetch_all(&self) -> Result<Vec<Opportunity>> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("{}: {}", self.url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::SourceUnavailable(format!(
                "{}: HTTP {}",
                self.url,
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        let opportunities = parse_csv(&bytes)
            .map_err(|e| AppError::SourceUnavailable(format!("{}: {}", self.url, e)))?;
        tracing::debug!("Fetched {} opportunities from {}", opportunities.len(), self.url);
        Ok(opportunities)
    }
}
