use super::types::OutrightsResponse;
use super::{FeedError, OddsFeed, MARKET, ODDS_FORMAT, TOUR};
use crate::http::error_body;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const OUTRIGHTS_PATH: &str = "/betting-tools/outrights";

pub struct DataGolfFeed {
    client: Client,
    api_key: String,
    base_url: String,
}

impl DataGolfFeed {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, FeedError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, OUTRIGHTS_PATH)
    }
}

#[async_trait]
impl OddsFeed for DataGolfFeed {
    async fn fetch_outrights(&self) -> Result<OutrightsResponse, FeedError> {
        let resp = self
            .client
            .get(self.url())
            .query(&[
                ("tour", TOUR),
                ("market", MARKET),
                ("odds_format", ODDS_FORMAT),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = error_body(resp).await;
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // Read the whole body first so a truncated transfer reports as a
        // transport failure and bad JSON as a malformed response.
        let body = resp.text().await?;
        let parsed: OutrightsResponse = serde_json::from_str(&body)?;

        if let Some(first) = parsed.odds.first() {
            tracing::debug!(sample = ?first, "first player record in outrights response");
        }

        Ok(parsed)
    }
}
