use serde::Deserialize;

use super::{DateRange, RecallRecord, RecallSource};
use crate::error::{AppError, AppResult};

/// Client for the openFDA device recall endpoint. Issues a single GET per
/// fetch; a non-success status is fatal and carries the response body.
pub struct OpenFdaClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenFdaClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RecallResponse {
    results: Vec<RecallRecord>,
}

#[async_trait::async_trait]
impl RecallSource for OpenFdaClient {
    #[tracing::instrument(
        name = "recall.fetch",
        skip(self),
        fields(recall.count, http.status)
    )]
    async fn fetch(&self, range: &DateRange, limit: u32) -> AppResult<Vec<RecallRecord>> {
        let url = format!("{}/device/recall.json", self.base_url);
        let search = range.search_expression();
        let limit_param = limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("search", search.as_str()),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        let span = tracing::Span::current();
        span.record("http.status", status.as_u16());

        if !status.is_success() {
            return Err(AppError::Fetch {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RecallResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::data("results", format!("invalid recall response: {e}")))?;

        span.record("recall.count", parsed.results.len());
        tracing::info!(count = parsed.results.len(), "Retrieved recall records");

        Ok(parsed.results)
    }
}
