//! HTTP client for the NewsAPI headlines endpoint.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;

use crate::config::ApiConfig;
use crate::remote::error::RemoteError;
use crate::remote::model::HeadlinesResponse;

const API_KEY_HEADER: &str = "x-api-key";

/// Thin wrapper around `reqwest::Client` configured for one API account.
///
/// The API key travels as a default header on every request, so call
/// sites never handle credentials.
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    country: String,
    page_size: u32,
}

impl NewsApiClient {
    pub fn new(config: &ApiConfig, api_key: &str) -> Result<Self, RemoteError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(api_key) {
            headers.insert(API_KEY_HEADER, value);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country: config.country.clone(),
            page_size: config.page_size,
        })
    }

    /// Fetch one page of top headlines.
    pub async fn top_headlines(&self, page: u32) -> Result<HeadlinesResponse, RemoteError> {
        let url = format!("{}/top-headlines", self.base_url);
        let page_param = page.to_string();
        let page_size_param = self.page_size.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("country", self.country.as_str()),
                ("page", page_param.as_str()),
                ("pageSize", page_size_param.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // NewsAPI reports failures as a JSON envelope even on 4xx/5xx.
            if let Ok(body) = response.json::<HeadlinesResponse>().await {
                if body.is_error() {
                    return Err(api_error(body));
                }
            }
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.json::<HeadlinesResponse>().await?;
        if body.is_error() {
            return Err(api_error(body));
        }
        Ok(body)
    }
}

fn api_error(body: HeadlinesResponse) -> RemoteError {
    RemoteError::Api {
        code: body.code.unwrap_or_else(|| "unknown".to_string()),
        message: body.message.unwrap_or_else(|| "unspecified error".to_string()),
    }
}
