use crate::config::Config;
use crate::domain::ports::{MessageRelay, RelayResponse};
use crate::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    to: &'a str,
    text: &'a str,
}

/// WhatsApp relay backed by the WaSender HTTP API.
///
/// Each call is one `POST` with a bearer token and a `{to, text}` JSON body.
/// Requests are bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct WaSenderRelay {
    client: Client,
    url: String,
    api_key: String,
}

impl WaSenderRelay {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.relay_url.clone(),
            api_key: config.relay_api_key.clone(),
        })
    }
}

#[async_trait]
impl MessageRelay for WaSenderRelay {
    async fn send(&self, destination: &str, text: &str) -> Result<RelayResponse> {
        let request = SendMessageRequest {
            to: destination,
            text,
        };

        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RelayResponse { status, body })
    }
}
