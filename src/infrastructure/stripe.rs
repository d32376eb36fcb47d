//! Reqwest-backed Stripe adapter for reading recent charges.
//!
//! The adapter owns transport details only: authentication headers, the pinned
//! API version, HTTP error mapping and JSON decoding into domain charges.

use crate::domain::charge::Charge;
use crate::domain::ports::PaymentClient;
use crate::error::{AdminError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Stripe API version every request is pinned to.
pub const STRIPE_API_VERSION: &str = "2022-11-15";
pub const DEFAULT_STRIPE_API_BASE: &str = "https://api.stripe.com";
const TEST_MODE_KEY_PREFIX: &str = "sk_test";

/// Returns `true` iff `api_key` is a Stripe test-mode secret key.
pub fn is_test_mode(api_key: &str) -> bool {
    api_key.starts_with(TEST_MODE_KEY_PREFIX)
}

/// Connection settings for [`StripeClient`].
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret key. May be empty, in which case calls fail with an auth error.
    pub api_key: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: DEFAULT_STRIPE_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Payment client talking to Stripe's REST API.
pub struct StripeClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl StripeClient {
    /// Builds a client with the pinned API version header.
    ///
    /// The key is not validated here; an empty or invalid key surfaces as a
    /// `Payment` error on the first request.
    pub fn new(config: StripeConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Stripe-Version",
            reqwest::header::HeaderValue::from_static(STRIPE_API_VERSION),
        );
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn is_test_mode(&self) -> bool {
        is_test_mode(&self.api_key)
    }
}

#[derive(Deserialize)]
struct ChargeList {
    data: Vec<Charge>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[async_trait]
impl PaymentClient for StripeClient {
    async fn list_charges(&self, limit: u8) -> Result<Vec<Charge>> {
        let url = format!("{}/v1/charges", self.api_base);
        tracing::debug!(%url, limit, "listing charges");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }

        let list: ChargeList = serde_json::from_slice(&body)?;
        Ok(list.data)
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> AdminError {
    let message = match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error: ErrorBody {
                message: Some(message),
                kind,
            },
        }) => match kind {
            Some(kind) => format!("{message} ({kind})"),
            None => message,
        },
        _ => status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string(),
    };
    AdminError::Payment {
        status: status.as_u16(),
        message,
    }
}
