//! Client for the Jupiter swap aggregator.

use crate::types::{QuoteRequest, SwapRequest, SwapTransactionBody, UpstreamResponse};
use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Public Jupiter v6 endpoint.
pub const JUPITER_BASE_URL: &str = "https://quote-api.jup.ag/v6";

/// Forwards quote and swap requests to Jupiter and hands back its JSON untouched.
#[derive(Clone, Debug)]
pub struct JupiterClient {
    client: Client,
    base_url: String,
}

impl JupiterClient {
    /// Create a client for `base_url` whose calls give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("jupiter: failed to build HTTP client")?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a quote lookup. Values are interpolated as given, without escaping.
    pub fn quote_url(&self, quote: &QuoteRequest) -> String {
        format!(
            "{}/quote?inputMint={}&outputMint={}&amount={}&slippageBps={}",
            self.base_url, quote.input_mint, quote.output_mint, quote.amount, quote.slippage_bps,
        )
    }

    pub fn swap_url(&self) -> String {
        format!("{}/swap", self.base_url)
    }

    /// GET `/quote` and return the decoded JSON object.
    pub async fn get_quote(&self, quote: &QuoteRequest) -> Result<UpstreamResponse> {
        self.fetch_quote(quote).await.context("failed to get quote")
    }

    async fn fetch_quote(&self, quote: &QuoteRequest) -> Result<UpstreamResponse> {
        let url = self.quote_url(quote);
        debug!(%url, "jupiter: requesting quote");

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<UpstreamResponse>().await?)
    }

    /// POST `/swap` with the quote blob and wallet, returning the decoded JSON object.
    pub async fn get_swap_transaction(&self, req: &SwapRequest) -> Result<UpstreamResponse> {
        let payload = serde_json::to_vec(&SwapTransactionBody::from(req))
            .context("failed to marshal request")?;

        debug!(
            user = %req.user_public_key,
            bytes = payload.len(),
            "jupiter: requesting swap transaction"
        );

        let resp = self
            .client
            .post(self.swap_url())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .context("failed to get swap transaction")?;

        let body = resp.bytes().await.context("failed to read response")?;

        serde_json::from_slice(&body).context("failed to parse response")
    }
}
