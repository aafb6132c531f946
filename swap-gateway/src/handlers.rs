//! HTTP request handlers.

use crate::error::ApiError;
use crate::jupiter::JupiterClient;
use crate::types::{QuoteRequest, SwapRequest, UpstreamResponse, SWAP_MAX_SLIPPAGE_BPS};
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub jupiter: Arc<JupiterClient>,
}

impl AppState {
    pub fn new(jupiter: JupiterClient) -> Self {
        Self {
            jupiter: Arc::new(jupiter),
        }
    }
}

/// Decode a JSON request body whatever `Content-Type` the caller sent.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// POST /quote - Look up a swap quote.
pub async fn get_quote(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UpstreamResponse>, ApiError> {
    let quote: QuoteRequest = decode_body(&body)?;

    debug!(
        input = %quote.input_mint,
        output = %quote.output_mint,
        amount = %quote.amount,
        slippage_bps = quote.slippage_bps,
        "quote request"
    );

    let result = state
        .jupiter
        .get_quote(&quote)
        .await
        .inspect_err(|e| warn!("quote failed: {e:#}"))?;

    Ok(Json(result))
}

/// POST /swap - Build a swap transaction for a previously fetched quote.
pub async fn get_swap_transaction(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UpstreamResponse>, ApiError> {
    let req: SwapRequest = decode_body(&body)?;

    if req.dynamic_slippage.max_bps != SWAP_MAX_SLIPPAGE_BPS {
        debug!(
            requested = req.dynamic_slippage.max_bps,
            forwarded = SWAP_MAX_SLIPPAGE_BPS,
            "caller maxBps ignored"
        );
    }

    let result = state
        .jupiter
        .get_swap_transaction(&req)
        .await
        .inspect_err(|e| warn!("swap transaction failed: {e:#}"))?;

    Ok(Json(result))
}
