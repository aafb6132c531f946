//! HTTP gateway in front of the Jupiter swap aggregator.
//!
//! Two routes, both JSON in and JSON out:
//!
//! ```text
//! POST /quote  {inputMint, outputMint, amount, slippageBps}
//!              -> GET  {jupiter}/quote?inputMint=..&outputMint=..&amount=..&slippageBps=..
//! POST /swap   {quoteResponse, userPublicKey, dynamicSlippage}
//!              -> POST {jupiter}/swap
//! ```
//!
//! The aggregator's JSON is relayed to the caller without modification.
//! Malformed inbound bodies get a 400, every upstream failure a 500, both
//! with an `{"error": "..."}` body.

pub mod config;
pub mod error;
pub mod handlers;
pub mod jupiter;
pub mod types;

use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use handlers::AppState;
pub use jupiter::{JupiterClient, JUPITER_BASE_URL};

/// Build the gateway router with per-request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(handlers::get_quote))
        .route("/swap", post(handlers::get_swap_transaction))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
