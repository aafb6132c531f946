//! Request and response shapes for the quote and swap endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Slippage cap sent to the aggregator on every swap, whatever the caller asked for.
pub const SWAP_MAX_SLIPPAGE_BPS: i64 = 300;

/// Priority fee setting forwarded on every swap.
pub const COMPUTE_UNIT_PRICE_AUTO: &str = "auto";

/// Arbitrary JSON object relayed back to the caller as-is.
pub type UpstreamResponse = Map<String, Value>;

/// Body of `POST /quote`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteRequest {
    pub input_mint: String,
    pub output_mint: String,
    /// Raw amount in the input mint's smallest unit, as a decimal string.
    pub amount: String,
    pub slippage_bps: i64,
}

/// Slippage bounds for a swap.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DynamicSlippage {
    pub max_bps: i64,
}

/// Body of `POST /swap`.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SwapRequest {
    /// Quote previously returned by `/quote`, passed through untouched.
    pub quote_response: Value,
    pub user_public_key: String,
    /// Accepted for compatibility; the outbound request always uses
    /// [`SWAP_MAX_SLIPPAGE_BPS`].
    pub dynamic_slippage: DynamicSlippage,
}

/// Body posted to the aggregator's `/swap` endpoint.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SwapTransactionBody<'a> {
    pub quote_response: &'a Value,
    pub user_public_key: &'a str,
    pub dynamic_slippage: DynamicSlippage,
    pub wrap_and_unwrap_sol: bool,
    pub compute_unit_price_micro_lamports: &'static str,
}

impl<'a> From<&'a SwapRequest> for SwapTransactionBody<'a> {
    fn from(req: &'a SwapRequest) -> Self {
        Self {
            quote_response: &req.quote_response,
            user_public_key: &req.user_public_key,
            dynamic_slippage: DynamicSlippage {
                max_bps: SWAP_MAX_SLIPPAGE_BPS,
            },
            wrap_and_unwrap_sol: true,
            compute_unit_price_micro_lamports: COMPUTE_UNIT_PRICE_AUTO,
        }
    }
}

/// Error body returned for every non-200 response.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn quote_request_uses_camel_case_fields() {
        let req: QuoteRequest = serde_json::from_value(json!({
            "inputMint": "SOL",
            "outputMint": "USDC",
            "amount": "1000000",
            "slippageBps": 50
        }))
        .unwrap();

        assert_eq!(
            req,
            QuoteRequest {
                input_mint: "SOL".into(),
                output_mint: "USDC".into(),
                amount: "1000000".into(),
                slippage_bps: 50,
            }
        );
    }

    #[test]
    fn missing_fields_decode_to_zero_values() {
        let req: SwapRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.quote_response, Value::Null);
        assert!(req.user_public_key.is_empty());
        assert_eq!(req.dynamic_slippage.max_bps, 0);
    }

    #[test]
    fn wrongly_typed_field_is_rejected() {
        let res = serde_json::from_value::<QuoteRequest>(json!({ "slippageBps": "fifty" }));
        assert!(res.is_err());
    }

    #[test]
    fn swap_body_overrides_caller_slippage() {
        let req = SwapRequest {
            quote_response: json!({ "inAmount": "1000000", "routePlan": [] }),
            user_public_key: "Wallet1111".into(),
            dynamic_slippage: DynamicSlippage { max_bps: 25 },
        };

        let body = serde_json::to_value(SwapTransactionBody::from(&req)).unwrap();
        assert_eq!(
            body,
            json!({
                "quoteResponse": { "inAmount": "1000000", "routePlan": [] },
                "userPublicKey": "Wallet1111",
                "dynamicSlippage": { "maxBps": 300 },
                "wrapAndUnwrapSol": true,
                "computeUnitPriceMicroLamports": "auto"
            })
        );
    }

    #[test]
    fn missing_quote_blob_is_forwarded_as_null() {
        let req = SwapRequest::default();
        let body = serde_json::to_value(SwapTransactionBody::from(&req)).unwrap();
        assert_eq!(body["quoteResponse"], Value::Null);
        assert_eq!(body["dynamicSlippage"]["maxBps"], 300);
    }
}
