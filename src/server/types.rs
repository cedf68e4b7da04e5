use crate::errors::{PricerError, PricerResult};
use crate::models::{OptionType, PricingInputs};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

// ── Request/response bodies for POST /api/bs/price ──

#[derive(Debug, Clone, Deserialize)]
pub struct PriceRequest {
    #[serde(rename = "S")]
    pub spot: f64,
    #[serde(rename = "K")]
    pub strike: f64,
    #[serde(rename = "T")]
    pub time_to_expiry: f64,
    pub r: f64,
    pub sigma: f64,
    /// Dividend yield; absent and null both mean 0.0
    #[serde(default)]
    pub q: Option<f64>,
    pub opt_type: String,
}

impl PriceRequest {
    /// Resolve the wire request into pricer inputs. With `strict_opt_type`
    /// an `opt_type` other than call/put is rejected instead of pricing as a put.
    pub fn into_inputs(self, strict_opt_type: bool) -> PricerResult<PricingInputs> {
        let option_type = if strict_opt_type {
            self.opt_type
                .parse::<OptionType>()
                .map_err(|message| PricerError::Validation {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    message,
                })?
        } else {
            OptionType::from_str_lenient(&self.opt_type)
        };

        Ok(PricingInputs {
            option_type,
            spot: self.spot,
            strike: self.strike,
            time_to_expiry: self.time_to_expiry,
            rate: self.r,
            dividend_yield: self.q.unwrap_or(0.0),
            volatility: self.sigma,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceResponse {
    pub premium: f64,
}
