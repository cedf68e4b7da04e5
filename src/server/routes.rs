use crate::errors::PricerResult;
use crate::server::types::{PriceRequest, PriceResponse};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;

/// POST /api/bs/price -- price a European option.
///
/// Body rejections (missing fields, bad JSON, wrong content type) and domain
/// errors come back as a JSON `{ "error": ... }` with a 4xx status.
pub async fn price(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PriceRequest>, JsonRejection>,
) -> PricerResult<Json<PriceResponse>> {
    let Json(req) = payload?;
    let inputs = req.into_inputs(state.strict_opt_type)?;
    let premium = state.pricer.premium(&inputs)?;

    tracing::debug!(
        opt_type = %inputs.option_type,
        spot = inputs.spot,
        strike = inputs.strike,
        ttl_years = inputs.time_to_expiry,
        rate = inputs.rate,
        dividend_yield = inputs.dividend_yield,
        sigma = inputs.volatility,
        premium,
        "priced option"
    );

    Ok(Json(PriceResponse { premium }))
}
