use crate::errors::{PricerError, PricerResult};
use crate::models::{round_premium, ForwardConvention, PricingInputs};
use statrs::distribution::{ContinuousCDF, Normal};

/// Floor on total standard deviation `sigma * sqrt(T)`; keeps d1/d2 finite
/// when volatility or time to expiry is zero.
const MIN_STD_DEV: f64 = 1e-6;

/// Black-Scholes European option pricer.
///
/// ds  = max(1e-6, sigma * sqrt(T))
/// F   = S * exp(r - q)                  (legacy)
///     = S * exp((r - q) * T)            (textbook)
/// d2  = (ln(F/K) - ds^2 / 2) / ds,  d1 = d2 + ds
/// C   = F * Phi(d1) - K * Phi(d2)
/// P   = K * Phi(-d2) - F * Phi(-d1)
///
/// and the premium is exp(-r*T) times the undiscounted value.
///
/// Immutable after construction, safe to share across tasks.
pub struct BlackScholes {
    /// Standard normal distribution (created once, reused)
    normal: Normal,
    convention: ForwardConvention,
}

impl BlackScholes {
    pub fn new(convention: ForwardConvention) -> Self {
        Self {
            normal: Normal::standard(),
            convention,
        }
    }

    #[inline]
    pub fn forward(&self, inputs: &PricingInputs) -> f64 {
        let carry = inputs.rate - inputs.dividend_yield;
        match self.convention {
            // NOTE: no T multiplier. Quotes depend on this; see ForwardConvention.
            ForwardConvention::Legacy => inputs.spot * carry.exp(),
            ForwardConvention::Textbook => inputs.spot * (carry * inputs.time_to_expiry).exp(),
        }
    }

    /// Undiscounted option value on the forward.
    pub fn undiscounted(&self, inputs: &PricingInputs) -> f64 {
        let ds = MIN_STD_DEV.max(inputs.volatility * inputs.time_to_expiry.sqrt());
        let half_variance = 0.5 * ds * ds;
        let f = self.forward(inputs);
        let k = inputs.strike;

        let d2 = ((f / k).ln() - half_variance) / ds;
        let d1 = d2 + ds;

        if inputs.option_type.is_call() {
            f * self.normal.cdf(d1) - k * self.normal.cdf(d2)
        } else {
            k * self.normal.cdf(-d2) - f * self.normal.cdf(-d1)
        }
    }

    /// Discounted, unrounded premium. Callers are expected to have validated
    /// the inputs.
    #[inline]
    pub fn discounted(&self, inputs: &PricingInputs) -> f64 {
        (-inputs.rate * inputs.time_to_expiry).exp() * self.undiscounted(inputs)
    }

    /// Validate, price, and round to 4 decimal places.
    pub fn premium(&self, inputs: &PricingInputs) -> PricerResult<f64> {
        inputs.validate()?;
        let value = round_premium(self.discounted(inputs));
        if !value.is_finite() {
            return Err(PricerError::Domain(format!(
                "premium is not a finite number for these inputs ({value})"
            )));
        }
        Ok(value)
    }
}
