pub mod black_scholes;

use crate::errors::{PricerError, PricerResult};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Only "call" (any case) selects a call; every other string is a put.
    pub fn from_str_lenient(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("call") {
            Self::Call
        } else {
            Self::Put
        }
    }

    #[inline]
    pub fn is_call(self) -> bool {
        self == Self::Call
    }
}

impl FromStr for OptionType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("call") {
            Ok(Self::Call)
        } else if raw.eq_ignore_ascii_case("put") {
            Ok(Self::Put)
        } else {
            Err(format!("unknown option type {raw:?}, expected \"call\" or \"put\""))
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// How the forward price is built from spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardConvention {
    /// `F = S * exp(r - q)`. Ignores time to expiry; this is what existing
    /// clients of the endpoint have always been quoted.
    Legacy,
    /// `F = S * exp((r - q) * T)`.
    Textbook,
}

impl FromStr for ForwardConvention {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "textbook" => Ok(Self::Textbook),
            other => Err(format!("unknown forward convention {other:?}")),
        }
    }
}

impl std::fmt::Display for ForwardConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Textbook => write!(f, "textbook"),
        }
    }
}

/// Validated pricing arguments. The dividend yield is already defaulted,
/// so the pricer never deals with a missing value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingInputs {
    pub option_type: OptionType,
    pub spot: f64,
    pub strike: f64,
    pub time_to_expiry: f64,
    pub rate: f64,
    pub dividend_yield: f64,
    pub volatility: f64,
}

impl PricingInputs {
    /// Reject inputs outside the domain of the closed form.
    pub fn validate(&self) -> PricerResult<()> {
        let fields = [
            ("S", self.spot),
            ("K", self.strike),
            ("T", self.time_to_expiry),
            ("r", self.rate),
            ("q", self.dividend_yield),
            ("sigma", self.volatility),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PricerError::Domain(format!("{name} must be a finite number")));
        }
        if self.strike <= 0.0 {
            return Err(PricerError::Domain(format!("K must be positive, got {}", self.strike)));
        }
        if self.spot <= 0.0 {
            return Err(PricerError::Domain(format!("S must be positive, got {}", self.spot)));
        }
        if self.time_to_expiry < 0.0 {
            return Err(PricerError::Domain(format!(
                "T must be non-negative, got {}",
                self.time_to_expiry
            )));
        }
        if self.volatility < 0.0 {
            return Err(PricerError::Domain(format!(
                "sigma must be non-negative, got {}",
                self.volatility
            )));
        }
        Ok(())
    }
}

/// Magnitude from which an f64 carries no fractional digits worth rounding,
/// well below the point where scaling by 1e4 overflows.
const ROUNDING_LIMIT: f64 = 1e15;

/// Round to 4 decimal places, halves away from zero. Values too large to
/// hold fractional digits come back unchanged.
#[inline]
pub fn round_premium(value: f64) -> f64 {
    if value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    (value * 1e4).round() / 1e4
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> PricingInputs {
        PricingInputs {
            option_type: OptionType::Call,
            spot: 100.0,
            strike: 100.0,
            time_to_expiry: 1.0,
            rate: 0.05,
            dividend_yield: 0.0,
            volatility: 0.2,
        }
    }

    #[test]
    fn test_lenient_option_type() {
        for raw in ["call", "CALL", "Call", "cAlL"] {
            assert_eq!(OptionType::from_str_lenient(raw), OptionType::Call, "{raw}");
        }
        for raw in ["put", "PUT", "foo", "", " call"] {
            assert_eq!(OptionType::from_str_lenient(raw), OptionType::Put, "{raw}");
        }
    }

    #[test]
    fn test_strict_option_type() {
        assert_eq!("Put".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
        assert!("foo".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_forward_convention_parse() {
        assert_eq!(" Legacy ".parse::<ForwardConvention>().unwrap(), ForwardConvention::Legacy);
        assert_eq!("TEXTBOOK".parse::<ForwardConvention>().unwrap(), ForwardConvention::Textbook);
        assert!("black76".parse::<ForwardConvention>().is_err());
    }

    #[test]
    fn test_validate_accepts_edges() {
        let mut p = inputs();
        p.time_to_expiry = 0.0;
        p.volatility = 0.0;
        p.rate = -0.01;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_strike() {
        for k in [0.0, -5.0] {
            let mut p = inputs();
            p.strike = k;
            let err = p.validate().unwrap_err();
            assert!(err.to_string().contains("K must be positive"), "{err}");
        }
    }

    #[test]
    fn test_validate_rejects_other_domains() {
        let mut p = inputs();
        p.spot = 0.0;
        assert!(p.validate().is_err());

        let mut p = inputs();
        p.time_to_expiry = -0.1;
        assert!(p.validate().is_err());

        let mut p = inputs();
        p.volatility = -0.2;
        assert!(p.validate().is_err());

        let mut p = inputs();
        p.rate = f64::NAN;
        assert!(p.validate().unwrap_err().to_string().contains("r must be a finite number"));
    }

    #[test]
    fn test_round_premium() {
        assert_eq!(round_premium(10.450583572185579), 10.4506);
        assert_eq!(round_premium(5.573526022256967), 5.5735);
        assert_eq!(round_premium(-1.23456), -1.2346);
        assert_eq!(round_premium(0.0), 0.0);
    }

    #[test]
    fn test_round_premium_large_values_unchanged() {
        assert_eq!(round_premium(1e305), 1e305);
        assert_eq!(round_premium(-1.7e308), -1.7e308);
        assert_eq!(round_premium(1e15), 1e15);
        assert!(round_premium(f64::MAX).is_finite());
    }
}
