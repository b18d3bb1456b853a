// Closed-form Black-Scholes pricing for European calls and puts.  Implied
// volatility and Greeks are intentionally omitted to keep the lightweight
// focus of pricegrid-lib.

use crate::error::PriceGridError;

/// Full parameter set for a single European option evaluation.
///
/// Immutable value type: every call to [`price_european`] receives the
/// complete set explicitly, with no ambient state and no dependence on call
/// order.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParams {
    /// Underlying spot price (> 0)
    pub spot: f64,
    /// Strike price (> 0)
    pub strike: f64,
    /// Time to expiration in years (> 0)
    pub years_to_exp: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Continuous dividend yield
    pub dividend_yield: f64,
    /// Annualized volatility (> 0)
    pub sigma: f64,
}

/// Call and put prices for one parameter set.
///
/// Pure function of [`OptionParams`]; recomputed on every request, never
/// cached.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionPrice {
    pub call: f64,
    pub put: f64,
}

impl OptionParams {
    /// Check the formula's preconditions.
    ///
    /// The log and the `sigma * sqrt(T)` denominator are undefined for
    /// non-positive inputs, so violations are rejected here rather than left
    /// to propagate as NaN.  The comparisons also reject NaN inputs.
    pub fn validate(&self) -> Result<(), PriceGridError> {
        if !(self.spot > 0.0) {
            return Err(PriceGridError::invalid("spot", self.spot));
        }
        if !(self.strike > 0.0) {
            return Err(PriceGridError::invalid("strike", self.strike));
        }
        if !(self.years_to_exp > 0.0) {
            return Err(PriceGridError::invalid("years_to_exp", self.years_to_exp));
        }
        if !(self.sigma > 0.0) {
            return Err(PriceGridError::invalid("sigma", self.sigma));
        }
        if !self.rate.is_finite() {
            return Err(PriceGridError::invalid("rate", self.rate));
        }
        if !self.dividend_yield.is_finite() {
            return Err(PriceGridError::invalid("dividend_yield", self.dividend_yield));
        }
        Ok(())
    }
}

/// Standard normal CDF via the error function.
fn norm_cdf(x: f64) -> f64 {
    // 0.5 * [1 + erf(x / sqrt(2))]
    0.5 * (1.0 + libm::erf(x / (2.0_f64).sqrt()))
}

/// Price a European call and put under Black-Scholes assumptions.
///
/// ```text
/// d1 = (ln(S/K) + (r - q + sigma^2/2) * T) / (sigma * sqrt(T))
/// d2 = d1 - sigma * sqrt(T)
/// C  = S e^(-qT) N(d1) - K e^(-rT) N(d2)
/// P  = K e^(-rT) N(-d2) - S e^(-qT) N(-d1)
/// ```
///
/// Both legs come from a single `d1`/`d2` evaluation.  Fails with
/// [`PriceGridError::InvalidParameter`] instead of returning NaN when a
/// precondition is violated; there is no fallback to the intrinsic-value
/// limit.
pub fn price_european(params: &OptionParams) -> Result<OptionPrice, PriceGridError> {
    params.validate()?;

    let OptionParams {
        spot: s,
        strike: k,
        years_to_exp: t,
        rate: r,
        dividend_yield: q,
        sigma,
    } = *params;

    let sqrt_t = t.sqrt();
    let d1 = ((s / k).ln() + (r - q + 0.5 * sigma.powi(2)) * t) / (sigma * sqrt_t);
    let d2 = d1 - sigma * sqrt_t;

    let disc_k = k * (-r * t).exp();
    let disc_s = s * (-q * t).exp();

    let call = disc_s * norm_cdf(d1) - disc_k * norm_cdf(d2);
    let put = disc_k * norm_cdf(-d2) - disc_s * norm_cdf(-d1);

    Ok(OptionPrice { call, put })
}
