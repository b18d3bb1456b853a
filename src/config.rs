use crate::grid::FixedParams;

/// Inputs accepted from the display layer.
///
/// One immutable struct per render pass: contract terms shared by the quote
/// panel and the grids, the single evaluation point, the two axis ranges, and
/// the optional prices paid that switch the P&L grids on.  Defaults mirror
/// the interactive app's sidebar.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatmapConfig {
    /// Strike price
    #[cfg_attr(feature = "serde", serde(default = "default_strike"))]
    pub strike: f64,

    /// Time to expiration in years
    #[cfg_attr(feature = "serde", serde(default = "default_years_to_exp"))]
    pub years_to_exp: f64,

    /// Continuously compounded risk-free rate
    #[cfg_attr(feature = "serde", serde(default = "default_rate"))]
    pub rate: f64,

    /// Continuous dividend yield
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: f64,

    /// Spot price for the single-point quote
    #[cfg_attr(feature = "serde", serde(default = "default_spot"))]
    pub spot: f64,

    /// Volatility for the single-point quote
    #[cfg_attr(feature = "serde", serde(default = "default_sigma"))]
    pub sigma: f64,

    /// Inclusive `(low, high)` bounds of the spot axis
    #[cfg_attr(feature = "serde", serde(default = "default_spot_range"))]
    pub spot_range: (f64, f64),

    /// Inclusive `(low, high)` bounds of the volatility axis
    #[cfg_attr(feature = "serde", serde(default = "default_vol_range"))]
    pub vol_range: (f64, f64),

    /// Number of evenly spaced points per axis
    #[cfg_attr(feature = "serde", serde(default = "default_steps"))]
    pub steps: usize,

    /// Price paid for the call; absent means no call P&L grid
    #[cfg_attr(feature = "serde", serde(default))]
    pub call_price_paid: Option<f64>,

    /// Price paid for the put; absent means no put P&L grid
    #[cfg_attr(feature = "serde", serde(default))]
    pub put_price_paid: Option<f64>,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            strike: default_strike(),
            years_to_exp: default_years_to_exp(),
            rate: default_rate(),
            dividend_yield: 0.0,
            spot: default_spot(),
            sigma: default_sigma(),
            spot_range: default_spot_range(),
            vol_range: default_vol_range(),
            steps: default_steps(),
            call_price_paid: None,
            put_price_paid: None,
        }
    }
}

impl HeatmapConfig {
    /// Contract parameters held fixed across the grids.
    pub fn fixed_params(&self) -> FixedParams {
        FixedParams {
            strike: self.strike,
            years_to_exp: self.years_to_exp,
            rate: self.rate,
            dividend_yield: self.dividend_yield,
        }
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    #[cfg(feature = "serde")]
    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

fn default_strike() -> f64 {
    100.0
}

fn default_years_to_exp() -> f64 {
    1.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_spot() -> f64 {
    100.0
}

fn default_sigma() -> f64 {
    0.20
}

fn default_spot_range() -> (f64, f64) {
    (80.0, 120.0)
}

fn default_vol_range() -> (f64, f64) {
    (0.1, 0.3)
}

fn default_steps() -> usize {
    10
}
