//! # Pricegrid-Lib: Black-Scholes Pricing Grids and P&L Heatmaps
//!
//! `pricegrid-lib` computes European option prices (calls and puts) under the
//! closed-form Black-Scholes model across a grid of spot prices and
//! volatilities, layers profit/loss on top of the theoretical prices, and
//! renders the resulting matrices as SVG heatmaps.
//!
//! ## Core Features
//!
//! - **Closed-Form Pricing**: call and put legs from one `d1`/`d2` evaluation,
//!   with guarded preconditions instead of silent NaN propagation
//! - **Grid Evaluation**: all-or-nothing evaluation over a spot axis and a
//!   volatility axis with fixed contract terms
//! - **P&L Transform**: per-cell theoretical-minus-paid matrices, activated
//!   independently per side by supplying a reference price
//! - **Heatmap Rendering**: annotated SVG heatmaps with sequential and
//!   zero-centered diverging color scales
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pricegrid_lib::{build_heatmap_data, HeatmapConfig};
//!
//! let config = HeatmapConfig {
//!     call_price_paid: Some(9.50),
//!     ..HeatmapConfig::default()
//! };
//!
//! let data = build_heatmap_data(&config)?;
//! println!(
//!     "call {:.2} / put {:.2}",
//!     data.current.call, data.current.put
//! );
//! assert!(data.call_pnl.is_some());
//! assert!(data.put_pnl.is_none());
//! # Ok::<(), pricegrid_lib::PriceGridError>(())
//! ```
//!
//! ## Axis Convention
//!
//! Every matrix in this crate is laid out with **rows = volatility, columns =
//! spot**; see [`PriceGrid`].  The label vectors are always exactly the input
//! sequences, in order.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod config;
pub mod error;
pub mod grid;
pub mod pricing;
pub mod render;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::HeatmapConfig;
pub use error::PriceGridError;
pub use grid::{evaluate_grid, linspace, pnl_grid, FixedParams, PriceGrid};
pub use pricing::{price_european, OptionParams, OptionPrice};
pub use render::{render_heatmap, ColorScale};

/// Everything the display layer consumes for one render pass.
///
/// Created transiently per parameter change and discarded after rendering;
/// nothing here is cached between passes.
#[derive(Debug, Clone)]
pub struct HeatmapData {
    /// Single-point quote at the configured spot and volatility
    pub current: OptionPrice,
    /// Call price grid over the configured axes
    pub call_grid: PriceGrid,
    /// Put price grid over the same axes
    pub put_grid: PriceGrid,
    /// Call P&L grid, present iff a call price paid was supplied
    pub call_pnl: Option<PriceGrid>,
    /// Put P&L grid, present iff a put price paid was supplied
    pub put_pnl: Option<PriceGrid>,
}

/// Evaluate everything a display pass needs from one config.
///
/// Builds both axes with [`linspace`], prices the call and put grids, prices
/// the single-point quote, and derives a P&L grid for each side whose
/// reference price is present.
///
/// # Errors
///
/// * [`PriceGridError::EmptySequence`] if `steps` is zero
/// * [`PriceGridError::InvalidParameter`] if the quote point or any grid cell
///   violates the pricing preconditions (the grid is then discarded whole)
pub fn build_heatmap_data(config: &HeatmapConfig) -> Result<HeatmapData, PriceGridError> {
    let spots = linspace(config.spot_range.0, config.spot_range.1, config.steps);
    let vols = linspace(config.vol_range.0, config.vol_range.1, config.steps);
    let fixed = config.fixed_params();

    let (call_grid, put_grid) = evaluate_grid(&spots, &vols, &fixed)?;

    let current = price_european(&OptionParams {
        spot: config.spot,
        strike: fixed.strike,
        years_to_exp: fixed.years_to_exp,
        rate: fixed.rate,
        dividend_yield: fixed.dividend_yield,
        sigma: config.sigma,
    })?;

    let call_pnl = config.call_price_paid.map(|paid| pnl_grid(&call_grid, paid));
    let put_pnl = config.put_price_paid.map(|paid| pnl_grid(&put_grid, paid));

    Ok(HeatmapData {
        current,
        call_grid,
        put_grid,
        call_pnl,
        put_pnl,
    })
}
