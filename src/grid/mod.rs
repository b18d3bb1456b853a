//! Spot/volatility grid evaluation
//!
//! Evaluates the Black-Scholes closed form over the cartesian product of a
//! spot sequence and a volatility sequence, holding strike, time to expiry,
//! rate, and dividend yield fixed, and derives profit/loss matrices from the
//! resulting price grids.

pub mod eval;
pub mod types;

pub use eval::*;
pub use types::*;
