use thiserror::Error;

/// Errors produced by the pricing core.
///
/// The display layer decides how to message the user; the core never recovers
/// or substitutes defaults, and a failed grid evaluation returns no partial
/// matrix.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceGridError {
    /// A pricing input violated its precondition (spot, strike, time to
    /// expiry, and volatility must be strictly positive; rate and dividend
    /// yield must be finite).
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A grid evaluation was requested with a zero-length axis sequence.
    #[error("empty {axis} sequence: grid evaluation needs at least one point per axis")]
    EmptySequence { axis: &'static str },
}

impl PriceGridError {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}
