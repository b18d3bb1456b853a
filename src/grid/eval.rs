use crate::error::PriceGridError;
use crate::pricing::{price_european, OptionParams};

use super::types::{FixedParams, PriceGrid};

/// `n` evenly spaced values from `lo` to `hi` inclusive.
///
/// `n == 1` yields `[lo]`; `n == 0` yields an empty vector, which a grid
/// evaluation will then reject.  The evaluator itself is agnostic to spacing,
/// so callers are free to supply hand-picked sequences instead.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let span = hi - lo;
            (0..n)
                .map(|i| lo + span * (i as f64) / ((n - 1) as f64))
                .collect()
        }
    }
}

/// Evaluate call and put price grids over `spots` x `vols`.
///
/// Every `(vols[i], spots[j])` pair is priced independently with the fixed
/// contract parameters, one serial pass, no shared state between cells.
/// Returns `(call_grid, put_grid)`, both labeled by the input sequences in
/// their given order.
///
/// All-or-nothing: the first cell whose parameters fail validation (e.g. a
/// zero volatility in the sequence) aborts the whole evaluation, so a
/// partially filled grid is never observable.
pub fn evaluate_grid(
    spots: &[f64],
    vols: &[f64],
    fixed: &FixedParams,
) -> Result<(PriceGrid, PriceGrid), PriceGridError> {
    if spots.is_empty() {
        return Err(PriceGridError::EmptySequence { axis: "spot" });
    }
    if vols.is_empty() {
        return Err(PriceGridError::EmptySequence { axis: "volatility" });
    }

    let mut call_rows = Vec::with_capacity(vols.len());
    let mut put_rows = Vec::with_capacity(vols.len());

    for &sigma in vols {
        let mut call_row = Vec::with_capacity(spots.len());
        let mut put_row = Vec::with_capacity(spots.len());

        for &spot in spots {
            let price = price_european(&OptionParams {
                spot,
                strike: fixed.strike,
                years_to_exp: fixed.years_to_exp,
                rate: fixed.rate,
                dividend_yield: fixed.dividend_yield,
                sigma,
            })?;
            call_row.push(price.call);
            put_row.push(price.put);
        }

        call_rows.push(call_row);
        put_rows.push(put_row);
    }

    let call_grid = PriceGrid {
        vols: vols.to_vec(),
        spots: spots.to_vec(),
        values: call_rows,
    };
    let put_grid = PriceGrid {
        vols: vols.to_vec(),
        spots: spots.to_vec(),
        values: put_rows,
    };

    Ok((call_grid, put_grid))
}

/// Per-cell profit/loss: theoretical price minus the price actually paid.
///
/// The reference price is one scalar applied uniformly; labels and shape are
/// copied unchanged from the input grid.
pub fn pnl_grid(grid: &PriceGrid, reference_price: f64) -> PriceGrid {
    PriceGrid {
        vols: grid.vols.clone(),
        spots: grid.spots.clone(),
        values: grid
            .values
            .iter()
            .map(|row| row.iter().map(|v| v - reference_price).collect())
            .collect(),
    }
}
