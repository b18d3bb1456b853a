use anyhow::Result;

/// Parameters held constant across an entire grid evaluation.
///
/// Only spot and volatility vary cell to cell; everything else about the
/// contract lives here.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedParams {
    pub strike: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    pub dividend_yield: f64,
}

impl Default for FixedParams {
    fn default() -> Self {
        Self {
            strike: 100.0,
            years_to_exp: 1.0,
            rate: 0.05,
            dividend_yield: 0.0,
        }
    }
}

/// A labeled 2-D matrix of option prices (or per-cell P&L).
///
/// Axis convention, applied uniformly across the crate: **rows are
/// volatilities, columns are spots**.  `values[i][j]` is the cell for
/// `(vols[i], spots[j])`, and the label vectors are exactly the input
/// sequences in their original order.  Consumers overlaying tick labels rely
/// on that 1:1 correspondence.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceGrid {
    /// Row labels: volatility per row
    pub vols: Vec<f64>,
    /// Column labels: spot price per column
    pub spots: Vec<f64>,
    /// Row-major cell values, shape `vols.len() x spots.len()`
    pub values: Vec<Vec<f64>>,
}

impl PriceGrid {
    /// Matrix shape as `(rows, columns)` = `(vols, spots)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.vols.len(), self.spots.len())
    }

    /// Cell value at `(row, col)` = `(volatility index, spot index)`.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    /// Smallest and largest cell values, for color scaling.
    pub fn value_bounds(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for row in &self.values {
            for &v in row {
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        (lo, hi)
    }

    /// Largest absolute cell value, for zero-centered color scaling.
    pub fn max_abs(&self) -> f64 {
        let (lo, hi) = self.value_bounds();
        lo.abs().max(hi.abs())
    }

    /// Write the matrix as CSV: a header row of spot labels, then one record
    /// per volatility row, led by its volatility label.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        let mut header = vec!["vol".to_string()];
        header.extend(self.spots.iter().map(|s| format!("{s:.2}")));
        wtr.write_record(&header)?;

        for (vol, row) in self.vols.iter().zip(&self.values) {
            let mut record = vec![format!("{vol:.2}")];
            record.extend(row.iter().map(|v| format!("{v:.4}")));
            wtr.write_record(&record)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
