// demos/grid_export.rs

//! Evaluate a pricing grid and export it: console table plus CSV files.
//!
//! Usage:
//!     cargo run --example grid_export

use std::fs::File;

use anyhow::Result;
use pricegrid_lib::{evaluate_grid, linspace, FixedParams};

fn main() -> Result<()> {
    let fixed = FixedParams {
        strike: 100.0,
        years_to_exp: 0.5,
        rate: 0.05,
        dividend_yield: 0.0,
    };
    let spots = linspace(80.0, 120.0, 9);
    let vols = linspace(0.10, 0.50, 5);

    let (call_grid, put_grid) = evaluate_grid(&spots, &vols, &fixed)?;

    println!(
        "Call prices, K={:.0}, T={:.2}y, r={:.0}%",
        fixed.strike,
        fixed.years_to_exp,
        fixed.rate * 100.0
    );
    print!("{:>8}", "vol\\spot");
    for spot in &call_grid.spots {
        print!("{:>9.2}", spot);
    }
    println!();
    for (row, vol) in call_grid.vols.iter().enumerate() {
        print!("{:>8.2}", vol);
        for col in 0..call_grid.spots.len() {
            print!("{:>9.4}", call_grid.value(row, col));
        }
        println!();
    }

    call_grid.write_csv(File::create("call_grid.csv")?)?;
    put_grid.write_csv(File::create("put_grid.csv")?)?;
    println!("\nGrids saved to call_grid.csv, put_grid.csv");

    Ok(())
}
