// demos/heatmap_demo.rs

//! Full pipeline demo: config -> quote panel -> price grids -> SVG heatmaps
//!
//! This demo shows how to:
//! 1. Build a config (or load one from a TOML file passed as the first arg)
//! 2. Print the single-point call/put quote
//! 3. Evaluate the call and put price grids
//! 4. Render price heatmaps, plus P&L heatmaps when prices paid are set
//!
//! Usage:
//!     cargo run --example heatmap_demo [config.toml]

use std::env;

use anyhow::Result;
use pricegrid_lib::{build_heatmap_data, render_heatmap, ColorScale, HeatmapConfig};

fn main() -> Result<()> {
    println!("Black-Scholes Heatmap Demo");
    println!("==========================");

    let config = match env::args().nth(1) {
        Some(path) => {
            println!("Loading config from {}", path);
            HeatmapConfig::from_toml_file(&path)?
        }
        None => HeatmapConfig {
            call_price_paid: Some(9.50),
            put_price_paid: Some(6.00),
            ..HeatmapConfig::default()
        },
    };

    println!(
        "Contract: K={:.2}, T={:.2}y, r={:.2}%, q={:.2}%",
        config.strike,
        config.years_to_exp,
        config.rate * 100.0,
        config.dividend_yield * 100.0
    );
    println!(
        "Axes: spot {:.0}..{:.0}, vol {:.2}..{:.2}, {} steps",
        config.spot_range.0, config.spot_range.1, config.vol_range.0, config.vol_range.1,
        config.steps
    );

    let data = build_heatmap_data(&config)?;

    println!("\nCurrent Option Prices (S={:.2}, vol={:.2})", config.spot, config.sigma);
    println!("  Call: ${:.2}", data.current.call);
    println!("  Put:  ${:.2}", data.current.put);

    render_heatmap(
        &data.call_grid,
        "Call Option Prices",
        ColorScale::Sequential,
        "call_prices.svg",
    )?;
    render_heatmap(
        &data.put_grid,
        "Put Option Prices",
        ColorScale::Sequential,
        "put_prices.svg",
    )?;
    println!("\nPrice heatmaps saved to call_prices.svg, put_prices.svg");

    if let Some(pnl) = &data.call_pnl {
        render_heatmap(pnl, "Call Option P&L", ColorScale::Diverging, "call_pnl.svg")?;
        println!("Call P&L heatmap saved to call_pnl.svg");
    }
    if let Some(pnl) = &data.put_pnl {
        render_heatmap(pnl, "Put Option P&L", ColorScale::Diverging, "put_pnl.svg")?;
        println!("Put P&L heatmap saved to put_pnl.svg");
    }

    Ok(())
}
