use pricegrid_lib::{
    build_heatmap_data, evaluate_grid, linspace, pnl_grid, price_european, FixedParams,
    HeatmapConfig, OptionParams, PriceGridError,
};

// Fixed contract shared by most grid tests: K=100, T=1y, r=5%, q=0.
fn create_fixed() -> FixedParams {
    FixedParams {
        strike: 100.0,
        years_to_exp: 1.0,
        rate: 0.05,
        dividend_yield: 0.0,
    }
}

/// Shape is rows=vols x cols=spots and both label vectors are exactly the
/// input sequences in their original order.
#[test]
fn test_grid_shape_and_labels() {
    let spots = vec![85.0, 95.0, 105.0, 115.0];
    let vols = vec![0.15, 0.25, 0.35];

    let (call_grid, put_grid) =
        evaluate_grid(&spots, &vols, &create_fixed()).expect("grid evaluation failed");

    for grid in [&call_grid, &put_grid] {
        assert_eq!(grid.shape(), (3, 4), "shape should be (vols, spots)");
        assert_eq!(grid.spots, spots, "column labels must match input spots");
        assert_eq!(grid.vols, vols, "row labels must match input vols");
        assert_eq!(grid.values.len(), 3);
        assert!(grid.values.iter().all(|row| row.len() == 4));
    }
}

/// Reference grid: spots [90, 100, 110] x vols [0.1, 0.2] produces a 2x3
/// matrix with call prices strictly increasing along the spot axis in every
/// row, and put prices decreasing.
#[test]
fn test_reference_grid_monotone_along_spot() {
    let spots = vec![90.0, 100.0, 110.0];
    let vols = vec![0.1, 0.2];

    let (call_grid, put_grid) =
        evaluate_grid(&spots, &vols, &create_fixed()).expect("grid evaluation failed");

    assert_eq!(call_grid.shape(), (2, 3));

    for (row, &vol) in call_grid.vols.iter().enumerate() {
        for col in 1..call_grid.spots.len() {
            assert!(
                call_grid.value(row, col) > call_grid.value(row, col - 1),
                "call prices should increase along spot at vol={}",
                vol
            );
            assert!(
                put_grid.value(row, col) < put_grid.value(row, col - 1),
                "put prices should decrease along spot at vol={}",
                vol
            );
        }
    }
}

/// Every cell equals the single-point pricing function evaluated at that
/// cell's labels; the grid layer adds no numerics of its own.
#[test]
fn test_grid_cells_match_single_pricing() {
    let spots = vec![80.0, 100.0, 120.0];
    let vols = vec![0.1, 0.2, 0.4];
    let fixed = create_fixed();

    let (call_grid, put_grid) = evaluate_grid(&spots, &vols, &fixed).expect("grid failed");

    for (row, &sigma) in vols.iter().enumerate() {
        for (col, &spot) in spots.iter().enumerate() {
            let price = price_european(&OptionParams {
                spot,
                strike: fixed.strike,
                years_to_exp: fixed.years_to_exp,
                rate: fixed.rate,
                dividend_yield: fixed.dividend_yield,
                sigma,
            })
            .expect("pricing failed");

            assert_eq!(call_grid.value(row, col), price.call);
            assert_eq!(put_grid.value(row, col), price.put);
        }
    }
}

/// A zero volatility anywhere in the sequence fails the entire evaluation;
/// no partially filled grid is returned.
#[test]
fn test_zero_vol_fails_whole_grid() {
    let spots = vec![90.0, 100.0, 110.0];
    let vols = vec![0.2, 0.0, 0.3];

    let err = evaluate_grid(&spots, &vols, &create_fixed()).unwrap_err();
    assert_eq!(
        err,
        PriceGridError::InvalidParameter {
            name: "sigma",
            value: 0.0
        }
    );
}

/// Zero-length axis sequences are rejected up front, naming the axis.
#[test]
fn test_empty_axis_rejected() {
    let fixed = create_fixed();

    let err = evaluate_grid(&[], &[0.2], &fixed).unwrap_err();
    assert_eq!(err, PriceGridError::EmptySequence { axis: "spot" });

    let err = evaluate_grid(&[100.0], &[], &fixed).unwrap_err();
    assert_eq!(err, PriceGridError::EmptySequence { axis: "volatility" });
}

/// P&L identity: every cell is theoretical minus reference, with shape and
/// labels copied unchanged.
#[test]
fn test_pnl_identity() {
    let spots = vec![90.0, 100.0, 110.0];
    let vols = vec![0.1, 0.2];
    let (call_grid, _) = evaluate_grid(&spots, &vols, &create_fixed()).expect("grid failed");

    let reference_price = 7.25;
    let pnl = pnl_grid(&call_grid, reference_price);

    assert_eq!(pnl.shape(), call_grid.shape());
    assert_eq!(pnl.spots, call_grid.spots);
    assert_eq!(pnl.vols, call_grid.vols);

    for row in 0..vols.len() {
        for col in 0..spots.len() {
            assert_eq!(
                pnl.value(row, col),
                call_grid.value(row, col) - reference_price
            );
        }
    }
}

/// A reference price on one side activates only that side's P&L grid.
#[test]
fn test_pnl_optional_activation() {
    let config = HeatmapConfig::default();
    let data = build_heatmap_data(&config).expect("build failed");
    assert!(data.call_pnl.is_none() && data.put_pnl.is_none());

    let config = HeatmapConfig {
        call_price_paid: Some(9.0),
        ..HeatmapConfig::default()
    };
    let data = build_heatmap_data(&config).expect("build failed");
    assert!(data.call_pnl.is_some(), "call P&L should be activated");
    assert!(data.put_pnl.is_none(), "put P&L should stay off");

    let config = HeatmapConfig {
        call_price_paid: Some(9.0),
        put_price_paid: Some(4.5),
        ..HeatmapConfig::default()
    };
    let data = build_heatmap_data(&config).expect("build failed");
    let call_pnl = data.call_pnl.expect("call P&L missing");
    let put_pnl = data.put_pnl.expect("put P&L missing");
    assert_eq!(call_pnl.shape(), data.call_grid.shape());
    assert_eq!(
        put_pnl.value(0, 0),
        data.put_grid.value(0, 0) - 4.5,
        "P&L cells should subtract the side's own reference price"
    );
}

/// Default config produces 10x10 grids and the textbook quote at the default
/// point (S=K=100, T=1, r=5%, sigma=20%).
#[test]
fn test_build_heatmap_data_defaults() {
    let data = build_heatmap_data(&HeatmapConfig::default()).expect("build failed");

    assert_eq!(data.call_grid.shape(), (10, 10));
    assert_eq!(data.put_grid.shape(), (10, 10));
    assert_eq!(data.call_grid.spots.first(), Some(&80.0));
    assert_eq!(data.call_grid.spots.last(), Some(&120.0));

    assert!(
        (data.current.call - 10.4506).abs() < 1e-3,
        "default quote call should be ~10.4506, got {}",
        data.current.call
    );
    assert!(
        (data.current.put - 5.5735).abs() < 1e-3,
        "default quote put should be ~5.5735, got {}",
        data.current.put
    );
}

/// Evenly spaced axis helper: inclusive endpoints, requested length,
/// constant step, and the degenerate lengths.
#[test]
fn test_linspace() {
    let xs = linspace(50.0, 150.0, 10);
    assert_eq!(xs.len(), 10);
    assert!((xs[0] - 50.0).abs() < 1e-12);
    assert!((xs[9] - 150.0).abs() < 1e-12);

    let step = xs[1] - xs[0];
    for pair in xs.windows(2) {
        assert!(
            ((pair[1] - pair[0]) - step).abs() < 1e-9,
            "spacing should be even"
        );
    }

    assert_eq!(linspace(5.0, 9.0, 1), vec![5.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
}

/// Steps = 0 flows through as an empty-axis rejection.
#[test]
fn test_zero_steps_rejected() {
    let config = HeatmapConfig {
        steps: 0,
        ..HeatmapConfig::default()
    };
    let err = build_heatmap_data(&config).unwrap_err();
    assert!(matches!(err, PriceGridError::EmptySequence { .. }));
}

/// CSV export: spot labels across the header, one labeled record per vol row.
#[test]
fn test_csv_layout() {
    let spots = vec![90.0, 100.0, 110.0];
    let vols = vec![0.1, 0.2];
    let (call_grid, _) = evaluate_grid(&spots, &vols, &create_fixed()).expect("grid failed");

    let mut buf = Vec::new();
    call_grid.write_csv(&mut buf).expect("csv export failed");
    let text = String::from_utf8(buf).expect("csv should be utf-8");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "header plus one record per vol row");
    assert_eq!(lines[0], "vol,90.00,100.00,110.00");
    assert!(lines[1].starts_with("0.10,"));
    assert!(lines[2].starts_with("0.20,"));
    assert_eq!(lines[1].split(',').count(), 4);
}

/// Config defaults mirror the interactive app's sidebar.
#[test]
fn test_config_defaults() {
    let config = HeatmapConfig::default();
    assert_eq!(config.strike, 100.0);
    assert_eq!(config.years_to_exp, 1.0);
    assert_eq!(config.rate, 0.05);
    assert_eq!(config.sigma, 0.20);
    assert_eq!(config.spot_range, (80.0, 120.0));
    assert_eq!(config.vol_range, (0.1, 0.3));
    assert_eq!(config.steps, 10);
    assert!(config.call_price_paid.is_none());
    assert!(config.put_price_paid.is_none());
}

/// Partial TOML input: present keys override, missing keys take defaults,
/// optional reference prices stay optional.
#[cfg(feature = "serde")]
#[test]
fn test_config_from_toml() {
    let config = HeatmapConfig::from_toml_str(
        r#"
        strike = 120.0
        spot_range = [60.0, 180.0]
        call_price_paid = 9.5
        "#,
    )
    .expect("toml parse failed");

    assert_eq!(config.strike, 120.0);
    assert_eq!(config.spot_range, (60.0, 180.0));
    assert_eq!(config.call_price_paid, Some(9.5));
    assert_eq!(config.put_price_paid, None);
    assert_eq!(config.years_to_exp, 1.0, "missing keys take defaults");
    assert_eq!(config.steps, 10);
}
