use optionlab_rs::prelude::*;

#[test]
fn test_dashboard_surface_from_config() {
    let config = ExplorerConfig {
        surface_points: 9,
        ..ExplorerConfig::default()
    };
    let spot = 100.0;
    let params = config.params(spot);
    let strikes = config.surface_strikes(spot);
    let maturities = config.surface_maturities();

    let surface = VolSurface::from_model_price(
        &params,
        config.volatility,
        &strikes,
        &maturities,
        &config.solver,
    );

    assert_eq!(surface.cells.len(), 81);
    let matrix = surface.to_matrix();
    assert_eq!(matrix.len(), 9);
    assert!(matrix.iter().all(|row| row.len() == 9));
    // Every converged cell reproduces the common target price.
    let target = BlackScholes::price(&params, config.volatility);
    for (t, &time) in maturities.iter().enumerate() {
        for (k, &strike) in strikes.iter().enumerate() {
            if let Some(vol) = surface.volatility(t, k) {
                let cell = params.with_strike(strike).with_time_to_expiry(time);
                assert!((BlackScholes::price(&cell, vol) - target).abs() < 1e-6);
            }
        }
    }
}

#[test]
fn test_surface_with_degenerate_maturity_keeps_other_rows() {
    let params = OptionParams::call(100.0, 100.0, 1.0, 0.05);
    let strikes = [95.0, 100.0, 105.0];
    let maturities = [0.0, 1.0];

    let surface = VolSurface::build(
        &params,
        &strikes,
        &maturities,
        |k, t| {
            if t == 0.0 {
                50.0
            } else {
                BlackScholes::price(&params.with_strike(k).with_time_to_expiry(t), 0.22)
            }
        },
        &SolverConfig::default(),
    );

    let matrix = surface.to_matrix();
    assert!(matrix[0].iter().all(Option::is_none));
    for vol in &matrix[1] {
        assert!((vol.unwrap() - 0.22).abs() < 1e-4);
    }
}

#[test]
fn test_smile_over_config_strikes() {
    let config = ExplorerConfig::default();
    let params = config.params(100.0);
    let strikes = config.smile_strikes(100.0);

    let smile = VolSmile::from_model_price(&params, config.volatility, &strikes, &config.solver);
    assert_eq!(smile.points.len(), config.smile_points);
    assert!(smile.converged_count() > 0);

    // Deep ITM strikes cannot reach the ATM premium.
    assert_eq!(smile.volatilities()[0], None);
}

#[test]
fn test_surface_serializes_outcomes() {
    let params = OptionParams::call(100.0, 50.0, 1.0, 0.05);
    let surface = VolSurface::build(&params, &[50.0], &[1.0], |_, _| 0.0, &SolverConfig::default());

    let json = serde_json::to_value(&surface).unwrap();
    assert_eq!(json["cells"][0]["status"], "not_converged");
    assert_eq!(json["strikes"][0], 50.0);
}
