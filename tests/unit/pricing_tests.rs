use optionlab_rs::prelude::*;

const TOLERANCE: f64 = 1e-4;

fn reference_call() -> OptionParams {
    OptionParams::call(100.0, 100.0, 1.0, 0.05)
}

#[test]
fn test_reference_call_scenario() {
    let params = reference_call();
    let price = BlackScholes::price(&params, 0.2);
    let greeks = Greeks::compute(&params, 0.2);

    assert!((price - 10.4506).abs() < TOLERANCE);
    assert!((greeks.delta - 0.6368).abs() < TOLERANCE);
    assert!((greeks.gamma - 0.0188).abs() < TOLERANCE);
    assert!((greeks.vega - 37.52).abs() < 1e-2);
    assert!((greeks.theta + 6.414).abs() < 1e-3);
    assert!((greeks.rho - 53.23).abs() < 1e-2);
}

#[test]
fn test_reference_put_via_parity() {
    let put = reference_call().with_option_type(OptionType::Put);
    let put_price = BlackScholes::price(&put, 0.2);
    assert!((put_price - 5.5735).abs() < TOLERANCE);

    let call_price = BlackScholes::price(&reference_call(), 0.2);
    let parity = call_price - 100.0 + 100.0 * (-0.05_f64).exp();
    assert!((put_price - parity).abs() < 1e-9);
}

#[test]
fn test_untrusted_option_type_rejected() {
    let err = OptionParams::parse(100.0, 100.0, 1.0, 0.05, "cal").unwrap_err();
    assert_eq!(
        err,
        PricingError::InvalidOptionType {
            value: "cal".to_string()
        }
    );
    assert!(BlackScholes::price_str(100.0, 100.0, 1.0, 0.05, 0.2, "PUT").is_ok());
}

#[test]
fn test_zero_volatility_propagates_nan() {
    let params = OptionParams::call(100.0, 100.0, 1.0, 0.0);
    assert!(BlackScholes::price(&params, 0.0).is_nan());
    assert!(!Greeks::compute(&params, 0.0).is_finite());
}

#[test]
fn test_zero_time_propagates_nan() {
    let params = OptionParams::put(100.0, 100.0, 0.0, 0.05);
    assert!(BlackScholes::price(&params, 0.2).is_nan());

    let greeks = Greeks::compute(&params, 0.2);
    assert!(greeks.delta.is_nan());
    assert!(greeks.gamma.is_nan());
    assert!(greeks.vega.is_nan());
    assert!(greeks.theta.is_nan());
    assert!(greeks.rho.is_nan());
}

#[test]
fn test_gamma_and_vega_vanish_near_expiry_away_from_money() {
    for strike in [80.0, 120.0] {
        let params = OptionParams::call(100.0, strike, 1e-4, 0.05);
        assert!(BlackScholes::gamma(&params, 0.2) < 1e-10);
        assert!(BlackScholes::vega(&params, 0.2) < 1e-10);
    }
}

#[test]
fn test_vega_peaks_near_the_money() {
    let params = OptionParams::call(100.0, 100.0, 0.25, 0.0);
    let spots = linspace(50.0, 150.0, 101);
    let curve = evaluate(&params, 0.2, Axis::Spot, &spots, Metric::Vega);

    let peak = curve.argmax().unwrap();
    assert!((peak - 100.0).abs() <= 2.0, "vega peaked at {peak}");
}

#[test]
fn test_payoff_scenario() {
    let long = payoff_diagram(&[120.0, 80.0], 100.0, OptionType::Call, Position::Long);
    assert_eq!(long, vec![20.0, 0.0]);

    let short = payoff_diagram(&[120.0, 80.0], 100.0, OptionType::Call, Position::Short);
    assert_eq!(short[0], -20.0);
    assert_eq!(short[1], 0.0);
}

#[test]
fn test_payoff_position_from_ui_string() {
    let position: Position = "short".parse().unwrap();
    let payoffs = payoff_diagram(&linspace(50.0, 150.0, 3), 100.0, OptionType::Put, position);
    assert_eq!(payoffs, vec![-50.0, 0.0, 0.0]);
}

#[test]
fn test_greek_curves_over_maturity() {
    let params = reference_call();
    let maturities = linspace(0.01, 2.0, 100);
    let curves = greek_curves(&params, 0.2, Axis::TimeToExpiry, &maturities);

    assert_eq!(curves.len(), 3);
    for curve in &curves {
        assert_eq!(curve.x, maturities);
        assert!(curve.y.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn test_greeks_serialize_for_display() {
    let greeks = Greeks::compute(&reference_call(), 0.2).rounded(4);
    let json = serde_json::to_value(greeks).unwrap();
    assert_eq!(json["delta"], 0.6368);
    assert_eq!(json["theta"], -6.414);
}
