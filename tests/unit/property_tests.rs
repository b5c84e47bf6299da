use optionlab_rs::prelude::*;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_put_call_parity(
        spot in 20.0f64..200.0,
        strike in 20.0f64..200.0,
        time in 0.05f64..3.0,
        rate in -0.02f64..0.10,
        vol in 0.05f64..1.0,
    ) {
        let call = BlackScholes::price(&OptionParams::call(spot, strike, time, rate), vol);
        let put = BlackScholes::price(&OptionParams::put(spot, strike, time, rate), vol);
        let forward_diff = spot - strike * (-rate * time).exp();
        prop_assert!((call - put - forward_diff).abs() < 1e-6);
    }

    #[test]
    fn test_prices_non_negative_and_vega_positive(
        spot in 20.0f64..200.0,
        strike in 20.0f64..200.0,
        time in 0.05f64..3.0,
        rate in 0.0f64..0.10,
        vol in 0.05f64..1.0,
    ) {
        let params = OptionParams::call(spot, strike, time, rate);
        prop_assert!(BlackScholes::price(&params, vol) >= -1e-9);
        prop_assert!(BlackScholes::price(&params.with_option_type(OptionType::Put), vol) >= -1e-9);
        prop_assert!(BlackScholes::vega(&params, vol) >= 0.0);
    }

    #[test]
    fn test_delta_monotone_in_spot(
        strike in 50.0f64..150.0,
        time in 0.05f64..2.0,
        rate in 0.0f64..0.08,
        vol in 0.05f64..0.8,
    ) {
        let spots = linspace(40.0, 200.0, 60);
        let call = OptionParams::call(100.0, strike, time, rate);
        let put = call.with_option_type(OptionType::Put);

        let call_deltas = evaluate(&call, vol, Axis::Spot, &spots, Metric::Delta).y;
        let put_deltas = evaluate(&put, vol, Axis::Spot, &spots, Metric::Delta).y;

        for pair in call_deltas.windows(2) {
            prop_assert!(pair[1] >= pair[0] - 1e-12);
        }
        for pair in put_deltas.windows(2) {
            prop_assert!(pair[1] <= pair[0] + 1e-12);
        }
    }

    #[test]
    fn test_implied_volatility_round_trip(
        strike in 90.0f64..110.0,
        time in 0.5f64..2.0,
        rate in 0.0f64..0.08,
        vol in 0.1f64..0.8,
        is_call in any::<bool>(),
    ) {
        let option_type = if is_call { OptionType::Call } else { OptionType::Put };
        let params = OptionParams::new(100.0, strike, time, rate, option_type);
        let price = BlackScholes::price(&params, vol);

        let result = solve_iv(&params, price, &SolverConfig::default());
        let recovered = result.volatility();
        prop_assert!(recovered.is_some(), "no convergence for {:?} vol {}", params, vol);
        prop_assert!((recovered.unwrap_or(f64::NAN) - vol).abs() < 1e-4);
    }

    #[test]
    fn test_converged_volatility_is_non_negative(
        strike in 50.0f64..150.0,
        time in 0.1f64..2.0,
        target in -20.0f64..120.0,
        is_call in any::<bool>(),
    ) {
        let option_type = if is_call { OptionType::Call } else { OptionType::Put };
        let params = OptionParams::new(100.0, strike, time, 0.05, option_type);
        if let Some(vol) = solve_iv(&params, target, &SolverConfig::default()).volatility() {
            prop_assert!(vol.is_finite() && vol >= 0.0);
        }
    }

    #[test]
    fn test_payoff_length_and_sign(
        prices in proptest::collection::vec(0.0f64..300.0, 0..50),
        strike in 1.0f64..200.0,
        is_call in any::<bool>(),
    ) {
        let option_type = if is_call { OptionType::Call } else { OptionType::Put };
        let long = payoff_diagram(&prices, strike, option_type, Position::Long);
        let short = payoff_diagram(&prices, strike, option_type, Position::Short);

        prop_assert_eq!(long.len(), prices.len());
        for (l, s) in long.iter().zip(&short) {
            prop_assert!(*l >= 0.0);
            prop_assert_eq!(*l, -*s);
        }
    }
}
