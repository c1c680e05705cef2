//! 입력 범위 전체에서 유지되어야 하는 성질.
use isospire::industry::Industry;
use isospire::simulation::{
    calculate_roi, format_currency, generate_chart_data, InputLimits, SimulationInputs,
};
use proptest::prelude::*;

fn industry() -> impl Strategy<Value = Industry> {
    prop::sample::select(Industry::ALL.to_vec())
}

/// 슬라이더 범위 안의 유효 입력.
fn valid_inputs() -> impl Strategy<Value = SimulationInputs> {
    (
        100_000.0..=10_000_000.0f64,
        1u32..=15,
        1_000.0..=100_000.0f64,
        industry(),
    )
        .prop_map(|(budget, timeframe, facility_size, industry)| SimulationInputs {
            budget,
            timeframe,
            facility_size,
            industry,
            use_case: "any".into(),
        })
}

proptest! {
    #[test]
    fn roi_never_below_floor(inputs in valid_inputs()) {
        prop_assert!(calculate_roi(&inputs).roi_percentage >= 15.0);
    }

    #[test]
    fn emissions_never_above_cap(inputs in valid_inputs()) {
        prop_assert!(calculate_roi(&inputs).emissions_saved <= 85.0);
    }

    #[test]
    fn breakeven_is_finite_and_floored_for_builtin_tables(inputs in valid_inputs()) {
        let r = calculate_roi(&inputs);
        prop_assert!(r.breakeven_time.is_finite());
        prop_assert!(r.breakeven_time >= 0.5);
    }

    #[test]
    fn chart_has_one_label_per_year(inputs in valid_inputs()) {
        prop_assert!(inputs.validate(&InputLimits::default()).is_ok());
        let chart = generate_chart_data(&inputs, &calculate_roi(&inputs));
        let years = inputs.timeframe as usize;
        prop_assert_eq!(chart.labels.len(), years);
        prop_assert_eq!(chart.traditional.values.len(), years);
        prop_assert_eq!(chart.isotope.values.len(), years);
        let last = format!("Year {years}");
        prop_assert_eq!(chart.labels.last(), Some(&last));
    }

    #[test]
    fn identical_inputs_give_identical_results(inputs in valid_inputs()) {
        prop_assert_eq!(calculate_roi(&inputs), calculate_roi(&inputs.clone()));
    }

    #[test]
    fn currency_always_has_dollar_prefix(amount in -1e9..1e9f64) {
        prop_assert!(format_currency(amount).starts_with('$'));
    }
}
