//! ROI 엔진 회귀 테스트. 기준 시나리오 값은 계산식을 손으로 풀어 얻었다.
use isospire::industry::{Industry, MultiplierTable};
use isospire::simulation::{
    calculate_roi, calculate_roi_with, generate_chart_data, BreakevenPolicy, RoiModel,
    SimulationInputs, SimulationWarning,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn healthcare_reference() -> SimulationInputs {
    SimulationInputs::new(2_500_000.0, 5, 25_000.0, "healthcare", "medical-imaging")
}

#[test]
fn healthcare_reference_scenario() {
    let r = calculate_roi(&healthcare_reference());
    assert_close("traditional_cost", r.traditional_cost, 2_220_000.0, 1e-12);
    assert_close("traditional_operating", r.traditional_operating, 340_000.0, 1e-12);
    assert_close("isotope_cost", r.isotope_cost, 2_550_000.0, 1e-12);
    assert_close("isotope_operating", r.isotope_operating, 148_000.0, 1e-12);
    assert_close("annual_savings", r.annual_savings, 192_000.0, 1e-12);
    assert_close("initial_difference", r.initial_difference, 330_000.0, 1e-12);
    // (192,000 * 5 - 330,000) / 2,500,000 * 100 * 1.3
    assert_close("roi", r.roi_percentage, 32.76, 1e-12);
    assert_close("breakeven", r.breakeven_time, 1.718_75, 1e-12);
    assert_close("emissions", r.emissions_saved, 54.0, 1e-12);
    assert_eq!(r.setup_time.traditional, "8-12 months");
    assert_eq!(r.setup_time.isotope, "4-6 months");
}

#[test]
fn space_reference_scenario() {
    let inputs = SimulationInputs {
        industry: Industry::Space,
        ..healthcare_reference()
    };
    let r = calculate_roi(&inputs);
    assert_close("traditional_cost", r.traditional_cost, 3_700_000.0, 1e-12);
    assert_close("isotope_operating", r.isotope_operating, 111_000.0, 1e-12);
    // 절감 144,000/년, 차이 550,000 -> (720,000 - 550,000) / 2.5M * 100 * 1.5
    assert_eq!(r.roi_percentage, 15.0);
    assert_close("raw_roi", r.raw_roi_percentage, 10.2, 1e-9);
    // 45 + 0.5 * 30
    assert_close("emissions", r.emissions_saved, 60.0, 1e-12);
}

#[test]
fn unknown_industry_uses_healthcare_record() {
    let fallback = calculate_roi(&SimulationInputs::new(
        2_500_000.0,
        5,
        25_000.0,
        "aerospace",
        "medical-imaging",
    ));
    let healthcare = calculate_roi(&healthcare_reference());
    assert_eq!(fallback, healthcare);
}

#[test]
fn calculation_is_deterministic() {
    let inputs = SimulationInputs::new(7_300_000.0, 11, 61_500.0, "manufacturing", "ndt-testing");
    let a = calculate_roi(&inputs);
    let b = calculate_roi(&inputs);
    assert_eq!(a.roi_percentage.to_bits(), b.roi_percentage.to_bits());
    assert_eq!(a.breakeven_time.to_bits(), b.breakeven_time.to_bits());
    assert_eq!(a, b);
}

#[test]
fn use_case_does_not_change_results() {
    let a = calculate_roi(&healthcare_reference());
    let b = calculate_roi(&SimulationInputs {
        use_case: "cancer-treatment".into(),
        ..healthcare_reference()
    });
    assert_eq!(a, b);
}

#[test]
fn injected_table_replaces_builtin_multipliers() {
    let mut table = MultiplierTable::default();
    table.healthcare.cost_multiplier = 1.0;
    table.healthcare.setup_time.isotope = "2 weeks".into();
    let r = calculate_roi_with(&healthcare_reference(), &table, &RoiModel::default());
    assert_close("traditional_cost", r.traditional_cost, 1_850_000.0, 1e-12);
    assert_eq!(r.setup_time.isotope, "2 weeks");
}

/// 동위원소 운영비 비율이 기존 방식보다 커서 연간 절감액이 음수가 되는 모델.
fn negative_savings_model(policy: BreakevenPolicy) -> RoiModel {
    RoiModel {
        isotope_opex_ratio: 0.2,
        breakeven_policy: policy,
        ..RoiModel::default()
    }
}

#[test]
fn negative_savings_guarded_reports_no_breakeven() {
    let r = calculate_roi_with(
        &healthcare_reference(),
        MultiplierTable::builtin(),
        &negative_savings_model(BreakevenPolicy::Guarded),
    );
    assert!(r.annual_savings < 0.0);
    assert!(r.initial_difference > 0.0);
    assert_eq!(r.breakeven_time, f64::INFINITY);
    assert!(!r.breakeven_displayable());
    assert!(r.warnings(5).contains(&SimulationWarning::NoBreakeven));
    // ROI 하한은 그대로 유지된다
    assert_eq!(r.roi_percentage, 15.0);
}

#[test]
fn negative_savings_legacy_keeps_floored_division() {
    let r = calculate_roi_with(
        &healthcare_reference(),
        MultiplierTable::builtin(),
        &negative_savings_model(BreakevenPolicy::Legacy),
    );
    // 330,000 / -60,000 = -5.5 -> 하한 0.5로 가려진다
    assert_eq!(r.breakeven_time, 0.5);
    assert!(r.breakeven_displayable());
}

#[test]
fn zero_savings_legacy_yields_infinity() {
    let model = RoiModel {
        isotope_opex_ratio: 0.17,
        breakeven_policy: BreakevenPolicy::Legacy,
        ..RoiModel::default()
    };
    let r = calculate_roi_with(&healthcare_reference(), MultiplierTable::builtin(), &model);
    assert_eq!(r.annual_savings, 0.0);
    assert_eq!(r.breakeven_time, f64::INFINITY);
}

#[test]
fn chart_matches_reference_scenario() {
    let inputs = SimulationInputs {
        timeframe: 3,
        ..healthcare_reference()
    };
    let results = calculate_roi(&inputs);
    let chart = generate_chart_data(&inputs, &results);
    assert_eq!(chart.labels, ["Year 1", "Year 2", "Year 3"]);
    let expected_traditional = [-2_220_000.0, -2_900_000.0, -3_240_000.0];
    // -2,550,000 - 148,000*(i+1) + 192,000*i
    let expected_isotope = [-2_550_000.0, -2_654_000.0, -2_610_000.0];
    for i in 0..3 {
        assert_close("traditional", chart.traditional.values[i], expected_traditional[i], 1e-12);
        assert_close("isotope", chart.isotope.values[i], expected_isotope[i], 1e-12);
    }
    assert_eq!(chart.traditional.label, "Traditional Method");
    assert_eq!(chart.isotope.label, "Isotope Solution");
}
