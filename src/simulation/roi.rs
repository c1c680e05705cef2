use serde::{Deserialize, Serialize};

use crate::industry::{MultiplierTable, SetupTime};
use crate::simulation::inputs::SimulationInputs;

/// 투자비 > 0 이면서 연간 절감액 <= 0 인 경우의 손익분기 처리 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakevenPolicy {
    /// 손익분기 없음을 `f64::INFINITY`로 보고한다.
    #[default]
    Guarded,
    /// 기존 수치 동작을 그대로 유지한다: 나눗셈 결과에 하한을 적용하되 NaN은 전파.
    Legacy,
}

/// ROI 계산식의 계수. 기본값이 기준 모델이며 설정으로 덮어쓸 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiModel {
    /// 기준 시설 규모 [sq ft]
    pub reference_facility_size: f64,
    pub traditional_capex_ratio: f64,
    pub traditional_opex_ratio: f64,
    pub isotope_capex_ratio: f64,
    pub isotope_opex_ratio: f64,
    /// ROI 하한 [%]
    pub roi_floor_pct: f64,
    /// 손익분기 하한 [년]
    pub breakeven_floor_years: f64,
    pub emissions_base_pct: f64,
    /// 효율 배수 1 초과분당 배출 저감 증가 [%]
    pub emissions_efficiency_slope: f64,
    /// 배출 저감 상한 [%]
    pub emissions_cap_pct: f64,
    pub breakeven_policy: BreakevenPolicy,
}

impl Default for RoiModel {
    fn default() -> Self {
        Self {
            reference_facility_size: 25_000.0,
            traditional_capex_ratio: 0.74,
            traditional_opex_ratio: 0.17,
            isotope_capex_ratio: 0.85,
            isotope_opex_ratio: 0.074,
            roi_floor_pct: 15.0,
            breakeven_floor_years: 0.5,
            emissions_base_pct: 45.0,
            emissions_efficiency_slope: 30.0,
            emissions_cap_pct: 85.0,
            breakeven_policy: BreakevenPolicy::Guarded,
        }
    }
}

/// ROI 계산 결과. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResults {
    pub traditional_cost: f64,
    pub traditional_operating: f64,
    pub isotope_cost: f64,
    pub isotope_operating: f64,
    /// 하한 적용 후 ROI [%]
    pub roi_percentage: f64,
    /// 하한 적용 전 ROI [%]
    pub raw_roi_percentage: f64,
    /// 손익분기 시점 [년]. 손익분기가 없으면 무한대.
    pub breakeven_time: f64,
    /// 배출 저감률 [%]
    pub emissions_saved: f64,
    /// 연간 운영비 절감액 [USD/년]
    pub annual_savings: f64,
    /// 초기 투자비 차이(동위원소 - 기존) [USD]
    pub initial_difference: f64,
    pub setup_time: SetupTime,
}

/// 내장 배수 테이블과 기본 계수로 ROI를 계산한다.
pub fn calculate_roi(inputs: &SimulationInputs) -> SimulationResults {
    calculate_roi_with(inputs, MultiplierTable::builtin(), &RoiModel::default())
}

/// 주입된 테이블과 계수로 ROI를 계산한다. 어떤 입력에도 오류를 내지 않는다.
pub fn calculate_roi_with(
    inputs: &SimulationInputs,
    table: &MultiplierTable,
    model: &RoiModel,
) -> SimulationResults {
    let multiplier = table.get(inputs.industry);
    let facility_factor = (inputs.facility_size / model.reference_facility_size).sqrt();
    let budget = inputs.budget;

    let cost = |ratio: f64| budget * ratio * multiplier.cost_multiplier * facility_factor;
    let operating = |ratio: f64| budget * ratio * multiplier.operating_multiplier * facility_factor;

    let traditional_cost = cost(model.traditional_capex_ratio);
    let traditional_operating = operating(model.traditional_opex_ratio);
    let isotope_cost = cost(model.isotope_capex_ratio);
    let isotope_operating = operating(model.isotope_opex_ratio);

    let annual_savings = traditional_operating - isotope_operating;
    let initial_difference = isotope_cost - traditional_cost;

    let total_savings = annual_savings * f64::from(inputs.timeframe);
    let net_benefit = total_savings - initial_difference;
    let raw_roi_percentage = (net_benefit / budget) * 100.0 * multiplier.efficiency_multiplier;
    let roi_percentage = raw_roi_percentage.max(model.roi_floor_pct);

    let breakeven_time = breakeven_years(initial_difference, annual_savings, model);

    let emissions_saved = (model.emissions_base_pct
        + (multiplier.efficiency_multiplier - 1.0) * model.emissions_efficiency_slope)
        .min(model.emissions_cap_pct);

    log::debug!(
        "ROI 계산: industry={} ff={facility_factor:.4} roi={roi_percentage:.2}% breakeven={breakeven_time:.3}y",
        inputs.industry
    );
    if !breakeven_time.is_finite() {
        log::warn!("손익분기 시점이 유한하지 않음: {breakeven_time}");
    }

    SimulationResults {
        traditional_cost,
        traditional_operating,
        isotope_cost,
        isotope_operating,
        roi_percentage,
        raw_roi_percentage,
        breakeven_time,
        emissions_saved,
        annual_savings,
        initial_difference,
        setup_time: multiplier.setup_time.clone(),
    }
}

fn breakeven_years(initial_difference: f64, annual_savings: f64, model: &RoiModel) -> f64 {
    let floor = model.breakeven_floor_years;
    if initial_difference > 0.0 {
        if annual_savings > 0.0 {
            return (initial_difference / annual_savings).max(floor);
        }
        return match model.breakeven_policy {
            BreakevenPolicy::Guarded => f64::INFINITY,
            BreakevenPolicy::Legacy => {
                floor_propagating_nan(initial_difference / annual_savings, floor)
            }
        };
    }
    floor
}

// f64::max는 NaN을 버리므로 NaN을 그대로 남기는 하한 함수를 따로 둔다.
fn floor_propagating_nan(value: f64, floor: f64) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.max(floor)
    }
}
