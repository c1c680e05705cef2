use crate::simulation::roi::SimulationResults;

/// 표시 계층이 그대로 보여주면 안 되는 결과 상태.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationWarning {
    /// NaN 또는 음의 무한대
    #[error("손익분기 시점을 계산할 수 없습니다 ({0}).")]
    NonFiniteBreakeven(f64),
    /// 연간 절감액이 없어 투자비 차이를 회수하지 못함
    #[error("연간 절감액이 없어 손익분기에 도달하지 않습니다.")]
    NoBreakeven,
    #[error("손익분기 {breakeven_years:.1}년이 분석 기간 {timeframe}년을 넘습니다.")]
    BreakevenBeyondHorizon { breakeven_years: f64, timeframe: u32 },
    /// 효율 배수가 1 미만이면 발생할 수 있다. 0으로 자르지 않고 알리기만 한다.
    #[error("배출 저감률이 음수입니다: {0:.1}%")]
    NegativeEmissions(f64),
    #[error("계산된 ROI {raw:.1}%가 하한보다 낮아 하한 값이 표시됩니다.")]
    RoiFloorApplied { raw: f64 },
}

impl SimulationResults {
    /// 결과를 점검해 경고 목록을 만든다. `timeframe`은 결과를 만든 입력의 기간이다.
    pub fn warnings(&self, timeframe: u32) -> Vec<SimulationWarning> {
        let mut warnings = Vec::new();
        let breakeven = self.breakeven_time;
        if breakeven == f64::INFINITY {
            warnings.push(SimulationWarning::NoBreakeven);
        } else if !breakeven.is_finite() {
            warnings.push(SimulationWarning::NonFiniteBreakeven(breakeven));
        } else if breakeven > f64::from(timeframe) {
            warnings.push(SimulationWarning::BreakevenBeyondHorizon {
                breakeven_years: breakeven,
                timeframe,
            });
        }
        if self.emissions_saved < 0.0 {
            warnings.push(SimulationWarning::NegativeEmissions(self.emissions_saved));
        }
        if self.raw_roi_percentage < self.roi_percentage {
            warnings.push(SimulationWarning::RoiFloorApplied {
                raw: self.raw_roi_percentage,
            });
        }
        warnings
    }

    /// 손익분기 값을 그대로 보여줘도 되는지 여부.
    pub fn breakeven_displayable(&self) -> bool {
        self.breakeven_time.is_finite() && self.breakeven_time >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use crate::simulation::{calculate_roi, SimulationInputs};

    use super::*;

    #[test]
    fn default_scenario_has_no_warnings() {
        let inputs = SimulationInputs::default();
        let results = calculate_roi(&inputs);
        assert!(results.warnings(inputs.timeframe).is_empty());
        assert!(results.breakeven_displayable());
    }

    #[test]
    fn one_year_horizon_flags_late_breakeven_and_floor() {
        let inputs = SimulationInputs {
            timeframe: 1,
            ..SimulationInputs::default()
        };
        let results = calculate_roi(&inputs);
        let warnings = results.warnings(1);
        assert!(warnings
            .iter()
            .any(|w| matches!(w, SimulationWarning::BreakevenBeyondHorizon { timeframe: 1, .. })));
        assert!(warnings
            .iter()
            .any(|w| matches!(w, SimulationWarning::RoiFloorApplied { .. })));
    }
}
