use serde::{Deserialize, Serialize};

use crate::industry::Industry;

/// 시뮬레이션 입력 오류를 표현한다.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// NaN/무한대 입력
    #[error("{field} 값이 유한한 숫자가 아닙니다.")]
    NotFinite { field: &'static str },
    /// 0 이하 입력
    #[error("{field} 값은 0보다 커야 합니다: {value}")]
    NonPositive { field: &'static str, value: f64 },
    /// 허용 범위 밖 입력
    #[error("{field} 값 {value}이(가) 허용 범위({min} ~ {max})를 벗어났습니다.")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// 시뮬레이션 입력값. 계산 한 번에 대해 불변이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// 투자 예산 [USD]
    pub budget: f64,
    /// 분석 기간 [년]
    pub timeframe: u32,
    /// 시설 규모 [sq ft]
    pub facility_size: f64,
    pub industry: Industry,
    /// 정보용 식별자. 계산식에는 영향을 주지 않는다.
    pub use_case: String,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            budget: 2_500_000.0,
            timeframe: 5,
            facility_size: 25_000.0,
            industry: Industry::Healthcare,
            use_case: "medical-imaging".to_string(),
        }
    }
}

impl SimulationInputs {
    /// 산업을 이름으로 받는 생성자. 알 수 없는 이름은 healthcare로 폴백한다.
    pub fn new(
        budget: f64,
        timeframe: u32,
        facility_size: f64,
        industry: &str,
        use_case: &str,
    ) -> Self {
        Self {
            budget,
            timeframe,
            facility_size,
            industry: Industry::from_name(industry),
            use_case: use_case.to_string(),
        }
    }

    /// 경계에서 입력 범위를 검사한다. 엔진 자체는 검사 없이 항상 값을 만든다.
    pub fn validate(&self, limits: &InputLimits) -> Result<(), InputError> {
        check_positive("budget", self.budget)?;
        check_positive("facility_size", self.facility_size)?;
        if self.timeframe < 1 {
            return Err(InputError::NonPositive {
                field: "timeframe",
                value: f64::from(self.timeframe),
            });
        }
        check_range("budget", self.budget, limits.budget_min, limits.budget_max)?;
        check_range(
            "timeframe",
            f64::from(self.timeframe),
            f64::from(limits.timeframe_min),
            f64::from(limits.timeframe_max),
        )?;
        check_range(
            "facility_size",
            self.facility_size,
            limits.facility_size_min,
            limits.facility_size_max,
        )?;
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(InputError::NonPositive { field, value });
    }
    Ok(())
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), InputError> {
    if value < min || value > max {
        return Err(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// 입력 허용 범위. 기본값은 시뮬레이터 슬라이더 범위와 같다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub budget_min: f64,
    pub budget_max: f64,
    pub timeframe_min: u32,
    pub timeframe_max: u32,
    pub facility_size_min: f64,
    pub facility_size_max: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            budget_min: 100_000.0,
            budget_max: 10_000_000.0,
            timeframe_min: 1,
            timeframe_max: 15,
            facility_size_min: 1_000.0,
            facility_size_max: 100_000.0,
        }
    }
}

impl InputLimits {
    /// 범위 자체가 뒤집혀 있지 않은지 확인한다.
    pub fn is_consistent(&self) -> bool {
        self.budget_min > 0.0
            && self.budget_min <= self.budget_max
            && self.timeframe_min >= 1
            && self.timeframe_min <= self.timeframe_max
            && self.facility_size_min > 0.0
            && self.facility_size_min <= self.facility_size_max
    }
}
