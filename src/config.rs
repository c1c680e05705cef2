use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::industry::{Industry, MultiplierTable};
use crate::simulation::{InputLimits, RoiModel, SimulationInputs};

/// 기본 설정 파일 경로(작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en-us 등)
    pub language: String,
    /// 시뮬레이션 기본 입력
    pub defaults: SimulationInputs,
    pub limits: InputLimits,
    pub model: RoiModel,
    pub multipliers: MultiplierTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            defaults: SimulationInputs::default(),
            limits: InputLimits::default(),
            model: RoiModel::default(),
            multipliers: MultiplierTable::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 값은 읽었지만 사용할 수 없는 경우
    #[error("잘못된 설정 값: {0}")]
    Invalid(String),
}

/// 지정한 경로에서 설정을 로드한다. 파일이 없으면 기본값을 저장하고 반환한다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        log::debug!("설정 로드: {}", path.display());
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        log::info!("기본 설정 생성: {}", path.display());
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 계산에 쓸 수 없는 값이 있는지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.limits.is_consistent() {
            return Err(ConfigError::Invalid("limits 범위가 올바르지 않습니다.".into()));
        }
        if let Some((industry, field)) = self.multipliers.first_invalid() {
            return Err(ConfigError::Invalid(format!(
                "multipliers.{industry}.{field} 값은 양수여야 합니다."
            )));
        }
        let reference = self.model.reference_facility_size;
        if reference.is_nan() || reference <= 0.0 {
            return Err(ConfigError::Invalid(
                "model.reference_facility_size 값은 양수여야 합니다.".into(),
            ));
        }
        self.defaults
            .validate(&self.limits)
            .map_err(|e| ConfigError::Invalid(format!("defaults: {e}")))
    }

    /// 기본 입력 중 산업을 바꾼 사본.
    pub fn defaults_for(&self, industry: Industry) -> SimulationInputs {
        SimulationInputs {
            industry,
            ..self.defaults.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            language = "en-us"

            [model]
            breakeven_policy = "legacy"
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.language, "en-us");
        assert_eq!(cfg.model.breakeven_policy, crate::simulation::BreakevenPolicy::Legacy);
        assert_eq!(cfg.model.roi_floor_pct, 15.0);
        assert_eq!(cfg.multipliers, MultiplierTable::default());
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let mut cfg = Config::default();
        cfg.limits.timeframe_min = 10;
        cfg.limits.timeframe_max = 2;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }
}
