//! 산업 구분과 산업별 배수(multiplier) 참조 테이블.
//!
//! 테이블은 전역 가변 상태가 아니라 불변 값이다. 내장 테이블은 한 번만 생성되며
//! 설정 파일에서 읽은 테이블을 계산 함수에 그대로 주입할 수도 있다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// 지원하는 산업 분류. 알 수 없는 이름은 `Healthcare`로 폴백한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    #[default]
    Healthcare,
    Agriculture,
    Manufacturing,
    Space,
}

impl Industry {
    pub const ALL: [Industry; 4] = [
        Industry::Healthcare,
        Industry::Agriculture,
        Industry::Manufacturing,
        Industry::Space,
    ];

    /// 테이블 키로 쓰는 소문자 식별자.
    pub fn as_key(&self) -> &'static str {
        match self {
            Industry::Healthcare => "healthcare",
            Industry::Agriculture => "agriculture",
            Industry::Manufacturing => "manufacturing",
            Industry::Space => "space",
        }
    }

    /// 이름을 해석한다. 대소문자와 앞뒤 공백은 무시하며 인식하지 못하면 None.
    pub fn parse(name: &str) -> Option<Industry> {
        let key = name.trim().to_lowercase();
        Industry::ALL.into_iter().find(|i| i.as_key() == key)
    }

    /// 이름을 해석하되 인식하지 못하면 기본값(Healthcare)으로 폴백한다. 오류가 아니다.
    pub fn from_name(name: &str) -> Industry {
        match Industry::parse(name) {
            Some(industry) => industry,
            None => {
                log::warn!("알 수 없는 산업 '{name}' -> healthcare 배수로 대체");
                Industry::default()
            }
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// 구축 기간 표시 문자열. 계산값이 아니라 그대로 복사된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupTime {
    pub traditional: String,
    pub isotope: String,
}

impl SetupTime {
    pub fn new(traditional: &str, isotope: &str) -> Self {
        Self {
            traditional: traditional.to_string(),
            isotope: isotope.to_string(),
        }
    }
}

/// 산업별 비용/운영/효율 배수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryMultiplier {
    pub cost_multiplier: f64,
    pub operating_multiplier: f64,
    pub efficiency_multiplier: f64,
    pub setup_time: SetupTime,
}

/// 산업마다 정확히 하나의 레코드를 갖는 배수 테이블.
///
/// 필드가 산업별로 고정되어 있으므로 레코드 누락이나 중복은 타입 수준에서 불가능하다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierTable {
    pub healthcare: IndustryMultiplier,
    pub agriculture: IndustryMultiplier,
    pub manufacturing: IndustryMultiplier,
    pub space: IndustryMultiplier,
}

impl MultiplierTable {
    /// 프로세스 전체에서 공유하는 내장 테이블.
    pub fn builtin() -> &'static MultiplierTable {
        static BUILTIN: OnceLock<MultiplierTable> = OnceLock::new();
        BUILTIN.get_or_init(MultiplierTable::default)
    }

    pub fn get(&self, industry: Industry) -> &IndustryMultiplier {
        match industry {
            Industry::Healthcare => &self.healthcare,
            Industry::Agriculture => &self.agriculture,
            Industry::Manufacturing => &self.manufacturing,
            Industry::Space => &self.space,
        }
    }

    /// 모든 배수가 양의 유한값인지 검사한다. 문제가 있는 첫 산업과 항목을 반환한다.
    pub fn first_invalid(&self) -> Option<(Industry, &'static str)> {
        for industry in Industry::ALL {
            let m = self.get(industry);
            let fields = [
                ("cost_multiplier", m.cost_multiplier),
                ("operating_multiplier", m.operating_multiplier),
                ("efficiency_multiplier", m.efficiency_multiplier),
            ];
            for (name, value) in fields {
                if !value.is_finite() || value <= 0.0 {
                    return Some((industry, name));
                }
            }
        }
        None
    }
}

impl Default for MultiplierTable {
    fn default() -> Self {
        let record = |cost, operating, efficiency, traditional, isotope| IndustryMultiplier {
            cost_multiplier: cost,
            operating_multiplier: operating,
            efficiency_multiplier: efficiency,
            setup_time: SetupTime::new(traditional, isotope),
        };
        Self {
            healthcare: record(1.2, 0.8, 1.3, "8-12 months", "4-6 months"),
            agriculture: record(0.9, 0.7, 1.1, "6-10 months", "3-5 months"),
            manufacturing: record(1.0, 0.9, 1.2, "10-14 months", "5-8 months"),
            space: record(2.0, 0.6, 1.5, "18-24 months", "12-16 months"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Industry::parse(" Space "), Some(Industry::Space));
        assert_eq!(Industry::parse("MANUFACTURING"), Some(Industry::Manufacturing));
        assert_eq!(Industry::parse("aerospace"), None);
    }

    #[test]
    fn unknown_name_falls_back_to_healthcare() {
        assert_eq!(Industry::from_name("aerospace"), Industry::Healthcare);
        assert_eq!(Industry::from_name(""), Industry::Healthcare);
    }

    #[test]
    fn builtin_table_is_valid() {
        let table = MultiplierTable::builtin();
        assert!(table.first_invalid().is_none());
        assert_eq!(table.get(Industry::Space).cost_multiplier, 2.0);
        assert_eq!(
            table.get(Industry::Agriculture).setup_time.isotope,
            "3-5 months"
        );
    }

    #[test]
    fn first_invalid_reports_offending_field() {
        let mut table = MultiplierTable::default();
        table.manufacturing.operating_multiplier = 0.0;
        assert_eq!(
            table.first_invalid(),
            Some((Industry::Manufacturing, "operating_multiplier"))
        );
    }
}
