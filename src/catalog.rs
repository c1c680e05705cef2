//! 산업별 활용 사례 카탈로그.

use serde::Serialize;
use std::fmt;

use crate::industry::Industry;

/// 활용 사례의 ROI 등급(정성 평가).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoiRating {
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for RoiRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoiRating::Medium => f.write_str("Medium"),
            RoiRating::High => f.write_str("High"),
            RoiRating::VeryHigh => f.write_str("Very High"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UseCase {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub roi: RoiRating,
    pub isotope: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndustryProfile {
    pub industry: Industry,
    pub name: &'static str,
    pub description: &'static str,
    /// 대표 동위원소 요약
    pub isotopes: &'static str,
    pub use_cases: &'static [UseCase],
}

const fn use_case(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    roi: RoiRating,
    isotope: &'static str,
) -> UseCase {
    UseCase {
        id,
        name,
        description,
        roi,
        isotope,
    }
}

static PROFILES: [IndustryProfile; 4] = [
    IndustryProfile {
        industry: Industry::Healthcare,
        name: "Healthcare",
        description: "Medical imaging, cancer treatment, and diagnostic applications using radioisotopes.",
        isotopes: "Tc-99m, I-131, Lu-177",
        use_cases: &[
            use_case(
                "medical-imaging",
                "Medical Imaging",
                "Enhanced diagnostic capabilities using Tc-99m and other medical isotopes for SPECT imaging.",
                RoiRating::High,
                "Tc-99m",
            ),
            use_case(
                "cancer-treatment",
                "Cancer Treatment",
                "Targeted radiotherapy using Lu-177 and I-131 for precise tumor treatment.",
                RoiRating::VeryHigh,
                "Lu-177",
            ),
            use_case(
                "sterilization",
                "Medical Sterilization",
                "Gamma irradiation for medical device and pharmaceutical sterilization.",
                RoiRating::Medium,
                "Co-60",
            ),
        ],
    },
    IndustryProfile {
        industry: Industry::Agriculture,
        name: "Agriculture",
        description: "Food irradiation, pest control, and plant breeding using nuclear techniques.",
        isotopes: "Co-60, Cs-137, SIT",
        use_cases: &[
            use_case(
                "food-irradiation",
                "Food Irradiation",
                "Extended shelf life and pathogen elimination using gamma irradiation.",
                RoiRating::High,
                "Co-60",
            ),
            use_case(
                "pest-control",
                "Pest Control (SIT)",
                "Sterile Insect Technique for sustainable pest population control.",
                RoiRating::VeryHigh,
                "Cs-137",
            ),
            use_case(
                "plant-breeding",
                "Plant Breeding",
                "Mutation breeding for improved crop varieties and resistance.",
                RoiRating::Medium,
                "Co-60",
            ),
        ],
    },
    IndustryProfile {
        industry: Industry::Manufacturing,
        name: "Manufacturing",
        description: "Industrial radiography, quality control, and material testing applications.",
        isotopes: "Ir-192, Se-75, NDT",
        use_cases: &[
            use_case(
                "ndt-testing",
                "NDT Testing",
                "Non-destructive testing for weld inspection and quality assurance.",
                RoiRating::High,
                "Ir-192",
            ),
            use_case(
                "thickness-gauging",
                "Thickness Gauging",
                "Precise measurement of material thickness in production lines.",
                RoiRating::Medium,
                "Se-75",
            ),
            use_case(
                "level-measurement",
                "Level Measurement",
                "Continuous monitoring of liquid and solid levels in containers.",
                RoiRating::Medium,
                "Co-60",
            ),
        ],
    },
    IndustryProfile {
        industry: Industry::Space,
        name: "Space & R&D",
        description: "Radioisotope thermoelectric generators and space mission power systems.",
        isotopes: "Pu-238, RTGs, Power",
        use_cases: &[
            use_case(
                "rtg-power",
                "RTG Power Systems",
                "Radioisotope thermoelectric generators for deep space missions.",
                RoiRating::VeryHigh,
                "Pu-238",
            ),
            use_case(
                "satellite-instruments",
                "Satellite Instruments",
                "Nuclear-powered instruments for space-based research.",
                RoiRating::High,
                "Am-241",
            ),
            use_case(
                "mars-rovers",
                "Mars Rovers",
                "Long-duration power systems for planetary exploration vehicles.",
                RoiRating::VeryHigh,
                "Pu-238",
            ),
        ],
    },
];

pub fn profiles() -> &'static [IndustryProfile] {
    &PROFILES
}

pub fn profile(industry: Industry) -> &'static IndustryProfile {
    match industry {
        Industry::Healthcare => &PROFILES[0],
        Industry::Agriculture => &PROFILES[1],
        Industry::Manufacturing => &PROFILES[2],
        Industry::Space => &PROFILES[3],
    }
}

pub fn use_cases(industry: Industry) -> &'static [UseCase] {
    profile(industry).use_cases
}

/// 모든 산업에서 id로 활용 사례를 찾는다. 소속 산업도 함께 반환한다.
pub fn find_use_case(id: &str) -> Option<(Industry, &'static UseCase)> {
    let id = id.trim();
    PROFILES.iter().find_map(|p| {
        p.use_cases
            .iter()
            .find(|u| u.id.eq_ignore_ascii_case(id))
            .map(|u| (p.industry, u))
    })
}

/// 시나리오의 활용 사례 id를 해석한다. 계산에는 쓰이지 않으므로 모르는 id는
/// 경고만 남긴다.
pub fn resolve_use_case(id: &str) -> Option<&'static UseCase> {
    let found = find_use_case(id).map(|(_, uc)| uc);
    if found.is_none() {
        log::warn!("알 수 없는 활용 사례 '{id}'. 표시용 정보 없이 계속합니다.");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_index_matches_industry() {
        for industry in Industry::ALL {
            assert_eq!(profile(industry).industry, industry);
            assert_eq!(use_cases(industry).len(), 3);
        }
    }

    #[test]
    fn find_use_case_reports_owning_industry() {
        let (industry, uc) = find_use_case("pest-control").expect("known id");
        assert_eq!(industry, Industry::Agriculture);
        assert_eq!(uc.roi, RoiRating::VeryHigh);
        assert!(find_use_case("warp-drive").is_none());
    }

    #[test]
    fn resolve_use_case_ignores_case_and_whitespace() {
        let uc = resolve_use_case(" RTG-Power ").expect("known id");
        assert_eq!(uc.id, "rtg-power");
        assert!(resolve_use_case("").is_none());
    }
}
