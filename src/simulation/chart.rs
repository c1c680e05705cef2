use serde::Serialize;

use crate::simulation::inputs::SimulationInputs;
use crate::simulation::roi::SimulationResults;

/// 한 방식의 연도별 누적 현금 위치.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: &'static str,
    pub values: Vec<f64>,
}

/// 기존 방식과 동위원소 방식을 비교하는 연도별 시계열.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// "Year 1" ~ "Year N"
    pub labels: Vec<String>,
    pub traditional: ChartDataset,
    pub isotope: ChartDataset,
}

impl ChartSeries {
    /// (라벨, 기존, 동위원소) 행 단위로 순회한다.
    pub fn rows(&self) -> impl Iterator<Item = (&str, f64, f64)> + '_ {
        self.labels
            .iter()
            .zip(&self.traditional.values)
            .zip(&self.isotope.values)
            .map(|((label, t), i)| (label.as_str(), *t, *i))
    }
}

/// 결과로부터 연도별 누적 현금흐름을 만든다.
///
/// 입력과 결과가 같은 계산에서 나온 쌍인지는 검사하지 않는다. 운영비는 첫 해부터
/// `(i + 1)`년치가 누적되므로 0번째와 1번째 사이에 계단이 생긴다.
pub fn generate_chart_data(inputs: &SimulationInputs, results: &SimulationResults) -> ChartSeries {
    let years = inputs.timeframe as usize;
    let annual_savings = results.traditional_operating - results.isotope_operating;

    let labels = (1..=years).map(|year| format!("Year {year}")).collect();

    let traditional = (0..years)
        .map(|i| {
            if i == 0 {
                -results.traditional_cost
            } else {
                -results.traditional_cost - results.traditional_operating * (i + 1) as f64
            }
        })
        .collect();

    let isotope = (0..years)
        .map(|i| {
            if i == 0 {
                -results.isotope_cost
            } else {
                let cumulative_operating = results.isotope_operating * (i + 1) as f64;
                let cumulative_savings = annual_savings * i as f64;
                -results.isotope_cost - cumulative_operating + cumulative_savings
            }
        })
        .collect();

    ChartSeries {
        labels,
        traditional: ChartDataset {
            label: "Traditional Method",
            values: traditional,
        },
        isotope: ChartDataset {
            label: "Isotope Solution",
            values: isotope,
        },
    }
}
