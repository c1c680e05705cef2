//! 명령행 인자 정의.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::industry::Industry;
use crate::simulation::SimulationInputs;

#[derive(Debug, Parser)]
#[command(
    name = "isospire",
    version,
    about = "Isotope vs. traditional method ROI simulator"
)]
pub struct Cli {
    /// 표시 언어 (auto/en-us/ko-kr)
    #[arg(long, global = true, default_value = "auto")]
    pub lang: String,

    /// 설정 파일 경로 (기본: ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 언어팩 디렉터리
    #[arg(long, global = true)]
    pub locales: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ROI 시뮬레이션을 한 번 실행한다
    Simulate(SimulateArgs),
    /// 산업별 활용 사례를 나열한다
    Industries {
        #[arg(long)]
        industry: Option<String>,
    },
    /// 시장 참조 데이터로 ROI를 추정한다
    Market(ScenarioArgs),
    /// 대화형 메뉴 (기본)
    Interactive,
}

/// 설정 기본값을 덮어쓰는 시나리오 인자.
#[derive(Debug, Clone, Default, Args)]
pub struct ScenarioArgs {
    #[arg(long)]
    pub budget: Option<f64>,
    #[arg(long)]
    pub timeframe: Option<u32>,
    #[arg(long)]
    pub facility_size: Option<f64>,
    /// 알 수 없는 이름은 healthcare로 처리한다
    #[arg(long)]
    pub industry: Option<String>,
    #[arg(long)]
    pub use_case: Option<String>,
}

impl ScenarioArgs {
    /// 주어진 값만 기본 입력 위에 덮어쓴다.
    pub fn apply(&self, defaults: &SimulationInputs) -> SimulationInputs {
        SimulationInputs {
            budget: self.budget.unwrap_or(defaults.budget),
            timeframe: self.timeframe.unwrap_or(defaults.timeframe),
            facility_size: self.facility_size.unwrap_or(defaults.facility_size),
            industry: self
                .industry
                .as_deref()
                .map_or(defaults.industry, Industry::from_name),
            use_case: self
                .use_case
                .clone()
                .unwrap_or_else(|| defaults.use_case.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,
    /// 연도별 누적 현금흐름도 출력
    #[arg(long)]
    pub chart: bool,
    /// 결과를 JSON으로 출력
    #[arg(long)]
    pub json: bool,
}
