use std::io::{self, BufRead};
use std::path::Path;

use crate::catalog;
use crate::cli::{Command, SimulateArgs};
use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::industry::Industry;
use crate::simulation::{self, ChartSeries, InputError, SimulationInputs, SimulationResults};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 시뮬레이션 입력 범위 오류
    #[error("입력 오류: {0}")]
    Input(#[from] InputError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// `simulate --json` 출력 문서.
#[derive(Debug, serde::Serialize)]
struct SimulationReport<'a> {
    inputs: &'a SimulationInputs,
    results: &'a SimulationResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    use_case_name: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<&'a ChartSeries>,
    warnings: Vec<String>,
}

/// 하위 명령을 실행한다. 대화형 모드에서 바뀐 설정은 종료 시 저장된다.
pub fn execute(
    command: Command,
    config: &mut Config,
    config_path: &Path,
    tr: &Translator,
) -> Result<(), AppError> {
    match command {
        Command::Simulate(args) => simulate(&args, config, tr),
        Command::Industries { industry } => {
            let only = industry.as_deref().map(Industry::from_name);
            print!("{}", ui_cli::render_industries(tr, only));
            Ok(())
        }
        Command::Market(args) => {
            let inputs = args.apply(&config.defaults);
            inputs.validate(&config.limits)?;
            print!("{}", ui_cli::render_market(tr, &inputs));
            Ok(())
        }
        Command::Interactive => run(config, config_path, tr, &mut io::stdin().lock()),
    }
}

fn simulate(args: &SimulateArgs, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let inputs = args.scenario.apply(&config.defaults);
    inputs.validate(&config.limits)?;
    let use_case = catalog::resolve_use_case(&inputs.use_case);
    let results = simulation::calculate_roi_with(&inputs, &config.multipliers, &config.model);
    let chart = args
        .chart
        .then(|| simulation::generate_chart_data(&inputs, &results));

    if args.json {
        let report = SimulationReport {
            inputs: &inputs,
            results: &results,
            use_case_name: use_case.map(|uc| uc.name),
            chart: chart.as_ref(),
            warnings: results
                .warnings(inputs.timeframe)
                .iter()
                .map(ToString::to_string)
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!("{}", ui_cli::render_results(tr, &inputs, &results));
    if let Some(chart) = &chart {
        print!("{}", ui_cli::render_chart(tr, chart));
    }
    Ok(())
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 입력이 끝나면 설정을 저장하고 빠져나온다.
pub fn run<R: BufRead>(
    config: &mut Config,
    config_path: &Path,
    tr: &Translator,
    input: &mut R,
) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr, input)? {
            MenuChoice::Simulate => ui_cli::handle_simulate(tr, config, input)?,
            MenuChoice::Industries => ui_cli::handle_industries(tr)?,
            MenuChoice::Market => ui_cli::handle_market(tr, config, input)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config, input)?;
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save_to(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
