use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::catalog;
use crate::config::Config;
use crate::i18n::{self, keys, Translator};
use crate::industry::Industry;
use crate::market_data;
use crate::simulation::{
    self, format_currency, BreakevenPolicy, ChartSeries, SimulationInputs, SimulationResults,
    SimulationWarning,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Simulate,
    Industries,
    Market,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 처리한다.
pub fn main_menu<R: BufRead>(tr: &Translator, input: &mut R) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_SIMULATE,
        keys::MAIN_MENU_INDUSTRIES,
        keys::MAIN_MENU_MARKET,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = match read_line(input, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Ok(MenuChoice::Exit)
            }
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Simulate),
            "2" => return Ok(MenuChoice::Industries),
            "3" => return Ok(MenuChoice::Market),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 시뮬레이션 메뉴를 처리한다. 엔터만 누르면 설정의 기본값을 쓴다.
pub fn handle_simulate<R: BufRead>(
    tr: &Translator,
    cfg: &Config,
    input: &mut R,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SIMULATE_HEADING));
    println!("({})", tr.t(keys::SIMULATE_DEFAULT_HINT));
    let d = &cfg.defaults;
    let inputs = loop {
        let industry = read_text(input, tr.t(keys::PROMPT_INDUSTRY), d.industry.as_key())?;
        let industry = Industry::from_name(&industry);
        let default_use_case = if industry == d.industry {
            d.use_case.as_str()
        } else {
            catalog::use_cases(industry)
                .first()
                .map_or(d.use_case.as_str(), |u| u.id)
        };
        let candidate = SimulationInputs {
            budget: read_f64_or(input, tr, tr.t(keys::PROMPT_BUDGET), d.budget)?,
            timeframe: read_u32_or(input, tr, tr.t(keys::PROMPT_TIMEFRAME), d.timeframe)?,
            facility_size: read_f64_or(
                input,
                tr,
                tr.t(keys::PROMPT_FACILITY_SIZE),
                d.facility_size,
            )?,
            industry,
            use_case: read_text(input, tr.t(keys::PROMPT_USE_CASE), default_use_case)?,
        };
        match candidate.validate(&cfg.limits) {
            Ok(()) => {
                catalog::resolve_use_case(&candidate.use_case);
                break candidate;
            }
            Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
        }
    };
    let results = simulation::calculate_roi_with(&inputs, &cfg.multipliers, &cfg.model);
    print!("{}", render_results(tr, &inputs, &results));
    let show = read_line(input, tr.t(keys::PROMPT_SHOW_CHART))?;
    if show.trim().eq_ignore_ascii_case("y") {
        let chart = simulation::generate_chart_data(&inputs, &results);
        print!("{}", render_chart(tr, &chart));
    }
    Ok(())
}

/// 산업/활용 사례 메뉴를 처리한다.
pub fn handle_industries(tr: &Translator) -> Result<(), AppError> {
    print!("{}", render_industries(tr, None));
    Ok(())
}

/// 시장 데이터 기반 ROI 메뉴를 처리한다.
pub fn handle_market<R: BufRead>(
    tr: &Translator,
    cfg: &Config,
    input: &mut R,
) -> Result<(), AppError> {
    let default_industry = cfg.defaults.industry.as_key();
    let industry = read_text(input, tr.t(keys::PROMPT_INDUSTRY), default_industry)?;
    let inputs = cfg.defaults_for(Industry::from_name(&industry));
    print!("{}", render_market(tr, &inputs));
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings<R: BufRead>(
    tr: &Translator,
    cfg: &mut Config,
    input: &mut R,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}: {:?}",
        tr.t(keys::SETTINGS_CURRENT_POLICY),
        cfg.model.breakeven_policy
    );
    println!("{}", tr.t(keys::SETTINGS_POLICY_OPTIONS));
    let sel = read_line(input, tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.model.breakeven_policy = BreakevenPolicy::Guarded,
        "2" => cfg.model.breakeven_policy = BreakevenPolicy::Legacy,
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    println!(
        "{}: {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    );
    let lang = read_line(input, tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let lang = lang.trim();
    if !lang.is_empty() {
        cfg.language = i18n::resolve_language(lang, None);
    }
    Ok(())
}

/// 결과 블록을 문자열로 만든다.
pub fn render_results(
    tr: &Translator,
    inputs: &SimulationInputs,
    results: &SimulationResults,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::RESULT_HEADING));
    let _ = writeln!(
        out,
        "  {:<20} {:>14} {:>14}",
        format!("[{}]", inputs.industry),
        tr.t(keys::RESULT_TRADITIONAL),
        tr.t(keys::RESULT_ISOTOPE)
    );
    let rows = [
        (
            keys::RESULT_CAPITAL_COST,
            format_currency(results.traditional_cost),
            format_currency(results.isotope_cost),
        ),
        (
            keys::RESULT_ANNUAL_OPERATING,
            format_currency(results.traditional_operating),
            format_currency(results.isotope_operating),
        ),
        (
            keys::RESULT_SETUP_TIME,
            results.setup_time.traditional.clone(),
            results.setup_time.isotope.clone(),
        ),
    ];
    for (key, traditional, isotope) in rows {
        let _ = writeln!(out, "  {:<20} {:>14} {:>14}", tr.t(key), traditional, isotope);
    }
    match catalog::find_use_case(&inputs.use_case) {
        Some((_, uc)) => {
            let _ = writeln!(
                out,
                "{}: {} ({})",
                tr.t(keys::RESULT_USE_CASE),
                uc.name,
                uc.isotope
            );
        }
        None => {
            let _ = writeln!(
                out,
                "{}: {} ({})",
                tr.t(keys::RESULT_USE_CASE),
                inputs.use_case,
                tr.t(keys::RESULT_USE_CASE_UNKNOWN)
            );
        }
    }
    let _ = writeln!(
        out,
        "{} ({} {}): {:.1}%",
        tr.t(keys::RESULT_ROI),
        inputs.timeframe,
        tr.t(keys::RESULT_YEARS),
        results.roi_percentage
    );
    if results.breakeven_displayable() {
        let _ = writeln!(
            out,
            "{}: {:.1} {}",
            tr.t(keys::RESULT_BREAKEVEN),
            results.breakeven_time,
            tr.t(keys::RESULT_YEARS)
        );
    } else {
        let _ = writeln!(
            out,
            "{}: {}",
            tr.t(keys::RESULT_BREAKEVEN),
            tr.t(keys::RESULT_BREAKEVEN_NONE)
        );
    }
    let _ = writeln!(
        out,
        "{}: {:.0}%",
        tr.t(keys::RESULT_EMISSIONS),
        results.emissions_saved
    );
    out.push_str(&render_warnings(tr, &results.warnings(inputs.timeframe)));
    out
}

pub fn render_warnings(tr: &Translator, warnings: &[SimulationWarning]) -> String {
    let mut out = String::new();
    for w in warnings {
        let _ = writeln!(out, "{}: {w}", tr.t(keys::WARNING_PREFIX));
    }
    out
}

/// 연도별 누적 현금 위치 표.
pub fn render_chart(tr: &Translator, chart: &ChartSeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::CHART_HEADING));
    let _ = writeln!(
        out,
        "  {:<8} {:>18} {:>18}",
        tr.t(keys::CHART_YEAR),
        chart.traditional.label,
        chart.isotope.label
    );
    for (label, traditional, isotope) in chart.rows() {
        let _ = writeln!(
            out,
            "  {:<8} {:>18} {:>18}",
            label,
            signed_currency(traditional),
            signed_currency(isotope)
        );
    }
    out
}

/// 누적 현금 위치는 대부분 음수라 부호를 앞에 붙여 약식 표기를 유지한다.
fn signed_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("-{}", format_currency(-amount))
    } else {
        format_currency(amount)
    }
}

/// 산업 카탈로그. `only`가 주어지면 해당 산업만 표시한다.
pub fn render_industries(tr: &Translator, only: Option<Industry>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::INDUSTRIES_HEADING));
    for profile in catalog::profiles()
        .iter()
        .filter(|p| only.is_none() || only == Some(p.industry))
    {
        let _ = writeln!(out, "\n[{}] {}", profile.industry, profile.name);
        let _ = writeln!(out, "  {}", profile.description);
        let _ = writeln!(out, "  {}: {}", tr.t(keys::INDUSTRIES_ISOTOPES), profile.isotopes);
        for uc in profile.use_cases {
            let _ = writeln!(
                out,
                "  - {:<22} {:<24} ROI {:<9} ({})",
                uc.id, uc.name, uc.roi, uc.isotope
            );
        }
    }
    out
}

/// 시장 데이터 기반 ROI 블록.
pub fn render_market(tr: &Translator, inputs: &SimulationInputs) -> String {
    let mut out = String::new();
    let data = market_data::industry_data(inputs.industry);
    let _ = writeln!(out, "{}", tr.t(keys::MARKET_HEADING));
    let _ = writeln!(out, "[{}] {}", inputs.industry, data.name);
    let _ = writeln!(
        out,
        "  {}: ${:.1}M, {}: {:.1}%",
        tr.t(keys::MARKET_SIZE),
        data.market_size,
        tr.t(keys::MARKET_GROWTH),
        data.growth_rate
    );
    let _ = writeln!(
        out,
        "  {}: {}",
        tr.t(keys::MARKET_TRADITIONAL_METHOD),
        data.traditional.method
    );
    let Some(roi) = market_data::calculate_market_roi(
        data,
        inputs.budget,
        inputs.timeframe,
        inputs.facility_size,
    ) else {
        let _ = writeln!(out, "  {}", tr.t(keys::MARKET_NO_DATA));
        return out;
    };
    if let Some(primary) = data.key_isotopes.first() {
        let _ = writeln!(
            out,
            "  {}: {} ({}, {})",
            tr.t(keys::MARKET_PRIMARY_ISOTOPE),
            primary.name,
            primary.symbol,
            primary.half_life
        );
    }
    let rows = [
        (keys::MARKET_TRADITIONAL_COST, format_currency(roi.traditional_cost)),
        (keys::MARKET_ISOTOPE_COST, format_currency(roi.isotope_cost)),
        (keys::MARKET_SAVINGS, format_currency(roi.savings)),
        (keys::MARKET_ROI, format!("{:.0}%", roi.roi)),
        (keys::MARKET_PAYBACK, format!("{:.0}", roi.payback_period_months)),
        (keys::MARKET_CO2, format_currency(roi.co2_reduction)),
    ];
    for (key, value) in rows {
        let _ = writeln!(out, "  {:<26} {:>14}", tr.t(key), value);
    }
    let trend = market_data::market_trend(inputs.industry);
    let points: Vec<String> = trend
        .years
        .iter()
        .zip(trend.values)
        .map(|(year, value)| format!("{year}:{value:.0}"))
        .collect();
    let _ = writeln!(out, "  {}: {}", tr.t(keys::MARKET_TREND), points.join(" "));
    out
}

/// 한 줄을 읽는다. 입력이 닫혀 0바이트가 읽히면 `UnexpectedEof`를 반환한다.
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_text<R: BufRead>(input: &mut R, prompt: &str, default: &str) -> Result<String, AppError> {
    let s = read_line(input, &format!("{prompt} [{default}]: "))?;
    let s = s.trim();
    Ok(if s.is_empty() { default } else { s }.to_string())
}

fn read_f64_or<R: BufRead>(
    input: &mut R,
    tr: &Translator,
    prompt: &str,
    default: f64,
) -> Result<f64, AppError> {
    loop {
        let s = read_line(input, &format!("{prompt} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.replace(',', "").parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_or<R: BufRead>(
    input: &mut R,
    tr: &Translator,
    prompt: &str,
    default: u32,
) -> Result<u32, AppError> {
    loop {
        let s = read_line(input, &format!("{prompt} [{default}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::{calculate_roi, generate_chart_data};

    #[test]
    fn menu_treats_end_of_input_as_exit() {
        let tr = Translator::new("en-us");
        let mut empty: &[u8] = b"";
        assert_eq!(main_menu(&tr, &mut empty).expect("menu"), MenuChoice::Exit);

        let mut junk_then_eof: &[u8] = b"x\n9\n";
        assert_eq!(main_menu(&tr, &mut junk_then_eof).expect("menu"), MenuChoice::Exit);

        let mut market: &[u8] = b" 3 \n";
        assert_eq!(main_menu(&tr, &mut market).expect("menu"), MenuChoice::Market);
    }

    #[test]
    fn results_block_lists_headline_figures() {
        let tr = Translator::new("en-us");
        let inputs = SimulationInputs::default();
        let results = calculate_roi(&inputs);
        let text = render_results(&tr, &inputs, &results);
        assert!(text.contains("$2.2M"), "{text}");
        assert!(text.contains("$148K"), "{text}");
        assert!(text.contains("ROI (5 years): 32.8%"), "{text}");
        assert!(text.contains("Use case: Medical Imaging"), "{text}");
        assert!(text.contains("Breakeven: 1.7 years"), "{text}");
        assert!(!text.contains("Warning"), "{text}");
    }

    #[test]
    fn infinite_breakeven_is_suppressed() {
        let tr = Translator::new("en-us");
        let inputs = SimulationInputs::default();
        let results = SimulationResults {
            breakeven_time: f64::INFINITY,
            ..calculate_roi(&inputs)
        };
        let text = render_results(&tr, &inputs, &results);
        assert!(text.contains("not reached within horizon"), "{text}");
        assert!(!text.contains("inf"), "{text}");
    }

    #[test]
    fn chart_table_has_row_per_year() {
        let tr = Translator::new("en-us");
        let inputs = SimulationInputs::default();
        let chart = generate_chart_data(&inputs, &calculate_roi(&inputs));
        let text = render_chart(&tr, &chart);
        assert!(text.contains("-$2.2M"), "{text}");
        assert!(text.contains("-$2.6M"), "{text}");
        assert!(!text.contains("$-"), "{text}");
        let rows = text
            .lines()
            .filter(|l| l.trim_start().starts_with("Year ") && l.contains('$'))
            .count();
        assert_eq!(rows, 5);
    }

    #[test]
    fn unknown_use_case_is_shown_as_unrecognized() {
        let tr = Translator::new("en-us");
        let inputs = SimulationInputs {
            use_case: "warp-drive".into(),
            ..SimulationInputs::default()
        };
        let text = render_results(&tr, &inputs, &calculate_roi(&inputs));
        assert!(text.contains("Use case: warp-drive (unrecognized id)"), "{text}");
    }

    #[test]
    fn industry_filter_limits_output() {
        let tr = Translator::new("en-us");
        let text = render_industries(&tr, Some(Industry::Space));
        assert!(text.contains("rtg-power"));
        assert!(!text.contains("medical-imaging"));
    }

    #[test]
    fn market_block_includes_primary_isotope() {
        let tr = Translator::new("en-us");
        let inputs = SimulationInputs {
            industry: Industry::Manufacturing,
            ..SimulationInputs::default()
        };
        let text = render_market(&tr, &inputs);
        assert!(text.contains("Cobalt-60"), "{text}");
        assert!(text.contains("2026:8480"), "{text}");
    }
}
