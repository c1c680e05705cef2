use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SIMULATE: &str = "main_menu.simulate";
    pub const MAIN_MENU_INDUSTRIES: &str = "main_menu.industries";
    pub const MAIN_MENU_MARKET: &str = "main_menu.market";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SIMULATE_HEADING: &str = "simulate.heading";
    pub const SIMULATE_DEFAULT_HINT: &str = "simulate.default_hint";
    pub const PROMPT_BUDGET: &str = "prompt.budget";
    pub const PROMPT_TIMEFRAME: &str = "prompt.timeframe";
    pub const PROMPT_FACILITY_SIZE: &str = "prompt.facility_size";
    pub const PROMPT_INDUSTRY: &str = "prompt.industry";
    pub const PROMPT_USE_CASE: &str = "prompt.use_case";
    pub const PROMPT_SHOW_CHART: &str = "prompt.show_chart";

    pub const RESULT_HEADING: &str = "result.heading";
    pub const RESULT_TRADITIONAL: &str = "result.traditional";
    pub const RESULT_ISOTOPE: &str = "result.isotope";
    pub const RESULT_CAPITAL_COST: &str = "result.capital_cost";
    pub const RESULT_ANNUAL_OPERATING: &str = "result.annual_operating";
    pub const RESULT_SETUP_TIME: &str = "result.setup_time";
    pub const RESULT_ROI: &str = "result.roi";
    pub const RESULT_BREAKEVEN: &str = "result.breakeven";
    pub const RESULT_BREAKEVEN_NONE: &str = "result.breakeven_none";
    pub const RESULT_EMISSIONS: &str = "result.emissions";
    pub const RESULT_YEARS: &str = "result.years";
    pub const RESULT_USE_CASE: &str = "result.use_case";
    pub const RESULT_USE_CASE_UNKNOWN: &str = "result.use_case_unknown";

    pub const CHART_HEADING: &str = "chart.heading";
    pub const CHART_YEAR: &str = "chart.year";

    pub const INDUSTRIES_HEADING: &str = "industries.heading";
    pub const INDUSTRIES_ISOTOPES: &str = "industries.isotopes";

    pub const MARKET_HEADING: &str = "market.heading";
    pub const MARKET_SIZE: &str = "market.size";
    pub const MARKET_GROWTH: &str = "market.growth";
    pub const MARKET_TRADITIONAL_METHOD: &str = "market.traditional_method";
    pub const MARKET_PRIMARY_ISOTOPE: &str = "market.primary_isotope";
    pub const MARKET_TRADITIONAL_COST: &str = "market.traditional_cost";
    pub const MARKET_ISOTOPE_COST: &str = "market.isotope_cost";
    pub const MARKET_SAVINGS: &str = "market.savings";
    pub const MARKET_ROI: &str = "market.roi";
    pub const MARKET_PAYBACK: &str = "market.payback";
    pub const MARKET_CO2: &str = "market.co2";
    pub const MARKET_TREND: &str = "market.trend";
    pub const MARKET_NO_DATA: &str = "market.no_data";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_POLICY: &str = "settings.current_policy";
    pub const SETTINGS_POLICY_OPTIONS: &str = "settings.policy_options";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    /// 선언된 모든 키.
    pub const ALL: &[&str] = &[
        ERROR_PREFIX,
        WARNING_PREFIX,
        APP_EXIT,
        MAIN_MENU_TITLE,
        MAIN_MENU_SIMULATE,
        MAIN_MENU_INDUSTRIES,
        MAIN_MENU_MARKET,
        MAIN_MENU_SETTINGS,
        MAIN_MENU_EXIT,
        PROMPT_MENU_SELECT,
        INVALID_SELECTION_RETRY,
        ERROR_INVALID_NUMBER,
        SIMULATE_HEADING,
        SIMULATE_DEFAULT_HINT,
        PROMPT_BUDGET,
        PROMPT_TIMEFRAME,
        PROMPT_FACILITY_SIZE,
        PROMPT_INDUSTRY,
        PROMPT_USE_CASE,
        PROMPT_SHOW_CHART,
        RESULT_HEADING,
        RESULT_TRADITIONAL,
        RESULT_ISOTOPE,
        RESULT_CAPITAL_COST,
        RESULT_ANNUAL_OPERATING,
        RESULT_SETUP_TIME,
        RESULT_ROI,
        RESULT_BREAKEVEN,
        RESULT_BREAKEVEN_NONE,
        RESULT_EMISSIONS,
        RESULT_YEARS,
        RESULT_USE_CASE,
        RESULT_USE_CASE_UNKNOWN,
        CHART_HEADING,
        CHART_YEAR,
        INDUSTRIES_HEADING,
        INDUSTRIES_ISOTOPES,
        MARKET_HEADING,
        MARKET_SIZE,
        MARKET_GROWTH,
        MARKET_TRADITIONAL_METHOD,
        MARKET_PRIMARY_ISOTOPE,
        MARKET_TRADITIONAL_COST,
        MARKET_ISOTOPE_COST,
        MARKET_SAVINGS,
        MARKET_ROI,
        MARKET_PAYBACK,
        MARKET_CO2,
        MARKET_TREND,
        MARKET_NO_DATA,
        SETTINGS_HEADING,
        SETTINGS_CURRENT_POLICY,
        SETTINGS_POLICY_OPTIONS,
        SETTINGS_CURRENT_LANGUAGE,
        SETTINGS_PROMPT_LANGUAGE,
        SETTINGS_PROMPT_CHANGE,
        SETTINGS_INVALID,
        SETTINGS_SAVED,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    strings: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 내장 언어팩으로 번역기를 생성한다. 알 수 없는 코드는 en.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어팩 디렉터리(locales/ 등)의 TOML을 내장 문자열 위에 덮어쓴다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let mut strings = built_in_pack(lang);
        if let Some(overrides) = pack_dir.and_then(|dir| load_overrides(dir, lang_code)) {
            log::debug!("언어팩 덮어쓰기 {}개 적용", overrides.len());
            strings.extend(overrides);
        }
        Self {
            lang,
            strings,
            fallback: built_in_pack(Language::En),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// 번역을 가져온다. 없으면 영어 문자열, 그것도 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key)
            .or_else(|| self.fallback.get(key).map(String::as_str))
            .unwrap_or(key)
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko-kr".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko-kr".into()),
        "en" => Some("en-us".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(code);
    }
    ["LANG", "LC_ALL"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: 중첩 테이블을 점(.)으로 이은 키.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: Language) -> HashMap<String, String> {
    let src = match lang {
        Language::En => include_str!("../locales/en-us.toml"),
        Language::Ko => include_str!("../locales/ko-kr.toml"),
    };
    parse_toml_to_map(src).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_packs_share_keys() {
        let en = built_in_pack(Language::En);
        let ko = built_in_pack(Language::Ko);
        assert!(!en.is_empty());
        let mut missing: Vec<_> = en.keys().filter(|k| !ko.contains_key(*k)).collect();
        missing.sort();
        assert!(missing.is_empty(), "ko pack missing: {missing:?}");
    }

    #[test]
    fn every_declared_key_resolves_in_both_languages() {
        for lang in ["en-us", "ko-kr"] {
            let tr = Translator::new(lang);
            let missing: Vec<_> = keys::ALL
                .iter()
                .filter(|key| tr.lookup(key).is_none())
                .collect();
            assert!(missing.is_empty(), "{lang} missing: {missing:?}");
        }
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn normalize_handles_auto_and_regions() {
        assert_eq!(normalize_lang("auto"), None);
        assert_eq!(normalize_lang("EN_gb"), Some("en-us".into()));
        assert_eq!(normalize_lang("ko"), Some("ko-kr".into()));
        assert_eq!(normalize_locale_string("ko_KR.UTF-8"), Some("ko-kr".into()));
    }
}
