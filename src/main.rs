use clap::Parser;
use std::path::PathBuf;

use isospire::cli::{Cli, Command};
use isospire::{app, config, i18n};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = try_run(Cli::parse()) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILE));
    let mut cfg = config::load_or_create(&config_path)?;
    let lang = i18n::resolve_language(&cli.lang, Some(&cfg.language));
    let tr = i18n::Translator::new_with_pack(&lang, cli.locales.as_deref().or(Some("locales")));
    log::debug!("언어: {}", tr.language_code());
    let command = cli.command.unwrap_or(Command::Interactive);
    app::execute(command, &mut cfg, &config_path, &tr)
}
