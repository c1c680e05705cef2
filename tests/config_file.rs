//! 설정 파일 생성/재로드 테스트.
use isospire::config::{load_or_create, Config, ConfigError};
use isospire::simulation::BreakevenPolicy;
use std::fs;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_create(&path).expect("create");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn saved_changes_survive_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.language = "ko-kr".into();
    cfg.model.breakeven_policy = BreakevenPolicy::Legacy;
    cfg.multipliers.space.setup_time.isotope = "10-12 months".into();
    cfg.save_to(&path).expect("save");

    let reloaded = load_or_create(&path).expect("reload");
    assert_eq!(reloaded, cfg);
}

#[test]
fn invalid_multiplier_is_rejected_on_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let mut cfg = Config::default();
    cfg.multipliers.agriculture.cost_multiplier = -1.0;
    cfg.save_to(&path).expect("save");

    let err = load_or_create(&path).expect_err("negative multiplier");
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("multipliers.agriculture.cost_multiplier"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "language = [").expect("write");
    assert!(matches!(load_or_create(&path), Err(ConfigError::Parse(_))));
}
