//! 설정 파일 저장/로드 테스트.
use salary_inflation::config::{self, Config, ThemeChoice};
use std::fs;

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("salary_inflation_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_file_writes_defaults() {
    let dir = temp_dir("cfg_default");
    let path = dir.join("config.toml");
    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn saved_settings_are_read_back() {
    let dir = temp_dir("cfg_roundtrip");
    let path = dir.join("config.toml");
    let cfg = Config {
        theme: ThemeChoice::SoftBlue,
        ui_scale: 1.25,
        page_url: "https://example.org".into(),
        show_chart: false,
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();
    assert_eq!(config::load_from(&path).unwrap(), cfg);
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn partial_file_fills_defaults() {
    let dir = temp_dir("cfg_partial");
    let path = dir.join("config.toml");
    fs::write(&path, "theme = \"Dark\"\n").unwrap();
    let cfg = config::load_from(&path).unwrap();
    assert_eq!(cfg.theme, ThemeChoice::Dark);
    assert_eq!(cfg.share_service_url, "https://t.me/share/url");
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn rate_table_override_is_used() {
    let dir = temp_dir("cfg_rates");
    let rates = dir.join("rates.toml");
    fs::write(&rates, "[[rates]]\nyear = 1998\nrate = 84.4\n").unwrap();
    let cfg = Config {
        rate_table_path: Some(rates.display().to_string()),
        ..Config::default()
    };
    let t = cfg.rate_table().unwrap();
    assert_eq!(t.years(), vec![1998]);
    assert_eq!(Config::default().rate_table().unwrap().min_year(), 2000);
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn ui_scale_is_clamped() {
    let cfg = Config {
        ui_scale: 5.0,
        ..Config::default()
    };
    assert_eq!(cfg.clamped_ui_scale(), 1.6);
}
