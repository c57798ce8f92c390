use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::inflation::{RateTable, RateTableError};

/// 기본 설정 파일 이름(작업 디렉터리 기준).
pub const CONFIG_FILE: &str = "config.toml";

/// 화면 테마 변형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeChoice {
    /// 시스템 설정을 따른다.
    #[default]
    System,
    Light,
    Dark,
    SoftBlue,
}

/// 애플리케이션 설정. 사용자가 입력한 월급/연도는 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeChoice,
    pub ui_scale: f32,
    /// 내장 표 대신 읽을 물가상승률 표(TOML) 경로.
    pub rate_table_path: Option<String>,
    /// 메신저 공유 딥링크 기본 주소.
    pub share_service_url: String,
    /// 공유 메시지에 넣을 페이지 주소. 비어 있으면 생략.
    pub page_url: String,
    pub show_chart: bool,
    pub custom_font_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::System,
            ui_scale: 1.0,
            rate_table_path: None,
            share_service_url: "https://t.me/share/url".into(),
            page_url: String::new(),
            show_chart: true,
            custom_font_path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_from(CONFIG_FILE)
}

/// 지정 경로의 설정을 로드한다. 파일이 없으면 기본값을 써 둔다.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        tracing::info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(CONFIG_FILE)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 적용 가능한 범위로 제한한 UI 배율.
    pub fn clamped_ui_scale(&self) -> f32 {
        if self.ui_scale.is_finite() {
            self.ui_scale.clamp(0.8, 1.6)
        } else {
            1.0
        }
    }

    /// 설정된 경로가 있으면 그 표를, 없으면 내장 표를 돌려준다.
    pub fn rate_table(&self) -> Result<RateTable, RateTableError> {
        let table = match self.rate_table_path.as_deref() {
            Some(path) if !path.trim().is_empty() => RateTable::load(path.trim())?,
            _ => RateTable::bundled()?,
        };
        tracing::info!(
            source = self.rate_table_path.as_deref().unwrap_or("bundled"),
            first_year = table.min_year(),
            last_year = table.max_year(),
            "rate table ready"
        );
        Ok(table)
    }
}
