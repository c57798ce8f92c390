use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 빌드 시 포함되는 기본 물가상승률 표.
const BUNDLED_TABLE: &str = include_str!("../../data/inflation.toml");

/// 연도별 물가상승률 한 줄.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTableEntry {
    pub year: i32,
    /// 연간 물가상승률 [%]
    pub rate: f64,
}

#[derive(Debug, Deserialize)]
struct RateFile {
    #[serde(default)]
    rates: Vec<RateTableEntry>,
}

/// 물가상승률 표 로드/검증 오류.
#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("물가상승률 표 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("연도 {0}이(가) 중복되었습니다")]
    DuplicateYear(i32),
    /// 유한하지 않거나 -100% 이하인 상승률
    #[error("연도 {year}의 물가상승률이 유효하지 않습니다 (-100%보다 큰 유한한 값이어야 함)")]
    InvalidRate { year: i32 },
    #[error("물가상승률 표가 비어 있습니다")]
    Empty,
}

/// 연도 → 물가상승률 조회 표. 생성 후에는 변경되지 않는다.
///
/// 입력 순서와 무관하게 연도 오름차순으로 보관한다. 계산기는 이 표의
/// 순회 순서가 아니라 명시적인 연도 구간을 따라 순회한다.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<i32, f64>,
}

impl RateTable {
    /// 임의 순서의 항목으로 표를 만든다. 중복 연도와 비유한 값, 그리고
    /// 누적 배수를 0 이하로 만드는 -100% 이하의 상승률은 거부한다.
    pub fn from_entries<I>(entries: I) -> Result<Self, RateTableError>
    where
        I: IntoIterator<Item = RateTableEntry>,
    {
        let mut rates = BTreeMap::new();
        for entry in entries {
            if !entry.rate.is_finite() || entry.rate <= -100.0 {
                return Err(RateTableError::InvalidRate { year: entry.year });
            }
            if rates.insert(entry.year, entry.rate).is_some() {
                return Err(RateTableError::DuplicateYear(entry.year));
            }
        }
        if rates.is_empty() {
            return Err(RateTableError::Empty);
        }
        Ok(Self { rates })
    }

    /// `[[rates]] year = .. rate = ..` 형식의 TOML 문자열을 해석한다.
    pub fn from_toml_str(src: &str) -> Result<Self, RateTableError> {
        let file: RateFile = toml::from_str(src)?;
        Self::from_entries(file.rates)
    }

    /// 파일에서 표를 읽는다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RateTableError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// 내장 표.
    pub fn bundled() -> Result<Self, RateTableError> {
        Self::from_toml_str(BUNDLED_TABLE)
    }

    /// 해당 연도의 물가상승률. 표에 없으면 None.
    pub fn rate_for(&self, year: i32) -> Option<f64> {
        self.rates.get(&year).copied()
    }

    /// 구간 [from, to] 안에 있는 표 항목(연도 오름차순). 뒤집힌 구간은 비어 있다.
    pub fn rates_between(&self, from: i32, to: i32) -> impl Iterator<Item = (i32, f64)> + '_ {
        (from <= to)
            .then(|| self.rates.range(from..=to))
            .into_iter()
            .flatten()
            .map(|(&year, &rate)| (year, rate))
    }

    pub fn contains(&self, year: i32) -> bool {
        self.rates.contains_key(&year)
    }

    /// 선택 가능한 연도 목록(오름차순).
    pub fn years(&self) -> Vec<i32> {
        self.rates.keys().copied().collect()
    }

    pub fn entries(&self) -> Vec<RateTableEntry> {
        self.rates
            .iter()
            .map(|(&year, &rate)| RateTableEntry { year, rate })
            .collect()
    }

    pub fn min_year(&self) -> i32 {
        // 생성 시 비어 있지 않음을 보장한다.
        self.rates.keys().next().copied().unwrap_or_default()
    }

    pub fn max_year(&self) -> i32 {
        self.rates.keys().next_back().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
