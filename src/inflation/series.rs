use super::calculator::round_half_up;
use super::rate_table::RateTable;
use super::year_range::{span_len, MAX_YEAR, MIN_YEAR};

/// 시계열 하나에 담는 최대 연도 수.
pub const MAX_SERIES_YEARS: u64 = span_len(MIN_YEAR, MAX_YEAR);

/// 차트의 한 점. 해당 연도 시점에서 연봉의 실질 가치.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub year: i32,
    pub value: f64,
}

/// 연도별 실질 가치 시계열을 만든다.
///
/// 각 점은 그 해의 상승률을 적용하기 *전* 누적 배수로 나눈 값이다. 따라서
/// 첫 점은 명목 연봉 그대로이고, 이후 점은 직전 연도까지의 상승률만큼
/// 깎인다. 구간이 뒤집혀 있거나 [`MAX_SERIES_YEARS`]보다 넓으면 빈 벡터.
pub fn derive_series(
    table: &RateTable,
    annual_amount: f64,
    year_from: i32,
    year_to: i32,
) -> Vec<ChartPoint> {
    let len = span_len(year_from, year_to);
    if len == 0 {
        return Vec::new();
    }
    if len > MAX_SERIES_YEARS {
        tracing::warn!(year_from, year_to, "range too wide for a series; skipped");
        return Vec::new();
    }

    let mut points = Vec::with_capacity(len as usize);
    let mut known = table.rates_between(year_from, year_to).peekable();
    let mut factor_so_far = 1.0;
    for year in year_from..=year_to {
        points.push(ChartPoint {
            year,
            value: round_half_up(annual_amount / factor_so_far),
        });
        if let Some((_, rate)) = known.next_if(|&(y, _)| y == year) {
            factor_so_far *= 1.0 + rate / 100.0;
        }
    }
    points
}
