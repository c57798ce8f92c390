use super::rate_table::RateTable;
use super::series::{derive_series, ChartPoint};
use super::year_range::span_len;

/// 계산 입력. 월급과 포함 구간 [year_from, year_to].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationInput {
    /// 월급 [통화 단위]
    pub monthly_amount: f64,
    pub year_from: i32,
    pub year_to: i32,
}

/// 계산 결과. 입력이 바뀔 때마다 통째로 다시 계산한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    /// 연봉(월급 × 12)
    pub annual_amount: f64,
    /// 구간 전체 누적 물가상승률 [%]
    pub total_inflation_percent: f64,
    /// 구매력 손실액
    pub purchasing_power_loss: f64,
    /// 실질 가치(디플레이트된 연봉)
    pub real_value: f64,
    pub year_from: i32,
    pub year_to: i32,
}

impl CalculationResult {
    /// 누적 배수 (1 + 누적상승률/100).
    pub fn factor(&self) -> f64 {
        1.0 + self.total_inflation_percent / 100.0
    }

    pub fn year_count(&self) -> u64 {
        span_len(self.year_from, self.year_to)
    }

    /// 구간 안에서 표에 없는 연도 수. 0이 아니면 결과는 부분 계산이다.
    pub fn uncovered_year_count(&self, table: &RateTable) -> u64 {
        let known = table.rates_between(self.year_from, self.year_to).count() as u64;
        self.year_count() - known
    }

    /// 표에 없는 연도를 이어진 구간 [first, last]로 묶는다. 오름차순.
    pub fn uncovered_spans(&self, table: &RateTable) -> Vec<(i32, i32)> {
        let mut spans = Vec::new();
        // i64 커서: year_to가 i32::MAX여도 넘치지 않는다.
        let mut next = i64::from(self.year_from);
        for (year, _) in table.rates_between(self.year_from, self.year_to) {
            if i64::from(year) > next {
                spans.push((next as i32, year - 1));
            }
            next = i64::from(year) + 1;
        }
        if next <= i64::from(self.year_to) {
            spans.push((next as i32, self.year_to));
        }
        spans
    }

    /// 차트용 연도별 실질 가치 시계열.
    pub fn series(&self, table: &RateTable) -> Vec<ChartPoint> {
        derive_series(table, self.annual_amount, self.year_from, self.year_to)
    }
}

/// 구간의 누적 배수 Π(1 + r/100)를 연도 오름차순으로 곱한다.
///
/// 표에 없는 연도는 상승률 0으로 취급하므로 구간 안의 표 항목만 곱한다.
/// 구간이 뒤집혀 있거나 표 범위를 완전히 벗어나면 1.0이다.
pub fn compounding_factor(table: &RateTable, year_from: i32, year_to: i32) -> f64 {
    table
        .rates_between(year_from, year_to)
        .fold(1.0, |factor, (_, rate)| factor * (1.0 + rate / 100.0))
}

/// 월급과 연도 구간으로 구매력 손실을 계산한다.
///
/// 월급이 유한하지 않거나 0 이하이면, 구간이 뒤집혀 있으면, 또는 결과가
/// f64 범위를 벗어나면 None.
pub fn calculate(table: &RateTable, input: &CalculationInput) -> Option<CalculationResult> {
    let monthly = input.monthly_amount;
    if !monthly.is_finite() || monthly <= 0.0 {
        return None;
    }
    if input.year_from > input.year_to {
        return None;
    }

    let factor = compounding_factor(table, input.year_from, input.year_to);
    let total_inflation_percent = (factor - 1.0) * 100.0;
    let annual_amount = monthly * 12.0;
    let purchasing_power_loss = annual_amount - annual_amount / factor;
    let real_value = annual_amount - purchasing_power_loss;
    if ![annual_amount, total_inflation_percent, purchasing_power_loss, real_value]
        .iter()
        .all(|v| v.is_finite())
    {
        tracing::debug!(monthly, "result out of f64 range");
        return None;
    }

    tracing::debug!(
        year_from = input.year_from,
        year_to = input.year_to,
        factor,
        "inflation computed"
    );

    Some(CalculationResult {
        annual_amount,
        total_inflation_percent,
        purchasing_power_loss,
        real_value,
        year_from: input.year_from,
        year_to: input.year_to,
    })
}

/// 월급 입력 문자열을 숫자로 바꾼다.
///
/// 빈 문자열은 "아직 입력 없음"으로 None. 공백(일반/줄바꿈 없는/좁은)은
/// 자릿수 구분자로 보고 제거하며, 쉼표 하나는 소수점으로 읽는다. 양수 여부는
/// `calculate`에서 판단한다.
pub fn parse_monthly_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{00A0}' | '\u{202F}' | '\u{2009}'))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let normalized = if cleaned.matches(',').count() == 1 && !cleaned.contains('.') {
        cleaned.replace(',', ".")
    } else {
        cleaned
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 0.5는 올림하는 반올림 (음수도 +무한대 방향).
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_grouped_digits() {
        assert_eq!(parse_monthly_amount("100 000"), Some(100_000.0));
        assert_eq!(parse_monthly_amount("85\u{00A0}500,5"), Some(85_500.5));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_monthly_amount(""), None);
        assert_eq!(parse_monthly_amount("   "), None);
        assert_eq!(parse_monthly_amount("abc"), None);
        assert_eq!(parse_monthly_amount("inf"), None);
        assert_eq!(parse_monthly_amount("1,2,3"), None);
    }

    #[test]
    fn round_half_up_matches_whole_unit_display() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(78503.7), 78504.0);
    }
}
