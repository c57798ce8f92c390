//! 화면 표시용 숫자 서식. 계산 결과 자체는 반올림하지 않고 여기서만 다룬다.

use crate::inflation::round_half_up;

/// 통화 기호.
pub const CURRENCY_SUFFIX: &str = " ₽";
/// 천 단위 구분자 (ru-RU 로케일과 동일한 줄바꿈 없는 공백).
pub const GROUP_SEPARATOR: char = '\u{00A0}';
/// 값이 없을 때 표시.
pub const MISSING: &str = "—";

/// 정수 단위로 반올림하고 세 자리마다 구분자를 넣는다.
pub fn group_thousands(value: f64) -> String {
    let rounded = round_half_up(value);
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// 금액 표시. 예: 1 200 000 ₽
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    format!("{}{CURRENCY_SUFFIX}", group_thousands(value))
}

/// 퍼센트 표시(소수 첫째 자리).
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// 선택한 연도 구간 표시.
pub fn format_year_span(from: i32, to: i32) -> String {
    format!("{from} — {to}")
}
