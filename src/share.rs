//! 공유 메시지/링크 구성. 계산이 끝난 결과와 페이지 주소에만 의존한다.

use crate::format::format_percent;
use crate::inflation::CalculationResult;

/// 공유 메시지 본문.
///
/// 누적 상승률과 "몇 배 평가절하"(1 + 상승률/100, 소수 첫째 자리)를 넣고,
/// 페이지 주소가 있으면 끝에 붙인다.
pub fn share_text(result: &CalculationResult, page_url: &str) -> String {
    let mut text = format!(
        "С {} по {} год цены выросли на {}, деньги обесценились в {:.1} раза.",
        result.year_from,
        result.year_to,
        format_percent(result.total_inflation_percent),
        result.factor(),
    );
    let url = page_url.trim();
    if !url.is_empty() {
        text.push_str(" Посчитай свою зарплату: ");
        text.push_str(url);
    }
    text
}

/// 메신저 공유 딥링크. 예: `https://t.me/share/url?url=..&text=..`
///
/// 페이지 주소가 비어 있으면 `url` 파라미터를 생략한다.
pub fn share_link(service_url: &str, result: &CalculationResult, page_url: &str) -> String {
    let text = share_text(result, page_url);
    let url = page_url.trim();
    let sep = if service_url.contains('?') { '&' } else { '?' };
    if url.is_empty() {
        format!("{service_url}{sep}text={}", percent_encode(&text))
    } else {
        format!(
            "{service_url}{sep}url={}&text={}",
            percent_encode(url),
            percent_encode(&text)
        )
    }
}

/// RFC 3986 퍼센트 인코딩. 비예약 문자(A-Z a-z 0-9 - . _ ~)만 그대로 둔다.
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_reserved_and_utf8() {
        assert_eq!(percent_encode("a b&c"), "a%20b%26c");
        assert_eq!(percent_encode("₽"), "%E2%82%BD");
        assert_eq!(percent_encode("x-y_z.~"), "x-y_z.~");
    }
}
