use std::io::{self, Write};

use crate::app::AppError;
use crate::format::{format_money, format_percent, format_year_span};
use crate::inflation::{parse_monthly_amount, CalculationResult, ChartPoint, RateTable, YearBound, YearRange};

/// 결과가 없을 때 안내 문구.
pub const NO_RESULT: &str = "Введите зарплату больше нуля, чтобы увидеть расчёт.";

/// 요약 패널을 문자열로 만든다.
pub fn render_summary(result: &CalculationResult, table: &RateTable) -> String {
    let mut out = format!(
        "\n=== Калькулятор инфляции ЗП ===\n\
         Общая инфляция за период: {}\n  {}\n\
         Годовая зарплата: {}\n\
         Потеря покупательной способности: {}\n\
         Реальная покупательная способность: {}\n",
        format_percent(result.total_inflation_percent),
        format_year_span(result.year_from, result.year_to),
        format_money(result.annual_amount),
        format_money(result.purchasing_power_loss),
        format_money(result.real_value),
    );
    let missing = result.uncovered_spans(table);
    if !missing.is_empty() {
        out.push_str(&format!(
            "Нет данных за годы: {} (учтены как 0%)\n",
            join_spans(&missing)
        ));
    }
    out
}

/// 연도별 실질 가치 표.
pub fn render_series(points: &[ChartPoint]) -> String {
    let mut out = String::from("\nГод   Реальная стоимость\n");
    for p in points {
        out.push_str(&format!("{:<5} {}\n", p.year, format_money(p.value)));
    }
    out
}

/// 물가상승률 표 출력.
pub fn render_rate_table(table: &RateTable) -> String {
    let mut out = String::from("Год   Инфляция\n");
    for e in table.entries() {
        out.push_str(&format!("{:<5} {}\n", e.year, format_percent(e.rate)));
    }
    out
}

/// 빠진 연도 구간을 "2019, 2022-2023" 꼴로 잇는다.
fn join_spans(spans: &[(i32, i32)]) -> String {
    spans
        .iter()
        .map(|&(first, last)| {
            if first == last {
                first.to_string()
            } else {
                format!("{first}-{last}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// 월급과 연도 구간을 대화형으로 입력받는다.
///
/// 연도는 표에 있는 값만 받고, 엔터만 치면 현재 값을 유지한다. 끝 연도가
/// 시작 연도보다 작으면 시작 연도가 따라 내려간다.
pub fn prompt_inputs(table: &RateTable) -> Result<(String, YearRange), AppError> {
    let salary = loop {
        let s = read_line("Зарплата в месяц: ")?;
        let s = s.trim().to_string();
        if parse_monthly_amount(&s).is_some() {
            break s;
        }
        println!("Введите число, например 100 000.");
    };
    let mut range = YearRange::full(table);
    println!("Доступные годы: {} — {}", table.min_year(), table.max_year());
    let from = read_year("С какого года", range.from, table)?;
    range = range.apply_edit(YearBound::From, from);
    let to = read_year("По какой год", range.to, table)?;
    range = range.apply_edit(YearBound::To, to);
    Ok((salary, range))
}

fn read_year(label: &str, current: i32, table: &RateTable) -> Result<i32, AppError> {
    loop {
        let s = read_line(&format!("{label} [{current}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<i32>() {
            Ok(y) if table.contains(y) => return Ok(y),
            _ => println!(
                "Выберите год от {} до {}.",
                table.min_year(),
                table.max_year()
            ),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}
