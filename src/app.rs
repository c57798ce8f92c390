use clap::Parser;
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::inflation::{
    calculate, parse_monthly_amount, CalculationInput, CalculationResult, RateTable,
    RateTableError, YearRange, MAX_YEAR, MIN_YEAR,
};
use crate::share;
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("물가상승률 표 오류: {0}")]
    RateTable(#[from] RateTableError),
    /// 대화형 입력 도중 표준 입력이 닫힘
    #[error("입력이 종료되었습니다")]
    InputClosed,
}

/// 명령행 인자.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "salary_inflation_cli",
    about = "Калькулятор инфляции зарплаты: сколько съела инфляция за выбранные годы"
)]
pub struct CliArgs {
    /// Зарплата в месяц. Без значения запускается диалог.
    #[arg(allow_hyphen_values = true)]
    pub salary: Option<String>,
    /// С какого года (по умолчанию первый год таблицы)
    #[arg(long, value_parser = clap::value_parser!(i32).range(MIN_YEAR as i64..=MAX_YEAR as i64))]
    pub from: Option<i32>,
    /// По какой год (по умолчанию последний год таблицы)
    #[arg(long, value_parser = clap::value_parser!(i32).range(MIN_YEAR as i64..=MAX_YEAR as i64))]
    pub to: Option<i32>,
    /// Показать значения по годам
    #[arg(long)]
    pub series: bool,
    /// Показать ссылку для отправки результата
    #[arg(long)]
    pub share: bool,
    /// Файл таблицы инфляции (TOML) вместо встроенной
    #[arg(long, value_name = "PATH")]
    pub rates: Option<String>,
    /// Вывести таблицу инфляции и выйти
    #[arg(long)]
    pub list_rates: bool,
    /// Ограничить годы диапазоном таблицы
    #[arg(long)]
    pub clamp: bool,
}

/// 인자로 받은 연도를 구간으로 정리한다. 빠진 끝은 표의 끝을 쓰고 뒤집힌 입력은
/// 교환한다. 두 끝은 `MIN_YEAR..=MAX_YEAR` 안으로 제한된다.
pub fn resolve_range(table: &RateTable, from: Option<i32>, to: Option<i32>, clamp: bool) -> YearRange {
    let full = YearRange::full(table);
    let from = from.unwrap_or(full.from);
    let to = to.unwrap_or(full.to);
    if from > to {
        tracing::warn!(from, to, "year range reversed; swapping");
    }
    let requested = YearRange::new(from, to);
    let range = requested.limited();
    if range != requested {
        tracing::warn!(from, to, min = MIN_YEAR, max = MAX_YEAR, "years out of bounds; limited");
    }
    if clamp {
        range.clamp_to(table)
    } else {
        range
    }
}

/// 입력 문자열과 구간으로 결과를 계산한다. 월급이 유효하지 않으면 None.
pub fn evaluate(table: &RateTable, raw_salary: &str, range: YearRange) -> Option<CalculationResult> {
    let monthly_amount = parse_monthly_amount(raw_salary)?;
    calculate(
        table,
        &CalculationInput {
            monthly_amount,
            year_from: range.from,
            year_to: range.to,
        },
    )
}

/// CLI 애플리케이션을 실행한다.
pub fn run(config: &Config, args: &CliArgs) -> Result<(), AppError> {
    let table = match args.rates.as_deref() {
        Some(path) => RateTable::load(path)?,
        None => config.rate_table()?,
    };

    if args.list_rates {
        print!("{}", ui_cli::render_rate_table(&table));
        return Ok(());
    }

    let (raw_salary, range) = match args.salary.as_deref() {
        Some(raw) => (
            raw.to_string(),
            resolve_range(&table, args.from, args.to, args.clamp),
        ),
        None => ui_cli::prompt_inputs(&table)?,
    };

    if !range.is_covered_by(&table) {
        tracing::warn!(
            from = range.from,
            to = range.to,
            first_year = table.min_year(),
            last_year = table.max_year(),
            "range extends beyond the rate table; missing years count as zero inflation"
        );
    }

    let Some(result) = evaluate(&table, &raw_salary, range) else {
        println!("{}", ui_cli::NO_RESULT);
        return Ok(());
    };

    print!("{}", ui_cli::render_summary(&result, &table));
    if args.series {
        print!("{}", ui_cli::render_series(&result.series(&table)));
    }
    if args.share {
        let link = share::share_link(&config.share_service_url, &result, &config.page_url);
        println!("\nПоделиться: {link}");
    }
    Ok(())
}
