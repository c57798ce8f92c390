use super::rate_table::RateTable;

/// 받아들이는 가장 이른 연도.
pub const MIN_YEAR: i32 = 1;
/// 받아들이는 가장 늦은 연도.
pub const MAX_YEAR: i32 = 9999;

/// 포함 구간 [from, to]의 연도 수. 뒤집힌 구간은 0.
///
/// i64로 세므로 `i32::MIN..=i32::MAX`도 넘치지 않는다.
pub const fn span_len(from: i32, to: i32) -> u64 {
    let n = to as i64 - from as i64 + 1;
    if n > 0 {
        n as u64
    } else {
        0
    }
}

/// 사용자가 수정한 구간 끝.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearBound {
    From,
    To,
}

/// 포함 연도 구간. 생성/수정 후 항상 from <= to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    /// 뒤집힌 입력은 교환한다.
    pub fn new(a: i32, b: i32) -> Self {
        if a <= b {
            Self { from: a, to: b }
        } else {
            Self { from: b, to: a }
        }
    }

    /// 표 전체 구간.
    pub fn full(table: &RateTable) -> Self {
        Self::new(table.min_year(), table.max_year())
    }

    /// 한쪽 끝을 바꾼다. 반대쪽을 넘어가면 반대쪽이 따라온다.
    ///
    /// from을 to보다 크게 하면 to가 올라오고, to를 from보다 작게 하면 from이
    /// 내려온다.
    pub fn apply_edit(self, bound: YearBound, year: i32) -> Self {
        match bound {
            YearBound::From => Self {
                from: year,
                to: self.to.max(year),
            },
            YearBound::To => Self {
                from: self.from.min(year),
                to: year,
            },
        }
    }

    /// 두 끝을 표 범위 안으로 제한한다.
    pub fn clamp_to(self, table: &RateTable) -> Self {
        let (lo, hi) = (table.min_year(), table.max_year());
        Self::new(self.from.clamp(lo, hi), self.to.clamp(lo, hi))
    }

    /// 두 끝을 [`MIN_YEAR`]..=[`MAX_YEAR`] 안으로 제한한다.
    pub fn limited(self) -> Self {
        Self::new(
            self.from.clamp(MIN_YEAR, MAX_YEAR),
            self.to.clamp(MIN_YEAR, MAX_YEAR),
        )
    }

    /// 표가 구간 전체를 덮는지. 표 항목 수만 세므로 구간 폭과 무관하게 빠르다.
    pub fn is_covered_by(&self, table: &RateTable) -> bool {
        table.rates_between(self.from, self.to).count() as u64 == self.year_count()
    }

    pub fn year_count(&self) -> u64 {
        span_len(self.from, self.to)
    }
}
