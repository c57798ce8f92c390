//! 물가상승률 누적 계산 모듈 모음.

pub mod calculator;
pub mod rate_table;
pub mod series;
pub mod year_range;

pub use calculator::*;
pub use rate_table::*;
pub use series::*;
pub use year_range::*;
