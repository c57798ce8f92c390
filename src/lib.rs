//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod chart;
pub mod config;
pub mod format;
pub mod inflation;
pub mod logging;
pub mod share;
pub mod ui_cli;
