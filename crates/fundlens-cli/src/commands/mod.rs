//! CLI 명령어 구현 모듈.

pub mod candles;
pub mod compare;
pub mod earliest;
pub mod output;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// 날짜 문자열 파싱 (YYYY-MM-DD).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date format: {}. Expected YYYY-MM-DD", s))
}
