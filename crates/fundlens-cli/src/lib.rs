//! fundlens CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 펀드/주식/지수 비교 (`compare`)
//! - 틱 데이터 캔들 집계 (`candles`)
//! - 심볼의 첫 데이터 날짜 조회 (`earliest`)

pub mod commands;
