//! 시장 데이터 수집.
//!
//! 이 crate는 분석 파이프라인의 외부 데이터 협력자를 제공합니다:
//! - 일별 가격 이력 Provider (Yahoo Finance, 메모리)
//! - 틱 데이터 소스 (CSV 파일, HTTP)

pub mod error;
pub mod provider;
pub mod tick;

pub use error::{DataError, Result};
pub use provider::{InMemoryProvider, MarketDataProvider, YahooHistoryProvider};
pub use tick::{parse_ticks, tick_source_for, CsvTickSource, HttpTickSource, TickSource};
