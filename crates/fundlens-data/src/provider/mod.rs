//! 일별 가격 이력 Provider 모듈.
//!
//! - `YahooHistoryProvider`: Yahoo Finance 일봉 및 주식 분할 이력
//! - `InMemoryProvider`: 미리 적재된 이력 (오프라인 실행, 테스트)

pub mod memory;
pub mod yahoo;

pub use memory::InMemoryProvider;
pub use yahoo::YahooHistoryProvider;

use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use fundlens_core::PricePoint;

/// 일별 가격 이력 제공자.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// `start`부터 `end`까지(양 끝 포함) 일별 가격을 날짜순으로 반환합니다.
    ///
    /// 같은 날짜의 중복 시세는 첫 번째만 남깁니다.
    /// 알 수 없는 심볼은 `DataError::UnknownSymbol`을 반환합니다.
    async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>>;

    /// 심볼의 데이터가 존재하는 가장 이른 날짜.
    async fn first_available_date(&self, symbol: &str) -> Result<NaiveDate>;
}
