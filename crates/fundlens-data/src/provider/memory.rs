//! 메모리 기반 가격 이력 Provider.

use super::MarketDataProvider;
use crate::error::{DataError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use fundlens_core::{normalize_history, PricePoint};
use std::collections::HashMap;

/// 미리 적재된 가격 이력을 제공하는 Provider.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    histories: HashMap<String, Vec<PricePoint>>,
}

impl InMemoryProvider {
    /// 빈 Provider를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 심볼의 가격 이력을 등록합니다. 기존 이력은 교체됩니다.
    pub fn with_history(mut self, symbol: impl Into<String>, points: Vec<PricePoint>) -> Self {
        self.insert(symbol, points);
        self
    }

    /// 심볼의 가격 이력을 등록합니다.
    pub fn insert(&mut self, symbol: impl Into<String>, points: Vec<PricePoint>) {
        self.histories.insert(symbol.into(), normalize_history(points));
    }

    fn history(&self, symbol: &str) -> Result<&[PricePoint]> {
        self.histories
            .get(symbol)
            .map(Vec::as_slice)
            .ok_or_else(|| DataError::UnknownSymbol(symbol.to_string()))
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryProvider {
    async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>> {
        Ok(self
            .history(symbol)?
            .iter()
            .filter(|p| p.date >= start && p.date <= end)
            .cloned()
            .collect())
    }

    async fn first_available_date(&self, symbol: &str) -> Result<NaiveDate> {
        self.history(symbol)?
            .first()
            .map(|p| p.date)
            .ok_or_else(|| DataError::InvalidData(format!("{}: 가격 이력 없음", symbol)))
    }
}
