//! 일별 가격 데이터.

use crate::types::Price;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 일별 OHLCV 가격과 분할 정보.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// 거래일 (시간 없음)
    pub date: NaiveDate,
    /// 시가
    pub open: Price,
    /// 고가
    pub high: Price,
    /// 저가
    pub low: Price,
    /// 종가
    pub close: Price,
    /// 거래량
    pub volume: Decimal,
    /// 해당일 주식 분할로 늘어난 주식 비율 (분할 없으면 0, 2:1 분할은 1)
    pub split_ratio: Decimal,
}

impl PricePoint {
    /// 분할이 없는 가격 포인트를 생성합니다.
    pub fn new(date: NaiveDate, open: Price, high: Price, low: Price, close: Price, volume: Decimal) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
            split_ratio: Decimal::ZERO,
        }
    }

    /// 종가만 있는 가격 포인트를 생성합니다 (시가/고가/저가 = 종가).
    pub fn from_close(date: NaiveDate, close: Price) -> Self {
        Self::new(date, close, close, close, close, Decimal::ZERO)
    }

    /// 분할 비율을 설정합니다.
    pub fn with_split_ratio(mut self, split_ratio: Decimal) -> Self {
        self.split_ratio = split_ratio;
        self
    }

    /// 해당일에 주식 분할이 있었는지 확인합니다.
    pub fn has_split(&self) -> bool {
        !self.split_ratio.is_zero()
    }
}

/// 가격 이력을 날짜순으로 정렬하고 같은 날짜의 중복 시세를 제거합니다.
///
/// 장 마감 후 거래 등으로 같은 날짜가 여러 번 나오면 첫 번째 시세만 남깁니다.
/// 정렬은 안정 정렬이므로 "첫 번째"는 입력 순서를 기준으로 합니다.
pub fn normalize_history(mut points: Vec<PricePoint>) -> Vec<PricePoint> {
    points.sort_by_key(|p| p.date);
    points.dedup_by_key(|p| p.date);
    points
}
