//! 포지션 가치 시계열과 정렬된 비교 시계열.

use crate::types::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 단일 포지션 가치 포인트.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionPoint {
    /// 날짜
    pub date: NaiveDate,
    /// 평가 금액 (보유 주식 수 × 가격)
    pub value: Amount,
}

/// 포지션 가치 시계열.
///
/// 날짜는 엄격하게 증가하고, 첫 포인트의 날짜가 투자 시작일입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSeries {
    /// 범례 레이블 (예: "S&P 500", "Managed Fund")
    pub label: String,
    /// 날짜순 포인트
    pub points: Vec<PositionPoint>,
}

impl PositionSeries {
    /// 새 시계열을 생성합니다. 호출자는 날짜 순서를 보장해야 합니다.
    pub fn new(label: impl Into<String>, points: Vec<PositionPoint>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// 포인트 수.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 투자 시작일.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// 마지막 날짜.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// 첫 포인트.
    pub fn first(&self) -> Option<&PositionPoint> {
        self.points.first()
    }

    /// 마지막 포인트.
    pub fn last(&self) -> Option<&PositionPoint> {
        self.points.last()
    }

    /// 특정 날짜의 가치 (이진 탐색).
    pub fn value_on(&self, date: NaiveDate) -> Option<Amount> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|i| self.points[i].value)
    }

    /// 날짜 목록.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }
}

/// 두 시계열이 모두 값을 가진 날짜의 비교 포인트.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    /// 날짜
    pub date: NaiveDate,
    /// 첫 번째 시계열 가치
    pub value_a: Amount,
    /// 두 번째 시계열 가치
    pub value_b: Amount,
    /// value_a - value_b
    pub difference: Amount,
}

impl AlignedPair {
    /// 두 값으로 비교 포인트를 생성합니다.
    pub fn new(date: NaiveDate, value_a: Amount, value_b: Amount) -> Self {
        Self {
            date,
            value_a,
            value_b,
            difference: value_a - value_b,
        }
    }
}

/// 내부 조인된 비교 시계열.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    /// 첫 번째 시계열 레이블
    pub label_a: String,
    /// 두 번째 시계열 레이블
    pub label_b: String,
    /// 날짜순 비교 포인트
    pub pairs: Vec<AlignedPair>,
}

impl AlignedSeries {
    /// 포인트 수.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// 첫 비교 포인트.
    pub fn first(&self) -> Option<&AlignedPair> {
        self.pairs.first()
    }

    /// 마지막 비교 포인트.
    pub fn last(&self) -> Option<&AlignedPair> {
        self.pairs.last()
    }
}
