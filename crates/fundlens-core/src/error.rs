//! 분석 파이프라인의 에러 타입.
//!
//! 이 모듈은 순수 계산 단계(포지션 생성, 성장 피팅, 정렬, 요약, 리샘플링)에서
//! 발생하는 에러 타입을 정의합니다. 데이터 수집 에러는 `fundlens-data`에 있습니다.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

/// 분석 계산 에러.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// 입력 가격 시계열이 비어 있음
    #[error("빈 시계열: {0}")]
    EmptySeries(String),

    /// 시작일과 종료일이 같거나 역전됨
    #[error("잘못된 기간: {start} ~ {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// 원금이 0 이하
    #[error("잘못된 원금: {0}")]
    InvalidPrincipal(Decimal),

    /// 현재 가치가 0 이하
    #[error("잘못된 현재 가치: {0}")]
    InvalidCurrentValue(Decimal),

    /// 매입 단가로 쓸 수 없는 가격
    #[error("잘못된 가격 ({date}): {price}")]
    InvalidPrice { date: NaiveDate, price: Decimal },

    /// 두 시계열의 공통 날짜가 없음
    #[error("공통 날짜 없음: {0} / {1}")]
    EmptyIntersection(String, String),

    /// 틱 시계열이 비어 있음
    #[error("빈 틱 시계열")]
    EmptyTickSeries,

    /// 틱이 시간순이 아님
    #[error("틱 순서 오류: {previous} 이후 {current}")]
    UnorderedTicks {
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },

    /// 계산 결과를 Decimal로 표현할 수 없음
    #[error("표현할 수 없는 값: {0}")]
    NonFiniteValue(String),

    /// 지원하지 않는 타임프레임
    #[error("알 수 없는 타임프레임: {0}")]
    UnknownTimeframe(String),
}

/// 분석 작업을 위한 Result 타입.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// 표시할 데이터가 없어서 발생한 에러인지 확인합니다.
    ///
    /// UI 계층은 이 경우 차트 대신 대체 메시지를 보여줍니다.
    pub fn is_no_data(&self) -> bool {
        matches!(
            self,
            AnalyticsError::EmptySeries(_)
                | AnalyticsError::EmptyIntersection(_, _)
                | AnalyticsError::EmptyTickSeries
        )
    }

    /// 사용자 입력 값이 잘못된 경우인지 확인합니다.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AnalyticsError::InvalidDateRange { .. }
                | AnalyticsError::InvalidPrincipal(_)
                | AnalyticsError::InvalidCurrentValue(_)
                | AnalyticsError::NonFiniteValue(_)
                | AnalyticsError::UnknownTimeframe(_)
        )
    }
}
