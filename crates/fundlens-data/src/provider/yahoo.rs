//! Yahoo Finance 일별 가격 이력 Provider.
//!
//! # 동작 방식
//!
//! 1. 종료일 + 1일까지 요청 (Yahoo의 종료 경계는 배타적)
//! 2. 타임스탬프를 UTC 날짜로 변환하고 요청 범위 밖의 날짜 제거
//! 3. 같은 날짜의 중복 시세는 첫 번째만 유지
//! 4. 주식 분할 이벤트를 해당 날짜의 `split_ratio`로 반영
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use fundlens_data::{MarketDataProvider, YahooHistoryProvider};
//!
//! let provider = YahooHistoryProvider::new(Duration::from_secs(30))?;
//! let history = provider.fetch_history("^GSPC", start, end).await?;
//! ```

use super::MarketDataProvider;
use crate::error::{DataError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Datelike, Duration as ChronoDuration, NaiveDate};
use fundlens_core::{normalize_history, PricePoint};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration;
use time::OffsetDateTime;
use tracing::{debug, instrument, warn};
use yahoo_finance_api::{Quote, YahooConnector, YahooError};

/// Yahoo Finance 가격 이력 Provider.
pub struct YahooHistoryProvider {
    connector: YahooConnector,
    timeout: Duration,
}

impl YahooHistoryProvider {
    /// 요청 타임아웃을 지정해 Provider를 생성합니다.
    pub fn new(timeout: Duration) -> Result<Self> {
        let connector = YahooConnector::new()
            .map_err(|e| DataError::ConnectionError(format!("Yahoo Finance 연결 실패: {}", e)))?;
        Ok(Self { connector, timeout })
    }

    async fn with_timeout<T, F>(&self, symbol: &str, fut: F) -> Result<T>
    where
        F: std::future::Future<Output = std::result::Result<T, YahooError>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result.map_err(|e| classify_error(symbol, &e)),
            Err(_) => Err(DataError::Timeout(format!(
                "Yahoo Finance 요청 시간 초과 ({}, {:?})",
                symbol, self.timeout
            ))),
        }
    }
}

#[async_trait]
impl MarketDataProvider for YahooHistoryProvider {
    #[instrument(skip(self))]
    async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>> {
        let request_end = end + ChronoDuration::days(1);

        debug!(symbol, start = %start, end = %request_end, "Yahoo Finance API 날짜 범위 호출");

        let response = self
            .with_timeout(
                symbol,
                self.connector.get_quote_history(
                    symbol,
                    naive_date_to_offset_datetime(start)?,
                    naive_date_to_offset_datetime(request_end)?,
                ),
            )
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::ParseError(format!("Quote 파싱 오류 ({}): {}", symbol, e)))?;

        // 분할 정보가 없는 응답도 정상
        let splits: HashMap<NaiveDate, Decimal> = match response.splits() {
            Ok(splits) => splits
                .iter()
                .filter_map(|s| {
                    let date = timestamp_to_date(s.date as i64)?;
                    let ratio = split_increase(s.numerator as f64, s.denominator as f64)?;
                    Some((date, ratio))
                })
                .collect(),
            Err(e) => {
                debug!(symbol, error = %e, "분할 정보 없음");
                HashMap::new()
            }
        };

        let mut points = Vec::with_capacity(quotes.len());
        for q in &quotes {
            let Some(date) = timestamp_to_date(q.timestamp as i64) else {
                warn!(symbol, timestamp = q.timestamp as i64, "잘못된 타임스탬프 무시");
                continue;
            };
            if date < start || date > end {
                continue;
            }

            let Some(point) = quote_to_point(date, q) else {
                warn!(symbol, %date, close = q.close, "유한하지 않은 시세 무시");
                continue;
            };
            points.push(point.with_split_ratio(splits.get(&date).copied().unwrap_or_default()));
        }

        let points = normalize_history(points);
        debug!(symbol, count = points.len(), splits = splits.len(), "가격 이력 수신");

        Ok(points)
    }

    #[instrument(skip(self))]
    async fn first_available_date(&self, symbol: &str) -> Result<NaiveDate> {
        let response = self
            .with_timeout(symbol, self.connector.get_quote_range(symbol, "1d", "max"))
            .await?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::ParseError(format!("Quote 파싱 오류 ({}): {}", symbol, e)))?;

        quotes
            .iter()
            .filter_map(|q| timestamp_to_date(q.timestamp as i64))
            .min()
            .ok_or_else(|| DataError::UnknownSymbol(symbol.to_string()))
    }
}

/// Yahoo 오류를 데이터 오류로 분류합니다.
///
/// 존재하지 않는 심볼은 "Not Found" / "No data found" 응답으로 옵니다.
fn classify_error(symbol: &str, err: &YahooError) -> DataError {
    let message = err.to_string();
    let lower = message.to_lowercase();
    if lower.contains("not found")
        || lower.contains("no data")
        || lower.contains("no result")
        || lower.contains("delisted")
    {
        DataError::UnknownSymbol(symbol.to_string())
    } else {
        DataError::FetchError(format!("Yahoo Finance API 오류 ({}): {}", symbol, message))
    }
}

/// 분할 비율(분자:분모)을 주식 증가율로 변환합니다. 4:1 분할은 3입니다.
fn split_increase(numerator: f64, denominator: f64) -> Option<Decimal> {
    if !(numerator > 0.0 && denominator > 0.0) {
        return None;
    }
    Decimal::from_f64_retain(numerator / denominator - 1.0).map(|d| d.round_dp(8))
}

/// NaN/무한대가 섞인 시세는 `None`.
fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64_retain(value).map(|d| d.round_dp(6))
}

fn quote_to_point(date: NaiveDate, q: &Quote) -> Option<PricePoint> {
    Some(PricePoint::new(
        date,
        to_decimal(q.open)?,
        to_decimal(q.high)?,
        to_decimal(q.low)?,
        to_decimal(q.close)?,
        Decimal::from(q.volume),
    ))
}

fn timestamp_to_date(ts: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive())
}

/// NaiveDate를 OffsetDateTime으로 변환.
fn naive_date_to_offset_datetime(date: NaiveDate) -> Result<OffsetDateTime> {
    let month = time::Month::try_from(date.month() as u8)
        .map_err(|e| DataError::InvalidData(format!("잘못된 월 ({}): {}", date, e)))?;
    let day = time::Date::from_calendar_date(date.year(), month, date.day() as u8)
        .map_err(|e| DataError::InvalidData(format!("잘못된 날짜 ({}): {}", date, e)))?;
    Ok(day.midnight().assume_utc())
}
