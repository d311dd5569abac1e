//! 틱 데이터 소스.
//!
//! 틱 CSV는 최소한 `RateDateTime`, `RateBid` 컬럼을 가져야 합니다.
//! 그 밖의 컬럼은 무시합니다.
//!
//! ```text
//! RateDateTime,RateBid,RateAsk
//! 2020-05-03 17:00:12.123,1.09784,1.09812
//! ```

use crate::error::{DataError, Result};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use fundlens_core::Tick;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// 틱 시계열 공급원.
#[async_trait]
pub trait TickSource: Send + Sync {
    /// 모든 틱을 시간순으로 읽어옵니다.
    async fn load_ticks(&self) -> Result<Vec<Tick>>;

    /// 로그용 설명 (파일 경로나 URL).
    fn describe(&self) -> String;
}

/// 로컬 CSV 파일 틱 소스.
#[derive(Debug, Clone)]
pub struct CsvTickSource {
    path: PathBuf,
}

impl CsvTickSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TickSource for CsvTickSource {
    #[instrument(skip(self), fields(source = %self.path.display()))]
    async fn load_ticks(&self) -> Result<Vec<Tick>> {
        let bytes = tokio::fs::read(&self.path).await?;
        let ticks = parse_ticks(bytes.as_slice())?;
        info!(count = ticks.len(), "틱 파일 로드 완료");
        Ok(ticks)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// HTTP로 내려받는 CSV 틱 소스.
#[derive(Debug, Clone)]
pub struct HttpTickSource {
    url: String,
    timeout: Duration,
}

impl HttpTickSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl TickSource for HttpTickSource {
    #[instrument(skip(self), fields(source = %self.url))]
    async fn load_ticks(&self) -> Result<Vec<Tick>> {
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;

        debug!("틱 CSV 다운로드 시작");
        let response = client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::FetchError(format!(
                "틱 CSV 다운로드 실패 ({}): HTTP {}",
                self.url, status
            )));
        }

        let body = response.bytes().await?;
        let ticks = parse_ticks(body.as_ref())?;
        info!(count = ticks.len(), bytes = body.len(), "틱 CSV 다운로드 완료");
        Ok(ticks)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// 위치 문자열에 맞는 틱 소스를 선택합니다.
///
/// `http://` 또는 `https://`로 시작하면 HTTP, 그 외에는 로컬 파일입니다.
pub fn tick_source_for(location: &str, timeout: Duration) -> Box<dyn TickSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpTickSource::new(location, timeout))
    } else {
        Box::new(CsvTickSource::new(location))
    }
}

#[derive(Debug, Deserialize)]
struct TickRecord {
    #[serde(rename = "RateDateTime")]
    date_time: String,
    #[serde(rename = "RateBid")]
    bid: String,
}

/// CSV 본문에서 틱을 파싱하고 시간순으로 정렬합니다.
///
/// 같은 타임스탬프의 틱은 파일 순서를 유지합니다.
pub fn parse_ticks<R: Read>(reader: R) -> Result<Vec<Tick>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut ticks = Vec::new();
    for (row, result) in reader.deserialize::<TickRecord>().enumerate() {
        let record = result?;
        let timestamp = parse_timestamp(&record.date_time).ok_or_else(|| {
            DataError::ParseError(format!(
                "행 {}: 잘못된 RateDateTime '{}'",
                row + 1,
                record.date_time
            ))
        })?;
        let bid = Decimal::from_str(&record.bid).map_err(|e| {
            DataError::ParseError(format!("행 {}: 잘못된 RateBid '{}': {}", row + 1, record.bid, e))
        })?;
        ticks.push(Tick::new(timestamp, bid));
    }

    ticks.sort_by_key(|t| t.timestamp);
    Ok(ticks)
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}
