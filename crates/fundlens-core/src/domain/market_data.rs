//! 틱 및 캔들 데이터 구조체.
//!
//! - `Tick` - 매수 호가 틱
//! - `OhlcBar` - 타임프레임 버킷 단위 OHLC 바
//! - `StyledCandle` - 렌더링용 색상/폭이 지정된 캔들

use crate::types::{Price, Timeframe};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 매수 호가 틱.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// 체결 시각
    pub timestamp: DateTime<Utc>,
    /// 매수 호가
    pub bid: Price,
}

impl Tick {
    /// 새 틱을 생성합니다.
    pub fn new(timestamp: DateTime<Utc>, bid: Price) -> Self {
        Self { timestamp, bid }
    }
}

/// OHLC 바.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcBar {
    /// 타임프레임
    pub timeframe: Timeframe,
    /// 버킷 시작 시각
    pub period_start: DateTime<Utc>,
    /// 시가 (버킷 첫 틱)
    pub open: Price,
    /// 고가
    pub high: Price,
    /// 저가
    pub low: Price,
    /// 종가 (버킷 마지막 틱)
    pub close: Price,
}

impl OhlcBar {
    /// 첫 틱으로 바를 시작합니다.
    pub fn open_with(timeframe: Timeframe, period_start: DateTime<Utc>, price: Price) -> Self {
        Self {
            timeframe,
            period_start,
            open: price,
            high: price,
            low: price,
            close: price,
        }
    }

    /// 버킷에 틱 가격을 반영합니다.
    pub fn update(&mut self, price: Price) {
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.close = price;
    }

    /// 버킷 종료 시각 (배타적).
    pub fn period_end(&self) -> DateTime<Utc> {
        self.period_start + self.timeframe.duration()
    }

    /// 양봉(종가 >= 시가)인지 확인합니다.
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

/// 캔들 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandleKind {
    /// 양봉
    Bull,
    /// 음봉
    Bear,
}

/// 렌더링 정보가 붙은 캔들.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledCandle {
    /// 원본 바
    pub bar: OhlcBar,
    /// 양봉/음봉
    pub kind: CandleKind,
    /// 채움 색상 (hex)
    pub color: String,
    /// 몸통 폭
    #[serde(with = "duration_millis")]
    pub width: Duration,
}

mod duration_millis {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(d.num_milliseconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        i64::deserialize(d).map(Duration::milliseconds)
    }
}
