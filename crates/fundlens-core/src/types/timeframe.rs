//! 캔들 리샘플링을 위한 타임프레임 정의.
//!
//! 지원 타임프레임은 고정 목록(1분, 5분, 15분, 30분, 1시간)이며,
//! 슬라이더 인덱스는 이 목록의 순서를 따릅니다.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 캔들 타임프레임.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timeframe {
    /// 1분봉
    #[serde(rename = "1min")]
    M1,
    /// 5분봉
    #[serde(rename = "5min")]
    M5,
    /// 15분봉
    #[serde(rename = "15min")]
    M15,
    /// 30분봉
    #[serde(rename = "30min")]
    M30,
    /// 1시간봉
    #[serde(rename = "1h")]
    H1,
}

impl Timeframe {
    /// 슬라이더 순서대로 정렬된 전체 타임프레임.
    pub const ALL: [Timeframe; 5] = [
        Timeframe::M1,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::M30,
        Timeframe::H1,
    ];

    /// 이 타임프레임의 초 단위 값을 반환합니다.
    pub fn as_secs(&self) -> i64 {
        match self {
            Timeframe::M1 => 60,
            Timeframe::M5 => 5 * 60,
            Timeframe::M15 => 15 * 60,
            Timeframe::M30 => 30 * 60,
            Timeframe::H1 => 60 * 60,
        }
    }

    /// 이 타임프레임의 기간을 반환합니다.
    pub fn duration(&self) -> Duration {
        Duration::seconds(self.as_secs())
    }

    /// 표시용 레이블 ("1min", "15min", "1h" 등).
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::M1 => "1min",
            Timeframe::M5 => "5min",
            Timeframe::M15 => "15min",
            Timeframe::M30 => "30min",
            Timeframe::H1 => "1h",
        }
    }

    /// 레이블에서 파싱합니다. 짧은 형식("5m")도 허용합니다.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "1min" | "1m" | "1t" => Some(Timeframe::M1),
            "5min" | "5m" | "5t" => Some(Timeframe::M5),
            "15min" | "15m" | "15t" => Some(Timeframe::M15),
            "30min" | "30m" | "30t" => Some(Timeframe::M30),
            "1h" | "60min" | "60m" => Some(Timeframe::H1),
            _ => None,
        }
    }

    /// 슬라이더 인덱스에 해당하는 타임프레임.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 슬라이더에서의 위치.
    pub fn index(&self) -> usize {
        match self {
            Timeframe::M1 => 0,
            Timeframe::M5 => 1,
            Timeframe::M15 => 2,
            Timeframe::M30 => 3,
            Timeframe::H1 => 4,
        }
    }

    /// 주어진 시각이 속한 버킷의 시작 시각.
    ///
    /// 버킷 경계는 Unix epoch 기준으로 고정되므로 데이터 시작 시점과 무관합니다.
    pub fn bucket_start(&self, ts: DateTime<Utc>) -> DateTime<Utc> {
        let rem = ts.timestamp().rem_euclid(self.as_secs());
        ts - Duration::seconds(rem) - Duration::nanoseconds(i64::from(ts.timestamp_subsec_nanos()))
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("Invalid timeframe: {}", s))
    }
}
