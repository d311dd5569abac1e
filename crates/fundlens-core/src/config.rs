//! 설정 관리.
//!
//! 기본값 → TOML 파일 → `FUNDLENS__` 접두사 환경 변수 순으로 덮어씁니다.

use crate::types::{Amount, SymbolAliases};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 펀드 비교 대시보드 기본값
    pub dashboard: DashboardConfig,
    /// 캔들 차트 설정
    pub candles: CandleConfig,
    /// 데이터 제공자 설정
    pub provider: ProviderConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 펀드 비교 대시보드 기본 입력값.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// 원금
    pub principal: Amount,
    /// 운용 펀드의 현재 평가액
    pub current_value: Amount,
    /// 시작일
    pub start_date: NaiveDate,
    /// 종료일
    pub end_date: NaiveDate,
    /// 기본 비교 지수 (표시 이름)
    pub index: String,
    /// 기본 주식 티커
    pub stock: String,
    /// 두 번째 주식 티커
    pub other_stock: String,
    /// 지수 표시 이름 → 제공자 심볼
    pub index_aliases: SymbolAliases,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            principal: Decimal::new(1000, 0),
            current_value: Decimal::new(3000, 0),
            start_date: NaiveDate::from_ymd_opt(2016, 5, 3).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2021, 5, 7).unwrap_or_default(),
            index: "S&P 500".to_string(),
            stock: "AMZN".to_string(),
            other_stock: "GOOG".to_string(),
            index_aliases: SymbolAliases::default(),
        }
    }
}

/// 캔들 차트 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CandleConfig {
    /// 틱 CSV 경로 또는 URL
    pub source: String,
    /// 초기 슬라이더 위치 (0 = 1min)
    pub default_timeframe_index: usize,
    /// 양봉 색상
    pub bull_color: String,
    /// 음봉 색상
    pub bear_color: String,
    /// 타임프레임 대비 캔들 몸통 폭 비율
    pub body_width_ratio: f64,
}

impl Default for CandleConfig {
    fn default() -> Self {
        Self {
            source: "https://raw.githubusercontent.com/algostrat/bokeh_candlestick_timeframe/50334c1a55d5aaf9a9df250ec450c4207c00fb25/may2020.csv".to_string(),
            default_timeframe_index: 2,
            bull_color: "#D5E1DD".to_string(),
            bear_color: "#F2583E".to_string(),
            body_width_ratio: 0.75,
        }
    }
}

/// 데이터 제공자 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        Self::builder(Some(path.as_ref()))?.build()?.try_deserialize()
    }

    /// 파일이 없으면 기본값과 환경 변수만으로 설정을 만듭니다.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let path = path.as_ref();
        let file = path.exists().then_some(path);
        Self::builder(file)?.build()?.try_deserialize()
    }

    fn builder(
        path: Option<&Path>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let mut builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        // 환경 변수로 오버라이드
        Ok(builder.add_source(
            config::Environment::with_prefix("FUNDLENS")
                .separator("__")
                .try_parsing(true),
        ))
    }
}
