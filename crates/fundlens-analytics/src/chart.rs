//! 캔들 차트 상태.
//!
//! 틱 전체를 보관하고, 슬라이더 위치가 바뀔 때마다 해당 타임프레임으로
//! 전체를 다시 집계해 새 [`CandleView`]를 만듭니다.

use crate::candle::CandleStyler;
use crate::resample::OhlcResampler;
use fundlens_core::{AnalyticsError, AnalyticsResult, StyledCandle, Tick, Timeframe};
use serde::{Deserialize, Serialize};

/// 기본 슬라이더 위치 (15min).
pub const DEFAULT_SLIDER_INDEX: usize = 2;

/// 한 타임프레임의 렌더링 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleView {
    pub slider_index: usize,
    pub timeframe: Timeframe,
    /// 차트 제목 (예: "EUR/USD 15min")
    pub title: String,
    pub candles: Vec<StyledCandle>,
}

/// 틱과 타임프레임 목록을 가진 차트.
#[derive(Debug, Clone)]
pub struct CandleChart {
    ticks: Vec<Tick>,
    timeframes: Vec<Timeframe>,
    styler: CandleStyler,
    title: String,
}

impl CandleChart {
    /// 빈 틱 시퀀스는 `EmptyTickSeries`를 반환합니다.
    pub fn new(
        title: impl Into<String>,
        ticks: Vec<Tick>,
        styler: CandleStyler,
    ) -> AnalyticsResult<Self> {
        if ticks.is_empty() {
            return Err(AnalyticsError::EmptyTickSeries);
        }
        Ok(Self {
            ticks,
            timeframes: Timeframe::ALL.to_vec(),
            styler,
            title: title.into(),
        })
    }

    pub fn timeframes(&self) -> &[Timeframe] {
        &self.timeframes
    }

    pub fn tick_count(&self) -> usize {
        self.ticks.len()
    }

    /// 슬라이더 위치의 타임프레임으로 캔들을 만듭니다.
    pub fn select(&self, slider_index: usize) -> AnalyticsResult<CandleView> {
        let timeframe = self
            .timeframes
            .get(slider_index)
            .copied()
            .ok_or_else(|| AnalyticsError::UnknownTimeframe(format!("slider index {}", slider_index)))?;

        let bars = OhlcResampler::resample(&self.ticks, timeframe)?;

        Ok(CandleView {
            slider_index,
            timeframe,
            title: format!("{} {}", self.title, timeframe),
            candles: self.styler.style_all(&bars),
        })
    }

    /// 모든 타임프레임의 캔들.
    pub fn select_all(&self) -> AnalyticsResult<Vec<CandleView>> {
        (0..self.timeframes.len()).map(|i| self.select(i)).collect()
    }
}
