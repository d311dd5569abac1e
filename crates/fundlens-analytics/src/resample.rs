//! 틱 → OHLC 바 리샘플링.
//!
//! 버킷 경계는 Unix epoch 기준입니다 (`bucket_start = ts - ts mod duration`).
//! 따라서 데이터 시작 시각과 무관하게 같은 타임프레임이면 항상 같은 경계를
//! 가지며, 겹치는 구간을 두 번 리샘플링해도 결과가 일치합니다.
//!
//! 틱이 없는 버킷은 생략합니다 (forward-fill 없음).

use fundlens_core::{AnalyticsError, AnalyticsResult, OhlcBar, Tick, Timeframe};

/// OHLC 리샘플러.
pub struct OhlcResampler;

impl OhlcResampler {
    /// 전체 틱 시퀀스를 하나의 타임프레임으로 집계합니다.
    ///
    /// # 에러
    ///
    /// - `EmptyTickSeries`: 틱이 없음
    /// - `UnorderedTicks`: 타임스탬프가 감소하는 틱이 있음
    pub fn resample(ticks: &[Tick], timeframe: Timeframe) -> AnalyticsResult<Vec<OhlcBar>> {
        Self::check_ordered(ticks)?;

        let mut bars: Vec<OhlcBar> = Vec::new();
        for tick in ticks {
            let bucket = timeframe.bucket_start(tick.timestamp);
            match bars.last_mut() {
                Some(bar) if bar.period_start == bucket => bar.update(tick.bid),
                _ => bars.push(OhlcBar::open_with(timeframe, bucket, tick.bid)),
            }
        }

        Ok(bars)
    }

    /// 지원하는 모든 타임프레임으로 각각 독립 집계합니다.
    pub fn resample_all(ticks: &[Tick]) -> AnalyticsResult<Vec<(Timeframe, Vec<OhlcBar>)>> {
        Timeframe::ALL
            .iter()
            .map(|&tf| Self::resample(ticks, tf).map(|bars| (tf, bars)))
            .collect()
    }

    fn check_ordered(ticks: &[Tick]) -> AnalyticsResult<()> {
        if ticks.is_empty() {
            return Err(AnalyticsError::EmptyTickSeries);
        }
        match ticks
            .windows(2)
            .find(|w| w[1].timestamp < w[0].timestamp)
        {
            Some(w) => Err(AnalyticsError::UnorderedTicks {
                previous: w[0].timestamp,
                current: w[1].timestamp,
            }),
            None => Ok(()),
        }
    }
}
