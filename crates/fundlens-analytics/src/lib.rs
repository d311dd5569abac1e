//! 비교 성장 분석 및 멀티 타임프레임 캔들 엔진.
//!
//! 이 크레이트는 두 개의 독립적인 파이프라인을 제공합니다:
//!
//! - **비교 성장 (Pipeline A)**: 가격 이력 → 포지션 시계열 → (합성 성장 시계열) →
//!   날짜 정렬 → 요약 문구
//! - **캔들 (Pipeline B)**: 틱 → 타임프레임별 OHLC 바 → 양봉/음봉 스타일
//!
//! 계산 단계는 모두 순수 함수이며 로그를 남기지 않습니다. 데이터 수집과
//! 재계산 단위의 로깅은 [`dashboard`] 모듈과 CLI가 담당합니다.
//!
//! # Re-exports
//!
//! - [`position`]: 포지션 시계열 생성 (PositionSeriesBuilder)
//! - [`growth`]: 합성 성장 시계열 (SyntheticGrowthFitter)
//! - [`alignment`]: 시계열 정렬 (SeriesAligner)
//! - [`narrative`]: 요약 문구 (SummaryNarrator)
//! - [`resample`]: OHLC 리샘플링 (OhlcResampler)
//! - [`candle`], [`chart`]: 캔들 스타일과 차트 상태
//! - [`dashboard`]: 탭 단위 재계산

pub mod alignment;
pub mod candle;
pub mod chart;
pub mod dashboard;
pub mod growth;
pub mod narrative;
pub mod position;
pub mod resample;

pub use alignment::SeriesAligner;
pub use candle::CandleStyler;
pub use chart::{CandleChart, CandleView};
pub use dashboard::{
    recompute, Dashboard, DashboardError, DashboardResult, DashboardTab, TabInputs, TabKind,
    TabState,
};
pub use growth::{GrowthFit, SyntheticGrowthFitter, DAYS_PER_YEAR};
pub use narrative::SummaryNarrator;
pub use position::{BuiltPosition, PositionSeriesBuilder};
pub use resample::OhlcResampler;
