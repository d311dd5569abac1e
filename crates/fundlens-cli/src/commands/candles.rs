//! 틱 데이터 캔들 집계.

use super::output::{format_json, tail, OutputFormat};
use anyhow::{Context, Result};
use fundlens_analytics::{CandleChart, CandleStyler, CandleView};
use fundlens_core::{CandleConfig, CandleKind};
use fundlens_data::tick_source_for;
use std::time::Duration;
use tracing::info;

/// 차트 제목 (틱 CSV의 가격 컬럼).
const CHART_TITLE: &str = "RateBid";

/// 캔들 집계 설정.
#[derive(Debug, Clone)]
pub struct CandlesConfig {
    /// 틱 CSV 경로 또는 URL
    pub source: String,
    /// 슬라이더 위치 (0 = 1min)
    pub timeframe_index: usize,
    /// 모든 타임프레임 출력
    pub all: bool,
    /// 타임프레임마다 마지막 N개만 출력 (0 = 전체)
    pub limit: usize,
    pub timeout: Duration,
}

/// 틱을 읽어 선택한 타임프레임의 캔들을 만듭니다.
pub async fn run_candles(config: &CandlesConfig, style: &CandleConfig) -> Result<Vec<CandleView>> {
    let source = tick_source_for(&config.source, config.timeout);
    info!(source = %source.describe(), "Loading ticks");

    let ticks = source
        .load_ticks()
        .await
        .with_context(|| format!("Failed to load ticks from {}", source.describe()))?;

    let chart = CandleChart::new(CHART_TITLE, ticks, CandleStyler::from_config(style))?;
    info!(ticks = chart.tick_count(), "Resampling");

    let views = if config.all {
        chart.select_all()?
    } else {
        vec![chart.select(config.timeframe_index)?]
    };

    Ok(views)
}

/// 캔들 출력 문자열.
pub fn render(views: &[CandleView], format: OutputFormat, limit: usize) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(views, limit)),
        OutputFormat::Json => {
            let trimmed: Vec<CandleView> = views
                .iter()
                .map(|view| CandleView {
                    candles: tail(&view.candles, limit).to_vec(),
                    ..view.clone()
                })
                .collect();
            format_json(&trimmed)
        }
    }
}

/// 테이블 형식 출력.
fn format_table(views: &[CandleView], limit: usize) -> String {
    let mut output = String::new();

    for view in views {
        output.push_str(&format!(
            "{} ({} candles)\n",
            view.title,
            view.candles.len()
        ));
        output.push_str(&format!(
            "{:<20} {:>10} {:>10} {:>10} {:>10} {:<5} {:<8}\n",
            "TIME", "OPEN", "HIGH", "LOW", "CLOSE", "KIND", "COLOR"
        ));
        output.push_str(&"-".repeat(79));
        output.push('\n');

        for candle in tail(&view.candles, limit) {
            let bar = &candle.bar;
            output.push_str(&format!(
                "{:<20} {:>10} {:>10} {:>10} {:>10} {:<5} {:<8}\n",
                bar.period_start.format("%Y-%m-%d %H:%M:%S").to_string(),
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                match candle.kind {
                    CandleKind::Bull => "bull",
                    CandleKind::Bear => "bear",
                },
                candle.color
            ));
        }
        output.push('\n');
    }

    output
}
