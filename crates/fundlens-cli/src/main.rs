//! fundlens CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 운용 펀드 vs S&P 500 (기본값: 원금 1000, 현재 가치 3000)
//! fundlens compare --kind managed
//!
//! # AMZN vs DJI, 2018년부터
//! fundlens compare --kind stock-index -a AMZN -b DJI --from 2018-01-02
//!
//! # 틱 CSV를 15분봉으로
//! fundlens candles --source data/may2020.csv --timeframe-index 2 --limit 20
//!
//! # 첫 데이터 날짜
//! fundlens earliest --symbol "S&P 500"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fundlens_cli::commands::candles::{self, run_candles, CandlesConfig};
use fundlens_cli::commands::compare::{self, run_compare, CompareConfig, CompareKind};
use fundlens_cli::commands::earliest::run_earliest;
use fundlens_cli::commands::output::OutputFormat;
use fundlens_cli::commands::parse_date;
use fundlens_core::{init_logging, AppConfig, LogConfig};
use fundlens_data::YahooHistoryProvider;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fundlens")]
#[command(about = "Fund comparison and candlestick dashboards", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (없으면 기본값 + 환경 변수)
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 투자 성과 비교 (운용 펀드/주식 vs 지수/주식)
    Compare {
        /// 비교 종류 (managed, stock-index, stock-stock)
        #[arg(short, long, default_value = "managed")]
        kind: String,

        /// 첫 번째 주식 티커 (기본: AMZN)
        #[arg(short = 'a', long)]
        symbol_a: Option<String>,

        /// 비교 대상 지수 이름 또는 두 번째 주식 티커
        #[arg(short = 'b', long)]
        symbol_b: Option<String>,

        /// 시작 날짜 (YYYY-MM-DD)
        #[arg(short = 'f', long)]
        from: Option<String>,

        /// 종료 날짜 (YYYY-MM-DD)
        #[arg(short, long)]
        to: Option<String>,

        /// 원금
        #[arg(short, long)]
        principal: Option<String>,

        /// 운용 펀드의 현재 가치
        #[arg(long)]
        current_value: Option<String>,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 틱 데이터를 OHLC 캔들로 집계
    Candles {
        /// 틱 CSV 경로 또는 URL (기본: 설정 파일)
        #[arg(short, long)]
        source: Option<String>,

        /// 타임프레임 슬라이더 위치 (0=1min, 1=5min, 2=15min, 3=30min, 4=1h)
        #[arg(short = 'i', long, conflicts_with = "all")]
        timeframe_index: Option<usize>,

        /// 모든 타임프레임 출력
        #[arg(long)]
        all: bool,

        /// 타임프레임마다 마지막 N개만 출력 (0 = 전체)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// 출력 형식 (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 심볼의 첫 데이터 날짜 조회
    Earliest {
        /// 종목 티커 또는 지수 이름 (예: AMZN, "S&P 500")
        #[arg(short, long)]
        symbol: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config: {}", cli.config))?;

    init_logging(&LogConfig::from(&config.logging))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let timeout = Duration::from_secs(config.provider.timeout_secs);

    match cli.command {
        Commands::Compare {
            kind,
            symbol_a,
            symbol_b,
            from,
            to,
            principal,
            current_value,
            format,
        } => {
            let format = OutputFormat::parse(&format)?;
            let compare_config = CompareConfig {
                kind: CompareKind::parse(&kind)?,
                symbol_a,
                symbol_b,
                from: from.as_deref().map(parse_date).transpose()?,
                to: to.as_deref().map(parse_date).transpose()?,
                principal: principal.as_deref().map(parse_amount).transpose()?,
                current_value: current_value.as_deref().map(parse_amount).transpose()?,
            };

            let provider = YahooHistoryProvider::new(timeout)
                .context("Failed to create Yahoo Finance provider")?;

            match run_compare(&compare_config, &config.dashboard, &provider).await {
                Ok(tab) => {
                    println!("{}", compare::render(&tab, format)?);
                }
                Err(e) => {
                    error!("Compare failed: {}", e);
                    eprintln!("{}", e.fallback_message());
                    return Err(e.into());
                }
            }
        }

        Commands::Candles {
            source,
            timeframe_index,
            all,
            limit,
            format,
        } => {
            let format = OutputFormat::parse(&format)?;
            let candles_config = CandlesConfig {
                source: source.unwrap_or_else(|| config.candles.source.clone()),
                timeframe_index: timeframe_index.unwrap_or(config.candles.default_timeframe_index),
                all,
                limit,
                timeout,
            };

            match run_candles(&candles_config, &config.candles).await {
                Ok(views) => {
                    info!(views = views.len(), "Candles ready");
                    println!("{}", candles::render(&views, format, limit)?);
                }
                Err(e) => {
                    error!("Candles failed: {:#}", e);
                    eprintln!("Unable to build the candlestick chart: {}", e);
                    return Err(e);
                }
            }
        }

        Commands::Earliest { symbol } => {
            let provider = YahooHistoryProvider::new(timeout)
                .context("Failed to create Yahoo Finance provider")?;

            let (resolved, first) =
                run_earliest(&symbol, &config.dashboard.index_aliases, &provider)
                    .await
                    .with_context(|| format!("Failed to look up {}", symbol))?;
            println!("{} ({}): {}", symbol, resolved, first);
        }
    }

    Ok(())
}

/// 금액 문자열 파싱.
fn parse_amount(s: &str) -> Result<Decimal> {
    Decimal::from_str(s.trim()).with_context(|| format!("Invalid amount: {}", s))
}
