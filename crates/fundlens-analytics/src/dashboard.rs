//! 펀드 비교 대시보드 탭.
//!
//! 각 탭은 입력값과 마지막 계산 결과를 함께 보관합니다. 입력이 바뀌면
//! [`recompute`]가 기존 탭을 수정하지 않고 새 탭을 만들어 반환합니다.
//!
//! # 탭 종류
//!
//! | 탭 | 시계열 A | 시계열 B | 매입 단가 |
//! |----|---------|---------|----------|
//! | Managed Fund vs Index | 합성 펀드 | 지수 | N/A |
//! | Stock vs Index | 주식 | 지수 | 주식 첫 종가 |
//! | Stock vs Stock 2 | 주식 | 주식 2 | 첫 주식 첫 종가 |
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! let mut dashboard = Dashboard::from_config(&config.dashboard);
//! let tab = dashboard.refresh(&provider, 0, inputs).await?;
//! println!("{}", tab.state.as_ref().unwrap().summary);
//! ```

use crate::alignment::SeriesAligner;
use crate::growth::SyntheticGrowthFitter;
use crate::narrative::SummaryNarrator;
use crate::position::PositionSeriesBuilder;
use chrono::NaiveDate;
use fundlens_core::{
    AlignedSeries, AnalyticsError, Amount, CostBasis, DashboardConfig, GrowthSummary,
    SymbolAliases,
};
use fundlens_data::{DataError, MarketDataProvider};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// 합성 펀드 시계열 레이블.
pub const MANAGED_FUND_LABEL: &str = "Managed Fund";

/// 대시보드 에러.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// 계산 에러
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// 데이터 수집 에러
    #[error(transparent)]
    Data(#[from] DataError),

    /// 존재하지 않는 탭
    #[error("알 수 없는 탭: {0}")]
    UnknownTab(usize),
}

impl DashboardError {
    /// 차트 대신 보여줄 안내 문구.
    pub fn fallback_message(&self) -> String {
        match self {
            DashboardError::Data(DataError::UnknownSymbol(symbol)) => {
                format!("Unknown symbol: {}. Please check the ticker.", symbol)
            }
            DashboardError::Data(e) if e.is_retryable() => {
                "Market data is temporarily unavailable. Please try again.".to_string()
            }
            DashboardError::Analytics(e) if e.is_no_data() => {
                "No data available for the selected date range.".to_string()
            }
            DashboardError::Analytics(e) if e.is_invalid_input() => {
                format!("Invalid input: {}", e)
            }
            other => format!("Unable to update the chart: {}", other),
        }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;

/// 탭 종류와 비교 대상.
///
/// 지수는 표시 이름("S&P 500"), 주식은 티커로 저장합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabKind {
    /// 합성 운용 펀드 vs 지수
    ManagedFundVsIndex { index: String },
    /// 주식 vs 지수
    StockVsIndex { stock: String, index: String },
    /// 주식 vs 주식
    StockVsStock { stock: String, other: String },
}

impl TabKind {
    /// 데이터를 조회해야 하는 이름 목록 (표시 이름).
    pub fn instruments(&self) -> Vec<&str> {
        match self {
            TabKind::ManagedFundVsIndex { index } => vec![index.as_str()],
            TabKind::StockVsIndex { stock, index } => vec![stock.as_str(), index.as_str()],
            TabKind::StockVsStock { stock, other } => vec![stock.as_str(), other.as_str()],
        }
    }
}

/// 탭 입력값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabInputs {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub principal: Amount,
    /// 운용 펀드 탭에서만 사용
    pub current_value: Amount,
}

impl From<&DashboardConfig> for TabInputs {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            start: config.start_date,
            end: config.end_date,
            principal: config.principal,
            current_value: config.current_value,
        }
    }
}

/// 마지막 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabState {
    /// 조정된 시작일 (모든 심볼의 데이터가 존재하는 첫날 이후)
    pub effective_start: NaiveDate,
    pub aligned: AlignedSeries,
    pub summary: GrowthSummary,
    /// 합성 펀드의 연 성장률 (운용 펀드 탭만)
    pub fitted_rate: Option<f64>,
}

/// 대시보드 탭.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTab {
    pub title: String,
    pub kind: TabKind,
    pub inputs: TabInputs,
    /// 지수 선택 목록 (표시 이름 → 제공자 심볼)
    pub aliases: SymbolAliases,
    /// 아직 계산하지 않았으면 `None`
    pub state: Option<TabState>,
}

impl DashboardTab {
    pub fn new(title: impl Into<String>, kind: TabKind, inputs: TabInputs) -> Self {
        Self {
            title: title.into(),
            kind,
            inputs,
            aliases: SymbolAliases::default(),
            state: None,
        }
    }

    pub fn with_aliases(mut self, aliases: SymbolAliases) -> Self {
        self.aliases = aliases;
        self
    }
}

/// 새 입력값으로 탭을 다시 계산합니다.
///
/// 요청한 시작일이 탭의 어떤 심볼의 첫 데이터 날짜보다 이르면 그 날짜로
/// 당겨 올립니다. 반환된 탭의 `inputs.start`도 조정된 날짜입니다.
#[instrument(skip(provider, tab, inputs), fields(tab = %tab.title))]
pub async fn recompute<P>(
    provider: &P,
    tab: &DashboardTab,
    inputs: TabInputs,
) -> DashboardResult<DashboardTab>
where
    P: MarketDataProvider + ?Sized,
{
    let earliest = earliest_common_date(provider, tab).await?;
    let effective_start = inputs.start.max(earliest);
    if effective_start != inputs.start {
        info!(
            requested = %inputs.start,
            effective = %effective_start,
            "시작일을 데이터 시작일로 조정"
        );
    }
    if effective_start >= inputs.end {
        return Err(AnalyticsError::InvalidDateRange {
            start: effective_start,
            end: inputs.end,
        }
        .into());
    }

    let inputs = TabInputs {
        start: effective_start,
        ..inputs
    };

    let state = match &tab.kind {
        TabKind::ManagedFundVsIndex { index } => {
            let prices = fetch(provider, &tab.aliases, index, &inputs).await?;
            let index_position =
                PositionSeriesBuilder::build(index.as_str(), inputs.principal, &prices)?;
            let fit = SyntheticGrowthFitter::fit(
                MANAGED_FUND_LABEL,
                inputs.principal,
                inputs.current_value,
                &index_position.series,
            )?;
            debug!(rate = ?fit.annual_rate, years = fit.years, "합성 펀드 피팅");

            let aligned = SeriesAligner::align(&fit.series, &index_position.series)?;
            let summary =
                SummaryNarrator::narrate(&aligned, "managed fund", CostBasis::not_applicable())?;

            TabState {
                effective_start,
                aligned,
                summary,
                fitted_rate: fit.annual_rate,
            }
        }
        TabKind::StockVsIndex {
            stock,
            index: other,
        }
        | TabKind::StockVsStock { stock, other } => {
            let (stock_prices, other_prices) = tokio::try_join!(
                fetch(provider, &tab.aliases, stock, &inputs),
                fetch(provider, &tab.aliases, other, &inputs),
            )?;

            let stock_position =
                PositionSeriesBuilder::build(stock.as_str(), inputs.principal, &stock_prices)?;
            let other_position =
                PositionSeriesBuilder::build(other.as_str(), inputs.principal, &other_prices)?;

            let aligned = SeriesAligner::align(&stock_position.series, &other_position.series)?;
            let summary = SummaryNarrator::narrate(
                &aligned,
                format!("{} investment", stock),
                CostBasis::PerShare(stock_position.cost_basis),
            )?;

            TabState {
                effective_start,
                aligned,
                summary,
                fitted_rate: None,
            }
        }
    };

    info!(points = state.aligned.len(), direction = %state.summary.direction, "탭 재계산 완료");

    Ok(DashboardTab {
        title: tab.title.clone(),
        kind: tab.kind.clone(),
        inputs,
        aliases: tab.aliases.clone(),
        state: Some(state),
    })
}

/// 탭의 모든 심볼에 데이터가 있는 첫 날짜.
async fn earliest_common_date<P>(provider: &P, tab: &DashboardTab) -> DashboardResult<NaiveDate>
where
    P: MarketDataProvider + ?Sized,
{
    let mut earliest = NaiveDate::MIN;
    for name in tab.kind.instruments() {
        let symbol = tab.aliases.resolve(name);
        let first = provider.first_available_date(&symbol).await?;
        debug!(symbol = %symbol, first = %first, "첫 데이터 날짜");
        earliest = earliest.max(first);
    }
    Ok(earliest)
}

async fn fetch<P>(
    provider: &P,
    aliases: &SymbolAliases,
    name: &str,
    inputs: &TabInputs,
) -> Result<Vec<fundlens_core::PricePoint>, DataError>
where
    P: MarketDataProvider + ?Sized,
{
    let symbol = aliases.resolve(name);
    let prices = provider
        .fetch_history(&symbol, inputs.start, inputs.end)
        .await?;
    if prices.is_empty() {
        warn!(symbol = %symbol, start = %inputs.start, end = %inputs.end, "가격 이력 없음");
    }
    Ok(prices)
}

/// 기본 탭 세 개로 구성된 대시보드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    tabs: Vec<DashboardTab>,
}

impl Dashboard {
    /// 설정의 기본값으로 세 탭을 만듭니다 (계산 전 상태).
    pub fn default_tabs(config: &DashboardConfig) -> Vec<DashboardTab> {
        let inputs = TabInputs::from(config);
        let aliases = config.index_aliases.clone();

        vec![
            DashboardTab::new(
                "Managed Fund vs Index",
                TabKind::ManagedFundVsIndex {
                    index: config.index.clone(),
                },
                inputs.clone(),
            )
            .with_aliases(aliases.clone()),
            DashboardTab::new(
                "Stock vs Index",
                TabKind::StockVsIndex {
                    stock: config.stock.clone(),
                    index: config.index.clone(),
                },
                inputs.clone(),
            )
            .with_aliases(aliases.clone()),
            DashboardTab::new(
                "Stock vs Stock 2",
                TabKind::StockVsStock {
                    stock: config.stock.clone(),
                    other: config.other_stock.clone(),
                },
                inputs,
            )
            .with_aliases(aliases),
        ]
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            tabs: Self::default_tabs(config),
        }
    }

    pub fn tabs(&self) -> &[DashboardTab] {
        &self.tabs
    }

    pub fn tab(&self, index: usize) -> DashboardResult<&DashboardTab> {
        self.tabs.get(index).ok_or(DashboardError::UnknownTab(index))
    }

    /// 탭 하나를 새 입력값으로 다시 계산해 교체합니다.
    ///
    /// 실패하면 기존 탭은 그대로 남습니다.
    pub async fn refresh<P>(
        &mut self,
        provider: &P,
        index: usize,
        inputs: TabInputs,
    ) -> DashboardResult<&DashboardTab>
    where
        P: MarketDataProvider + ?Sized,
    {
        let updated = recompute(provider, self.tab(index)?, inputs).await?;
        let slot = self
            .tabs
            .get_mut(index)
            .ok_or(DashboardError::UnknownTab(index))?;
        *slot = updated;
        Ok(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_tabs() {
        let tabs = Dashboard::default_tabs(&DashboardConfig::default());

        let titles: Vec<_> = tabs.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Managed Fund vs Index", "Stock vs Index", "Stock vs Stock 2"]
        );
        assert_eq!(
            tabs[2].kind,
            TabKind::StockVsStock {
                stock: "AMZN".to_string(),
                other: "GOOG".to_string()
            }
        );
        assert_eq!(tabs[0].inputs.principal, dec!(1000));
        assert_eq!(tabs[0].inputs.current_value, dec!(3000));
        assert!(tabs.iter().all(|t| t.state.is_none()));
    }

    #[test]
    fn test_instruments() {
        let kind = TabKind::StockVsIndex {
            stock: "AMZN".to_string(),
            index: "S&P 500".to_string(),
        };
        assert_eq!(kind.instruments(), vec!["AMZN", "S&P 500"]);
    }

    #[test]
    fn test_fallback_message() {
        let err = DashboardError::from(DataError::UnknownSymbol("ZZZZ".to_string()));
        assert_eq!(
            err.fallback_message(),
            "Unknown symbol: ZZZZ. Please check the ticker."
        );

        let err = DashboardError::from(AnalyticsError::EmptyIntersection(
            "AMZN".to_string(),
            "GOOG".to_string(),
        ));
        assert_eq!(
            err.fallback_message(),
            "No data available for the selected date range."
        );
    }
}
