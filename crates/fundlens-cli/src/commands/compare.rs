//! 비교 탭 계산.

use super::output::{format_json, OutputFormat};
use anyhow::Result;
use chrono::NaiveDate;
use fundlens_analytics::{recompute, DashboardResult, DashboardTab, TabInputs, TabKind};
use fundlens_core::{Amount, DashboardConfig};
use fundlens_data::MarketDataProvider;
use tracing::info;

/// 비교 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareKind {
    /// 운용 펀드 vs 지수
    Managed,
    /// 주식 vs 지수
    StockIndex,
    /// 주식 vs 주식
    StockStock,
}

impl CompareKind {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "managed" => Ok(Self::Managed),
            "stock-index" => Ok(Self::StockIndex),
            "stock-stock" => Ok(Self::StockStock),
            _ => Err(anyhow::anyhow!(
                "Invalid kind: {}. Use: managed, stock-index, stock-stock",
                s
            )),
        }
    }

    fn title(&self) -> &'static str {
        match self {
            CompareKind::Managed => "Managed Fund vs Index",
            CompareKind::StockIndex => "Stock vs Index",
            CompareKind::StockStock => "Stock vs Stock 2",
        }
    }
}

/// 비교 설정. 지정하지 않은 값은 대시보드 기본값을 씁니다.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub kind: CompareKind,
    /// 첫 번째 주식 (운용 펀드 비교에서는 무시)
    pub symbol_a: Option<String>,
    /// 비교 대상 지수 또는 두 번째 주식
    pub symbol_b: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub principal: Option<Amount>,
    pub current_value: Option<Amount>,
}

impl CompareConfig {
    /// 기본값을 채운 탭을 만듭니다.
    pub fn to_tab(&self, defaults: &DashboardConfig) -> DashboardTab {
        let stock = self.symbol_a.clone().unwrap_or_else(|| defaults.stock.clone());
        let kind = match self.kind {
            CompareKind::Managed => TabKind::ManagedFundVsIndex {
                index: self.symbol_b.clone().unwrap_or_else(|| defaults.index.clone()),
            },
            CompareKind::StockIndex => TabKind::StockVsIndex {
                stock,
                index: self.symbol_b.clone().unwrap_or_else(|| defaults.index.clone()),
            },
            CompareKind::StockStock => TabKind::StockVsStock {
                stock,
                other: self
                    .symbol_b
                    .clone()
                    .unwrap_or_else(|| defaults.other_stock.clone()),
            },
        };

        DashboardTab::new(self.kind.title(), kind, self.to_inputs(defaults))
            .with_aliases(defaults.index_aliases.clone())
    }

    fn to_inputs(&self, defaults: &DashboardConfig) -> TabInputs {
        TabInputs {
            start: self.from.unwrap_or(defaults.start_date),
            end: self.to.unwrap_or(defaults.end_date),
            principal: self.principal.unwrap_or(defaults.principal),
            current_value: self.current_value.unwrap_or(defaults.current_value),
        }
    }
}

/// 비교 탭을 계산합니다.
pub async fn run_compare<P>(
    config: &CompareConfig,
    defaults: &DashboardConfig,
    provider: &P,
) -> DashboardResult<DashboardTab>
where
    P: MarketDataProvider + ?Sized,
{
    let tab = config.to_tab(defaults);
    let inputs = tab.inputs.clone();

    info!(
        title = %tab.title,
        start = %inputs.start,
        end = %inputs.end,
        principal = %inputs.principal,
        "Comparing"
    );

    recompute(provider, &tab, inputs).await
}

/// 계산된 탭 출력 문자열.
pub fn render(tab: &DashboardTab, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(tab)),
        OutputFormat::Json => format_json(tab),
    }
}

/// 테이블 형식 출력.
fn format_table(tab: &DashboardTab) -> String {
    let mut output = String::new();
    let Some(state) = tab.state.as_ref() else {
        output.push_str(&format!("{}: not computed\n", tab.title));
        return output;
    };
    let aligned = &state.aligned;

    output.push_str(&format!(
        "{} ({} ~ {})\n\n",
        tab.title, state.effective_start, tab.inputs.end
    ));

    // 헤더
    output.push_str(&format!(
        "{:<12} {:>16} {:>16} {:>14}\n",
        "DATE",
        truncate(&aligned.label_a, 16),
        truncate(&aligned.label_b, 16),
        "DIFFERENCE"
    ));
    output.push_str(&"-".repeat(61));
    output.push('\n');

    // 데이터
    for pair in &aligned.pairs {
        output.push_str(&format!(
            "{:<12} {:>16.2} {:>16.2} {:>14.2}\n",
            pair.date.to_string(),
            pair.value_a,
            pair.value_b,
            pair.difference
        ));
    }

    output.push('\n');
    if let Some(rate) = state.fitted_rate {
        output.push_str(&format!("Fitted annual rate: {:.2}%\n", rate * 100.0));
    }
    output.push_str(&state.summary.to_string());
    output.push('\n');

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}
