//! 심볼의 첫 데이터 날짜 조회.

use chrono::NaiveDate;
use fundlens_core::SymbolAliases;
use fundlens_data::{MarketDataProvider, Result};
use tracing::info;

/// 표시 이름(지수 별칭 포함)을 해석해 첫 데이터 날짜를 조회합니다.
pub async fn run_earliest<P>(
    name: &str,
    aliases: &SymbolAliases,
    provider: &P,
) -> Result<(String, NaiveDate)>
where
    P: MarketDataProvider + ?Sized,
{
    let symbol = aliases.resolve(name);
    let first = provider.first_available_date(&symbol).await?;
    info!(symbol = %symbol, first = %first, "Earliest date");
    Ok((symbol, first))
}
