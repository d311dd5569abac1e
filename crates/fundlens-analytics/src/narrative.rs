//! 정렬된 비교 시계열의 요약 문구.

use fundlens_core::{
    AlignedSeries, AnalyticsError, AnalyticsResult, CostBasis, GrowthDirection, GrowthSummary,
};
use rust_decimal::Decimal;

/// 요약 생성기.
pub struct SummaryNarrator;

impl SummaryNarrator {
    /// 첫/마지막 정렬 포인트로 성장률과 차액을 계산합니다.
    ///
    /// - 성장률 = (마지막 A - 첫 A) / 첫 A
    /// - 차액 = -(마지막 A - 마지막 B), 양수면 B에 투자하는 편이 유리
    ///
    /// 성장률이 정확히 0이면 하락으로 보고합니다.
    pub fn narrate(
        aligned: &AlignedSeries,
        investment: impl Into<String>,
        cost_basis: CostBasis,
    ) -> AnalyticsResult<GrowthSummary> {
        let (first, last) = match (aligned.first(), aligned.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(AnalyticsError::EmptyIntersection(
                    aligned.label_a.clone(),
                    aligned.label_b.clone(),
                ))
            }
        };

        if first.value_a <= Decimal::ZERO {
            return Err(AnalyticsError::InvalidPrincipal(first.value_a));
        }

        let percent_growth = (last.value_a - first.value_a) / first.value_a;

        Ok(GrowthSummary {
            investment: investment.into(),
            label_a: aligned.label_a.clone(),
            label_b: aligned.label_b.clone(),
            percent_growth,
            direction: GrowthDirection::from_growth(percent_growth),
            dollar_difference: -last.difference,
            cost_basis,
        })
    }
}
