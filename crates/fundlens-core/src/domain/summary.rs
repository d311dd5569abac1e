//! 성장 요약과 안내 문구.

use crate::types::{Amount, DecimalExt, Price};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 평가 금액의 변동 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthDirection {
    /// 상승
    Appreciated,
    /// 하락 (변동 없음 포함)
    Depreciated,
}

impl GrowthDirection {
    /// 성장률로 방향을 판정합니다. 0은 하락으로 분류됩니다.
    pub fn from_growth(growth: Decimal) -> Self {
        if growth > Decimal::ZERO {
            GrowthDirection::Appreciated
        } else {
            GrowthDirection::Depreciated
        }
    }

    /// 문구에 쓰이는 동사.
    pub fn verb(&self) -> &'static str {
        match self {
            GrowthDirection::Appreciated => "appreciated",
            GrowthDirection::Depreciated => "depreciated",
        }
    }
}

impl fmt::Display for GrowthDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// 매입 단가 표시.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostBasis {
    /// 주당 매입 가격
    PerShare(Price),
    /// 고정 레이블 (예: 운용 펀드의 "N/A")
    Label(String),
}

impl CostBasis {
    /// 매입 단가가 없는 투자 (운용 펀드).
    pub fn not_applicable() -> Self {
        CostBasis::Label("N/A".to_string())
    }
}

impl fmt::Display for CostBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostBasis::PerShare(price) => write!(f, "{:.2}/share", price.round_dp(2)),
            CostBasis::Label(label) => f.write_str(label),
        }
    }
}

/// 비교 결과 요약.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSummary {
    /// 투자 설명 (예: "managed fund", "AMZN investment")
    pub investment: String,
    /// 첫 번째 시계열 레이블
    pub label_a: String,
    /// 비교 대상 레이블
    pub label_b: String,
    /// 첫 번째 시계열의 성장률 (1.0 = 100%)
    pub percent_growth: Decimal,
    /// 변동 방향
    pub direction: GrowthDirection,
    /// 비교 대상에 투자했을 때 더 얻었을 금액 (양수 = 비교 대상이 유리)
    pub dollar_difference: Amount,
    /// 매입 단가
    pub cost_basis: CostBasis,
}

impl GrowthSummary {
    /// 안내 문구를 줄 단위로 반환합니다.
    pub fn lines(&self) -> [String; 3] {
        [
            format!(
                "Your {} {} {}.",
                self.investment,
                self.direction,
                self.percent_growth.to_whole_percent_string()
            ),
            format!(
                "If you invested in {}, you would have {}.",
                self.label_b,
                self.dollar_difference.to_signed_amount_string()
            ),
            format!("Cost basis for {}: {}.", self.label_a, self.cost_basis),
        ]
    }

    /// HTML 텍스트 위젯용 문구 (`<br>` 구분).
    pub fn to_html(&self) -> String {
        self.lines().join("<br>")
    }
}

impl fmt::Display for GrowthSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn summary() -> GrowthSummary {
        GrowthSummary {
            investment: "AMZN investment".to_string(),
            label_a: "AMZN".to_string(),
            label_b: "S&P 500".to_string(),
            percent_growth: dec!(2),
            direction: GrowthDirection::Appreciated,
            dollar_difference: dec!(-512.3),
            cost_basis: CostBasis::PerShare(dec!(671.256)),
        }
    }

    #[test]
    fn test_direction_zero_is_depreciated() {
        assert_eq!(GrowthDirection::from_growth(dec!(0)), GrowthDirection::Depreciated);
        assert_eq!(GrowthDirection::from_growth(dec!(0.01)), GrowthDirection::Appreciated);
        assert_eq!(GrowthDirection::from_growth(dec!(-0.5)), GrowthDirection::Depreciated);
    }

    #[test]
    fn test_cost_basis_display() {
        assert_eq!(CostBasis::PerShare(dec!(671.256)).to_string(), "671.26/share");
        assert_eq!(CostBasis::not_applicable().to_string(), "N/A");
    }

    #[test]
    fn test_summary_lines() {
        let lines = summary().lines();
        assert_eq!(lines[0], "Your AMZN investment appreciated 200%.");
        assert_eq!(lines[1], "If you invested in S&P 500, you would have -512.30.");
        assert_eq!(lines[2], "Cost basis for AMZN: 671.26/share.");
    }

    #[test]
    fn test_summary_html() {
        let html = summary().to_html();
        assert_eq!(html.matches("<br>").count(), 2);
        assert!(html.starts_with("Your AMZN investment"));
    }
}
