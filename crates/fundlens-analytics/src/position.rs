//! 포지션 시계열 생성.
//!
//! 원금으로 첫 거래일 종가에 매수했다고 가정하고, 주식 분할을 반영한
//! 보유 수량 × 종가로 일별 평가 금액을 계산합니다.
//!
//! ```text
//! shares[0] = principal / close[0]
//! shares[i] = shares[i-1] * (1 + split_ratio[i])
//! value[i]  = shares[i] * close[i]
//! ```

use fundlens_core::{
    AnalyticsError, AnalyticsResult, Amount, PositionPoint, PositionSeries, Price, PricePoint,
    Shares,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 생성된 포지션과 매입 정보.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltPosition {
    /// 일별 평가 금액
    pub series: PositionSeries,
    /// 매입 단가 (첫 종가)
    pub cost_basis: Price,
    /// 마지막 날 보유 수량 (분할 반영)
    pub final_shares: Shares,
}

/// 포지션 시계열 빌더.
pub struct PositionSeriesBuilder;

impl PositionSeriesBuilder {
    /// 가격 이력과 원금으로 포지션 시계열을 생성합니다.
    ///
    /// # 에러
    ///
    /// - `EmptySeries`: 가격 이력이 비어 있음
    /// - `InvalidPrincipal`: 원금이 0 이하
    /// - `InvalidPrice`: 첫 종가가 0 이하이거나 음수 종가가 있음
    pub fn build(
        label: impl Into<String>,
        principal: Amount,
        prices: &[PricePoint],
    ) -> AnalyticsResult<BuiltPosition> {
        let label = label.into();
        let first = prices
            .first()
            .ok_or_else(|| AnalyticsError::EmptySeries(label.clone()))?;

        if principal <= Decimal::ZERO {
            return Err(AnalyticsError::InvalidPrincipal(principal));
        }
        if first.close <= Decimal::ZERO {
            return Err(AnalyticsError::InvalidPrice {
                date: first.date,
                price: first.close,
            });
        }

        let cost_basis = first.close;
        let mut shares = principal / cost_basis;
        let mut points = Vec::with_capacity(prices.len());

        for (i, price) in prices.iter().enumerate() {
            if price.close < Decimal::ZERO {
                return Err(AnalyticsError::InvalidPrice {
                    date: price.date,
                    price: price.close,
                });
            }
            // 첫날 분할은 매수 이전으로 간주
            if i > 0 && price.has_split() {
                shares *= Decimal::ONE + price.split_ratio;
            }
            points.push(PositionPoint {
                date: price.date,
                value: shares * price.close,
            });
        }

        Ok(BuiltPosition {
            series: PositionSeries::new(label, points),
            cost_basis,
            final_shares: shares,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, m, d).unwrap()
    }

    #[test]
    fn test_build_without_splits() {
        let prices = vec![
            PricePoint::from_close(date(1, 2), dec!(100)),
            PricePoint::from_close(date(1, 3), dec!(110)),
            PricePoint::from_close(date(1, 6), dec!(90)),
        ];

        let built = PositionSeriesBuilder::build("AAPL", dec!(1000), &prices).unwrap();

        assert_eq!(built.cost_basis, dec!(100));
        assert_eq!(built.final_shares, dec!(10));
        let values: Vec<_> = built.series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![dec!(1000), dec!(1100), dec!(900)]);
        assert_eq!(built.series.start_date(), Some(date(1, 2)));
    }

    #[test]
    fn test_build_applies_split() {
        // 8월 31일 4:1 분할
        let prices = vec![
            PricePoint::from_close(date(8, 28), dec!(500)),
            PricePoint::from_close(date(8, 31), dec!(125)).with_split_ratio(dec!(3)),
            PricePoint::from_close(date(9, 1), dec!(130)),
        ];

        let built = PositionSeriesBuilder::build("AAPL", dec!(1000), &prices).unwrap();

        assert_eq!(built.final_shares, dec!(8));
        assert_eq!(built.series.points[1].value, dec!(1000));
        assert_eq!(built.series.points[2].value, dec!(1040));
    }

    #[test]
    fn test_build_empty() {
        let err = PositionSeriesBuilder::build("AAPL", dec!(1000), &[]).unwrap_err();
        assert_eq!(err, AnalyticsError::EmptySeries("AAPL".to_string()));
    }

    #[test]
    fn test_build_rejects_bad_inputs() {
        let prices = vec![PricePoint::from_close(date(1, 2), dec!(100))];
        assert!(matches!(
            PositionSeriesBuilder::build("AAPL", dec!(0), &prices),
            Err(AnalyticsError::InvalidPrincipal(_))
        ));

        let zero = vec![PricePoint::from_close(date(1, 2), dec!(0))];
        assert!(matches!(
            PositionSeriesBuilder::build("AAPL", dec!(1000), &zero),
            Err(AnalyticsError::InvalidPrice { .. })
        ));
    }
}
