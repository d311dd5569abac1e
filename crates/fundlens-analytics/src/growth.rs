//! 합성 성장 시계열.
//!
//! 원금과 현재 가치만 알려진 운용 펀드를 연복리 성장 곡선으로 근사합니다.
//!
//! ```text
//! days  = end - start
//! ratio = current / principal
//! v(d)  = principal * ratio^(offset(d) / days)
//! r     = ratio^(365 / days) - 1
//! ```
//!
//! `v(d)`는 `principal * (1 + r)^(offset(d) / 365)`와 같은 값이지만 연 성장률을
//! 거치지 않으므로 기간이 짧아도 배율이 항상 1과 `ratio` 사이에 머뭅니다.
//!
//! 합성 값은 기준 시계열이 가진 날짜에만 생성되므로, 이후 정렬 단계에서
//! 기준 시계열과 점 대 점으로 조인됩니다.

use fundlens_core::{AnalyticsError, AnalyticsResult, Amount, PositionPoint, PositionSeries};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 연 환산 일수.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// 합성 값의 소수 자릿수.
const VALUE_SCALE: u32 = 8;

/// 피팅 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthFit {
    /// 연 성장률 (0.2465 = 24.65%).
    ///
    /// 1년보다 짧은 기간을 큰 배율로 연 환산하면 f64 범위를 벗어나므로
    /// 그때는 `None`입니다. 합성 시계열은 영향을 받지 않습니다.
    pub annual_rate: Option<f64>,
    /// 경과 연수 (일수 / 365)
    pub years: f64,
    /// 기준 시계열 날짜에 맞춘 합성 시계열
    pub series: PositionSeries,
}

/// 연복리 성장 곡선 피터.
pub struct SyntheticGrowthFitter;

impl SyntheticGrowthFitter {
    /// 기준 시계열의 기간에 맞춰 원금 → 현재 가치 성장 곡선을 합성합니다.
    ///
    /// 시작일 값은 정확히 원금, 종료일 값은 정확히 현재 가치입니다.
    ///
    /// # 에러
    ///
    /// - `EmptySeries`: 기준 시계열이 비어 있음
    /// - `InvalidDateRange`: 시작일과 종료일이 같음
    /// - `InvalidPrincipal`: 원금이 0 이하
    /// - `InvalidCurrentValue`: 현재 가치가 0 이하
    /// - `NonFiniteValue`: 배율이나 합성 값을 표현할 수 없음
    pub fn fit(
        label: impl Into<String>,
        principal: Amount,
        current_value: Amount,
        reference: &PositionSeries,
    ) -> AnalyticsResult<GrowthFit> {
        let (start, end) = match (reference.start_date(), reference.end_date()) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(AnalyticsError::EmptySeries(reference.label.clone())),
        };

        let days = (end - start).num_days();
        if days <= 0 {
            return Err(AnalyticsError::InvalidDateRange { start, end });
        }
        if principal <= Decimal::ZERO {
            return Err(AnalyticsError::InvalidPrincipal(principal));
        }
        if current_value <= Decimal::ZERO {
            return Err(AnalyticsError::InvalidCurrentValue(current_value));
        }

        let ratio = current_value
            .checked_div(principal)
            .and_then(|r| r.to_f64())
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or_else(|| {
                AnalyticsError::NonFiniteValue(format!("{} / {}", current_value, principal))
            })?;

        let years = days as f64 / DAYS_PER_YEAR;
        let annual_rate = Some((ratio.ln() / years).exp_m1()).filter(|r| r.is_finite());

        let points = reference
            .dates()
            .map(|date| {
                let offset = (date - start).num_days();
                let value = match offset {
                    0 => principal,
                    o if o == days => current_value,
                    o => Self::value_at(principal, ratio, o as f64 / days as f64)?,
                };
                Ok(PositionPoint { date, value })
            })
            .collect::<AnalyticsResult<Vec<_>>>()?;

        Ok(GrowthFit {
            annual_rate,
            years,
            series: PositionSeries::new(label, points),
        })
    }

    /// 기간 중 `fraction` (0..1) 지점의 합성 값.
    fn value_at(principal: Amount, ratio: f64, fraction: f64) -> AnalyticsResult<Amount> {
        let factor = ratio.powf(fraction);
        let factor = Decimal::from_f64(factor)
            .ok_or_else(|| AnalyticsError::NonFiniteValue(format!("{}^{}", ratio, fraction)))?;
        principal
            .checked_mul(factor)
            .map(|v| v.round_dp(VALUE_SCALE))
            .ok_or_else(|| AnalyticsError::NonFiniteValue(format!("{} * {}", principal, factor)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn reference(dates: &[NaiveDate]) -> PositionSeries {
        PositionSeries::new(
            "S&P 500",
            dates
                .iter()
                .map(|&date| PositionPoint {
                    date,
                    value: dec!(1000),
                })
                .collect(),
        )
    }

    fn close_to(a: Decimal, b: Decimal) -> bool {
        (a - b).abs() < dec!(0.0001)
    }

    #[test]
    fn test_fit_endpoints() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let fit = SyntheticGrowthFitter::fit(
            "managed fund",
            dec!(1000),
            dec!(2000),
            &reference(&[start, end]),
        )
        .unwrap();

        assert_eq!(fit.series.points[0].value, dec!(1000));
        assert!(close_to(fit.series.points[1].value, dec!(2000)));
        assert!((fit.years - 731.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_follows_reference_dates() {
        // 주말이 빠진 기준 시계열
        let dates = [
            NaiveDate::from_ymd_opt(2021, 5, 7).unwrap(),
            NaiveDate::from_ymd_opt(2021, 5, 10).unwrap(),
            NaiveDate::from_ymd_opt(2021, 5, 11).unwrap(),
        ];
        let fit =
            SyntheticGrowthFitter::fit("fund", dec!(1000), dec!(1001), &reference(&dates)).unwrap();

        let fitted: Vec<_> = fit.series.dates().collect();
        assert_eq!(fitted, dates.to_vec());
        assert!(fit.series.points[1].value > dec!(1000));
        assert!(fit.series.points[1].value < dec!(1001));
    }

    #[test]
    fn test_fit_one_day_span_with_large_moves() {
        let day = NaiveDate::from_ymd_opt(2021, 5, 6).unwrap();
        let next = day.succ_opt().unwrap();

        let up = SyntheticGrowthFitter::fit("fund", dec!(1000), dec!(10000), &reference(&[day, next]))
            .unwrap();
        assert_eq!(up.series.points[0].value, dec!(1000));
        assert_eq!(up.series.points[1].value, dec!(10000));
        // 10배/일은 연 환산하면 f64 범위를 넘음
        assert_eq!(up.annual_rate, None);

        let down = SyntheticGrowthFitter::fit("fund", dec!(1000), dec!(100), &reference(&[day, next]))
            .unwrap();
        assert_eq!(down.series.points[1].value, dec!(100));
        let rate = down.annual_rate.unwrap();
        assert!((-1.0..-0.99).contains(&rate));
    }

    #[test]
    fn test_fit_intermediate_values_stay_between_endpoints() {
        let start = NaiveDate::from_ymd_opt(2021, 5, 3).unwrap();
        let dates: Vec<_> = (0..4).map(|d| start + chrono::Duration::days(d)).collect();
        let fit =
            SyntheticGrowthFitter::fit("fund", dec!(1000), dec!(1000000), &reference(&dates)).unwrap();

        // 1000^(1/3) = 10
        assert!(close_to(fit.series.points[1].value, dec!(10000)));
        assert!(close_to(fit.series.points[2].value, dec!(100000)));
        assert_eq!(fit.series.points[3].value, dec!(1000000));
    }

    #[test]
    fn test_fit_errors() {
        let day = NaiveDate::from_ymd_opt(2021, 5, 7).unwrap();
        let next = day.succ_opt().unwrap();

        assert!(matches!(
            SyntheticGrowthFitter::fit("fund", dec!(1000), dec!(3000), &reference(&[day])),
            Err(AnalyticsError::InvalidDateRange { .. })
        ));
        assert!(matches!(
            SyntheticGrowthFitter::fit("fund", dec!(0), dec!(3000), &reference(&[day, next])),
            Err(AnalyticsError::InvalidPrincipal(_))
        ));
        assert!(matches!(
            SyntheticGrowthFitter::fit("fund", dec!(1000), dec!(-1), &reference(&[day, next])),
            Err(AnalyticsError::InvalidCurrentValue(_))
        ));
        assert!(matches!(
            SyntheticGrowthFitter::fit("fund", dec!(1000), dec!(3000), &reference(&[])),
            Err(AnalyticsError::EmptySeries(_))
        ));
    }
}
