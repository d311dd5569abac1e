//! 캔들 스타일 (양봉/음봉 색상, 몸통 폭).

use chrono::Duration;
use fundlens_core::{CandleConfig, CandleKind, OhlcBar, StyledCandle, Timeframe};

/// 양봉 기본 색상.
pub const BULL_COLOR: &str = "#D5E1DD";
/// 음봉 기본 색상.
pub const BEAR_COLOR: &str = "#F2583E";
/// 타임프레임 대비 몸통 폭 기본 비율.
pub const BODY_WIDTH_RATIO: f64 = 0.75;

/// 바 단위 스타일러.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleStyler {
    bull_color: String,
    bear_color: String,
    body_width_ratio: f64,
}

impl Default for CandleStyler {
    fn default() -> Self {
        Self {
            bull_color: BULL_COLOR.to_string(),
            bear_color: BEAR_COLOR.to_string(),
            body_width_ratio: BODY_WIDTH_RATIO,
        }
    }
}

impl CandleStyler {
    pub fn from_config(config: &CandleConfig) -> Self {
        Self {
            bull_color: config.bull_color.clone(),
            bear_color: config.bear_color.clone(),
            body_width_ratio: config.body_width_ratio,
        }
    }

    /// 타임프레임에 해당하는 캔들 몸통 폭.
    pub fn body_width(&self, timeframe: Timeframe) -> Duration {
        let millis = timeframe.duration().num_milliseconds() as f64 * self.body_width_ratio;
        Duration::milliseconds(millis.round() as i64)
    }

    /// 종가 >= 시가면 양봉, 아니면 음봉.
    pub fn style(&self, bar: &OhlcBar) -> StyledCandle {
        let (kind, color) = if bar.is_bullish() {
            (CandleKind::Bull, &self.bull_color)
        } else {
            (CandleKind::Bear, &self.bear_color)
        };

        StyledCandle {
            bar: bar.clone(),
            kind,
            color: color.clone(),
            width: self.body_width(bar.timeframe),
        }
    }

    pub fn style_all(&self, bars: &[OhlcBar]) -> Vec<StyledCandle> {
        bars.iter().map(|bar| self.style(bar)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn bar(open: rust_decimal::Decimal, close: rust_decimal::Decimal) -> OhlcBar {
        let start = Utc.with_ymd_and_hms(2020, 5, 4, 9, 0, 0).unwrap();
        let mut bar = OhlcBar::open_with(Timeframe::M15, start, open);
        bar.update(close);
        bar
    }

    #[test]
    fn test_style_kind_and_color() {
        let styler = CandleStyler::default();

        let bull = styler.style(&bar(dec!(1.10), dec!(1.12)));
        assert_eq!(bull.kind, CandleKind::Bull);
        assert_eq!(bull.color, "#D5E1DD");

        let bear = styler.style(&bar(dec!(1.10), dec!(1.08)));
        assert_eq!(bear.kind, CandleKind::Bear);
        assert_eq!(bear.color, "#F2583E");

        // 보합은 양봉
        let flat = styler.style(&bar(dec!(1.10), dec!(1.10)));
        assert_eq!(flat.kind, CandleKind::Bull);
    }

    #[test]
    fn test_body_width_is_three_quarters() {
        let styler = CandleStyler::default();
        assert_eq!(styler.body_width(Timeframe::M1), Duration::seconds(45));
        assert_eq!(styler.body_width(Timeframe::M15), Duration::seconds(675));
        assert_eq!(styler.body_width(Timeframe::H1), Duration::minutes(45));
    }
}
