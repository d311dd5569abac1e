//! 틱 리샘플링 및 캔들 차트 통합 테스트

use chrono::{DateTime, Duration, TimeZone, Utc};
use fundlens_analytics::{CandleChart, CandleStyler, OhlcResampler};
use fundlens_core::{AnalyticsError, CandleKind, Tick, Timeframe};
use fundlens_data::parse_ticks;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 5, 4, h, m, s).unwrap()
}

#[test]
fn test_single_bucket_ohlc() {
    let ticks: Vec<Tick> = [dec!(10), dec!(12), dec!(8), dec!(11)]
        .iter()
        .enumerate()
        .map(|(i, &bid)| Tick::new(at(10, 0, i as u32 * 10), bid))
        .collect();

    let bars = OhlcResampler::resample(&ticks, Timeframe::M1).unwrap();

    assert_eq!(bars.len(), 1);
    let bar = &bars[0];
    assert_eq!(
        (bar.open, bar.high, bar.low, bar.close),
        (dec!(10), dec!(12), dec!(8), dec!(11))
    );
    assert_eq!(bar.period_start, at(10, 0, 0));
}

#[test]
fn test_single_tick_bucket_is_flat() {
    let ticks = vec![Tick::new(at(10, 7, 30), dec!(1.0975))];

    let bars = OhlcResampler::resample(&ticks, Timeframe::M5).unwrap();

    assert_eq!(bars.len(), 1);
    let bar = &bars[0];
    assert_eq!(bar.open, dec!(1.0975));
    assert_eq!(bar.high, bar.open);
    assert_eq!(bar.low, bar.open);
    assert_eq!(bar.close, bar.open);
    assert_eq!(bar.period_start, at(10, 5, 0));
}

#[test]
fn test_resample_is_deterministic() {
    let ticks: Vec<Tick> = (0..500)
        .map(|i| {
            let bid = dec!(1.1) + Decimal::new((i * 37 % 101) as i64, 5);
            Tick::new(at(9, 0, 0) + Duration::seconds(i * 17), bid)
        })
        .collect();

    for tf in Timeframe::ALL {
        let first = OhlcResampler::resample(&ticks, tf).unwrap();
        let second = OhlcResampler::resample(&ticks, tf).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_bucket_boundaries_independent_of_data_start() {
    let ticks: Vec<Tick> = (0..240)
        .map(|i| Tick::new(at(9, 3, 0) + Duration::minutes(i), Decimal::from(i)))
        .collect();

    let full = OhlcResampler::resample(&ticks, Timeframe::M15).unwrap();
    let tail = OhlcResampler::resample(&ticks[50..], Timeframe::M15).unwrap();

    // 겹치는 구간의 완전한 버킷은 경계와 값이 같아야 함
    for bar in tail.iter().skip(1) {
        let same = full
            .iter()
            .find(|b| b.period_start == bar.period_start)
            .unwrap();
        assert_eq!(same, bar);
    }
    for bar in &full {
        assert_eq!(bar.period_start.timestamp() % 900, 0);
    }
}

#[test]
fn test_empty_ticks() {
    assert_eq!(
        OhlcResampler::resample(&[], Timeframe::H1).unwrap_err(),
        AnalyticsError::EmptyTickSeries
    );
}

#[test]
fn test_csv_to_candles() {
    let csv = "\
lTid,cDealable,CurrencyPair,RateDateTime,RateBid,RateAsk
1,D,EUR/USD,2020-05-04 10:00:05.000,1.0900,1.0902
2,D,EUR/USD,2020-05-04 10:05:00.000,1.0950,1.0952
3,D,EUR/USD,2020-05-04 10:14:59.999,1.0920,1.0922
4,D,EUR/USD,2020-05-04 10:16:00.000,1.0910,1.0912
5,D,EUR/USD,2020-05-04 10:29:00.000,1.0890,1.0892
";
    let ticks = parse_ticks(csv.as_bytes()).unwrap();
    let chart = CandleChart::new("EUR/USD", ticks, CandleStyler::default()).unwrap();

    let view = chart.select(2).unwrap();
    assert_eq!(view.timeframe, Timeframe::M15);
    assert_eq!(view.candles.len(), 2);

    let first = &view.candles[0];
    assert_eq!(first.kind, CandleKind::Bull);
    assert_eq!(first.color, "#D5E1DD");
    assert_eq!(first.bar.high, dec!(1.0950));
    assert_eq!(first.width, Duration::seconds(675));

    let second = &view.candles[1];
    assert_eq!(second.kind, CandleKind::Bear);
    assert_eq!(second.color, "#F2583E");

    let all = chart.select_all().unwrap();
    assert_eq!(all.len(), 5);
    assert_eq!(all[4].candles.len(), 1);
}
