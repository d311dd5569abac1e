//! 대시보드 탭 재계산 통합 테스트
//!
//! 메모리 Provider로 세 가지 탭의 재계산, 시작일 조정, 에러 경로를 확인합니다.

use chrono::NaiveDate;
use fundlens_analytics::{recompute, Dashboard, DashboardError, TabInputs, TabKind};
use fundlens_core::{CostBasis, DashboardConfig, GrowthDirection, PricePoint};
use fundlens_data::{DataError, InMemoryProvider};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn history(points: &[(NaiveDate, Decimal)]) -> Vec<PricePoint> {
    points
        .iter()
        .map(|&(date, close)| PricePoint::from_close(date, close))
        .collect()
}

fn provider() -> InMemoryProvider {
    InMemoryProvider::new()
        .with_history(
            "^GSPC",
            history(&[
                (date(2016, 5, 3), dec!(100)),
                (date(2017, 1, 3), dec!(110)),
                (date(2019, 6, 3), dec!(150)),
                (date(2021, 5, 7), dec!(200)),
            ]),
        )
        .with_history(
            "AMZN",
            history(&[
                (date(2016, 5, 3), dec!(500)),
                (date(2017, 1, 3), dec!(550)),
                (date(2019, 6, 3), dec!(1000)),
                (date(2021, 5, 7), dec!(1500)),
            ]),
        )
        .with_history(
            "GOOG",
            history(&[
                (date(2017, 1, 3), dec!(800)),
                (date(2019, 6, 3), dec!(1000)),
                (date(2021, 5, 7), dec!(2400)),
            ]),
        )
}

fn inputs() -> TabInputs {
    TabInputs::from(&DashboardConfig::default())
}

#[tokio::test]
async fn test_managed_fund_tab() {
    let tabs = Dashboard::default_tabs(&DashboardConfig::default());

    let tab = recompute(&provider(), &tabs[0], inputs()).await.unwrap();
    let state = tab.state.as_ref().unwrap();

    assert_eq!(state.effective_start, date(2016, 5, 3));
    assert_eq!(state.aligned.label_a, "Managed Fund");
    assert_eq!(state.aligned.label_b, "S&P 500");
    assert_eq!(state.aligned.len(), 4);
    assert_eq!(state.summary.cost_basis, CostBasis::not_applicable());
    assert_eq!(state.summary.lines()[0], "Your managed fund appreciated 200%.");
    // 지수는 1000 → 2000, 펀드는 1000 → 3000
    assert!((state.summary.dollar_difference + dec!(1000)).abs() < dec!(0.01));
    assert!(state.fitted_rate.unwrap() > 0.24);

    // 원래 탭은 그대로
    assert!(tabs[0].state.is_none());
}

#[tokio::test]
async fn test_managed_fund_tab_over_adjacent_days() {
    let provider = InMemoryProvider::new().with_history(
        "^GSPC",
        history(&[(date(2021, 5, 6), dec!(200)), (date(2021, 5, 7), dec!(201))]),
    );
    let tabs = Dashboard::default_tabs(&DashboardConfig::default());
    let inputs = TabInputs {
        start: date(2021, 5, 6),
        end: date(2021, 5, 7),
        principal: dec!(1000),
        current_value: dec!(10000),
    };

    let tab = recompute(&provider, &tabs[0], inputs).await.unwrap();
    let state = tab.state.as_ref().unwrap();

    assert_eq!(state.aligned.last().unwrap().value_a, dec!(10000));
    assert_eq!(state.summary.lines()[0], "Your managed fund appreciated 900%.");
    assert_eq!(state.summary.dollar_difference, dec!(-8995));
    // 하루 만에 10배는 연 환산할 수 없음
    assert_eq!(state.fitted_rate, None);
}

#[tokio::test]
async fn test_stock_vs_index_tab() {
    let tabs = Dashboard::default_tabs(&DashboardConfig::default());

    let tab = recompute(&provider(), &tabs[1], inputs()).await.unwrap();
    let summary = &tab.state.as_ref().unwrap().summary;

    assert_eq!(summary.investment, "AMZN investment");
    assert_eq!(summary.direction, GrowthDirection::Appreciated);
    assert_eq!(summary.percent_growth, dec!(2));
    assert_eq!(summary.dollar_difference, dec!(-1000));
    assert_eq!(summary.cost_basis, CostBasis::PerShare(dec!(500)));
    assert_eq!(
        summary.to_html(),
        "Your AMZN investment appreciated 200%.<br>\
         If you invested in S&P 500, you would have -1000.00.<br>\
         Cost basis for AMZN: 500.00/share."
    );
}

#[tokio::test]
async fn test_start_date_clamped_to_latest_first_date() {
    let tabs = Dashboard::default_tabs(&DashboardConfig::default());

    // GOOG 데이터는 2017-01-03부터
    let tab = recompute(&provider(), &tabs[2], inputs()).await.unwrap();
    let state = tab.state.as_ref().unwrap();

    assert_eq!(state.effective_start, date(2017, 1, 3));
    assert_eq!(tab.inputs.start, date(2017, 1, 3));
    assert_eq!(state.aligned.first().unwrap().date, date(2017, 1, 3));
    assert_eq!(state.summary.cost_basis, CostBasis::PerShare(dec!(550)));
}

#[tokio::test]
async fn test_unknown_symbol() {
    let mut config = DashboardConfig::default();
    config.other_stock = "ZZZZ".to_string();
    let tabs = Dashboard::default_tabs(&config);

    let err = recompute(&provider(), &tabs[2], inputs()).await.unwrap_err();
    assert!(matches!(
        err,
        DashboardError::Data(DataError::UnknownSymbol(ref s)) if s == "ZZZZ"
    ));
}

#[tokio::test]
async fn test_refresh_replaces_tab() {
    let mut dashboard = Dashboard::from_config(&DashboardConfig::default());
    let provider = provider();

    let new_inputs = TabInputs {
        start: date(2017, 1, 3),
        end: date(2019, 6, 3),
        principal: dec!(2000),
        current_value: dec!(2500),
    };
    let tab = dashboard.refresh(&provider, 1, new_inputs.clone()).await.unwrap();
    assert_eq!(tab.inputs, new_inputs);
    assert_eq!(tab.state.as_ref().unwrap().aligned.len(), 2);

    assert!(dashboard.tabs()[1].state.is_some());
    assert!(dashboard.tabs()[0].state.is_none());
    assert!(matches!(
        dashboard.refresh(&provider, 7, inputs()).await,
        Err(DashboardError::UnknownTab(7))
    ));
}

#[tokio::test]
async fn test_inverted_range() {
    let tabs = Dashboard::default_tabs(&DashboardConfig::default());
    let bad = TabInputs {
        start: date(2021, 5, 7),
        end: date(2016, 5, 3),
        ..inputs()
    };

    let err = recompute(&provider(), &tabs[1], bad).await.unwrap_err();
    assert!(matches!(err, DashboardError::Analytics(e) if e.is_invalid_input()));
    assert!(matches!(
        tabs[0].kind,
        TabKind::ManagedFundVsIndex { ref index } if index == "S&P 500"
    ));
}
