//! 금액 계산을 위한 Decimal 유틸리티.

use rust_decimal::{Decimal, RoundingStrategy};

/// 금융 정밀도를 위한 가격 타입.
pub type Price = Decimal;

/// 금액 타입 (원금, 포지션 가치, 차액).
pub type Amount = Decimal;

/// 보유 주식 수.
pub type Shares = Decimal;

/// Decimal 연산을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 양수인지 확인합니다.
    fn is_positive(&self) -> bool;

    /// 정수 퍼센트 문자열로 변환합니다 (예: 2.0 → "200%").
    ///
    /// 반올림은 은행가 반올림(짝수 쪽)입니다.
    fn to_whole_percent_string(&self) -> String;

    /// 부호가 붙은 소수 둘째 자리 문자열로 변환합니다 (예: "+12.50", "-3.00").
    fn to_signed_amount_string(&self) -> String;
}

impl DecimalExt for Decimal {
    fn is_positive(&self) -> bool {
        *self > Decimal::ZERO
    }

    fn to_whole_percent_string(&self) -> String {
        let pct = (*self * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
        format!("{}%", pct.normalize())
    }

    fn to_signed_amount_string(&self) -> String {
        let rounded = self.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            "+"
        };
        format!("{}{:.2}", sign, rounded.abs())
    }
}
