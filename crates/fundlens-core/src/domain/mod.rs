//! 분석 파이프라인의 도메인 모델.

mod market_data;
mod position;
mod price;
mod summary;

pub use market_data::*;
pub use position::*;
pub use price::*;
pub use summary::*;
