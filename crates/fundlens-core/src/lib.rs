//! # Fundlens Core
//!
//! 펀드 비교 대시보드와 캔들 차트 대시보드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 두 분석 파이프라인 전반에서 사용되는 기본 타입을 제공합니다:
//! - 일별 가격 및 포지션 시계열
//! - 정렬된 비교 시계열과 성장 요약
//! - 틱 및 OHLC 바 구조체
//! - 타임프레임 정의
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
