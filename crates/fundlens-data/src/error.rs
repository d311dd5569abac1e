//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 데이터 수집 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 제공자가 알지 못하는 심볼
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    /// 제공자 연결 오류
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// 데이터 가져오기 오류 (외부 소스)
    #[error("Fetch error: {0}")]
    FetchError(String),

    /// 타임아웃 오류
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// 파싱 오류
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 잘못된 데이터 형식
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DataError {
    /// 재시도 가능한 오류인지 확인합니다.
    ///
    /// 재시도 자체는 호출자가 결정합니다.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DataError::ConnectionError(_) | DataError::FetchError(_) | DataError::Timeout(_)
        )
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::ParseError(err.to_string())
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DataError::Timeout(err.to_string())
        } else if err.is_connect() {
            DataError::ConnectionError(err.to_string())
        } else {
            DataError::FetchError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
