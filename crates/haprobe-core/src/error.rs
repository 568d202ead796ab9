//! HAPROBE 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 이 타입을 그대로 반환한다.
//! 각 variant는 프로세스 종료 코드와 1:1로 대응하며,
//! `Display` 메시지는 수집 파이프라인이 그대로 읽는 stdout 메시지다.

use thiserror::Error;

/// 종료 코드: 정상 종료 (첫 관측 포함)
pub const EXIT_OK: i32 = 0;
/// 종료 코드: 분류되지 않은 에러
pub const EXIT_UNKNOWN: i32 = 1;
/// 종료 코드: 인증 실패
pub const EXIT_AUTH: i32 = 2;
/// 종료 코드: 인자 개수 오류
pub const EXIT_INVALID_ARGUMENTS: i32 = 3;
/// 종료 코드: 200/401 이외의 HTTP 응답
pub const EXIT_HTTP: i32 = 19;
/// 종료 코드: 상태 디렉토리 생성 실패
pub const EXIT_STATE_DIR: i32 = 21;
/// 종료 코드: 상태 파일 쓰기 실패
pub const EXIT_STATE_WRITE: i32 = 22;
/// 종료 코드: 호스트 해석/연결 실패
pub const EXIT_UNKNOWN_HOST: i32 = 29;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 위치 인자 개수 오류
    #[error("Wrong number of parameters.")]
    InvalidArguments,

    /// 인증 실패 (401)
    #[error("Invalid authentication.")]
    Auth,

    /// 200/401 이외의 HTTP 상태 코드
    #[error("Response error ({status}).")]
    Http {
        /// 응답 상태 코드
        status: u16,
    },

    /// DNS 해석 실패 또는 연결 거부
    #[error("Unknown host.")]
    UnknownHost,

    /// 상태 디렉토리 생성 실패
    #[error("{0}")]
    StateDir(String),

    /// 상태 파일 쓰기 실패
    #[error("{0}")]
    StateWrite(String),

    /// 그 밖의 네트워크 에러 (타임아웃, 본문 수신 실패 등)
    #[error("Network error: {0}")]
    Network(String),

    /// 해석할 수 없는 소스 URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// 필터 정규식 컴파일 실패
    #[error("Invalid filter expression: {0}")]
    InvalidFilter(String),

    /// 설정값 오류
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// 에러 종류에 대응하는 프로세스 종료 코드
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::InvalidArguments => EXIT_INVALID_ARGUMENTS,
            CoreError::Auth => EXIT_AUTH,
            CoreError::Http { .. } => EXIT_HTTP,
            CoreError::UnknownHost => EXIT_UNKNOWN_HOST,
            CoreError::StateDir(_) => EXIT_STATE_DIR,
            CoreError::StateWrite(_) => EXIT_STATE_WRITE,
            CoreError::Network(_)
            | CoreError::InvalidUrl(_)
            | CoreError::InvalidFilter(_)
            | CoreError::Config(_)
            | CoreError::Serialization(_)
            | CoreError::Io(_)
            | CoreError::Internal(_) => EXIT_UNKNOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(CoreError::InvalidArguments.exit_code(), 3);
        assert_eq!(CoreError::Auth.exit_code(), 2);
        assert_eq!(CoreError::Http { status: 503 }.exit_code(), 19);
        assert_eq!(CoreError::UnknownHost.exit_code(), 29);
        assert_eq!(CoreError::StateDir("x".to_string()).exit_code(), 21);
        assert_eq!(CoreError::StateWrite("x".to_string()).exit_code(), 22);
        assert_eq!(CoreError::Internal("x".to_string()).exit_code(), 1);
        assert_eq!(CoreError::InvalidFilter("(".to_string()).exit_code(), 1);
    }

    #[test]
    fn messages_match_collector_contract() {
        assert_eq!(
            CoreError::InvalidArguments.to_string(),
            "Wrong number of parameters."
        );
        assert_eq!(CoreError::Auth.to_string(), "Invalid authentication.");
        assert_eq!(
            CoreError::Http { status: 503 }.to_string(),
            "Response error (503)."
        );
        assert_eq!(CoreError::UnknownHost.to_string(), "Unknown host.");
        assert_eq!(
            CoreError::StateDir("permission denied".to_string()).to_string(),
            "permission denied"
        );
    }
}
