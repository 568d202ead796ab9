//! 수집 요청 모델.
//!
//! 6개의 위치 인자를 해석하여 한 번의 실행에 필요한 입력을 만든다.
//! `<URL> <METRIC_STATE> <FILTER_PROXY> <FILTER_SERVER> <USER_NAME> <PASS_WORD>`

use std::fmt;

use crate::error::CoreError;
use crate::models::metric::MetricSelection;

/// 필요한 위치 인자 개수
pub const POSITIONAL_ARG_COUNT: usize = 6;

/// 필터 목록 구분자
const FILTER_SEPARATOR: char = ';';

/// 기본 인증 자격증명
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// 한 번의 수집 실행 입력
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    /// HAProxy CSV 통계 URL (스냅샷 식별자이기도 함)
    pub url: String,
    /// 활성화된 메트릭
    pub metrics: MetricSelection,
    /// 프록시 이름 필터 항목 (비어 있으면 필터 없음)
    pub proxy_filters: Vec<String>,
    /// 오브젝트(서버) 이름 필터 항목
    pub server_filters: Vec<String>,
    /// 사용자명과 비밀번호가 모두 있을 때만 Some
    pub credentials: Option<Credentials>,
}

impl ProbeRequest {
    /// 위치 인자 해석
    ///
    /// 인자 개수가 정확히 6개가 아니면 `CoreError::InvalidArguments`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, CoreError> {
        if args.len() != POSITIONAL_ARG_COUNT {
            return Err(CoreError::InvalidArguments);
        }

        let url = args[0].as_ref().to_string();
        let metrics = MetricSelection::parse(&strip_quotes(args[1].as_ref()));
        let proxy_filters = split_filters(args[2].as_ref());
        let server_filters = split_filters(args[3].as_ref());

        let credentials = match (
            optional_secret(args[4].as_ref()),
            optional_secret(args[5].as_ref()),
        ) {
            (Some(username), Some(password)) => Some(Credentials { username, password }),
            _ => None,
        };

        Ok(Self {
            url,
            metrics,
            proxy_filters,
            server_filters,
            credentials,
        })
    }
}

/// 셸에서 넘어온 잔여 따옴표 제거
fn strip_quotes(raw: &str) -> String {
    raw.replace('"', "")
}

fn split_filters(raw: &str) -> Vec<String> {
    let cleaned = strip_quotes(raw);
    if cleaned.is_empty() {
        return Vec::new();
    }
    cleaned
        .split(FILTER_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// `""`, `"`, 빈 문자열은 값 없음으로 취급
fn optional_secret(raw: &str) -> Option<String> {
    match raw {
        "" | "\"" | "\"\"" => None,
        value => Some(value.to_string()),
    }
}
