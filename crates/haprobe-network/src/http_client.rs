//! HAProxy 통계 HTTP(S) 클라이언트.
//!
//! `StatsSource` 포트 구현. 기본 인증 헤더 주입 + 상태 코드별 에러 분류.
//! 한 번의 실행에 한 번만 요청하며 재시도하지 않는다.

use async_trait::async_trait;
use haprobe_core::error::CoreError;
use haprobe_core::models::request::ProbeRequest;
use haprobe_core::ports::stats_source::StatsSource;
use std::time::Duration;
use tracing::debug;

/// 전송 계층 에러 분류
///
/// 연결 거부와 DNS 해석 실패는 모두 `UnknownHost`로 취급한다.
fn classify_transport_error(error: &reqwest::Error) -> CoreError {
    if error.is_builder() {
        CoreError::InvalidUrl(error.to_string())
    } else if error.is_timeout() {
        CoreError::Network(format!("request timed out: {error}"))
    } else if error.is_connect() {
        CoreError::UnknownHost
    } else {
        CoreError::Network(error.to_string())
    }
}

/// 응답 상태 코드 확인 및 에러 매핑
fn check_status(status: u16) -> Result<(), CoreError> {
    match status {
        200 => Ok(()),
        401 => Err(CoreError::Auth),
        _ => Err(CoreError::Http { status }),
    }
}

/// HAProxy CSV 통계 클라이언트: `StatsSource` 포트 구현
pub struct HttpStatsClient {
    client: reqwest::Client,
}

impl HttpStatsClient {
    /// 새 HTTP 통계 클라이언트 생성
    pub fn new(timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl StatsSource for HttpStatsClient {
    async fn fetch_csv(&self, request: &ProbeRequest) -> Result<String, CoreError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| CoreError::InvalidUrl(format!("{}: {e}", request.url)))?;

        debug!("통계 요청: {url}");

        let mut req = self.client.get(url);
        if let Some(creds) = &request.credentials {
            debug!("기본 인증 사용: user={}", creds.username);
            req = req.basic_auth(&creds.username, Some(&creds.password));
        }

        let resp = req.send().await.map_err(|e| classify_transport_error(&e))?;

        let status = resp.status().as_u16();
        debug!("응답 상태: {status}");
        check_status(status)?;

        let body = resp
            .text()
            .await
            .map_err(|e| CoreError::Network(format!("cannot read response body: {e}")))?;

        debug!("CSV 수신: {} bytes", body.len());
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haprobe_core::models::request::ProbeRequest;

    const CSV: &str = "# pxname,svname,qcur\nweb,BACKEND,0\n";

    fn request(url: &str, user: &str, pass: &str) -> ProbeRequest {
        ProbeRequest::from_args(&[url, "1,1,1,1,1,1,1,1,1,1,1,1", "", "", user, pass]).unwrap()
    }

    fn client() -> HttpStatsClient {
        HttpStatsClient::new(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn status_mapping() {
        assert!(check_status(200).is_ok());
        assert!(matches!(check_status(401), Err(CoreError::Auth)));
        assert!(matches!(
            check_status(503),
            Err(CoreError::Http { status: 503 })
        ));
        assert!(matches!(
            check_status(204),
            Err(CoreError::Http { status: 204 })
        ));
    }

    #[tokio::test]
    async fn fetch_success_without_auth() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/stats")
            .match_header("authorization", mockito::Matcher::Missing)
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body(CSV)
            .create_async()
            .await;

        let url = format!("{}/stats", server.url());
        let body = client().fetch_csv(&request(&url, "", "")).await.unwrap();

        assert_eq!(body, CSV);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_sends_basic_auth() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/stats")
            .match_header("authorization", "Basic dXNlcjpwd2Q=")
            .with_status(200)
            .with_body(CSV)
            .create_async()
            .await;

        let url = format!("{}/stats", server.url());
        let result = client().fetch_csv(&request(&url, "user", "pwd")).await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_401_is_auth_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/stats")
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let url = format!("{}/stats", server.url());
        let err = client()
            .fetch_csv(&request(&url, "user", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Auth));
        assert_eq!(err.exit_code(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetch_503_is_http_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/stats")
            .with_status(503)
            .with_body("Service Unavailable")
            .create_async()
            .await;

        let url = format!("{}/stats", server.url());
        let err = client().fetch_csv(&request(&url, "", "")).await.unwrap_err();

        assert!(matches!(err, CoreError::Http { status: 503 }));
        assert_eq!(err.to_string(), "Response error (503).");
        assert_eq!(err.exit_code(), 19);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn connection_refused_is_unknown_host() {
        // 포트 1은 열려 있지 않다
        let err = client()
            .fetch_csv(&request("http://127.0.0.1:1/stats", "", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::UnknownHost));
        assert_eq!(err.exit_code(), 29);
    }

    #[tokio::test]
    async fn malformed_url_is_rejected() {
        let err = client()
            .fetch_csv(&request("not a url", "", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidUrl(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
