//! 통계 수집 포트.
//!
//! 구현: `haprobe-network` crate (reqwest)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::request::ProbeRequest;

/// HAProxy CSV 통계 소스
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// 요청 URL에서 CSV 본문 수신
    ///
    /// 200 이외의 응답이나 전송 실패는 분류된 `CoreError`로 반환한다.
    async fn fetch_csv(&self, request: &ProbeRequest) -> Result<String, CoreError>;
}
