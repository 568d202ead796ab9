//! # haprobe-network
//!
//! HAProxy 통계 페이지 수집 어댑터.
//! HTTP/HTTPS GET으로 CSV 통계를 받아오며,
//! 기본 인증과 상태 코드별 에러 분류를 담당한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use haprobe_network::http_client::HttpStatsClient;
//!
//! let client = HttpStatsClient::new(config.request_timeout())?;
//! let csv = client.fetch_csv(&request).await?;
//! ```

pub mod http_client;
