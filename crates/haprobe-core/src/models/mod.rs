//! HAPROBE 도메인 모델.
//!
//! 메트릭 카탈로그, 샘플/결과 레코드, 수집 요청을 정의한다.

pub mod metric;
pub mod request;
pub mod sample;
