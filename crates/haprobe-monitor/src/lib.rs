//! # haprobe-monitor
//!
//! HAProxy 통계 수집 파이프라인.
//! CSV를 샘플로 파싱하고, 직전 스냅샷과 비교해 초당 비율을 계산하여
//! 수집 파이프라인이 읽는 줄 단위 형식으로 출력한다.
//!
//! ## 모듈
//! - `parser`: CSV → 샘플 (메트릭 선택, 프록시/서버 필터)
//! - `rate_engine`: 스냅샷 매칭과 비율 계산
//! - `emitter`: `externalId|value|objectKey|` 출력
//! - `collector`: 포트를 묶은 한 번의 실행

pub mod collector;
pub mod emitter;
pub mod parser;
pub mod rate_engine;
