//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! 어댑터 crate가 이 trait들을 구현하며,
//! `haprobe-monitor`의 `Collector`가 `Arc<dyn T>`로 사용한다.

pub mod snapshot_store;
pub mod stats_source;
