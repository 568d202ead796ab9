//! # haprobe-storage
//!
//! 로컬 저장소 어댑터.
//! 비율 계산의 기준이 되는 직전 실행 샘플을 소스 URL별 파일로 보관한다.
//!
//! ## 모듈
//! - `snapshot_file`: 스냅샷 파일 저장소 (SnapshotStore 구현)

pub mod snapshot_file;
