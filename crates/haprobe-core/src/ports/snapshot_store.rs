//! 스냅샷 저장소 포트.
//!
//! 구현: `haprobe-storage` crate (URL별 JSON 파일)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::sample::Sample;

/// 이전 실행 샘플 저장소: 소스 URL당 스냅샷 하나
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// 이전 스냅샷 로드. 없으면 `None` (첫 실행).
    async fn load(&self, source_url: &str) -> Result<Option<Vec<Sample>>, CoreError>;

    /// 현재 샘플 전체로 스냅샷 교체 (병합하지 않음)
    async fn save(&self, source_url: &str, samples: &[Sample]) -> Result<(), CoreError>;
}
