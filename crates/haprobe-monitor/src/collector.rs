//! 수집 파이프라인.
//!
//! 수신 → 파싱 → 직전 스냅샷 로드 → 비율 계산 → 스냅샷 교체.
//! 스냅샷 저장은 출력보다 먼저 끝나므로, 저장 실패 시 아무것도 출력되지 않는다.

use chrono::Utc;
use haprobe_core::error::CoreError;
use haprobe_core::models::request::ProbeRequest;
use haprobe_core::models::sample::RateResult;
use haprobe_core::ports::snapshot_store::SnapshotStore;
use haprobe_core::ports::stats_source::StatsSource;
use std::sync::Arc;
use tracing::{debug, info};

use crate::parser::SampleParser;
use crate::rate_engine::{self, Reconciliation};

/// 한 번의 실행 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 첫 관측: 스냅샷만 저장하고 보고할 값 없음 (정상 종료)
    FirstObservation,
    /// 출력할 레코드 (숫자 필터링 전)
    Report(Vec<RateResult>),
}

/// 포트 기반 수집기
pub struct Collector {
    source: Arc<dyn StatsSource>,
    store: Arc<dyn SnapshotStore>,
}

impl Collector {
    /// 새 수집기 생성
    pub fn new(source: Arc<dyn StatsSource>, store: Arc<dyn SnapshotStore>) -> Self {
        Self { source, store }
    }

    /// 한 번의 수집 실행
    pub async fn run(&self, request: &ProbeRequest) -> Result<RunOutcome, CoreError> {
        // 필터 오류는 요청 전에 드러나도록 먼저 컴파일
        let parser = SampleParser::from_request(request)?;

        let csv = self.source.fetch_csv(request).await?;
        let current = parser.parse(&csv, Utc::now());
        debug!("현재 샘플 {}개", current.len());

        let previous = self.store.load(&request.url).await?;
        let reconciliation = rate_engine::reconcile(&current, previous.as_deref());

        self.store.save(&request.url, &current).await?;

        match reconciliation {
            Reconciliation::FirstObservation => {
                info!("첫 관측: 스냅샷 저장 ({} 샘플), 출력 없음", current.len());
                Ok(RunOutcome::FirstObservation)
            }
            Reconciliation::Rates(results) => {
                info!("{} 레코드 계산 완료", results.len());
                Ok(RunOutcome::Report(results))
            }
        }
    }
}
