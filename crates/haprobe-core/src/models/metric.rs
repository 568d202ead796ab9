//! 메트릭 카탈로그.
//!
//! HAProxy CSV에서 추출하는 12개 메트릭의 정적 정의.
//! 카탈로그 순서가 곧 실행 순서이며, CLI의 활성화 플래그와 위치로 대응한다.

/// BACKEND 집계 행을 나타내는 오브젝트 필드 값
pub const BACKEND_OBJECT: &str = "BACKEND";

/// 메트릭이 적용되는 행 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricScope {
    /// 모든 행 (FRONTEND, BACKEND, 서버)
    Any,
    /// BACKEND 행 제외 (서버별 active/backup 플래그)
    ServerOnly,
    /// BACKEND 행 전용 (백엔드 집계 카운터)
    BackendOnly,
}

/// 메트릭 정의: 카탈로그 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDefinition {
    /// HAProxy CSV 컬럼 이름 (예: "stot")
    pub key: &'static str,
    /// 수집 파이프라인이 사용하는 외부 식별자
    pub external_id: &'static str,
    /// CSV 컬럼 인덱스
    pub column: usize,
    /// true면 초당 비율 메트릭, false면 게이지
    pub ratio: bool,
    /// 적용 대상 행 종류
    pub scope: MetricScope,
}

impl MetricDefinition {
    /// 주어진 오브젝트 필드(FRONTEND/BACKEND/서버 이름)에 이 메트릭을 적용할지 판단
    pub fn applies_to(&self, object: &str) -> bool {
        let is_backend = object.eq_ignore_ascii_case(BACKEND_OBJECT);
        match self.scope {
            MetricScope::Any => true,
            MetricScope::ServerOnly => !is_backend,
            MetricScope::BackendOnly => is_backend,
        }
    }
}

const fn metric(
    key: &'static str,
    external_id: &'static str,
    column: usize,
    ratio: bool,
    scope: MetricScope,
) -> MetricDefinition {
    MetricDefinition {
        key,
        external_id,
        column,
        ratio,
        scope,
    }
}

/// 카탈로그 크기
pub const CATALOG_LEN: usize = 12;

/// 정적 메트릭 카탈로그 (순서 고정)
pub static METRIC_CATALOG: [MetricDefinition; CATALOG_LEN] = [
    metric("qcur", "1495:Current Queued Requests:4", 2, false, MetricScope::Any),
    metric("scur", "1496:Current Sessions:4", 4, false, MetricScope::Any),
    metric("stot", "1497:Total Sessions/Sec:4", 7, true, MetricScope::Any),
    metric("bin", "1498:Bytes in/Sec:4", 8, true, MetricScope::Any),
    metric("bout", "1499:Bytes out/Sec:4", 9, true, MetricScope::Any),
    metric("ereq", "1500:Request Errors/Sec:4", 12, true, MetricScope::Any),
    metric("econ", "1501:Connection Errors/Sec:4", 13, true, MetricScope::Any),
    // 외부 식별자 철자는 수집 측과 맞춰야 하므로 그대로 둔다
    metric("eresp", "1502:Repsonse Errors/Sec:4", 14, true, MetricScope::Any),
    metric("act", "1503:Server is Active:9", 19, false, MetricScope::ServerOnly),
    metric("bck", "1504:Server is Backup:9", 20, false, MetricScope::ServerOnly),
    metric(
        "backend_act",
        "1505:Number of Active Servers:4",
        19,
        false,
        MetricScope::BackendOnly,
    ),
    metric(
        "backend_bck",
        "1506:Number of Backup Servers:4",
        20,
        false,
        MetricScope::BackendOnly,
    ),
];

/// 전체 카탈로그 (실행 순서)
pub fn catalog() -> &'static [MetricDefinition] {
    &METRIC_CATALOG
}

/// 키로 메트릭 정의 조회
pub fn find(key: &str) -> Option<&'static MetricDefinition> {
    METRIC_CATALOG.iter().find(|m| m.key == key)
}

/// 활성화된 메트릭 집합
///
/// 카탈로그와 위치로 정렬된 불리언 플래그. 부족한 위치는 비활성으로 간주한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSelection {
    enabled: [bool; CATALOG_LEN],
}

impl MetricSelection {
    /// 모든 메트릭 활성화
    pub fn all() -> Self {
        Self {
            enabled: [true; CATALOG_LEN],
        }
    }

    /// 플래그 슬라이스로 생성 (초과분 무시)
    pub fn from_flags(flags: &[bool]) -> Self {
        let mut enabled = [false; CATALOG_LEN];
        for (slot, flag) in enabled.iter_mut().zip(flags) {
            *slot = *flag;
        }
        Self { enabled }
    }

    /// "1,0,1,..." 형식 문자열 파싱. 정확히 "1"인 토큰만 활성.
    pub fn parse(raw: &str) -> Self {
        let flags: Vec<bool> = raw.split(',').map(|t| t.trim() == "1").collect();
        Self::from_flags(&flags)
    }

    /// 위치 `index`의 메트릭 활성화 여부
    pub fn is_enabled(&self, index: usize) -> bool {
        self.enabled.get(index).copied().unwrap_or(false)
    }

    /// 활성화된 메트릭 정의를 카탈로그 순서로 순회
    pub fn enabled_metrics(&self) -> impl Iterator<Item = &'static MetricDefinition> + '_ {
        METRIC_CATALOG
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_enabled(*i))
            .map(|(_, m)| m)
    }
}
