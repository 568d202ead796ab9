//! 샘플 및 비율 결과 모델.
//!
//! `Sample`은 한 번의 실행에서 파싱된 (행, 메트릭) 값이고,
//! 직렬화된 샘플 목록이 곧 다음 실행의 스냅샷이 된다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::metric::{self, MetricDefinition};

/// 오브젝트 키 구분자 (프록시 이름 + 오브젝트 이름)
pub const OBJECT_KEY_SEPARATOR: char = ':';

/// 현재 샘플: 한 행의 한 메트릭 값
///
/// 스냅샷 파일 필드명은 기존 상태 파일과 호환되도록 고정한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// 카탈로그 키 (예: "stot")
    #[serde(rename = "variableName")]
    pub metric_key: String,
    /// 외부 식별자
    #[serde(rename = "metricUUID")]
    pub external_id: String,
    /// 수집 시각 (한 실행 내 공통)
    pub timestamp: DateTime<Utc>,
    /// 원시 값 (숫자 또는 빈 문자열)
    pub value: String,
    /// 오브젝트 키 ("프록시:오브젝트")
    #[serde(rename = "object")]
    pub object_key: String,
}

impl Sample {
    /// 카탈로그 항목과 CSV 필드로 샘플 생성
    pub fn new(
        definition: &MetricDefinition,
        proxy: &str,
        object: &str,
        value: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            metric_key: definition.key.to_string(),
            external_id: definition.external_id.to_string(),
            timestamp,
            value: value.into(),
            object_key: object_key(proxy, object),
        }
    }

    /// 스냅샷 간 매칭 키 (외부 식별자, 오브젝트 키)
    pub fn reconciliation_key(&self) -> (&str, &str) {
        (self.external_id.as_str(), self.object_key.as_str())
    }

    /// 카탈로그 정의 조회 (알 수 없는 키면 None)
    pub fn definition(&self) -> Option<&'static MetricDefinition> {
        metric::find(&self.metric_key)
    }
}

/// 프록시 이름과 오브젝트 이름으로 오브젝트 키 생성
pub fn object_key(proxy: &str, object: &str) -> String {
    format!("{proxy}{OBJECT_KEY_SEPARATOR}{object}")
}

/// 출력 레코드
///
/// 비율 메트릭은 계산된 초당 값, 게이지는 현재 원시 값.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResult {
    /// 외부 식별자
    pub external_id: String,
    /// 현재 샘플 시각
    pub timestamp: DateTime<Utc>,
    /// 출력 값 (숫자가 아니면 출력 단계에서 제외)
    pub value: String,
    /// 오브젝트 키
    pub object_key: String,
}

impl RateResult {
    /// 현재 샘플과 값으로 결과 생성
    pub fn from_sample(sample: &Sample, value: impl Into<String>) -> Self {
        Self {
            external_id: sample.external_id.clone(),
            timestamp: sample.timestamp,
            value: value.into(),
            object_key: sample.object_key.clone(),
        }
    }
}
