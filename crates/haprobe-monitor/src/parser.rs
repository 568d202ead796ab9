//! HAProxy CSV 통계 파서.
//!
//! CSV 본문 + 활성 메트릭 + 필터로 현재 샘플 목록을 만든다.
//! 행 단위 이상(짧은 행, 빈 값)은 조용히 건너뛰며 에러로 올리지 않는다.

use chrono::{DateTime, Utc};
use haprobe_core::error::CoreError;
use haprobe_core::models::metric::MetricSelection;
use haprobe_core::models::request::ProbeRequest;
use haprobe_core::models::sample::Sample;
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// 프록시 이름 필드 위치
const PXNAME_FIELD: usize = 0;
/// 오브젝트(FRONTEND/BACKEND/서버) 이름 필드 위치
const SVNAME_FIELD: usize = 1;

/// 이름 필터: 항목들을 `|`로 묶은 대소문자 무시 정규식
///
/// 항목이 없으면 모든 이름을 통과시킨다.
#[derive(Debug, Clone)]
pub struct ObjectFilter {
    pattern: Option<Regex>,
}

impl ObjectFilter {
    /// 필터 항목 목록으로 생성
    pub fn new(terms: &[String]) -> Result<Self, CoreError> {
        if terms.is_empty() {
            return Ok(Self::match_all());
        }

        let joined = terms.join("|");
        let pattern = RegexBuilder::new(&joined)
            .case_insensitive(true)
            .build()
            .map_err(|e| CoreError::InvalidFilter(format!("{joined}: {e}")))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// 필터 없음
    pub fn match_all() -> Self {
        Self { pattern: None }
    }

    /// 이름이 필터를 통과하는지 (부분 일치)
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.as_ref().map_or(true, |p| p.is_match(name))
    }
}

/// CSV → 샘플 파서
#[derive(Debug, Clone)]
pub struct SampleParser {
    metrics: MetricSelection,
    proxy_filter: ObjectFilter,
    server_filter: ObjectFilter,
}

impl SampleParser {
    /// 구성 요소로 직접 생성
    pub fn new(
        metrics: MetricSelection,
        proxy_filter: ObjectFilter,
        server_filter: ObjectFilter,
    ) -> Self {
        Self {
            metrics,
            proxy_filter,
            server_filter,
        }
    }

    /// 수집 요청의 메트릭 선택과 필터로 생성
    pub fn from_request(request: &ProbeRequest) -> Result<Self, CoreError> {
        Ok(Self::new(
            request.metrics.clone(),
            ObjectFilter::new(&request.proxy_filters)?,
            ObjectFilter::new(&request.server_filters)?,
        ))
    }

    /// CSV 본문 파싱
    ///
    /// 첫 줄(헤더)과 마지막 요소(끝 빈 줄)는 버린다.
    /// 출력 순서는 행 순서 × 카탈로그 순서.
    pub fn parse(&self, csv: &str, timestamp: DateTime<Utc>) -> Vec<Sample> {
        let lines: Vec<&str> = csv.split('\n').collect();
        if lines.len() < 3 {
            debug!("데이터 행 없음");
            return Vec::new();
        }

        let mut samples = Vec::new();
        for &line in &lines[1..lines.len() - 1] {
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.parse_row(line, timestamp, &mut samples);
        }

        debug!("{} 행에서 {} 샘플 파싱", lines.len() - 2, samples.len());
        samples
    }

    fn parse_row(&self, line: &str, timestamp: DateTime<Utc>, out: &mut Vec<Sample>) {
        let fields: Vec<&str> = line.split(',').collect();
        let (Some(proxy), Some(object)) = (fields.get(PXNAME_FIELD), fields.get(SVNAME_FIELD))
        else {
            return;
        };

        if !self.proxy_filter.matches(proxy) || !self.server_filter.matches(object) {
            return;
        }

        for definition in self.metrics.enabled_metrics() {
            if !definition.applies_to(object) {
                continue;
            }
            let value = fields.get(definition.column).copied().unwrap_or("");
            out.push(Sample::new(definition, proxy, object, value, timestamp));
        }
    }
}
