//! 비율(rate) 계산 엔진.
//!
//! 현재 샘플을 직전 스냅샷과 (외부 식별자, 오브젝트 키)로 매칭하여
//! 누적 카운터를 초당 비율로 변환한다. 게이지 메트릭은 현재 값을 그대로 쓴다.
//!
//! 규칙:
//! - 직전 스냅샷 없음 → 첫 관측, 결과 없음
//! - 게이지 → 현재 원시 값
//! - 비율, 매칭 없음 (새 오브젝트) → `0`
//! - 비율, 현재 < 직전 (카운터 리셋) → 현재 값
//! - 비율, 그 외 → (현재 - 직전) / 경과 초
//! - 경과 시간이 0 이하 → `0.00`
//!
//! 스냅샷 저장은 호출자(`Collector`)가 담당하며 이 모듈은 순수 계산만 한다.

use haprobe_core::models::sample::{RateResult, Sample};
use std::collections::HashMap;
use tracing::debug;

/// 비율 값 소수점 자릿수
pub const DECIMAL_PLACES: usize = 2;

/// 새 오브젝트의 비율 값
const NEW_OBJECT_RATE: &str = "0";

/// 매칭 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// 직전 스냅샷 없음. 이번 실행은 보고할 값이 없다
    FirstObservation,
    /// 현재 샘플 순서대로의 출력 레코드
    Rates(Vec<RateResult>),
}

/// 현재 샘플을 직전 스냅샷과 매칭하여 출력 레코드 생성
pub fn reconcile(current: &[Sample], previous: Option<&[Sample]>) -> Reconciliation {
    let Some(previous) = previous else {
        debug!("직전 스냅샷 없음: 첫 관측");
        return Reconciliation::FirstObservation;
    };

    // 중복 키는 먼저 나온 샘플 우선
    let mut baseline: HashMap<(&str, &str), &Sample> = HashMap::with_capacity(previous.len());
    for sample in previous {
        baseline.entry(sample.reconciliation_key()).or_insert(sample);
    }

    let mut matched = 0usize;
    let results = current
        .iter()
        .map(|cur| {
            if !is_ratio(cur) {
                return RateResult::from_sample(cur, cur.value.clone());
            }
            match baseline.get(&cur.reconciliation_key()) {
                Some(prev) => {
                    matched += 1;
                    RateResult::from_sample(cur, compute_delta(prev, cur))
                }
                None => RateResult::from_sample(cur, NEW_OBJECT_RATE),
            }
        })
        .collect::<Vec<_>>();

    debug!(
        "매칭 완료: 현재 {} / 직전 {} / 비율 매칭 {}",
        current.len(),
        previous.len(),
        matched
    );
    Reconciliation::Rates(results)
}

/// 두 시점의 카운터 값으로 초당 비율 계산
///
/// 어느 한쪽이라도 숫자가 아니면 빈 문자열을 반환한다 (출력 단계에서 제외됨).
pub fn compute_delta(prev: &Sample, cur: &Sample) -> String {
    let (Some(prev_value), Some(cur_value)) = (parse_counter(&prev.value), parse_counter(&cur.value))
    else {
        return String::new();
    };

    if cur_value < prev_value {
        return format_rate(cur_value);
    }

    let elapsed_secs = (cur.timestamp - prev.timestamp).num_milliseconds() as f64 / 1000.0;
    if elapsed_secs <= 0.0 {
        return format_rate(0.0);
    }

    format_rate((cur_value - prev_value) / elapsed_secs)
}

/// 카탈로그에 없는 키는 게이지로 취급 (원시 값 통과)
fn is_ratio(sample: &Sample) -> bool {
    sample.definition().is_some_and(|d| d.ratio)
}

fn parse_counter(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 소수점 둘째 자리 반올림 (0.5는 0에서 먼 쪽으로)
fn format_rate(value: f64) -> String {
    let scale = 10f64.powi(DECIMAL_PLACES as i32);
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.prec$}", prec = DECIMAL_PLACES)
}
