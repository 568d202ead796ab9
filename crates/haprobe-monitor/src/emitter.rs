//! 결과 출력기.
//!
//! 값이 유한한 숫자인 레코드만 `externalId|value|objectKey|` 한 줄씩 쓴다.
//! 빈 값과 숫자가 아닌 값은 조용히 버린다.

use haprobe_core::models::sample::RateResult;
use std::io::{self, Write};

/// 출력 필드 구분자
const FIELD_SEPARATOR: char = '|';

/// 출력 가능한 값인지 판단
pub fn is_reportable(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

/// 레코드 한 줄 포맷 (줄바꿈 제외)
pub fn format_line(result: &RateResult) -> String {
    format!(
        "{id}{sep}{value}{sep}{object}{sep}",
        id = result.external_id,
        value = result.value,
        object = result.object_key,
        sep = FIELD_SEPARATOR,
    )
}

/// 출력 가능한 레코드를 writer에 기록하고 기록한 줄 수 반환
pub fn write_results<W: Write>(out: &mut W, results: &[RateResult]) -> io::Result<usize> {
    let mut written = 0;
    for result in results.iter().filter(|r| is_reportable(&r.value)) {
        writeln!(out, "{}", format_line(result))?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
