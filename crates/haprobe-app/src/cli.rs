//! 명령행 인자.
//!
//! 위치 인자 6개는 개수 검증 없이 그대로 받아 `ProbeRequest::from_args`에 넘긴다.
//! clap 자체의 파싱 실패도 인자 오류(종료 코드 3)로 통일한다.
//! 옵션 플래그는 위치 인자보다 앞에 와야 한다. 첫 위치 인자 이후는 `-`로
//! 시작하더라도 모두 값으로 받는다 (예: `-`로 시작하는 비밀번호).

use clap::error::ErrorKind;
use clap::Parser;
use haprobe_core::error::CoreError;
use std::path::PathBuf;

/// HAProxy CSV 통계 수집 프로브
///
/// 한 번 실행에 한 번 수집하며, 직전 실행과 비교한 초당 비율을 출력한다.
#[derive(Parser, Debug)]
#[command(name = "haprobe")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// <URL> <METRIC_STATE> <FILTER_PROXY> <FILTER_SERVER> <USER_NAME> <PASS_WORD>
    #[arg(value_name = "PARAMS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub params: Vec<String>,

    /// JSON 설정 파일 경로
    #[arg(long, env = "HAPROBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// 스냅샷 디렉토리 (기본: 시스템 임시 디렉토리/haprobe)
    #[arg(long, env = "HAPROBE_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// HTTP 요청 타임아웃 (밀리초)
    #[arg(long, env = "HAPROBE_TIMEOUT_MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// 로그 레벨 (trace, debug, info, warn, error). 로그는 stderr로만 기록
    #[arg(long, short = 'l', default_value = "warn")]
    pub log_level: String,
}

/// 인자 파싱. help/version은 clap이 처리하고 종료한다.
pub fn parse() -> Result<Args, CoreError> {
    match Args::try_parse() {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{e}");
            Err(CoreError::InvalidArguments)
        }
    }
}
