//! # haprobe-app
//!
//! HAPROBE 바이너리 진입점.
//! 설정 로드, 어댑터 와이어링, 수집 1회 실행, 종료 코드 결정.
//!
//! stdout은 수집 파이프라인이 읽는 데이터 채널이다.
//! 결과 레코드와 오류 메시지 한 줄만 stdout에 쓰고, 로그는 stderr로 보낸다.

mod cli;

use haprobe_core::config::ProbeConfig;
use haprobe_core::error::{CoreError, EXIT_OK};
use haprobe_core::models::request::ProbeRequest;
use haprobe_monitor::collector::{Collector, RunOutcome};
use haprobe_monitor::emitter;
use haprobe_network::http_client::HttpStatsClient;
use haprobe_storage::snapshot_file::FileSnapshotStore;
use std::io;
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// 로그 필터 대상 크레이트
const LOG_TARGETS: [&str; 6] = [
    "haprobe",
    "haprobe_core",
    "haprobe_monitor",
    "haprobe_network",
    "haprobe_storage",
    "haprobe_app",
];

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = match cli::parse() {
        Ok(args) => {
            init_tracing(&args.log_level);
            match run(args).await {
                Ok(()) => EXIT_OK,
                Err(e) => report_failure(&e),
            }
        }
        Err(e) => report_failure(&e),
    };

    std::process::exit(code);
}

/// 로깅 초기화 (RUST_LOG가 있으면 우선)
fn init_tracing(level: &str) {
    let log_filter = LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();
}

/// 오류 메시지를 stdout에 한 줄 쓰고 종료 코드 반환
fn report_failure(err: &CoreError) -> i32 {
    let code = err.exit_code();
    error!("수집 실패 (종료 코드 {code}): {err}");
    println!("{err}");
    code
}

async fn run(args: Args) -> Result<(), CoreError> {
    // 인자 개수 검증이 설정 로드보다 먼저
    let request = ProbeRequest::from_args(&args.params)?;

    let config = ProbeConfig::load(args.config.as_deref())?
        .with_overrides(args.state_dir, args.timeout_ms);
    info!(
        "HAPROBE 시작: url={}, 스냅샷 디렉토리={}",
        request.url,
        config.state_dir.display()
    );

    let source = Arc::new(HttpStatsClient::new(config.request_timeout())?);
    let store = Arc::new(FileSnapshotStore::new(config.state_dir.clone()));
    let collector = Collector::new(source, store);

    match collector.run(&request).await? {
        RunOutcome::FirstObservation => {
            info!("첫 실행: 출력 없이 종료");
        }
        RunOutcome::Report(results) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let written = emitter::write_results(&mut out, &results)?;
            debug!("{written}/{} 레코드 출력", results.len());
        }
    }

    Ok(())
}
