//! 실행 설정.
//!
//! 스냅샷 디렉토리, 요청 타임아웃 등 런타임 설정을 정의한다.
//! 우선순위: 기본값 → JSON 설정 파일 → CLI 플래그/환경 변수.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::CoreError;

/// 스냅샷 디렉토리 이름 (시스템 임시 디렉토리 하위)
const STATE_DIR_NAME: &str = "haprobe";

/// 프로브 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// 이전 샘플 스냅샷 저장 디렉토리
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
    /// HTTP 요청 타임아웃 (밀리초)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ProbeConfig {
    /// 기본 설정값 반환
    pub fn default_config() -> Self {
        Self {
            state_dir: default_state_dir(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }

    /// 설정 파일이 있으면 로드, 없으면 기본값
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default_config()),
        }
    }

    /// CLI/환경 변수 오버라이드 적용
    pub fn with_overrides(mut self, state_dir: Option<PathBuf>, timeout_ms: Option<u64>) -> Self {
        if let Some(dir) = state_dir {
            self.state_dir = dir;
        }
        if let Some(ms) = timeout_ms {
            self.request_timeout_ms = ms;
        }
        self
    }

    /// 요청 타임아웃을 Duration으로 반환
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// 파일에서 설정 로드
    fn load_from_file(path: &Path) -> Result<Self, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;

        let config: ProbeConfig = serde_json::from_str(&content).map_err(|e| {
            CoreError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;

        if config.request_timeout_ms == 0 {
            return Err(CoreError::Config(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }

        debug!("설정 파일 로드 완료: {}", path.display());
        Ok(config)
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

// ============================================================
// 기본값 함수
// ============================================================

fn default_state_dir() -> PathBuf {
    std::env::temp_dir().join(STATE_DIR_NAME)
}

fn default_request_timeout_ms() -> u64 {
    30_000
}
