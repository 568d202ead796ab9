//! 스냅샷 파일 저장소.
//!
//! `SnapshotStore` 포트 구현. 소스 URL마다 JSON 파일 하나에
//! 직전 실행의 전체 샘플 목록을 저장한다.
//! 구조: `<state_dir>/.haproxy_<URL 인코딩된 URL>.dat`

use async_trait::async_trait;
use haprobe_core::error::CoreError;
use haprobe_core::models::sample::Sample;
use haprobe_core::ports::snapshot_store::SnapshotStore;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

/// 스냅샷 파일 이름 접두사
const FILE_PREFIX: &str = ".haproxy_";

/// 스냅샷 파일 확장자
const FILE_EXTENSION: &str = ".dat";

/// 인코딩하지 않고 남겨 두는 문자 (기존 상태 파일 이름과 동일)
const UNESCAPED_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

/// URL을 파일 이름 성분으로 인코딩
///
/// 영숫자와 `-_.~!*'()` 외에는 모두 퍼센트 인코딩한다.
fn encode_file_component(raw: &str) -> String {
    UNESCAPED_MARKS
        .iter()
        .fold(urlencoding::encode(raw).into_owned(), |acc, &(escaped, mark)| {
            acc.replace(escaped, mark)
        })
}

/// URL별 스냅샷 파일 저장소
pub struct FileSnapshotStore {
    /// 스냅샷 디렉토리
    state_dir: PathBuf,
}

impl FileSnapshotStore {
    /// 새 스냅샷 저장소 생성 (디렉토리는 첫 저장 시 생성)
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    /// 소스 URL에 대응하는 스냅샷 파일 경로
    pub fn snapshot_path(&self, source_url: &str) -> PathBuf {
        let name = format!(
            "{FILE_PREFIX}{}{FILE_EXTENSION}",
            encode_file_component(source_url)
        );
        self.state_dir.join(name)
    }

    async fn ensure_state_dir(&self) -> Result<(), CoreError> {
        if fs::metadata(&self.state_dir).await.is_ok() {
            return Ok(());
        }

        fs::create_dir_all(&self.state_dir).await.map_err(|e| {
            CoreError::StateDir(format!(
                "cannot create {}: {e}",
                self.state_dir.display()
            ))
        })?;
        info!("스냅샷 디렉토리 생성: {}", self.state_dir.display());
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn load(&self, source_url: &str) -> Result<Option<Vec<Sample>>, CoreError> {
        let path = self.snapshot_path(source_url);

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("이전 스냅샷 없음: {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                warn!("스냅샷 읽기 실패, 첫 실행으로 처리: {}: {e}", path.display());
                return Ok(None);
            }
        };

        let content = content.trim();
        if content.is_empty() {
            debug!("빈 스냅샷 파일: {}", path.display());
            return Ok(None);
        }

        match serde_json::from_str::<Vec<Sample>>(content) {
            Ok(samples) => {
                debug!("스냅샷 로드: {} 샘플", samples.len());
                Ok(Some(samples))
            }
            Err(e) => {
                warn!("손상된 스냅샷, 첫 실행으로 처리: {}: {e}", path.display());
                Ok(None)
            }
        }
    }

    async fn save(&self, source_url: &str, samples: &[Sample]) -> Result<(), CoreError> {
        self.ensure_state_dir().await?;

        let path = self.snapshot_path(source_url);
        let content = serde_json::to_string(samples)?;

        fs::write(&path, content).await.map_err(|e| {
            CoreError::StateWrite(format!("cannot write {}: {e}", path.display()))
        })?;

        debug!("스냅샷 저장: {} 샘플 → {}", samples.len(), path.display());
        Ok(())
    }
}
