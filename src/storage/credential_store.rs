//! 클라이언트 로컬 자격 증명 저장소
//!
//! 브라우저의 localStorage 역할을 하는 키-값 저장소입니다.
//! 세션/리프레시 토큰과 언어 설정을 보관합니다.
//!
//! ## 구현체
//!
//! - [`MemoryCredentialStore`] - 프로세스 메모리 (기본값, 테스트용)
//! - [`FileCredentialStore`] - JSON 파일에 즉시 기록 (재시작 후에도 유지)
//!
//! ```rust,ignore
//! let store = FileCredentialStore::open("/var/lib/posko/session.json")?;
//! store.set(StorageKeys::LOCALE, "en")?;
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::{debug, warn};

use crate::errors::{AppError, AppResult};

/// 자격 증명 저장소 인터페이스
pub trait CredentialStore: Send + Sync {
    /// 키에 해당하는 값 조회
    fn get(&self, key: &str) -> Option<String>;

    /// 값 저장
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// 값 삭제 (없는 키는 무시)
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// 메모리 기반 저장소
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기값이 있는 저장소 생성
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AppError::StorageError(format!("저장소 잠금 실패: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AppError::StorageError(format!("저장소 잠금 실패: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

/// JSON 파일 기반 저장소
///
/// 모든 쓰기는 파일에 즉시 반영됩니다. 읽기는 메모리 캐시를 사용합니다.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileCredentialStore {
    /// 파일 저장소를 엽니다.
    ///
    /// 파일이 없으면 빈 저장소로 시작하고, 내용이 손상된 경우 경고 후 비웁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::StorageError` - 파일 읽기 실패
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| {
                AppError::StorageError(format!("저장소 파일 읽기 실패 ({}): {}", path.display(), e))
            })?;
            match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(e) => {
                    warn!("저장소 파일이 손상되어 초기화합니다 ({}): {}", path.display(), e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        debug!("자격 증명 저장소 로드: {} ({}개 항목)", path.display(), entries.len());

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, entries: &HashMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::StorageError(format!("저장소 디렉터리 생성 실패: {}", e))
                })?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json).map_err(|e| {
            AppError::StorageError(format!("저장소 파일 쓰기 실패 ({}): {}", self.path.display(), e))
        })
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AppError::StorageError(format!("저장소 잠금 실패: {}", e)))?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| AppError::StorageError(format!("저장소 잠금 실패: {}", e)))?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}
