use async_trait::async_trait;
use carbon_txt_application::ports::LocalFiles;
use carbon_txt_domain::DomainError;
use std::path::{Path, PathBuf};

/// Local carbon.txt files read through tokio's blocking-pool fs calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLocalFiles;

impl TokioLocalFiles {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LocalFiles for TokioLocalFiles {
    fn absolute(&self, path: &str) -> PathBuf {
        std::path::absolute(path).unwrap_or_else(|_| PathBuf::from(path))
    }

    /// Only regular files count; a directory of the same name does not.
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|metadata| metadata.is_file())
            .unwrap_or(false)
    }

    async fn canonicalize(&self, path: &Path) -> Result<PathBuf, DomainError> {
        tokio::fs::canonicalize(path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, DomainError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))
    }
}
