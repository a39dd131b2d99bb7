use async_trait::async_trait;
use carbon_txt_domain::DomainError;
use std::path::{Path, PathBuf};

#[async_trait]
pub trait LocalFiles: Send + Sync {
    /// Makes `path` absolute against the working directory without touching
    /// the filesystem.
    fn absolute(&self, path: &str) -> PathBuf;

    async fn exists(&self, path: &Path) -> bool;

    async fn canonicalize(&self, path: &Path) -> Result<PathBuf, DomainError>;

    async fn read_to_string(&self, path: &Path) -> Result<String, DomainError>;
}
