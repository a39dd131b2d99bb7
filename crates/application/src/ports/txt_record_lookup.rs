use async_trait::async_trait;
use carbon_txt_domain::DomainError;

#[async_trait]
pub trait TxtRecordLookup: Send + Sync {
    /// Returns every TXT record at `domain`, each record's character
    /// strings already joined. A missing name or an empty answer is
    /// `Ok(vec![])`, not an error.
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError>;
}
