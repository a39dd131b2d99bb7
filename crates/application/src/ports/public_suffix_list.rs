use async_trait::async_trait;
use carbon_txt_domain::DomainError;

#[async_trait]
pub trait PublicSuffixList: Send + Sync {
    /// The registrable domain (public suffix plus one label) for `domain`,
    /// or `None` when `domain` is itself a public suffix or not a name.
    fn registrable_domain(&self, domain: &str) -> Option<String>;

    /// Downloads a fresh copy of the list and uses it for later lookups.
    /// Returns the number of rules loaded. On failure the previous list
    /// stays in use.
    async fn refresh(&self) -> Result<usize, DomainError>;
}
