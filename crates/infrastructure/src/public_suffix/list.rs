use super::suffix_trie::SuffixTrie;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use carbon_txt_application::ports::PublicSuffixList;
use carbon_txt_domain::{Config, DomainError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Public suffix lookups backed by the list compiled into the `psl` crate.
///
/// A downloaded list, once loaded, takes precedence over the built-in
/// copy. It is swapped in atomically so lookups never block on a refresh.
pub struct PublicSuffixListAdapter {
    downloaded: ArcSwap<Option<SuffixTrie>>,
    http_client: reqwest::Client,
    list_url: String,
    timeout: Duration,
}

impl PublicSuffixListAdapter {
    pub fn new(list_url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self, DomainError> {
        let http_client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::PublicSuffixList(e.to_string()))?;

        Ok(Self {
            downloaded: ArcSwap::from_pointee(None),
            http_client,
            list_url: list_url.into(),
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        Self::new(
            config.resolver.public_suffix_list_url.clone(),
            config.http.timeout(),
            &config.http.effective_user_agent(),
        )
    }

    /// Replaces the active list with `list`. Returns the rule count; an
    /// empty list is rejected and the previous one stays active.
    pub fn load_list(&self, list: &str) -> Result<usize, DomainError> {
        let trie = SuffixTrie::parse(list);
        if trie.is_empty() {
            return Err(DomainError::PublicSuffixList(
                "list contains no rules".to_string(),
            ));
        }

        let rules = trie.len();
        self.downloaded.store(Arc::new(Some(trie)));
        Ok(rules)
    }

    pub fn has_downloaded_list(&self) -> bool {
        self.downloaded.load().is_some()
    }

    async fn download(&self) -> Result<String, DomainError> {
        let response = self
            .http_client
            .get(&self.list_url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                DomainError::PublicSuffixList(format!("fetch error for {}: {}", self.list_url, e))
            })?;

        if !response.status().is_success() {
            return Err(DomainError::PublicSuffixList(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                self.list_url
            )));
        }

        response.text().await.map_err(|e| {
            DomainError::PublicSuffixList(format!("read error for {}: {}", self.list_url, e))
        })
    }
}

#[async_trait]
impl PublicSuffixList for PublicSuffixListAdapter {
    fn registrable_domain(&self, domain: &str) -> Option<String> {
        let domain = domain.trim_end_matches('.').to_lowercase();
        if domain.is_empty() {
            return None;
        }

        let guard = self.downloaded.load();
        if let Some(trie) = guard.as_ref() {
            return trie.registrable_domain(&domain);
        }

        psl::domain(domain.as_bytes())
            .and_then(|d| std::str::from_utf8(d.as_bytes()).ok())
            .map(|s| s.to_string())
    }

    async fn refresh(&self) -> Result<usize, DomainError> {
        debug!(url = %self.list_url, "Downloading public suffix list");

        let list = match self.download().await {
            Ok(list) => list,
            Err(e) => {
                warn!(error = %e, "Public suffix list refresh failed, keeping current list");
                return Err(e);
            }
        };

        let rules = self.load_list(&list)?;
        info!(rules, url = %self.list_url, "Public suffix list refreshed");
        Ok(rules)
    }
}
