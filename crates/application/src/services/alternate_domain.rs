use crate::ports::PublicSuffixList;
use carbon_txt_domain::normalize_domain;
use std::sync::Arc;

/// Pairs a registrable domain with its `www.` form.
///
/// `example.com` and `www.example.com` are each other's alternate; any
/// other name (`blog.example.com`, `www.blog.example.com`, a bare public
/// suffix) has none.
pub struct AlternateDomainPolicy {
    suffixes: Arc<dyn PublicSuffixList>,
}

impl AlternateDomainPolicy {
    pub fn new(suffixes: Arc<dyn PublicSuffixList>) -> Self {
        Self { suffixes }
    }

    pub fn alternate_domain(&self, domain: &str) -> Option<String> {
        let domain = normalize_domain(domain);
        let registrable = self.suffixes.registrable_domain(&domain)?;

        if domain == registrable {
            return Some(format!("www.{}", registrable));
        }

        match domain.strip_prefix("www.") {
            Some(rest) if rest == registrable => Some(registrable),
            _ => None,
        }
    }

    pub fn suffixes(&self) -> &Arc<dyn PublicSuffixList> {
        &self.suffixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use carbon_txt_domain::DomainError;

    /// Two-level suffixes only for `co.uk`, one level otherwise.
    struct FixedSuffixes;

    #[async_trait]
    impl PublicSuffixList for FixedSuffixes {
        fn registrable_domain(&self, domain: &str) -> Option<String> {
            let labels: Vec<&str> = domain.split('.').collect();
            let suffix_len = if domain.ends_with(".co.uk") { 2 } else { 1 };
            if labels.len() <= suffix_len {
                return None;
            }
            Some(labels[labels.len() - suffix_len - 1..].join("."))
        }

        async fn refresh(&self) -> Result<usize, DomainError> {
            Ok(0)
        }
    }

    fn policy() -> AlternateDomainPolicy {
        AlternateDomainPolicy::new(Arc::new(FixedSuffixes))
    }

    #[test]
    fn test_bare_domain_gets_www() {
        assert_eq!(
            policy().alternate_domain("example.com"),
            Some("www.example.com".to_string())
        );
        assert_eq!(
            policy().alternate_domain("example.co.uk"),
            Some("www.example.co.uk".to_string())
        );
    }

    #[test]
    fn test_www_domain_gets_bare() {
        assert_eq!(
            policy().alternate_domain("WWW.Example.com."),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_subdomains_have_no_alternate() {
        assert_eq!(policy().alternate_domain("blog.example.com"), None);
        assert_eq!(policy().alternate_domain("www.blog.example.com"), None);
        assert_eq!(policy().alternate_domain("com"), None);
    }
}
