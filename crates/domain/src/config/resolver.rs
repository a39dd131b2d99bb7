use serde::{Deserialize, Serialize};

pub const DEFAULT_PUBLIC_SUFFIX_LIST_URL: &str =
    "https://publicsuffix.org/list/public_suffix_list.dat";

/// Delegation-chasing limits and public suffix list handling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// DNS/HTTP delegations followed on one path before giving up
    /// (default: 5)
    #[serde(default = "default_max_delegation_hops")]
    pub max_delegation_hops: usize,

    /// Download a fresh public suffix list at startup (default: false)
    #[serde(default)]
    pub refresh_public_suffix_list: bool,

    #[serde(default = "default_public_suffix_list_url")]
    pub public_suffix_list_url: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_delegation_hops: default_max_delegation_hops(),
            refresh_public_suffix_list: false,
            public_suffix_list_url: default_public_suffix_list_url(),
        }
    }
}

fn default_max_delegation_hops() -> usize {
    5
}

fn default_public_suffix_list_url() -> String {
    DEFAULT_PUBLIC_SUFFIX_LIST_URL.to_string()
}
