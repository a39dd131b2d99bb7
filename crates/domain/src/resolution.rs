use serde::{Deserialize, Serialize};
use std::fmt;

/// How a carbon.txt location was discovered.
///
/// A location found at one of the conventional paths carries no delegation
/// method at all (`Option::None` on [`ResolvedLocation`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelegationMethod {
    /// `carbon-txt-location` DNS TXT record.
    Dns,
    /// `CarbonTxt-Location` HTTP response header.
    Http,
}

impl DelegationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dns => "dns",
            Self::Http => "http",
        }
    }
}

impl fmt::Display for DelegationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a carbon.txt file lives, confirmed reachable at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Absolute http(s) URI, or absolute local file path.
    pub uri: String,
    pub delegation_method: Option<DelegationMethod>,
}

impl ResolvedLocation {
    pub fn direct(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            delegation_method: None,
        }
    }

    pub fn delegated(uri: impl Into<String>, method: DelegationMethod) -> Self {
        Self {
            uri: uri.into(),
            delegation_method: Some(method),
        }
    }

    pub fn is_delegated(&self) -> bool {
        self.delegation_method.is_some()
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.delegation_method {
            Some(method) => write!(f, "{} (delegated via {})", self.uri, method),
            None => f.write_str(&self.uri),
        }
    }
}
