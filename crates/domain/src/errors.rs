use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by outbound adapters (DNS, HTTP, filesystem).
///
/// The finder never surfaces these directly: every probe turns them into
/// "nothing found via this mechanism" plus a trace entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    #[error("DNS lookup failed: {0}")]
    DnsLookupFailed(String),

    #[error("Could not connect: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Public suffix list error: {0}")]
    PublicSuffixList(String),
}

/// Why a carbon.txt location could not be reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnreachableCause {
    /// Transport-level failure (connect, TLS, timeout).
    Connect(String),
    /// The server answered with a status of 400 or above.
    HttpStatus(u16),
    /// Every discovery mechanism was tried and none produced a file.
    Exhausted,
}

/// Terminal outcome of a failed resolution or fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Always carries the originally requested domain or URI, never an
    /// alternate domain tried on the caller's behalf.
    #[error("{}", unreachable_message(.target, .cause))]
    Unreachable {
        target: String,
        cause: UnreachableCause,
    },

    #[error("File not found at {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read local file {}: {reason}", .path.display())]
    LocalRead { path: PathBuf, reason: String },

    #[error("Delegation chain starting at {origin} exceeded {max} hops")]
    TooManyDelegations { origin: String, max: usize },

    #[error("Delegation loop detected while resolving {origin}: {domain} was already visited")]
    DelegationLoop { origin: String, domain: String },
}

fn unreachable_message(target: &str, cause: &UnreachableCause) -> String {
    match cause {
        UnreachableCause::Connect(reason) => {
            format!("Could not connect to {}. Error was: {}", target, reason)
        }
        UnreachableCause::HttpStatus(status) => {
            format!("HTTP error {} when connecting to {}", status, target)
        }
        UnreachableCause::Exhausted => format!(
            "Unable to find a valid carbon.txt file at the domain {}",
            target
        ),
    }
}

impl ResolveError {
    pub fn unreachable(target: impl Into<String>, cause: UnreachableCause) -> Self {
        Self::Unreachable {
            target: target.into(),
            cause,
        }
    }

    pub fn exhausted(domain: impl Into<String>) -> Self {
        Self::unreachable(domain, UnreachableCause::Exhausted)
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }

    /// Running out of delegation hops aborts the whole resolution. Every
    /// other error, a delegation loop included, only fails the current step.
    pub fn is_chain_fatal(&self) -> bool {
        matches!(self, Self::TooManyDelegations { .. })
    }

    /// Short machine-readable class name, used in API and CLI error listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unreachable { .. } => "UnreachableCarbonTxtFile",
            Self::FileNotFound(_) => "FileNotFound",
            Self::LocalRead { .. } => "LocalReadError",
            Self::TooManyDelegations { .. } => "TooManyDelegations",
            Self::DelegationLoop { .. } => "DelegationLoop",
        }
    }
}

/// Failures turning fetched text into a carbon.txt document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Not parseable TOML: {0}")]
    NotParseableToml(String),

    #[error("Not parseable TOML, content looks like an HTML page: {0}")]
    NotParseableTomlButHtml(String),

    #[error("'{0}' is not a valid carbon.txt syntax version")]
    InvalidVersion(String),

    #[error("Validation error: {}", ValidationErrors(.0))]
    Validation(Vec<String>),
}

impl ParseError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotParseableToml(_) => "NotParseableTOML",
            Self::NotParseableTomlButHtml(_) => "NotParseableTOMLButHTML",
            Self::InvalidVersion(_) => "InvalidVersionError",
            Self::Validation(_) => "ValidationError",
        }
    }

    /// One entry per problem, suitable for user-facing error lists.
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}

struct ValidationErrors<'a>(&'a [String]);

impl fmt::Display for ValidationErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_message_names_domain() {
        let err = ResolveError::exhausted("a.com");
        assert_eq!(
            err.to_string(),
            "Unable to find a valid carbon.txt file at the domain a.com"
        );
        assert!(err.is_unreachable());
        assert!(!err.is_chain_fatal());
    }

    #[test]
    fn test_http_status_message() {
        let err = ResolveError::unreachable(
            "https://a.com/carbon.txt",
            UnreachableCause::HttpStatus(404),
        );
        assert_eq!(
            err.to_string(),
            "HTTP error 404 when connecting to https://a.com/carbon.txt"
        );
    }

    #[test]
    fn test_only_hop_overflow_is_fatal() {
        let hops = ResolveError::TooManyDelegations {
            origin: "a.com".to_string(),
            max: 5,
        };
        let looped = ResolveError::DelegationLoop {
            origin: "a.com".to_string(),
            domain: "b.com".to_string(),
        };
        assert!(hops.is_chain_fatal());
        assert!(!looped.is_chain_fatal());
        assert_eq!(looped.kind(), "DelegationLoop");
    }

    #[test]
    fn test_validation_details_are_split() {
        let err = ParseError::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.details(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Validation error: a; b");
    }
}
