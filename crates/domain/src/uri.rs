//! Classification of user-supplied locations.
//!
//! Only `http` and `https` URIs count as absolute. Bare domains, relative
//! paths and absolute filesystem paths are all `NotAbsolute`.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriKind {
    Absolute {
        scheme: String,
        authority: String,
        path: String,
    },
    NotAbsolute,
}

impl UriKind {
    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Absolute { .. })
    }
}

pub fn classify_uri(input: &str) -> UriKind {
    let Ok(url) = Url::parse(input.trim()) else {
        return UriKind::NotAbsolute;
    };

    if !matches!(url.scheme(), "http" | "https") {
        return UriKind::NotAbsolute;
    }

    let Some(host) = url.host_str() else {
        return UriKind::NotAbsolute;
    };

    let authority = match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    UriKind::Absolute {
        scheme: url.scheme().to_string(),
        authority,
        path: url.path().to_string(),
    }
}

/// Lowercases and drops surrounding whitespace and a trailing root dot, so
/// `Example.COM.` and `example.com` compare equal.
pub fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim();
    domain
        .strip_suffix('.')
        .unwrap_or(domain)
        .to_ascii_lowercase()
}

/// Loose syntactic check for a delegation target that is not a URI.
///
/// Accepts dot-separated labels of letters, digits, `-` and `_`, with an
/// optional trailing dot.
pub fn looks_like_domain(input: &str) -> bool {
    let name = input.strip_suffix('.').unwrap_or(input);
    if name.is_empty() || name.len() > 253 {
        return false;
    }

    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    })
}
