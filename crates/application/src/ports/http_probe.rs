use async_trait::async_trait;
use carbon_txt_domain::DomainError;
use std::collections::HashMap;
use std::time::Duration;

/// Per-request settings, owned by the finder and passed on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are lower-cased by the adapter.
    pub headers: HashMap<String, String>,
    /// Empty for HEAD requests.
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// HEAD and GET against absolute http(s) URLs. Redirects are followed by the
/// adapter; the response describes the final hop. Transport failures
/// (connect, TLS, timeout) are `Err`, any HTTP status is `Ok`.
#[async_trait]
pub trait HttpProbe: Send + Sync {
    async fn head(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, DomainError>;

    async fn get(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, DomainError>;
}
