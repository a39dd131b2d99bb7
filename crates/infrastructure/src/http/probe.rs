use async_trait::async_trait;
use carbon_txt_application::ports::{HttpProbe, HttpResponse, RequestOptions};
use carbon_txt_domain::config::HttpConfig;
use carbon_txt_domain::DomainError;
use reqwest::header::USER_AGENT;
use reqwest::{redirect, Client, Method};
use std::collections::HashMap;
use tracing::debug;

/// HEAD/GET over reqwest with rustls.
///
/// Redirects are followed up to the configured limit; the response returned
/// is the one from the final hop. User-Agent and timeout come with each
/// request.
pub struct ReqwestHttpProbe {
    client: Client,
}

impl ReqwestHttpProbe {
    pub fn new(max_redirects: usize) -> Result<Self, DomainError> {
        let policy = if max_redirects == 0 {
            redirect::Policy::none()
        } else {
            redirect::Policy::limited(max_redirects)
        };

        let client = Client::builder()
            .use_rustls_tls()
            .redirect(policy)
            .build()
            .map_err(|e| DomainError::ConnectionFailed(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self, DomainError> {
        Self::new(config.max_redirects)
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, DomainError> {
        let read_body = method != Method::HEAD;
        debug!(method = %method, url, "Sending request");

        let response = self
            .client
            .request(method, url)
            .header(USER_AGENT, options.user_agent.as_str())
            .timeout(options.timeout)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();

        let body = if read_body {
            response.text().await.map_err(|e| transport_error(url, e))?
        } else {
            String::new()
        };

        debug!(url, status, body_len = body.len(), "Response received");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn transport_error(url: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::Timeout(format!("Request to {} timed out", url))
    } else {
        DomainError::ConnectionFailed(e.to_string())
    }
}

#[async_trait]
impl HttpProbe for ReqwestHttpProbe {
    async fn head(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, DomainError> {
        self.send(Method::HEAD, url, options).await
    }

    async fn get(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, DomainError> {
        self.send(Method::GET, url, options).await
    }
}
