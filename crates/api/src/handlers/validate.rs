use crate::dto::{DomainSubmission, FileSubmission, UrlSubmission, ValidationResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use carbon_txt_domain::validators;
use carbon_txt_domain::{classify_uri, UriKind, ValidationResult};
use tracing::{debug, info};

type ValidationReply = (StatusCode, Json<ValidationResponse>);

/// What was asked of a validation endpoint, logged with its outcome as a
/// `validation_request` event to track which domains publish carbon.txt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest<'a> {
    pub endpoint: &'static str,
    pub url: Option<&'a str>,
    pub domain: Option<String>,
}

impl<'a> ValidationRequest<'a> {
    pub fn file() -> Self {
        Self {
            endpoint: "/api/validate/file/",
            url: None,
            domain: None,
        }
    }

    /// The domain is the URL's authority.
    pub fn url(url: &'a str) -> Self {
        let domain = match classify_uri(url) {
            UriKind::Absolute { authority, .. } => Some(authority),
            UriKind::NotAbsolute => None,
        };
        Self {
            endpoint: "/api/validate/url/",
            url: Some(url),
            domain,
        }
    }

    pub fn domain(domain: &str) -> Self {
        Self {
            endpoint: "/api/validate/domain/",
            url: None,
            domain: Some(domain.to_string()),
        }
    }

    fn log(&self, success: bool) {
        info!(
            target: "carbon_txt::validation_request",
            endpoint = self.endpoint,
            success,
            url = self.url.unwrap_or_default(),
            domain = self.domain.as_deref().unwrap_or_default(),
            "validation_request"
        );
    }
}

/// Validation failures are reports, not request errors: they come back as
/// 200 with `success: false`. Only malformed input gets a 400.
fn reply(request: ValidationRequest<'_>, result: ValidationResult) -> ValidationReply {
    debug!(outcome = ?result.outcome, url = ?result.url, "Validation finished");
    let response = ValidationResponse::from(result);
    request.log(response.is_success());
    (StatusCode::OK, Json(response))
}

fn bad_request(request: ValidationRequest<'_>, field: &str, message: String) -> ValidationReply {
    debug!(field, message = %message, "Rejected validation request");
    request.log(false);
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationResponse::invalid_request(field, message)),
    )
}

pub async fn validate_file(
    State(state): State<AppState>,
    Json(req): Json<FileSubmission>,
) -> ValidationReply {
    let result = state.validator.validate_contents(&req.text_contents).await;
    reply(ValidationRequest::file(), result)
}

pub async fn validate_url(
    State(state): State<AppState>,
    Json(req): Json<UrlSubmission>,
) -> ValidationReply {
    let url = req.url.trim();
    if let Err(message) = validators::validate_url(url) {
        return bad_request(ValidationRequest::url(url), "url", message);
    }
    let result = state.validator.validate_url(url).await;
    reply(ValidationRequest::url(url), result)
}

pub async fn validate_domain(
    State(state): State<AppState>,
    Json(req): Json<DomainSubmission>,
) -> ValidationReply {
    let domain = req.domain.trim();
    if let Err(message) = validators::validate_domain(domain) {
        return bad_request(ValidationRequest::domain(domain), "domain", message);
    }
    let result = state.validator.validate_domain(domain).await;
    reply(ValidationRequest::domain(domain), result)
}
