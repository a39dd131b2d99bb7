use carbon_txt_domain::{ValidationIssue, ValidationResult};
use serde::{Deserialize, Serialize};

/// Raw carbon.txt contents to validate.
#[derive(Deserialize, Debug)]
pub struct FileSubmission {
    pub text_contents: String,
}

/// An http(s) URL of a carbon.txt file.
#[derive(Deserialize, Debug)]
pub struct UrlSubmission {
    pub url: String,
}

#[derive(Deserialize, Debug)]
pub struct DomainSubmission {
    pub domain: String,
}

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum ValidationResponse {
    Success {
        success: bool,
        data: Box<ValidationResult>,
    },
    Failure {
        success: bool,
        errors: Vec<ValidationIssue>,
        logs: Vec<String>,
    },
}

impl ValidationResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn invalid_request(field: &str, message: impl Into<String>) -> Self {
        Self::Failure {
            success: false,
            errors: vec![ValidationIssue {
                kind: "InvalidRequest".to_string(),
                message: format!("{}: {}", field, message.into()),
            }],
            logs: Vec::new(),
        }
    }
}

impl From<ValidationResult> for ValidationResponse {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid() {
            Self::Success {
                success: true,
                data: Box::new(result),
            }
        } else {
            Self::Failure {
                success: false,
                errors: result.exceptions,
                logs: result.logs,
            }
        }
    }
}
