pub mod health;
pub mod validate;

pub use health::HealthResponse;
pub use validate::{
    DomainSubmission, FileSubmission, UrlSubmission, ValidationResponse,
};
