//! carbon.txt Validator Domain Layer
pub mod carbon_txt;
pub mod config;
pub mod errors;
pub mod resolution;
pub mod trace;
pub mod uri;
pub mod validation;
pub mod validators;

pub use carbon_txt::{CarbonTxtFile, Disclosure, DocType};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{DomainError, ParseError, ResolveError, UnreachableCause};
pub use resolution::{DelegationMethod, ResolvedLocation};
pub use trace::ResolutionTrace;
pub use uri::{classify_uri, looks_like_domain, normalize_domain, UriKind};
pub use validation::{ProcessingResult, ValidationIssue, ValidationOutcome, ValidationResult};
