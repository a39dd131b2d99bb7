use crate::carbon_txt::CarbonTxtFile;
use crate::errors::{ParseError, ResolveError};
use crate::resolution::DelegationMethod;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// The distinct outcomes surfaced to CLI and API users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    /// No file could be found or reached.
    Unreachable,
    /// A file was reached but it is not TOML.
    Unparseable,
    /// Valid TOML that does not match the carbon.txt schema.
    SchemaInvalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub kind: String,
    pub message: String,
}

impl From<&ResolveError> for ValidationIssue {
    fn from(err: &ResolveError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

impl ValidationIssue {
    pub fn from_parse_error(err: &ParseError) -> Vec<Self> {
        err.details()
            .into_iter()
            .map(|message| Self {
                kind: err.kind().to_string(),
                message,
            })
            .collect()
    }
}

/// Output of one document processor for one disclosure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessingResult {
    pub plugin_name: String,
    pub document_results: Vec<Value>,
    pub logs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub outcome: ValidationOutcome,
    pub result: Option<CarbonTxtFile>,
    pub logs: Vec<String>,
    pub exceptions: Vec<ValidationIssue>,
    pub url: Option<String>,
    pub delegation_method: Option<DelegationMethod>,
    /// Processor name to the results it produced, across all disclosures.
    pub document_results: BTreeMap<String, Vec<Value>>,
}

impl ValidationResult {
    pub fn valid(file: CarbonTxtFile, logs: Vec<String>) -> Self {
        Self {
            outcome: ValidationOutcome::Valid,
            result: Some(file),
            logs,
            exceptions: Vec::new(),
            url: None,
            delegation_method: None,
            document_results: BTreeMap::new(),
        }
    }

    pub fn unreachable(err: &ResolveError, logs: Vec<String>) -> Self {
        Self::failed(ValidationOutcome::Unreachable, vec![err.into()], logs)
    }

    pub fn unparsed(err: &ParseError, logs: Vec<String>) -> Self {
        let outcome = match err {
            ParseError::NotParseableToml(_) | ParseError::NotParseableTomlButHtml(_) => {
                ValidationOutcome::Unparseable
            }
            ParseError::InvalidVersion(_) | ParseError::Validation(_) => {
                ValidationOutcome::SchemaInvalid
            }
        };
        Self::failed(outcome, ValidationIssue::from_parse_error(err), logs)
    }

    fn failed(outcome: ValidationOutcome, exceptions: Vec<ValidationIssue>, logs: Vec<String>) -> Self {
        Self {
            outcome,
            result: None,
            logs,
            exceptions,
            url: None,
            delegation_method: None,
            document_results: BTreeMap::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_some()
    }

    /// Folds one processor's output into `document_results`, extending the
    /// list when the same processor already reported.
    pub fn merge_processing(&mut self, processed: ProcessingResult) {
        self.logs.extend(processed.logs);
        if processed.plugin_name.is_empty() {
            return;
        }
        self.document_results
            .entry(processed.plugin_name)
            .or_default()
            .extend(processed.document_results);
    }
}
