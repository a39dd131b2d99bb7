use crate::ports::{DocumentParser, DocumentProcessor};
use crate::use_cases::CarbonTxtFinder;
use carbon_txt_domain::{ResolutionTrace, ResolveError, ValidationResult};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Characters of submitted contents echoed into the trace.
const CONTENTS_PREVIEW_CHARS: usize = 40;

/// Find, fetch, parse and post-process a carbon.txt file.
///
/// Every entry point starts a fresh trace and never fails: the outcome,
/// including any error, is carried by the returned [`ValidationResult`].
pub struct CarbonTxtValidator {
    finder: Arc<CarbonTxtFinder>,
    parser: Arc<dyn DocumentParser>,
    processors: Vec<Arc<dyn DocumentProcessor>>,
}

impl CarbonTxtValidator {
    pub fn new(
        finder: Arc<CarbonTxtFinder>,
        parser: Arc<dyn DocumentParser>,
        processors: Vec<Arc<dyn DocumentProcessor>>,
    ) -> Self {
        Self {
            finder,
            parser,
            processors,
        }
    }

    pub fn finder(&self) -> &Arc<CarbonTxtFinder> {
        &self.finder
    }

    pub fn active_processors(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    pub async fn validate_contents(&self, contents: &str) -> ValidationResult {
        let mut trace = ResolutionTrace::new();
        let preview: String = contents.chars().take(CONTENTS_PREVIEW_CHARS).collect();
        trace.record(format!("Attempting to validate contents of {}", preview));

        self.parse_and_process(contents, trace).await
    }

    /// `url` is an absolute http(s) URI or a local path; it is checked as
    /// given and never delegated.
    #[instrument(skip(self))]
    pub async fn validate_url(&self, url: &str) -> ValidationResult {
        let mut trace = ResolutionTrace::new();
        trace.record(format!("Attempting to validate url: {}", url));

        let location = match self.finder.resolve_uri(url, &mut trace).await {
            Ok(location) => location,
            Err(err) => return unreachable(&err, trace),
        };

        let contents = match self.finder.fetch(&location.uri, &mut trace).await {
            Ok(contents) => contents,
            Err(err) => return unreachable(&err, trace),
        };

        let mut result = self.parse_and_process(&contents, trace).await;
        result.url = Some(location.uri);
        result
    }

    #[instrument(skip(self))]
    pub async fn validate_domain(&self, domain: &str) -> ValidationResult {
        let mut trace = ResolutionTrace::new();
        trace.record(format!("Attempting to resolve domain: {}", domain));

        let location = match self.finder.resolve_domain(domain, &mut trace).await {
            Ok(location) => location,
            Err(err) => return unreachable(&err, trace),
        };

        let contents = match self.finder.fetch(&location.uri, &mut trace).await {
            Ok(contents) => contents,
            Err(err) => return unreachable(&err, trace),
        };

        let mut result = self.parse_and_process(&contents, trace).await;
        result.url = Some(location.uri);
        result.delegation_method = location.delegation_method;
        result
    }

    async fn parse_and_process(&self, contents: &str, mut trace: ResolutionTrace) -> ValidationResult {
        let file = match self.parser.parse(contents, &mut trace) {
            Ok(file) => file,
            Err(err) => {
                trace.record(format!("Validation error: {}", err));
                return ValidationResult::unparsed(&err, trace.into_entries());
            }
        };

        info!(version = file.version(), "carbon.txt file is valid");

        let disclosures = file.disclosures();
        let mut result = ValidationResult::valid(file.clone(), trace.into_entries());
        for disclosure in &disclosures {
            for processor in &self.processors {
                let processed = processor.process(disclosure, &file).await;
                result.merge_processing(processed);
            }
        }

        result
    }
}

fn unreachable(err: &ResolveError, mut trace: ResolutionTrace) -> ValidationResult {
    warn!(error = %err, "No carbon.txt file could be retrieved");
    let message = match err {
        ResolveError::FileNotFound(path) => {
            format!("No valid carbon.txt file found at {}", path.display())
        }
        other => format!("Could not fetch the carbon.txt file. Error was: {}", other),
    };
    trace.record(message);
    ValidationResult::unreachable(err, trace.into_entries())
}
