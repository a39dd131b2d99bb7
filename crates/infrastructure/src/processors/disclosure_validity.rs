use async_trait::async_trait;
use carbon_txt_application::ports::DocumentProcessor;
use carbon_txt_domain::{CarbonTxtFile, Disclosure, ProcessingResult};
use chrono::{NaiveDate, Utc};
use serde_json::json;

pub const PROCESSOR_NAME: &str = "disclosure_validity";

/// Reports each disclosure's url and type, and whether its `valid_until`
/// date has already passed.
pub struct DisclosureValidityProcessor {
    today: Option<NaiveDate>,
}

impl DisclosureValidityProcessor {
    /// Compares against the current UTC date at processing time.
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Compares against a fixed date.
    pub fn with_today(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
}

impl Default for DisclosureValidityProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentProcessor for DisclosureValidityProcessor {
    fn name(&self) -> &str {
        PROCESSOR_NAME
    }

    async fn process(&self, disclosure: &Disclosure, _file: &CarbonTxtFile) -> ProcessingResult {
        let expired = disclosure
            .valid_until
            .map(|until| until < self.today())
            .unwrap_or(false);

        let log = match (disclosure.valid_until, expired) {
            (Some(until), true) => format!(
                "{}: {} expired on {}",
                PROCESSOR_NAME, disclosure.url, until
            ),
            (Some(until), false) => format!(
                "{}: {} is valid until {}",
                PROCESSOR_NAME, disclosure.url, until
            ),
            (None, _) => format!("{}: {} has no expiry date", PROCESSOR_NAME, disclosure.url),
        };

        ProcessingResult {
            plugin_name: PROCESSOR_NAME.to_string(),
            document_results: vec![json!({
                "url": disclosure.url,
                "doc_type": disclosure.doc_type.as_str(),
                "domain": disclosure.domain,
                "valid_until": disclosure.valid_until.map(|d| d.to_string()),
                "expired": expired,
            })],
            logs: vec![log],
        }
    }
}
