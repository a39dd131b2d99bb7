use async_trait::async_trait;
use carbon_txt_domain::{CarbonTxtFile, Disclosure, ProcessingResult};

/// Post-validation step run once per disclosure of a valid file.
#[async_trait]
pub trait DocumentProcessor: Send + Sync {
    /// Registry key, also the key of its entry in `document_results`.
    fn name(&self) -> &str;

    async fn process(&self, disclosure: &Disclosure, file: &CarbonTxtFile) -> ProcessingResult;
}
