use async_trait::async_trait;
use carbon_txt_application::ports::{
    DocumentParser, DocumentProcessor, HttpProbe, HttpResponse, LocalFiles, PublicSuffixList,
    RequestOptions, TxtRecordLookup,
};
use carbon_txt_application::use_cases::{CarbonTxtFinder, FinderConfig};
use carbon_txt_domain::{
    CarbonTxtFile, Disclosure, DomainError, ParseError, ProcessingResult, ResolutionTrace,
};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const WORKING_DIR: &str = "/work";

// ============================================================================
// Mock TxtRecordLookup
// ============================================================================

#[derive(Clone, Default)]
pub struct MockTxtLookup {
    records: Arc<RwLock<HashMap<String, Vec<String>>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    lookups: Arc<RwLock<Vec<String>>>,
}

impl MockTxtLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_records(&self, domain: &str, records: &[&str]) {
        self.records.write().await.insert(
            domain.to_string(),
            records.iter().map(|r| r.to_string()).collect(),
        );
    }

    /// Shorthand for a single `carbon-txt-location=<target>` record.
    pub async fn delegate(&self, domain: &str, target: &str) {
        self.set_records(domain, &[&format!("carbon-txt-location={}", target)])
            .await;
    }

    pub async fn set_failing(&self, domain: &str) {
        self.failing.write().await.insert(domain.to_string());
    }

    pub async fn lookups(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }
}

#[async_trait]
impl TxtRecordLookup for MockTxtLookup {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        self.lookups.write().await.push(domain.to_string());

        if self.failing.read().await.contains(domain) {
            return Err(DomainError::DnsLookupFailed(format!(
                "mock SERVFAIL for {}",
                domain
            )));
        }

        Ok(self
            .records
            .read()
            .await
            .get(domain)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Mock HttpProbe
// ============================================================================

/// URLs without a configured response fail as if the host were unreachable.
#[derive(Clone, Default)]
pub struct MockHttpProbe {
    head: Arc<RwLock<HashMap<String, HttpResponse>>>,
    get: Arc<RwLock<HashMap<String, HttpResponse>>>,
    requests: Arc<RwLock<Vec<(String, String)>>>,
    last_options: Arc<RwLock<Option<RequestOptions>>>,
}

impl MockHttpProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn on_head(&self, url: &str, response: HttpResponse) {
        self.head.write().await.insert(url.to_string(), response);
    }

    pub async fn on_get(&self, url: &str, response: HttpResponse) {
        self.get.write().await.insert(url.to_string(), response);
    }

    /// A file served at `url` for both HEAD and GET.
    pub async fn serve(&self, url: &str, body: &str) {
        self.on_head(url, HttpResponse::new(200)).await;
        self.on_get(url, HttpResponse::new(200).with_body(body)).await;
    }

    /// `https://<domain>` answering HEAD with a `CarbonTxt-Location` header.
    pub async fn header_delegate(&self, domain: &str, target: &str) {
        self.on_head(
            &format!("https://{}", domain),
            HttpResponse::new(200).with_header("CarbonTxt-Location", target),
        )
        .await;
    }

    /// `(method, url)` pairs in the order they were issued.
    pub async fn requests(&self) -> Vec<(String, String)> {
        self.requests.read().await.clone()
    }

    pub async fn requested_urls(&self) -> Vec<String> {
        self.requests().await.into_iter().map(|(_, url)| url).collect()
    }

    pub async fn last_options(&self) -> Option<RequestOptions> {
        self.last_options.read().await.clone()
    }

    async fn respond(
        &self,
        method: &str,
        table: &RwLock<HashMap<String, HttpResponse>>,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, DomainError> {
        self.requests
            .write()
            .await
            .push((method.to_string(), url.to_string()));
        *self.last_options.write().await = Some(options.clone());

        table
            .read()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| DomainError::ConnectionFailed(format!("mock: no route to {}", url)))
    }
}

#[async_trait]
impl HttpProbe for MockHttpProbe {
    async fn head(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, DomainError> {
        self.respond("HEAD", &self.head, url, options).await
    }

    async fn get(&self, url: &str, options: &RequestOptions) -> Result<HttpResponse, DomainError> {
        self.respond("GET", &self.get, url, options).await
    }
}

// ============================================================================
// Mock LocalFiles
// ============================================================================

/// In-memory files; relative paths resolve against [`WORKING_DIR`].
#[derive(Clone, Default)]
pub struct MockLocalFiles {
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MockLocalFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, path: &str, contents: &str) {
        self.files
            .write()
            .await
            .insert(self.absolute(path), contents.to_string());
    }
}

#[async_trait]
impl LocalFiles for MockLocalFiles {
    fn absolute(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            Path::new(WORKING_DIR).join(path)
        }
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.read().await.contains_key(path)
    }

    async fn canonicalize(&self, path: &Path) -> Result<PathBuf, DomainError> {
        Ok(path.to_path_buf())
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, DomainError> {
        self.files
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::IoError(format!("{} not found", path.display())))
    }
}

// ============================================================================
// Mock PublicSuffixList
// ============================================================================

/// Knows `co.uk` as a two-label suffix; every other suffix is one label.
#[derive(Default)]
pub struct MockSuffixes {
    refreshes: AtomicUsize,
}

#[async_trait]
impl PublicSuffixList for MockSuffixes {
    fn registrable_domain(&self, domain: &str) -> Option<String> {
        let labels: Vec<&str> = domain.split('.').collect();
        let suffix_len = if domain.ends_with(".co.uk") { 2 } else { 1 };
        if labels.len() <= suffix_len {
            return None;
        }
        Some(labels[labels.len() - suffix_len - 1..].join("."))
    }

    async fn refresh(&self) -> Result<usize, DomainError> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        Ok(42)
    }
}

// ============================================================================
// Parser and processors
// ============================================================================

pub struct TomlParser;

impl DocumentParser for TomlParser {
    fn parse(&self, contents: &str, trace: &mut ResolutionTrace) -> Result<CarbonTxtFile, ParseError> {
        let table: toml::Table =
            toml::from_str(contents).map_err(|e| ParseError::NotParseableToml(e.to_string()))?;
        trace.record("Carbon.txt file parsed as valid TOML.");
        CarbonTxtFile::from_toml_table(table)
    }
}

/// Reports every disclosure URL it sees under its own name.
#[derive(Default)]
pub struct RecordingProcessor {
    pub calls: AtomicUsize,
}

#[async_trait]
impl DocumentProcessor for RecordingProcessor {
    fn name(&self) -> &str {
        "recording"
    }

    async fn process(&self, disclosure: &Disclosure, _file: &CarbonTxtFile) -> ProcessingResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ProcessingResult {
            plugin_name: self.name().to_string(),
            document_results: vec![json!({ "url": disclosure.url })],
            logs: vec![format!("recording: saw {}", disclosure.url)],
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

pub struct Ports {
    pub dns: MockTxtLookup,
    pub http: MockHttpProbe,
    pub files: MockLocalFiles,
}

impl Ports {
    pub fn new() -> Self {
        Self {
            dns: MockTxtLookup::new(),
            http: MockHttpProbe::new(),
            files: MockLocalFiles::new(),
        }
    }

    pub fn finder(&self) -> CarbonTxtFinder {
        self.finder_with(test_config())
    }

    pub fn finder_with(&self, config: FinderConfig) -> CarbonTxtFinder {
        CarbonTxtFinder::new(
            config,
            Arc::new(self.dns.clone()),
            Arc::new(self.http.clone()),
            Arc::new(self.files.clone()),
            Arc::new(MockSuffixes::default()),
        )
    }
}

pub fn test_config() -> FinderConfig {
    FinderConfig {
        http_timeout: Duration::from_secs(2),
        http_user_agent: "carbon-txt-tests/1.0".to_string(),
        max_delegation_hops: 5,
    }
}

pub const MINIMAL_CARBON_TXT: &str = r#"
[upstream]
services = []

[org]
disclosures = [
    { domain = 'used-in-tests.carbontxt.org', doc_type = 'sustainability-page', url = 'https://used-in-tests.carbontxt.org/our-climate-record' }
]
"#;

pub const TWO_DISCLOSURES_CARBON_TXT: &str = r#"
version = "0.4"

[org]
disclosures = [
    { doc_type = 'annual-report', url = 'https://example.com/annual-report.pdf' },
    { doc_type = 'web-page', url = 'https://example.com/sustainability' }
]
"#;
