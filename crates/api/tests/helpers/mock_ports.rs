use async_trait::async_trait;
use carbon_txt_api::{create_app, AppState};
use carbon_txt_application::ports::{
    DocumentProcessor, HttpProbe, HttpResponse, LocalFiles, PublicSuffixList, RequestOptions,
    TxtRecordLookup,
};
use carbon_txt_application::use_cases::{CarbonTxtFinder, CarbonTxtValidator, FinderConfig};
use carbon_txt_domain::DomainError;
use carbon_txt_infrastructure::{DisclosureValidityProcessor, TomlCarbonTxtParser};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

pub const VALID_CARBON_TXT: &str = r#"version = "0.4"

[org]
disclosures = [
    { doc_type = "sustainability-page", url = "https://example.com/sustainability" },
]
"#;

/// No domain has TXT records.
pub struct NoTxtRecords;

#[async_trait]
impl TxtRecordLookup for NoTxtRecords {
    async fn lookup_txt(&self, _domain: &str) -> Result<Vec<String>, DomainError> {
        Ok(Vec::new())
    }
}

/// Serves bodies for known URLs; anything else fails to connect.
#[derive(Default)]
pub struct StaticHttp {
    bodies: Arc<RwLock<HashMap<String, String>>>,
}

impl StaticHttp {
    pub async fn serve(&self, url: &str, body: &str) {
        self.bodies
            .write()
            .await
            .insert(url.to_string(), body.to_string());
    }

    async fn respond(&self, url: &str, with_body: bool) -> Result<HttpResponse, DomainError> {
        match self.bodies.read().await.get(url) {
            Some(body) if with_body => Ok(HttpResponse::new(200).with_body(body.clone())),
            Some(_) => Ok(HttpResponse::new(200)),
            None => Err(DomainError::ConnectionFailed(format!("no route to {}", url))),
        }
    }
}

#[async_trait]
impl HttpProbe for StaticHttp {
    async fn head(&self, url: &str, _options: &RequestOptions) -> Result<HttpResponse, DomainError> {
        self.respond(url, false).await
    }

    async fn get(&self, url: &str, _options: &RequestOptions) -> Result<HttpResponse, DomainError> {
        self.respond(url, true).await
    }
}

pub struct NoLocalFiles;

#[async_trait]
impl LocalFiles for NoLocalFiles {
    fn absolute(&self, path: &str) -> PathBuf {
        Path::new("/work").join(path)
    }

    async fn exists(&self, _path: &Path) -> bool {
        false
    }

    async fn canonicalize(&self, path: &Path) -> Result<PathBuf, DomainError> {
        Ok(path.to_path_buf())
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, DomainError> {
        Err(DomainError::IoError(format!("{} not found", path.display())))
    }
}

/// Last two labels are the registrable domain.
pub struct TwoLabelSuffixes;

#[async_trait]
impl PublicSuffixList for TwoLabelSuffixes {
    fn registrable_domain(&self, domain: &str) -> Option<String> {
        let labels: Vec<&str> = domain.split('.').collect();
        (labels.len() >= 2).then(|| labels[labels.len() - 2..].join("."))
    }

    async fn refresh(&self) -> Result<usize, DomainError> {
        Ok(0)
    }
}

pub fn test_app(http: Arc<StaticHttp>) -> axum::Router {
    let config = FinderConfig {
        http_timeout: Duration::from_secs(1),
        http_user_agent: "carbon-txt-tests/1.0".to_string(),
        max_delegation_hops: 5,
    };
    let finder = CarbonTxtFinder::new(
        config,
        Arc::new(NoTxtRecords),
        http,
        Arc::new(NoLocalFiles),
        Arc::new(TwoLabelSuffixes),
    );
    let validator = CarbonTxtValidator::new(
        Arc::new(finder),
        Arc::new(TomlCarbonTxtParser::new()),
        vec![Arc::new(DisclosureValidityProcessor::new()) as Arc<dyn DocumentProcessor>],
    );

    create_app(AppState::new(Arc::new(validator)), &["*".to_string()])
}
