use chrono::NaiveDate;
use fancy_regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Semver, with the patch component made optional so `0.2` and `0.3` match.
pub const VERSION_NUMBER_PATTERN: &str = r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)(?:\.(?P<patch>0|[1-9]\d*))?(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

static VERSION_REGEX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(VERSION_NUMBER_PATTERN).ok());

pub fn is_valid_version(version: &str) -> bool {
    VERSION_REGEX
        .as_ref()
        .and_then(|re| re.is_match(version).ok())
        .unwrap_or(false)
}

/// Kinds of supporting document an organisation can disclose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DocType {
    WebPage,
    AnnualReport,
    SustainabilityPage,
    Certificate,
    CsrdReport,
    Other,
}

impl DocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebPage => "web-page",
            Self::AnnualReport => "annual-report",
            Self::SustainabilityPage => "sustainability-page",
            Self::Certificate => "certificate",
            Self::CsrdReport => "csrd-report",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ServiceType {
    One(String),
    Many(Vec<String>),
}

/// A hosted service offered by an upstream provider, keyed by its domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
}

/// Upstream entries are either a full service table or just a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum UpstreamService {
    Detailed(Service),
    Domain(String),
}

impl UpstreamService {
    pub fn domain(&self) -> &str {
        match self {
            Self::Detailed(service) => &service.domain,
            Self::Domain(domain) => domain,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Upstream {
    #[serde(default)]
    pub services: Option<Vec<UpstreamService>>,
}

/// The organisation making the claims. Generic over the disclosure shape of
/// each syntax version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Organisation<D> {
    pub disclosures: Vec<D>,
}

/// Version-independent view of a disclosure, handed to document processors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disclosure {
    pub doc_type: DocType,
    pub url: String,
    pub domain: Option<String>,
    pub valid_until: Option<NaiveDate>,
    pub title: Option<String>,
}
