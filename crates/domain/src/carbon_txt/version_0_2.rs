use super::common::{DocType, Organisation, Upstream};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Disclosure {
    pub doc_type: DocType,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Version 0.2 syntax: `version` is optional and defaults to "0.2"; there
/// are no dates anywhere in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CarbonTxtFile {
    #[serde(default = "default_version")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<Upstream>,
    pub org: Organisation<Disclosure>,
}

fn default_version() -> Option<String> {
    Some("0.2".to_string())
}
