//! carbon.txt document model.
//!
//! Each syntax version is its own set of structs; [`CarbonTxtFile`] is the
//! sum of them. The version is picked from the `version` key before any
//! structural validation happens, so error messages always refer to the
//! syntax the author asked for.

pub mod common;
pub mod version_0_2;
pub mod version_0_3;
pub mod version_0_4;

pub use common::{
    is_valid_version, Disclosure, DocType, Organisation, Service, ServiceType, Upstream,
    UpstreamService, VERSION_NUMBER_PATTERN,
};

use crate::errors::ParseError;
use chrono::{NaiveDate, Utc};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};

pub const DEFAULT_VERSION: &str = "0.2";
pub const LATEST_VERSION: &str = "0.4";
pub const SUPPORTED_VERSIONS: [&str; 3] = ["0.2", "0.3", "0.4"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum CarbonTxtFile {
    V0_2(version_0_2::CarbonTxtFile),
    V0_3(version_0_3::CarbonTxtFile),
    V0_4(version_0_4::CarbonTxtFile),
}

impl CarbonTxtFile {
    /// Validates an already-parsed TOML document as a carbon.txt file.
    pub fn from_toml_table(table: toml::Table) -> Result<Self, ParseError> {
        let version = match table.get("version") {
            None => DEFAULT_VERSION.to_string(),
            Some(toml::Value::String(version)) => version.clone(),
            Some(other) => {
                return Err(ParseError::Validation(vec![format!(
                    "version: expected a string, found {}",
                    other.type_str()
                )]))
            }
        };

        if !is_valid_version(&version) {
            return Err(ParseError::Validation(vec![format!(
                "version: '{}' does not match the version number pattern",
                version
            )]));
        }

        Self::from_document(&version, toml_table_to_json(table))
    }

    /// Builds a file from loose data, for generating carbon.txt files.
    ///
    /// Unlike [`Self::from_toml_table`], a missing `version` means the
    /// latest syntax, and versions with a `last_updated` field get today's
    /// date unless the key is present (an explicit `null` leaves it unset).
    pub fn build(data: Map<String, Value>) -> Result<Self, ParseError> {
        Self::build_on(data, Utc::now().date_naive())
    }

    pub fn build_on(mut data: Map<String, Value>, today: NaiveDate) -> Result<Self, ParseError> {
        let version = match data.get("version") {
            None => LATEST_VERSION.to_string(),
            Some(Value::String(version)) => version.clone(),
            Some(other) => return Err(ParseError::InvalidVersion(other.to_string())),
        };

        if !SUPPORTED_VERSIONS.contains(&version.as_str()) {
            return Err(ParseError::InvalidVersion(version));
        }

        data.insert("version".to_string(), Value::String(version.clone()));
        if supports_last_updated(&version) && !data.contains_key("last_updated") {
            data.insert(
                "last_updated".to_string(),
                Value::String(today.format("%Y-%m-%d").to_string()),
            );
        }

        Self::from_document(&version, Value::Object(data))
    }

    fn from_document(version: &str, document: Value) -> Result<Self, ParseError> {
        let file = match version {
            "0.2" => Self::V0_2(deserialize(document)?),
            "0.3" => Self::V0_3(deserialize(document)?),
            "0.4" => Self::V0_4(deserialize(document)?),
            _ => return Err(ParseError::InvalidVersion(version.to_string())),
        };

        let problems = file.semantic_errors();
        if !problems.is_empty() {
            return Err(ParseError::Validation(problems));
        }

        Ok(file)
    }

    /// Renders the file as carbon.txt TOML. Each line of `header_comment`
    /// becomes a `# ` comment line at the top.
    pub fn to_toml(&self, header_comment: Option<&str>) -> Result<String, toml::ser::Error> {
        let body = toml::to_string(self)?;
        let Some(comment) = header_comment else {
            return Ok(body);
        };

        let mut out = String::new();
        for line in comment.lines() {
            out.push_str("# ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&body);
        Ok(out)
    }

    /// JSON schema accepted by any supported syntax version.
    pub fn json_schema() -> Value {
        serde_json::to_value(schemars::schema_for!(CarbonTxtFile)).unwrap_or(Value::Null)
    }

    pub fn version(&self) -> &str {
        match self {
            Self::V0_2(file) => file.version.as_deref().unwrap_or(DEFAULT_VERSION),
            Self::V0_3(file) => &file.version,
            Self::V0_4(file) => &file.version,
        }
    }

    pub fn last_updated(&self) -> Option<NaiveDate> {
        match self {
            Self::V0_2(_) => None,
            Self::V0_3(file) => file.last_updated,
            Self::V0_4(file) => file.last_updated,
        }
    }

    pub fn upstream(&self) -> Option<&Upstream> {
        match self {
            Self::V0_2(file) => file.upstream.as_ref(),
            Self::V0_3(file) => file.upstream.as_ref(),
            Self::V0_4(file) => file.upstream.as_ref(),
        }
    }

    pub fn upstream_domains(&self) -> Vec<&str> {
        self.upstream()
            .and_then(|upstream| upstream.services.as_ref())
            .map(|services| services.iter().map(UpstreamService::domain).collect())
            .unwrap_or_default()
    }

    pub fn disclosures(&self) -> Vec<Disclosure> {
        match self {
            Self::V0_2(file) => file
                .org
                .disclosures
                .iter()
                .map(|d| Disclosure {
                    doc_type: d.doc_type,
                    url: d.url.clone(),
                    domain: d.domain.clone(),
                    valid_until: None,
                    title: None,
                })
                .collect(),
            Self::V0_3(file) => file
                .org
                .disclosures
                .iter()
                .map(|d| Disclosure {
                    doc_type: d.doc_type,
                    url: d.url.clone(),
                    domain: d.domain.clone(),
                    valid_until: d.valid_until,
                    title: None,
                })
                .collect(),
            Self::V0_4(file) => file
                .org
                .disclosures
                .iter()
                .map(|d| Disclosure {
                    doc_type: d.doc_type,
                    url: d.url.clone(),
                    domain: d.domain.clone(),
                    valid_until: d.valid_until,
                    title: d.title.clone(),
                })
                .collect(),
        }
    }

    fn semantic_errors(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let disclosures = self.disclosures();

        if disclosures.is_empty() {
            problems.push("org.disclosures: list should have at least 1 item".to_string());
        }

        for (index, disclosure) in disclosures.iter().enumerate() {
            if disclosure.url.trim().is_empty() {
                problems.push(format!("org.disclosures.{}.url: must not be empty", index));
            }
        }

        problems
    }
}

fn supports_last_updated(version: &str) -> bool {
    version != "0.2"
}

fn deserialize<T: DeserializeOwned>(document: Value) -> Result<T, ParseError> {
    serde_json::from_value(document).map_err(|e| ParseError::Validation(vec![e.to_string()]))
}

/// TOML dates have no JSON counterpart; they are carried over as their
/// RFC 3339 text so date fields can be parsed from either form.
pub fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => toml_table_to_json(table),
    }
}

pub fn toml_table_to_json(table: toml::Table) -> Value {
    let map: Map<String, Value> = table
        .into_iter()
        .map(|(key, value)| (key, toml_to_json(value)))
        .collect();
    Value::Object(map)
}
