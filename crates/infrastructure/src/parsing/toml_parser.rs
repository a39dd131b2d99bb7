use super::html::looks_like_html;
use carbon_txt_application::ports::DocumentParser;
use carbon_txt_domain::{CarbonTxtFile, ParseError, ResolutionTrace};
use tracing::{debug, warn};

/// Parses raw text as TOML, telling an HTML error page apart from other
/// syntax errors.
pub fn parse_toml(contents: &str, trace: &mut ResolutionTrace) -> Result<toml::Table, ParseError> {
    match toml::from_str::<toml::Table>(contents) {
        Ok(table) => {
            trace.record("Carbon.txt file parsed as valid TOML.");
            Ok(table)
        }
        Err(e) => {
            warn!(error = %e, "Content is not valid TOML");
            trace.record("TOML parsing failed.");
            trace.record("Checking if content is an valid HTML page instead.");

            if looks_like_html(contents) {
                trace.record("Parsed content is valid HTML, not TOML.");
                return Err(ParseError::NotParseableTomlButHtml(e.message().to_string()));
            }
            Err(ParseError::NotParseableToml(e.message().to_string()))
        }
    }
}

/// TOML syntax check followed by versioned schema validation.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlCarbonTxtParser;

impl TomlCarbonTxtParser {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(
        &self,
        table: toml::Table,
        trace: &mut ResolutionTrace,
    ) -> Result<CarbonTxtFile, ParseError> {
        match CarbonTxtFile::from_toml_table(table) {
            Ok(file) => {
                debug!(version = file.version(), "Schema validation passed");
                trace.record("Parsed TOML was recognised as valid Carbon.txt file.");
                Ok(file)
            }
            Err(e) => {
                trace.record("Validation failed.");
                Err(e)
            }
        }
    }
}

impl DocumentParser for TomlCarbonTxtParser {
    fn parse(&self, contents: &str, trace: &mut ResolutionTrace) -> Result<CarbonTxtFile, ParseError> {
        let table = parse_toml(contents, trace)?;
        self.validate(table, trace)
    }
}
