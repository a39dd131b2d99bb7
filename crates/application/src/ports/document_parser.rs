use carbon_txt_domain::{CarbonTxtFile, ParseError, ResolutionTrace};

/// Turns fetched text into a validated carbon.txt document: TOML syntax
/// first, then the versioned schema. Progress is written to `trace`.
pub trait DocumentParser: Send + Sync {
    fn parse(&self, contents: &str, trace: &mut ResolutionTrace) -> Result<CarbonTxtFile, ParseError>;
}
