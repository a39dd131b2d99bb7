//! carbon.txt Validator Infrastructure Layer
pub mod dns;
pub mod fs;
pub mod http;
pub mod parsing;
pub mod processors;
pub mod public_suffix;

pub use dns::HickoryTxtLookup;
pub use fs::TokioLocalFiles;
pub use http::ReqwestHttpProbe;
pub use parsing::TomlCarbonTxtParser;
pub use processors::{builtin_registry, DisclosureValidityProcessor};
pub use public_suffix::PublicSuffixListAdapter;
