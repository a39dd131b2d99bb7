pub mod html;
pub mod toml_parser;

pub use html::looks_like_html;
pub use toml_parser::{parse_toml, TomlCarbonTxtParser};
