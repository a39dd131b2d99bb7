pub mod finder;
pub mod validate;

pub use finder::{
    delegation_target, is_delegation_target, CarbonTxtFinder, FinderConfig, CARBON_TXT_PATHS,
    DELEGATION_HEADER, DNS_RECORD_PREFIX,
};
pub use validate::CarbonTxtValidator;
