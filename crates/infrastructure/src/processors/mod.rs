pub mod disclosure_validity;

pub use disclosure_validity::DisclosureValidityProcessor;

use carbon_txt_application::services::{ProcessorRegistry, RegistryError};
use std::sync::Arc;

/// Every processor shipped with the validator, keyed by name. Which of
/// them run is decided by `plugins.active`.
pub fn builtin_registry() -> Result<ProcessorRegistry, RegistryError> {
    let mut registry = ProcessorRegistry::new();
    registry.register(Arc::new(DisclosureValidityProcessor::new()))?;
    Ok(registry)
}
