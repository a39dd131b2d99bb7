use crate::ports::DocumentProcessor;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown document processor '{name}'. Available processors: {available}")]
    UnknownProcessor { name: String, available: String },

    #[error("Document processor '{0}' is registered more than once")]
    Duplicate(String),
}

/// Every processor compiled into the binary, keyed by name.
#[derive(Default, Clone)]
pub struct ProcessorRegistry {
    processors: Vec<Arc<dyn DocumentProcessor>>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, processor: Arc<dyn DocumentProcessor>) -> Result<(), RegistryError> {
        if self.get(processor.name()).is_some() {
            return Err(RegistryError::Duplicate(processor.name().to_string()));
        }
        debug!(processor = processor.name(), "Document processor registered");
        self.processors.push(processor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn DocumentProcessor>> {
        self.processors.iter().find(|p| p.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    /// Resolves the configured processor names, in the order given.
    /// Any unknown name fails the whole selection.
    pub fn activate(&self, names: &[String]) -> Result<Vec<Arc<dyn DocumentProcessor>>, RegistryError> {
        names
            .iter()
            .map(|name| {
                self.get(name)
                    .cloned()
                    .ok_or_else(|| RegistryError::UnknownProcessor {
                        name: name.clone(),
                        available: self.names().join(", "),
                    })
            })
            .collect()
    }
}
