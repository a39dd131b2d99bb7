pub mod alternate_domain;
pub mod delegation_chain;
pub mod processor_registry;

pub use alternate_domain::AlternateDomainPolicy;
pub use delegation_chain::DelegationChain;
pub use processor_registry::{ProcessorRegistry, RegistryError};
