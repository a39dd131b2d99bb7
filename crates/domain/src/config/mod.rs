//! Configuration module for the carbon.txt validator
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, file loading and CLI overrides
//! - `http`: Timeouts, User-Agent and redirects for HTTP probes
//! - `dns`: Nameservers used for `carbon-txt-location` TXT lookups
//! - `resolver`: Delegation hardening and public suffix list handling
//! - `plugins`: Which document processors run after validation
//! - `server`: HTTP API binding
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod dns;
pub mod errors;
pub mod http;
pub mod logging;
pub mod plugins;
pub mod resolver;
pub mod root;
pub mod server;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use http::HttpConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use plugins::PluginsConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
