use async_trait::async_trait;
use carbon_txt_application::ports::TxtRecordLookup;
use carbon_txt_domain::config::DnsConfig;
use carbon_txt_domain::DomainError;
use hickory_proto::xfer::Protocol;
use hickory_resolver::config::{NameServerConfig, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// TXT lookups through hickory-resolver.
///
/// Uses the configured nameservers when there are any, the system resolver
/// configuration otherwise. Answers are never cached between lookups.
pub struct HickoryTxtLookup {
    resolver: TokioResolver,
}

impl HickoryTxtLookup {
    pub fn from_config(config: &DnsConfig) -> Result<Self, DomainError> {
        let nameservers = config
            .nameserver_addrs()
            .map_err(DomainError::DnsLookupFailed)?;
        Ok(Self::new(&nameservers, Duration::from_secs_f64(config.timeout_secs)))
    }

    pub fn new(nameservers: &[SocketAddr], timeout: Duration) -> Self {
        let mut builder = if nameservers.is_empty() {
            match TokioResolver::builder_tokio() {
                Ok(builder) => {
                    debug!("Using system DNS configuration");
                    builder
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read system DNS config, using defaults");
                    TokioResolver::builder_with_config(
                        ResolverConfig::default(),
                        TokioConnectionProvider::default(),
                    )
                }
            }
        } else {
            let name_servers: Vec<NameServerConfig> = nameservers
                .iter()
                .map(|addr| NameServerConfig::new(*addr, Protocol::Udp))
                .collect();
            debug!(nameservers = ?nameservers, "Using configured nameservers");
            TokioResolver::builder_with_config(
                ResolverConfig::from_parts(None, vec![], name_servers),
                TokioConnectionProvider::default(),
            )
        };

        let options = builder.options_mut();
        options.timeout = timeout;
        options.attempts = 1;
        options.cache_size = 0;

        Self {
            resolver: builder.build(),
        }
    }
}

#[async_trait]
impl TxtRecordLookup for HickoryTxtLookup {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, DomainError> {
        let name = fully_qualified(domain);

        match self.resolver.txt_lookup(name.as_str()).await {
            Ok(lookup) => {
                let records: Vec<String> = lookup
                    .iter()
                    .map(|txt| {
                        txt.txt_data()
                            .iter()
                            .map(|chunk| String::from_utf8_lossy(chunk))
                            .collect::<String>()
                    })
                    .collect();
                debug!(domain, records = records.len(), "TXT lookup answered");
                Ok(records)
            }
            Err(e) if e.is_nx_domain() || e.is_no_records_found() => {
                debug!(domain, "No TXT records");
                Ok(Vec::new())
            }
            Err(e) => Err(DomainError::DnsLookupFailed(format!(
                "TXT lookup for {} failed: {}",
                domain, e
            ))),
        }
    }
}

/// Lookups are always absolute so no search domain is appended.
fn fully_qualified(domain: &str) -> String {
    let domain = domain.trim().trim_end_matches('.');
    format!("{}.", domain)
}
