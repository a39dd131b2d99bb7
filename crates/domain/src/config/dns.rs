use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Nameservers used for `carbon-txt-location` TXT lookups.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Nameservers as "ip" or "ip:port". Empty means the system resolver
    /// configuration is used.
    #[serde(default)]
    pub nameservers: Vec<String>,

    /// Query timeout in seconds (default: 5.0)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl DnsConfig {
    /// Parses every configured nameserver, defaulting the port to 53.
    pub fn nameserver_addrs(&self) -> Result<Vec<SocketAddr>, String> {
        self.nameservers
            .iter()
            .map(|raw| parse_nameserver(raw))
            .collect()
    }
}

pub fn parse_nameserver(raw: &str) -> Result<SocketAddr, String> {
    let raw = raw.trim();
    if let Ok(addr) = raw.parse::<SocketAddr>() {
        return Ok(addr);
    }
    raw.parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, 53))
        .map_err(|_| format!("Invalid nameserver address: '{}'", raw))
}

fn default_timeout_secs() -> f64 {
    5.0
}
