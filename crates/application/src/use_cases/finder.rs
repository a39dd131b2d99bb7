use crate::ports::{HttpProbe, LocalFiles, PublicSuffixList, RequestOptions, TxtRecordLookup};
use crate::services::{AlternateDomainPolicy, DelegationChain};
use carbon_txt_domain::{
    classify_uri, looks_like_domain, Config, DelegationMethod, DomainError, ResolutionTrace,
    ResolveError, ResolvedLocation, UnreachableCause, UriKind,
};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Paths probed on a domain, in order.
pub const CARBON_TXT_PATHS: [&str; 2] = ["/carbon.txt", "/.well-known/carbon.txt"];

/// TXT records delegating a domain start with this key.
pub const DNS_RECORD_PREFIX: &str = "carbon-txt-location";

pub const DELEGATION_HEADER: &str = "CarbonTxt-Location";

type ResolveFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ResolvedLocation, ResolveError>> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub http_timeout: Duration,
    pub http_user_agent: String,
    pub max_delegation_hops: usize,
}

impl FinderConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            http_timeout: config.http.timeout(),
            http_user_agent: config.http.effective_user_agent(),
            max_delegation_hops: config.resolver.max_delegation_hops,
        }
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Locates the carbon.txt file for a domain or URI.
///
/// For a domain the mechanisms are tried in a fixed order, first hit wins:
///
/// 1. a `carbon-txt-location=<target>` TXT record on the domain,
/// 2. `https://<domain>/carbon.txt`, then `https://<domain>/.well-known/carbon.txt`,
/// 3. a `CarbonTxt-Location` header on `https://<domain>`,
/// 4. once, the same steps on the `www.` alternate (or the bare domain for
///    a `www.` name).
///
/// A step that fails is written to the trace and the next one runs. A
/// delegation back into a domain still being resolved is such a failed
/// step. Only exceeding the hop limit aborts the whole resolution.
/// The finder keeps no state between calls.
pub struct CarbonTxtFinder {
    config: FinderConfig,
    dns: Arc<dyn TxtRecordLookup>,
    http: Arc<dyn HttpProbe>,
    files: Arc<dyn LocalFiles>,
    alternates: AlternateDomainPolicy,
}

impl CarbonTxtFinder {
    pub fn new(
        config: FinderConfig,
        dns: Arc<dyn TxtRecordLookup>,
        http: Arc<dyn HttpProbe>,
        files: Arc<dyn LocalFiles>,
        suffixes: Arc<dyn PublicSuffixList>,
    ) -> Self {
        Self {
            config,
            dns,
            http,
            files,
            alternates: AlternateDomainPolicy::new(suffixes),
        }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    fn request_options(&self) -> RequestOptions {
        RequestOptions {
            timeout: self.config.http_timeout,
            user_agent: self.config.http_user_agent.clone(),
        }
    }

    pub async fn refresh_public_suffix_list(&self) -> Result<usize, DomainError> {
        self.alternates.suffixes().refresh().await
    }

    pub fn alternate_domain(&self, domain: &str) -> Option<String> {
        self.alternates.alternate_domain(domain)
    }

    /// Absolute http(s) URIs go to [`Self::resolve_uri`], anything else is
    /// treated as a domain.
    pub async fn resolve_domain_or_uri(
        &self,
        value: &str,
        trace: &mut ResolutionTrace,
    ) -> Result<ResolvedLocation, ResolveError> {
        let value = value.trim();
        match classify_uri(value) {
            UriKind::Absolute { .. } => self.resolve_uri(value, trace).await,
            UriKind::NotAbsolute => self.resolve_domain(value, trace).await,
        }
    }

    /// Errors name `domain` as given, even when an alternate was also tried.
    #[instrument(skip(self, trace))]
    pub async fn resolve_domain(
        &self,
        domain: &str,
        trace: &mut ResolutionTrace,
    ) -> Result<ResolvedLocation, ResolveError> {
        let domain = domain.trim();
        let mut chain = DelegationChain::new(domain, self.config.max_delegation_hops);
        let location = self.resolve_in_chain(domain, &mut chain, trace, true).await?;
        debug!(uri = %location.uri, method = ?location.delegation_method, "Domain resolved");
        Ok(location)
    }

    /// Confirms a single location without following any delegation.
    ///
    /// Absolute URIs must answer a HEAD request with a status below 400.
    /// Anything else is a local path, which must exist.
    pub async fn resolve_uri(
        &self,
        uri: &str,
        trace: &mut ResolutionTrace,
    ) -> Result<ResolvedLocation, ResolveError> {
        let uri = uri.trim();
        if !classify_uri(uri).is_absolute() {
            trace.record(format!("URI appears to be a local file: {}", uri));
            let path = self.local_file(uri).await?;
            return Ok(ResolvedLocation::direct(path.display().to_string()));
        }

        let response = self
            .http
            .head(uri, &self.request_options())
            .await
            .map_err(|err| ResolveError::unreachable(uri, UnreachableCause::Connect(err.to_string())))?;

        if response.is_error() {
            debug!(uri, status = response.status, "HEAD request rejected");
            return Err(ResolveError::unreachable(
                uri,
                UnreachableCause::HttpStatus(response.status),
            ));
        }

        Ok(ResolvedLocation::direct(uri))
    }

    /// Retrieves the text of a carbon.txt file over HTTP(S) or from disk.
    pub async fn fetch(&self, uri: &str, trace: &mut ResolutionTrace) -> Result<String, ResolveError> {
        let uri = uri.trim();
        if !classify_uri(uri).is_absolute() {
            let path = self.local_file(uri).await?;
            trace.record(format!("Reading carbon.txt file at {}", path.display()));
            let read = self.files.read_to_string(&path).await;
            return read.map_err(|err| ResolveError::LocalRead {
                path,
                reason: err.to_string(),
            });
        }

        trace.record(format!("Fetching carbon.txt file from {}", uri));
        let response = self
            .http
            .get(uri, &self.request_options())
            .await
            .map_err(|err| ResolveError::unreachable(uri, UnreachableCause::Connect(err.to_string())))?;

        if !response.is_success() {
            return Err(ResolveError::unreachable(
                uri,
                UnreachableCause::HttpStatus(response.status),
            ));
        }

        debug!(uri, bytes = response.body.len(), "carbon.txt fetched");
        Ok(response.body)
    }

    /// The delegation target from the domain's `carbon-txt-location` TXT
    /// record, if there is one. Lookup failures count as "no record".
    pub async fn lookup_dns_delegation(&self, domain: &str, trace: &mut ResolutionTrace) -> Option<String> {
        trace.record(format!("Trying a DNS delegated lookup for domain {}", domain));

        let records = match self.dns.lookup_txt(domain).await {
            Ok(records) => records,
            Err(err) => {
                warn!(domain, error = %err, "TXT lookup failed");
                trace.record(format!("No result from TXT lookup for {}: {}", domain, err));
                return None;
            }
        };

        match delegation_target(&records) {
            Some(target) => {
                trace.record(format!("New lookup found for domain {}: {}", domain, target));
                Some(target)
            }
            None => {
                trace.record(format!("No {} TXT record found for {}", DNS_RECORD_PREFIX, domain));
                None
            }
        }
    }

    /// `url` if it answers a HEAD request with a status below 400.
    pub async fn probe_hosted_file(&self, url: &str, trace: &mut ResolutionTrace) -> Option<String> {
        trace.record(format!("Checking if a carbon.txt file is reachable at {}", url));

        match self.resolve_uri(url, trace).await {
            Ok(location) => {
                trace.record(format!("New Carbon text file found at: {}", location.uri));
                Some(location.uri)
            }
            Err(err) => {
                trace.record(format!("No carbon.txt file at {}: {}", url, err));
                None
            }
        }
    }

    /// Follows a `CarbonTxt-Location` header on `https://<domain>` as a
    /// fresh delegation chain.
    pub async fn check_header_delegation(&self, domain: &str, trace: &mut ResolutionTrace) -> Option<String> {
        let mut chain = DelegationChain::new(domain, self.config.max_delegation_hops);
        match self.follow_header_delegation(domain, &mut chain, trace).await {
            Ok(found) => found.map(|location| location.uri),
            Err(err) => {
                trace.record(format!("Header delegation from {} abandoned: {}", domain, err));
                None
            }
        }
    }

    fn resolve_in_chain<'a>(
        &'a self,
        domain: &'a str,
        chain: &'a mut DelegationChain,
        trace: &'a mut ResolutionTrace,
        allow_alternate: bool,
    ) -> ResolveFuture<'a> {
        Box::pin(async move {
            if let Some(target) = self.lookup_dns_delegation(domain, trace).await {
                match self.follow_delegation(&target, chain, trace).await {
                    Ok(found) => {
                        return Ok(ResolvedLocation::delegated(found.uri, DelegationMethod::Dns));
                    }
                    Err(err) if err.is_chain_fatal() => return Err(err),
                    Err(err) => trace.record(format!(
                        "DNS delegation from {} to {} could not be followed: {}",
                        domain, target, err
                    )),
                }
            }

            for path in CARBON_TXT_PATHS {
                let url = format!("https://{}{}", domain, path);
                if let Some(uri) = self.probe_hosted_file(&url, trace).await {
                    return Ok(ResolvedLocation::direct(uri));
                }
            }

            if let Some(found) = self.follow_header_delegation(domain, chain, trace).await? {
                return Ok(ResolvedLocation::delegated(found.uri, DelegationMethod::Http));
            }

            if allow_alternate {
                if let Some(found) = self.try_alternate(domain, chain, trace).await? {
                    return Ok(found);
                }
            }

            trace.record(format!(
                "Unable to find a valid carbon.txt file at the domain {}",
                domain
            ));
            Err(ResolveError::exhausted(domain))
        })
    }

    async fn try_alternate(
        &self,
        domain: &str,
        chain: &mut DelegationChain,
        trace: &mut ResolutionTrace,
    ) -> Result<Option<ResolvedLocation>, ResolveError> {
        let Some(alternate) = self.alternates.alternate_domain(domain) else {
            return Ok(None);
        };

        if chain.contains(&alternate) {
            trace.record(format!(
                "Alternate domain {} is already part of this lookup, skipping it",
                alternate
            ));
            return Ok(None);
        }

        trace.record(format!(
            "Requested domain has a permitted alternate: {}. Falling back to check",
            alternate
        ));

        chain.enter(&alternate)?;
        let result = self.resolve_in_chain(&alternate, chain, trace, false).await;
        chain.leave();

        match result {
            Ok(found) => Ok(Some(found)),
            Err(err) if err.is_chain_fatal() => Err(err),
            Err(err) => {
                trace.record(format!("Alternate domain {} failed: {}", alternate, err));
                Ok(None)
            }
        }
    }

    async fn follow_header_delegation(
        &self,
        domain: &str,
        chain: &mut DelegationChain,
        trace: &mut ResolutionTrace,
    ) -> Result<Option<ResolvedLocation>, ResolveError> {
        let url = format!("https://{}", domain);
        trace.record(format!(
            "Checking for a '{}' header in the response: {}",
            DELEGATION_HEADER, url
        ));

        let response = match self.http.head(&url, &self.request_options()).await {
            Ok(response) => response,
            Err(err) => {
                trace.record(format!("Could not connect to {}. Error was: {}", url, err));
                return Ok(None);
            }
        };

        let Some(target) = response
            .header(DELEGATION_HEADER)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
        else {
            trace.record(format!("No '{}' header found at {}", DELEGATION_HEADER, url));
            return Ok(None);
        };

        if !is_delegation_target(&target) {
            trace.record(format!("Invalid URL in '{}' header: {}", DELEGATION_HEADER, target));
            return Ok(None);
        }

        trace.record(format!(
            "Found a '{}' header, following to {}",
            DELEGATION_HEADER, target
        ));

        match self.follow_delegation(&target, chain, trace).await {
            Ok(found) => Ok(Some(found)),
            Err(err) if err.is_chain_fatal() => Err(err),
            Err(err) => {
                trace.record(format!(
                    "Header delegation from {} to {} could not be followed: {}",
                    domain, target, err
                ));
                Ok(None)
            }
        }
    }

    /// One hop: a URI target is checked directly, a domain target is
    /// resolved with every mechanism, inside the same chain.
    async fn follow_delegation(
        &self,
        target: &str,
        chain: &mut DelegationChain,
        trace: &mut ResolutionTrace,
    ) -> Result<ResolvedLocation, ResolveError> {
        chain.begin_delegation()?;
        debug!(target, hops = chain.hops(), origin = chain.origin(), "Following delegation");

        let result = match classify_uri(target) {
            UriKind::Absolute { .. } => self.resolve_uri(target, trace).await,
            UriKind::NotAbsolute => match chain.enter(target) {
                Ok(()) => {
                    let result = self.resolve_in_chain(target, chain, trace, true).await;
                    chain.leave();
                    result
                }
                Err(err) => Err(err),
            },
        };

        chain.end_delegation();
        result
    }

    async fn local_file(&self, uri: &str) -> Result<PathBuf, ResolveError> {
        let path = self.files.absolute(uri);
        if !self.files.exists(&path).await {
            return Err(ResolveError::FileNotFound(path));
        }

        let canonical = self.files.canonicalize(&path).await;
        Ok(canonical.unwrap_or(path))
    }
}

/// The value of the first `carbon-txt-location` record, split on its first
/// `=`. Surrounding quotes and whitespace are ignored.
pub fn delegation_target(records: &[String]) -> Option<String> {
    let record = records
        .iter()
        .map(|record| record.trim().trim_matches('"'))
        .find(|record| record.starts_with(DNS_RECORD_PREFIX))?;

    let (_, value) = record.split_once('=')?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Header values must be an absolute http(s) URI or something shaped like
/// a domain name.
pub fn is_delegation_target(value: &str) -> bool {
    classify_uri(value).is_absolute() || looks_like_domain(value)
}
