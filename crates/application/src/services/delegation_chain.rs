use carbon_txt_domain::{normalize_domain, ResolveError};

/// The domains on the current delegation path, and how many delegations
/// were followed to get there.
///
/// Entries are pushed when a domain is entered and popped when its
/// resolution returns, so two sibling branches that happen to visit the
/// same domain are not a loop. Only re-entering a domain that is still
/// being resolved further up is.
#[derive(Debug, Clone)]
pub struct DelegationChain {
    origin: String,
    max_hops: usize,
    path: Vec<String>,
    hops: usize,
}

impl DelegationChain {
    /// Starts a chain at `origin`, which counts as entered.
    pub fn new(origin: &str, max_hops: usize) -> Self {
        Self {
            origin: origin.to_string(),
            max_hops,
            path: vec![normalize_domain(origin)],
            hops: 0,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn hops(&self) -> usize {
        self.hops
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn contains(&self, domain: &str) -> bool {
        let domain = normalize_domain(domain);
        self.path.iter().any(|entry| *entry == domain)
    }

    /// Accounts for following one delegation. Must be paired with
    /// [`Self::end_delegation`].
    pub fn begin_delegation(&mut self) -> Result<(), ResolveError> {
        if self.hops >= self.max_hops {
            return Err(ResolveError::TooManyDelegations {
                origin: self.origin.clone(),
                max: self.max_hops,
            });
        }
        self.hops += 1;
        Ok(())
    }

    pub fn end_delegation(&mut self) {
        self.hops = self.hops.saturating_sub(1);
    }

    /// Pushes `domain` onto the path. Must be paired with [`Self::leave`].
    pub fn enter(&mut self, domain: &str) -> Result<(), ResolveError> {
        if self.contains(domain) {
            return Err(ResolveError::DelegationLoop {
                origin: self.origin.clone(),
                domain: normalize_domain(domain),
            });
        }
        self.path.push(normalize_domain(domain));
        Ok(())
    }

    pub fn leave(&mut self) {
        if self.path.len() > 1 {
            self.path.pop();
        }
    }
}
