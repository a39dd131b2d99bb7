use crate::uri::{classify_uri, looks_like_domain};

pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if !classify_uri(url).is_absolute() {
        return Err("URL must start with http:// or https://".to_string());
    }
    Ok(())
}

pub fn validate_domain(domain: &str) -> Result<(), String> {
    if domain.is_empty() {
        return Err("Domain cannot be empty".to_string());
    }
    if !looks_like_domain(domain) {
        return Err(format!("'{}' is not a valid domain name", domain));
    }
    Ok(())
}
