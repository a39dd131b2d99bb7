use carbon_txt_domain::{ResolveError, ResolvedLocation, ValidationResult};
use std::fmt::Write;

const SEPARATOR: &str = "-------";

/// Human-readable report: the trace, a verdict, then the parsed file (or
/// the errors) and any document processor output.
pub fn render_validation(result: &ValidationResult) -> anyhow::Result<String> {
    let mut out = String::new();
    for line in &result.logs {
        writeln!(out, "{}", line)?;
    }

    match &result.result {
        Some(file) => {
            writeln!(out, "\n✅ Carbon.txt file syntax is valid!\n")?;
            if let Some(url) = &result.url {
                writeln!(out, "Source: {}", url)?;
            }
            if let Some(method) = result.delegation_method {
                writeln!(out, "Delegated via: {}", method)?;
            }
            writeln!(out, "{}", SEPARATOR)?;
            writeln!(out, "{}", serde_json::to_string_pretty(file)?)?;

            if !result.document_results.is_empty() {
                writeln!(out, "{}", SEPARATOR)?;
                writeln!(out, "Results of processing linked documents in the carbon.txt file:")?;
                writeln!(out, "{}", serde_json::to_string_pretty(&result.document_results)?)?;
            }
        }
        None => {
            writeln!(out, "\n❌ Sad times. Carbon.txt file syntax is invalid.\n")?;
            writeln!(out, "{}", SEPARATOR)?;
            for issue in &result.exceptions {
                writeln!(out, "{}: {}", issue.kind, issue.message)?;
            }
        }
    }

    Ok(out)
}

pub fn render_resolution(
    result: &Result<ResolvedLocation, ResolveError>,
    trace: &[String],
) -> anyhow::Result<String> {
    let mut out = String::new();
    for line in trace {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "{}", SEPARATOR)?;

    match result {
        Ok(location) => {
            writeln!(out, "Found: {}", location.uri)?;
            match location.delegation_method {
                Some(method) => writeln!(out, "Delegated via: {}", method)?,
                None => writeln!(out, "Delegated via: none")?,
            }
        }
        Err(err) => writeln!(out, "{}: {}", err.kind(), err)?,
    }

    Ok(out)
}

pub fn render_plugins(names: &[&str]) -> anyhow::Result<String> {
    let mut out = String::new();
    if names.is_empty() {
        writeln!(out, "No plugins are active.")?;
        writeln!(out, "Set plugins.active in the config file or pass --active-plugins.")?;
        return Ok(out);
    }

    writeln!(out, "Active plugins:")?;
    for name in names {
        writeln!(out, " - {}", name)?;
    }
    Ok(out)
}
