use fancy_regex::Regex;
use std::sync::LazyLock;

const HTML_MARKERS: &str = r"(?i)<!doctype\s+html|<html[\s>]|<head[\s>]|<body[\s>]";

static HTML_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(HTML_MARKERS).ok());

/// True when `contents` carries a doctype or an `<html>`, `<head>` or
/// `<body>` tag. Servers often answer a missing carbon.txt with a 200 and
/// their error page.
pub fn looks_like_html(contents: &str) -> bool {
    HTML_REGEX
        .as_ref()
        .and_then(|re| re.is_match(contents).ok())
        .unwrap_or(false)
}
