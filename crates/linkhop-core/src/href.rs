//! Destination URL checks shared by shortcut creation and redirect resolution.

use crate::error::ShortenerError;
use url::Url;

/// Validates that the URL has a valid format (an http(s) scheme and a host).
pub fn validate_href(href: &str) -> Result<(), ShortenerError> {
    if href.is_empty() {
        return Err(ShortenerError::InvalidUrl(
            "URL cannot be empty".to_string(),
        ));
    }

    if href.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must not contain whitespace or control characters: {:?}",
            href
        )));
    }

    let url = Url::parse(href)
        .map_err(|e| ShortenerError::InvalidUrl(format!("{}: {}", e, href)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL scheme must be http or https: {}",
            url.scheme()
        )));
    }

    // The parser folds extra slashes, so `https:///path` would gain host `path`.
    let authority_present = href
        .split_once("://")
        .is_some_and(|(_, rest)| !rest.starts_with('/'));
    if !authority_present || url.host_str().is_none_or(str::is_empty) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must have a valid scheme and host: {}",
            href
        )));
    }

    Ok(())
}

/// Returns `true` if the URL can be used as a redirect target.
pub fn is_redirectable(href: &str) -> bool {
    validate_href(href).is_ok()
}
