use crate::error::{Error, Result};

/// Validate an URL
pub fn is_valid_url(url: &str) -> Result<()> {
    // Try to parse the URL
    let parsed_url = match url::Url::parse(url) {
        Ok(url) => url,
        Err(_) => return Err(Error::InvalidRequest("Invalid URL: ".to_string() + url)),
    };

    // Check scheme - must be http or https
    match parsed_url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(Error::InvalidRequest(
                "URL must use http or https scheme".to_string(),
            ))
        }
    }

    // Check if host exists
    match parsed_url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(Error::InvalidRequest(
            "URL must have a valid host".to_string(),
        )),
    }
}
