//! Target URL validation.
//!
//! A target must be an absolute URL with an authority. Authority-less
//! schemes (`mailto:`, `javascript:`, `data:`) and relative references
//! are rejected.

use url::Url;

#[derive(Debug)]
pub enum UrlValidationError {
    EmptyUrl,
    MissingAuthority(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::MissingAuthority(scheme) => write!(
                f,
                "URL scheme '{}' has no host; an absolute URL with an authority is required",
                scheme
            ),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

pub fn validate_url(url: &str) -> Result<(), UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !parsed.has_host() {
        return Err(UrlValidationError::MissingAuthority(
            parsed.scheme().to_string(),
        ));
    }

    Ok(())
}
