//! Target URL validation
//!
//! Validates target URLs before a link is created and blocks dangerous
//! schemes.

use url::Url;

#[derive(Debug)]
pub enum UrlValidationError {
    EmptyUrl,
    TooLong(usize),
    InvalidProtocol(String),
    DangerousProtocol(String),
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::TooLong(max) => write!(f, "URL exceeds the maximum length of {} characters", max),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// Validate a target URL and return its normalized string form.
///
/// Checks:
/// 1. URL is not empty and not longer than `max_length`
/// 2. Not a dangerous protocol (javascript:, data:, file:, ...)
/// 3. Must be http:// or https://
/// 4. URL format is valid
///
/// The returned string is the parsed URL serialized back, which is what
/// gets stored and compared for duplicate detection. Parsing may append a
/// trailing slash to a bare-authority URL ("https://example.com" becomes
/// "https://example.com/").
pub fn validate_target(url: &str, max_length: usize) -> Result<String, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    if url.len() > max_length {
        return Err(UrlValidationError::TooLong(max_length));
    }

    let url_lower = url.to_lowercase();

    for proto in DANGEROUS_PROTOCOLS {
        if url_lower.starts_with(proto) {
            return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
        }
    }

    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        let proto = url_lower
            .split(':')
            .next()
            .map(|s| format!("{}:", s))
            .unwrap_or_default();
        return Err(UrlValidationError::InvalidProtocol(proto));
    }

    let parsed = Url::parse(url).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    Ok(parsed.to_string())
}
