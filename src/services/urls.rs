//! URL normalization for user-entered bookmark addresses.

use url::Url;

use crate::types::errors::ValidationError;

/// Normalize a user-entered URL before submission.
///
/// Bare hosts get an https scheme (`example.com` →
/// `https://example.com`); an explicit scheme is preserved verbatim.
/// Input that still fails to parse as an absolute URL with a host is
/// rejected.
pub fn normalize_url(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField("url"));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    match Url::parse(&candidate) {
        Ok(parsed) if parsed.has_host() => Ok(candidate),
        _ => Err(ValidationError::InvalidUrl(trimmed.to_string())),
    }
}
