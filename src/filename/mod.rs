//! Download filename derivation.
//!
//! Captures the `filename` parameter from a Content-Disposition value with
//! the lenient pattern browsers tolerate, then strictly percent-decodes it.

mod content_disposition;
mod percent;

pub use content_disposition::filename_from_content_disposition;
pub use percent::{percent_decode, PercentDecodeError};

/// Resolves the filename a download should be saved under.
///
/// A non-empty explicit `filename` wins; otherwise the Content-Disposition
/// value (if any) is consulted. Nothing usable resolves to the empty string,
/// which hosts treat as "let the engine pick".
pub fn resolve_download_filename(
    filename: Option<&str>,
    content_disposition: Option<&str>,
) -> Result<String, PercentDecodeError> {
    if let Some(name) = filename {
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
    match content_disposition {
        Some(value) => Ok(filename_from_content_disposition(value)?.unwrap_or_default()),
        None => Ok(String::new()),
    }
}
