//! Client-side file downloads through the page capability seams.

use std::collections::HashMap;

use crate::filename::{resolve_download_filename, PercentDecodeError};
use crate::page::{Blob, Document, LegacyBlobSave, ObjectUrlRegistry};

/// Response header consulted when the request names no filename.
const CONTENT_DISPOSITION: &str = "content-disposition";

/// Payload of a download: raw bytes, or text such as a data-URL string.
/// Text reaches the blob as its UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadData {
    Bytes(Vec<u8>),
    Text(String),
}

impl DownloadData {
    fn into_bytes(self) -> Vec<u8> {
        match self {
            DownloadData::Bytes(bytes) => bytes,
            DownloadData::Text(text) => text.into_bytes(),
        }
    }
}

impl From<Vec<u8>> for DownloadData {
    fn from(bytes: Vec<u8>) -> Self {
        DownloadData::Bytes(bytes)
    }
}

impl From<&[u8]> for DownloadData {
    fn from(bytes: &[u8]) -> Self {
        DownloadData::Bytes(bytes.to_vec())
    }
}

impl From<String> for DownloadData {
    fn from(text: String) -> Self {
        DownloadData::Text(text)
    }
}

impl From<&str> for DownloadData {
    fn from(text: &str) -> Self {
        DownloadData::Text(text.to_string())
    }
}

/// One download to trigger.
///
/// Headers are response headers keyed lowercase; only `content-disposition`
/// is consulted, and only when `filename` is missing or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub data: DownloadData,
    pub filename: Option<String>,
    pub headers: HashMap<String, String>,
    pub mime_type: String,
}

impl DownloadRequest {
    /// Request with no filename, headers, or MIME type.
    pub fn new(data: impl Into<DownloadData>) -> Self {
        DownloadRequest {
            data: data.into(),
            filename: None,
            headers: HashMap::new(),
            mime_type: String::new(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

/// Triggers a save of `request.data` in the hosting page.
///
/// The filename is the request's own when non-empty, else derived from the
/// `content-disposition` header, else empty (the engine picks). A malformed
/// header is the only failure, and it propagates before any side effect.
///
/// Engines exposing a direct save dialog get the blob handed over as is.
/// Everyone else goes through a transient object URL and anchor: insert,
/// click, then unconditionally revoke the URL and remove the anchor on the
/// same synchronous path.
pub fn download_file<P>(page: &mut P, request: DownloadRequest) -> Result<(), PercentDecodeError>
where
    P: Document + ObjectUrlRegistry + LegacyBlobSave,
{
    let filename = resolve_download_filename(
        request.filename.as_deref(),
        request.headers.get(CONTENT_DISPOSITION).map(String::as_str),
    )?;
    let blob = Blob::new(request.data.into_bytes(), request.mime_type);
    tracing::debug!(filename = %filename, bytes = blob.len(), "triggering download");

    if page.save_or_open_blob(&blob, &filename) {
        return Ok(());
    }

    let url = page.create_object_url(&blob);
    let anchor = page.insert_anchor(&url, &filename);
    page.click(anchor);
    page.revoke_object_url(&url);
    page.remove(anchor);
    Ok(())
}
