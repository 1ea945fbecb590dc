//! Capability seams between the helpers and the hosting page.
//!
//! Ambient browser state (the document, the user-agent string, object URLs,
//! legacy save dialogs) is only reached through these traits, so every helper
//! runs unchanged against a real host or the in-memory [`HeadlessPage`].

mod headless;

pub use headless::{ClickRecord, HeadlessPage, ScrollRecord};

use serde::{Deserialize, Serialize};

/// Opaque handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub(crate) usize);

/// Immutable binary payload with an associated MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    bytes: Vec<u8>,
    mime_type: String,
}

impl Blob {
    /// Wraps `bytes` with `mime_type` (empty string = unspecified).
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Blob {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// How a scroll animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// Where the scrolled-to element lands vertically in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlignment {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

/// Mutable view of the hosting document.
pub trait Document {
    /// Inserts an anchor at the end of the body, configured to download
    /// `download` from `href`, and returns its handle.
    fn insert_anchor(&mut self, href: &str, download: &str) -> ElementId;

    /// Simulates user activation of `element`.
    fn click(&mut self, element: ElementId);

    /// Detaches `element` from the document.
    fn remove(&mut self, element: ElementId);

    /// Handles of attached elements bearing `class_name`, in document order.
    fn elements_with_class(&self, class_name: &str) -> Vec<ElementId>;

    /// Scrolls the viewport so `element` is positioned per `behavior` and
    /// `block`.
    fn scroll_into_view(
        &mut self,
        element: ElementId,
        behavior: ScrollBehavior,
        block: ScrollAlignment,
    );
}

/// Registry of transient URLs resolving to in-memory blobs.
pub trait ObjectUrlRegistry {
    /// Mints a URL for `blob`. The handle holds the blob alive until revoked.
    fn create_object_url(&mut self, blob: &Blob) -> String;

    /// Releases a URL minted by [`ObjectUrlRegistry::create_object_url`].
    /// Unknown URLs are ignored.
    fn revoke_object_url(&mut self, url: &str);
}

/// Direct save-or-open dialog of older non-evergreen engines.
pub trait LegacyBlobSave {
    /// Hands `blob` to the engine's save dialog, returning `true` when the
    /// engine took it. The default reports the capability absent.
    fn save_or_open_blob(&mut self, blob: &Blob, filename: &str) -> bool {
        let _ = (blob, filename);
        false
    }
}

/// Read access to the ambient user-agent string.
pub trait UserAgentSource {
    /// The current user-agent string.
    fn user_agent(&self) -> String;
}
