//! In-memory page host for tests and headless harnesses.

use std::collections::HashMap;

use super::{
    Blob, Document, ElementId, LegacyBlobSave, ObjectUrlRegistry, ScrollAlignment, ScrollBehavior,
    UserAgentSource,
};

const DESKTOP_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// A click observed on a [`HeadlessPage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickRecord {
    pub element: ElementId,
    /// `href` attribute at click time, if any.
    pub href: Option<String>,
    /// `download` attribute at click time, if any.
    pub download: Option<String>,
}

/// A viewport scroll observed on a [`HeadlessPage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRecord {
    pub element: ElementId,
    pub behavior: ScrollBehavior,
    pub block: ScrollAlignment,
}

#[derive(Debug)]
struct HeadlessElement {
    tag_name: String,
    attrs: HashMap<String, String>,
    attached: bool,
}

#[derive(Debug)]
struct ObjectUrlRecord {
    url: String,
    blob: Blob,
    revoked: bool,
}

/// Document, object-URL, and user-agent host backed by plain memory.
///
/// Elements live in an arena and document order is insertion order. Side
/// effects are recorded instead of performed, so a caller can assert on the
/// clicks and scrolls a helper produced. Revoked object URLs stay in the
/// history with their blobs, letting tests inspect a payload after release.
#[derive(Debug)]
pub struct HeadlessPage {
    elements: Vec<HeadlessElement>,
    object_urls: Vec<ObjectUrlRecord>,
    user_agent: String,
    clicks: Vec<ClickRecord>,
    scrolls: Vec<ScrollRecord>,
}

impl HeadlessPage {
    /// Empty page reporting a desktop user agent.
    pub fn new() -> Self {
        Self::with_user_agent(DESKTOP_USER_AGENT)
    }

    /// Empty page reporting the given user agent.
    pub fn with_user_agent(user_agent: impl Into<String>) -> Self {
        HeadlessPage {
            elements: Vec::new(),
            object_urls: Vec::new(),
            user_agent: user_agent.into(),
            clicks: Vec::new(),
            scrolls: Vec::new(),
        }
    }

    /// Appends an element to the body; `class` may hold several
    /// whitespace-separated tokens, or be empty for no class attribute.
    pub fn append_element(&mut self, tag_name: &str, class: &str) -> ElementId {
        let mut attrs = HashMap::new();
        if !class.is_empty() {
            attrs.insert("class".to_string(), class.to_string());
        }
        self.push_element(tag_name, attrs)
    }

    fn push_element(&mut self, tag_name: &str, attrs: HashMap<String, String>) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(HeadlessElement {
            tag_name: tag_name.to_string(),
            attrs,
            attached: true,
        });
        id
    }

    /// Attribute value of `element`, if set.
    pub fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.elements[element.0].attrs.get(name).map(String::as_str)
    }

    /// Tag name of `element`.
    pub fn tag_name(&self, element: ElementId) -> &str {
        &self.elements[element.0].tag_name
    }

    /// Whether `element` is still part of the document.
    pub fn is_attached(&self, element: ElementId) -> bool {
        self.elements[element.0].attached
    }

    /// Clicks observed so far, oldest first.
    pub fn clicks(&self) -> &[ClickRecord] {
        &self.clicks
    }

    /// Viewport scrolls observed so far, oldest first.
    pub fn scrolls(&self) -> &[ScrollRecord] {
        &self.scrolls
    }

    /// Object URLs minted and not yet revoked.
    pub fn live_object_urls(&self) -> Vec<&str> {
        self.object_urls
            .iter()
            .filter(|record| !record.revoked)
            .map(|record| record.url.as_str())
            .collect()
    }

    /// Blob a URL was minted for, whether or not the URL was revoked since.
    pub fn blob_for_url(&self, url: &str) -> Option<&Blob> {
        self.object_urls
            .iter()
            .find(|record| record.url == url)
            .map(|record| &record.blob)
    }
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self::new()
    }
}

fn has_class(element: &HeadlessElement, class_name: &str) -> bool {
    element
        .attrs
        .get("class")
        .map(|classes| classes.split_whitespace().any(|c| c == class_name))
        .unwrap_or(false)
}

impl Document for HeadlessPage {
    fn insert_anchor(&mut self, href: &str, download: &str) -> ElementId {
        let mut attrs = HashMap::new();
        attrs.insert("href".to_string(), href.to_string());
        attrs.insert("download".to_string(), download.to_string());
        self.push_element("a", attrs)
    }

    fn click(&mut self, element: ElementId) {
        let target = &self.elements[element.0];
        self.clicks.push(ClickRecord {
            element,
            href: target.attrs.get("href").cloned(),
            download: target.attrs.get("download").cloned(),
        });
    }

    fn remove(&mut self, element: ElementId) {
        self.elements[element.0].attached = false;
    }

    fn elements_with_class(&self, class_name: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.attached && has_class(element, class_name))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn scroll_into_view(
        &mut self,
        element: ElementId,
        behavior: ScrollBehavior,
        block: ScrollAlignment,
    ) {
        self.scrolls.push(ScrollRecord {
            element,
            behavior,
            block,
        });
    }
}

impl ObjectUrlRegistry for HeadlessPage {
    fn create_object_url(&mut self, blob: &Blob) -> String {
        let url = format!("blob:pagekit/{}", self.object_urls.len() + 1);
        self.object_urls.push(ObjectUrlRecord {
            url: url.clone(),
            blob: blob.clone(),
            revoked: false,
        });
        url
    }

    fn revoke_object_url(&mut self, url: &str) {
        if let Some(record) = self
            .object_urls
            .iter_mut()
            .find(|record| record.url == url && !record.revoked)
        {
            record.revoked = true;
        }
    }
}

impl UserAgentSource for HeadlessPage {
    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }
}

impl LegacyBlobSave for HeadlessPage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_matching_is_token_based() {
        let mut page = HeadlessPage::new();
        let hit = page.append_element("div", "form-group has-error");
        let _miss = page.append_element("div", "has-error-banner");
        let _plain = page.append_element("div", "");
        assert_eq!(page.elements_with_class("has-error"), vec![hit]);
    }

    #[test]
    fn query_order_is_document_order() {
        let mut page = HeadlessPage::new();
        let first = page.append_element("input", "has-error");
        let second = page.append_element("select", "has-error");
        assert_eq!(page.elements_with_class("has-error"), vec![first, second]);
    }

    #[test]
    fn removed_elements_drop_out_of_queries() {
        let mut page = HeadlessPage::new();
        let first = page.append_element("input", "has-error");
        let second = page.append_element("input", "has-error");
        page.remove(first);
        assert_eq!(page.elements_with_class("has-error"), vec![second]);
        assert!(!page.is_attached(first));
    }

    #[test]
    fn anchors_carry_href_and_download() {
        let mut page = HeadlessPage::new();
        let anchor = page.insert_anchor("blob:pagekit/1", "file.bin");
        assert_eq!(page.tag_name(anchor), "a");
        assert_eq!(page.attribute(anchor, "href"), Some("blob:pagekit/1"));
        assert_eq!(page.attribute(anchor, "download"), Some("file.bin"));
    }

    #[test]
    fn object_urls_are_unique_and_revocable() {
        let mut page = HeadlessPage::new();
        let blob = Blob::new(vec![1, 2, 3], "");
        let a = page.create_object_url(&blob);
        let b = page.create_object_url(&blob);
        assert_ne!(a, b);
        assert_eq!(page.live_object_urls().len(), 2);

        page.revoke_object_url(&a);
        assert_eq!(page.live_object_urls(), vec![b.as_str()]);
        // History keeps the blob for inspection.
        assert_eq!(page.blob_for_url(&a).map(Blob::bytes), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn revoking_unknown_url_is_ignored() {
        let mut page = HeadlessPage::new();
        page.revoke_object_url("blob:pagekit/99");
        assert!(page.live_object_urls().is_empty());
    }

    #[test]
    fn legacy_save_is_absent_by_default() {
        let mut page = HeadlessPage::new();
        let blob = Blob::new(vec![0], "");
        assert!(!page.save_or_open_blob(&blob, "x.bin"));
    }
}
