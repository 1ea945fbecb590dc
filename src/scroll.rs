//! Scrolling to invalid form fields.

use crate::page::{Document, ScrollAlignment, ScrollBehavior};

/// Class name form validation puts on failed fields by convention.
pub const DEFAULT_ERROR_CLASS: &str = "has-error";

/// Smoothly scrolls the first element carrying `error_class_name` to the
/// vertical center of the viewport.
///
/// Does nothing when no element matches. The document is queried fresh on
/// every call.
pub fn scroll_to_error_form_field(document: &mut dyn Document, error_class_name: &str) {
    let matches = document.elements_with_class(error_class_name);
    let Some(first) = matches.first() else {
        return;
    };
    tracing::debug!(
        class = error_class_name,
        matches = matches.len(),
        "scrolling to first invalid field"
    );
    document.scroll_into_view(*first, ScrollBehavior::Smooth, ScrollAlignment::Center);
}
