//! Browser-side utilities for the calculator component.

use common::page;
use common::CalculatorError;

/// Checks that every element the controller drives is present in the document.
pub fn verify_page() -> Result<(), CalculatorError> {
    let document = web_sys::window().and_then(|w| w.document());
    page::verify(|id| {
        document
            .as_ref()
            .and_then(|doc| doc.get_element_by_id(id))
            .is_some()
    })
}

/// Shows a blocking alert with `message`.
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
