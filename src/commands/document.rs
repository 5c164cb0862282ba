//! Document Commands
//!
//! Opens server-rendered PDFs in a new browser window.

use budget_core::listing;
use budget_core::{DocumentKind, HttpBudgetApi};
use web_sys::{Blob, BlobPropertyBag, Url};

use super::js_error;

/// Wrap PDF bytes in a blob URL and open it in a new window
pub fn open_pdf(bytes: &[u8]) -> Result<(), String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&array);

    let options = BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    window.open_with_url(&url).map_err(js_error)?;
    Ok(())
}

/// Download a budget or contract PDF and open it. Failures are only logged.
pub async fn print_document(api: HttpBudgetApi, kind: DocumentKind, budget_id: String) {
    let Ok(bytes) = listing::fetch_document(&api, kind, &budget_id).await else {
        return;
    };
    if let Err(e) = open_pdf(&bytes) {
        log::error!("[budgets] Could not open {:?} for {}: {}", kind, budget_id, e);
    }
}
