use wasm_bindgen::JsCast;

/// Blocking browser alert.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert failed: {}", message);
            }
        }
        None => log::warn!("no window for alert: {}", message),
    }
}

/// Offer `contents` as a file download and release the object URL afterwards.
pub fn download_text(filename: &str, mime_type: &str, contents: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window".to_string())?;
    let document = window.document().ok_or("no document".to_string())?;
    let body = document.body().ok_or("no document body".to_string())?;

    let parts = js_sys::Array::new();
    parts.push(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "blob: failed to create".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "url: create_object_url failed".to_string())?;

    let a = document
        .create_element("a")
        .map_err(|_| "document: create_element failed".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "document: anchor cast failed".to_string())?;

    a.set_href(&url);
    a.set_download(filename);
    let attached = body.append_child(&a).is_ok();
    a.click();
    if attached {
        a.remove();
    }

    let _ = web_sys::Url::revoke_object_url(&url);
    log::debug!("Offered {} for download", filename);
    Ok(())
}
