//! File Commands
//!
//! Local JSON download and upload through the browser.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use zeiglist_core::download_file_name;

use crate::models::ZeigList;

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

/// Serialize the list and trigger a client-side download
pub fn download_list(list: &ZeigList) -> Result<(), String> {
    let json = list.to_file_json().map_err(|e| e.to_string())?;
    let name = download_file_name(&list.title, &list.created_at);

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let body = document.body().ok_or("no body")?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "anchor element cast failed".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&name);

    body.append_child(&anchor).map_err(js_err)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_err)?;
    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;

    web_sys::console::log_1(&format!("[FILES] downloaded {}", name).into());
    Ok(())
}

/// Read a picked file as text
pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text()).await.map_err(js_err)?;
    text.as_string().ok_or_else(|| "file is not text".to_string())
}
