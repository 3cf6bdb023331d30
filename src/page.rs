use crate::constants::{
    ADDRESS_ID, COPIED_CLASS, COPIED_LABEL, COPY_BUTTON_ID, COPY_RESTORE_MS, YEAR_ID,
};
use crate::dom;
use hexfield_core::sanitize_address;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Set the footer year to the current calendar year.
pub fn stamp_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

/// Copy the sanitized contract address on click and flash a "Copied!" label.
pub fn wire_copy_button(document: &web::Document) {
    let Some(button) = document.get_element_by_id(COPY_BUTTON_ID) else {
        return;
    };
    let doc = document.clone();
    dom::add_click_listener(document, COPY_BUTTON_ID, move || {
        let Some(text) = doc
            .get_element_by_id(ADDRESS_ID)
            .and_then(|el| el.text_content())
        else {
            return;
        };
        let address = sanitize_address(&text);
        if let Err(e) = write_clipboard(&address) {
            log::warn!("[page] clipboard unavailable: {:?}", e);
            return;
        }
        show_copied(&button);
    });
}

fn write_clipboard(text: &str) -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(JsValue::from_str("navigator.clipboard missing"));
    }
    let write_text: js_sys::Function =
        js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))?
        .dyn_into()?;
    spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("[page] clipboard write rejected: {:?}", e);
        }
    });
    Ok(())
}

fn show_copied(button: &web::Element) {
    let classes = button.class_list();
    // a second click while the label is showing must not capture "Copied!"
    if classes.contains(COPIED_CLASS) {
        return;
    }
    let label = button.text_content().unwrap_or_default();
    _ = classes.add_1(COPIED_CLASS);
    button.set_text_content(Some(COPIED_LABEL));

    let button = button.clone();
    let restore = Closure::once_into_js(move || {
        _ = button.class_list().remove_1(COPIED_CLASS);
        button.set_text_content(Some(&label));
    });
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            restore.unchecked_ref(),
            COPY_RESTORE_MS,
        );
    }
}
