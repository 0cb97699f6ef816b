//! DOM Helpers
//!
//! Lookups and bindings for the server-rendered page the islands mount into.

use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, Storage};

#[wasm_bindgen]
extern "C" {
    /// Bootstrap's modal widget
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    type Modal;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getInstance)]
    fn get_instance(element: &Element) -> Option<Modal>;

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);
}

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

pub fn by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Element by id as a concrete element type
pub fn by_id_as<T: JsCast>(id: &str) -> Option<T> {
    by_id(id)?.dyn_into::<T>().ok()
}

pub fn session_storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Empty an anchor element and hand it over as a mount point
pub fn take_anchor(id: &str) -> Option<HtmlElement> {
    let anchor = by_id_as::<HtmlElement>(id)?;
    anchor.set_inner_html("");
    Some(anchor)
}

/// Attach a listener for the lifetime of the page
pub fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Value of `input[name=...]` within the document
pub fn input_value(name: &str) -> String {
    document()
        .ok()
        .and_then(|d| d.query_selector(&format!("input[name=\"{}\"]", name)).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

/// Serialize every text field of a form into a flat JSON object
pub fn form_fields(form: &HtmlFormElement) -> Result<Map<String, Value>, JsValue> {
    let data = FormData::new_with_form(form)?;
    let entries = js_sys::try_iter(&data)?.ok_or_else(|| JsValue::from_str("FormData is not iterable"))?;
    let mut fields = Map::new();
    for entry in entries {
        let pair: js_sys::Array = entry?.dyn_into()?;
        let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) else {
            // File inputs carry Blobs, not strings
            continue;
        };
        fields.insert(key, Value::String(value));
    }
    Ok(fields)
}

/// Hide a Bootstrap modal if one is attached to the element
pub fn hide_modal(id: &str) {
    match by_id(id).and_then(|el| Modal::get_instance(&el)) {
        Some(modal) => modal.hide(),
        None => log::warn!("no modal instance for #{}", id),
    }
}

/// Toggle Bootstrap's `d-none` on an element
pub fn set_visible(element: &Element, visible: bool) {
    let classes = element.class_list();
    let result = if visible { classes.remove_1("d-none") } else { classes.add_1("d-none") };
    if let Err(e) = result {
        log::warn!("failed to toggle visibility: {:?}", e);
    }
}
