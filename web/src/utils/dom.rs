//! Browser lookups that have no Leptos equivalent.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::constants::LOADING_ELEMENT_ID;

/// Hide the static loading screen from `index.html` once the app takes over.
pub fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("no document; loading screen left in place");
        return;
    };

    let Some(element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("loading element '{}' not found", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("failed to hide loading screen: {:?}", e);
        }
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
