//! Internal DOM focus and viewport helpers for desktop shell widgets.

use wasm_bindgen::JsCast;

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub(crate) fn focus_element_by_id(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return false;
    };
    let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    let _ = element.focus();
    true
}

/// Reports whether the document's active element sits inside the element with `id`.
pub(crate) fn focus_is_within(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };
    let (Some(container), Some(active)) = (document.get_element_by_id(id), document.active_element())
    else {
        return false;
    };
    container.contains(Some(AsRef::<web_sys::Node>::as_ref(&active)))
}

/// Returns the viewport size in CSS pixels, if a browser window is available.
pub(super) fn viewport_size() -> Option<(i32, i32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as i32, height as i32))
}
