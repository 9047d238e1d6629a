pub mod storage;

use tracing::{debug, error};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

// element lookup
//
// every feature on the page is optional, so lookups hand back Option/Vec and the caller decides
// whether a missing element means "skip this feature".  an invalid selector is a configuration
// mistake rather than a missing element, so it gets logged as an error
pub fn query(root: &Document, selector: &str) -> Option<Element> {
    match root.query_selector(selector) {
        Ok(found) => {
            if found.is_none() {
                debug!({ selector }, "no element matches selector");
            }
            found
        }
        Err(err) => {
            error!({ selector }, "invalid selector: {err:?}");
            None
        }
    }
}

pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            error!({ selector }, "invalid selector: {err:?}");
            return Vec::new();
        }
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// same as query(), but scoped to the children of an element and silent when nothing matches
pub fn query_within(element: &Element, selector: &str) -> Option<Element> {
    element.query_selector(selector).ok().flatten()
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };

    if let Err(err) = result {
        error!({ class }, "failed to update class list: {err:?}");
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn window_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}
