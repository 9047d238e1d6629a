use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use tracing::{debug, error};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dom::{query_all, scroll_y, set_class, smooth_scroll_to};
use common::{
    config::NavigationConfig,
    layout::scroll_target,
    navigation::{SectionPosition, active_section, link_targets_section, same_page_target},
};

fn highlight_only(links: &[Element], active: &Element) {
    for link in links {
        set_class(link, "active", link == active);
    }
}

// anchor scrolling
//
// clicks on links into the index page, made from the index page, scroll in place instead of
// reloading.  the hash still lands in the history so back/forward and bookmarks work
fn bind_anchor(
    window: &Window,
    document: &Document,
    links: &Rc<Vec<Element>>,
    link: &Element,
    offset: f64,
) {
    let window = window.clone();
    let document = document.clone();
    let links = links.clone();
    let anchor = link.clone();

    EventListener::new_with_options(
        link,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let pathname = window.location().pathname().unwrap_or_default();
            let Some(hash) = same_page_target(&href, &pathname) else {
                return;
            };

            event.prevent_default();

            let target = match document.query_selector(hash) {
                Ok(Some(target)) => target,
                Ok(None) => {
                    debug!({ hash }, "anchor target missing");
                    return;
                }
                Err(err) => {
                    error!({ hash }, "unusable anchor: {err:?}");
                    return;
                }
            };

            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                scroll_y(&window),
                offset,
            );
            smooth_scroll_to(&window, top);
            highlight_only(&links, &anchor);

            match window.history() {
                Ok(history) => {
                    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(hash)) {
                        error!("failed to push history state: {err:?}");
                    }
                }
                Err(err) => error!("no history available: {err:?}"),
            }
        },
    )
    .forget();
}

fn section_positions(sections: &[HtmlElement]) -> Vec<SectionPosition> {
    sections
        .iter()
        .map(|section| SectionPosition {
            id: section.id(),
            offset_top: f64::from(section.offset_top()),
        })
        .collect()
}

// scroll spy
//
// offsets are re-read on every scroll since images and injected content shift them after load
fn bind_scroll_spy(
    window: &Window,
    document: &Document,
    links: &Rc<Vec<Element>>,
    config: &NavigationConfig,
) {
    let sections: Vec<HtmlElement> = query_all(document, &config.section_selector)
        .into_iter()
        .filter_map(|section| section.dyn_into::<HtmlElement>().ok())
        .collect();

    // still bound without sections, so links marked active in the markup get cleared on scroll
    if sections.is_empty() {
        debug!("no sections to spy on");
    }

    let links = links.clone();
    let spy_window = window.clone();
    let threshold = config.spy_threshold;

    EventListener::new(window, "scroll", move |_| {
        let positions = section_positions(&sections);
        let current = active_section(&positions, scroll_y(&spy_window), threshold);

        for link in links.iter() {
            let href = link.get_attribute("href").unwrap_or_default();
            set_class(link, "active", link_targets_section(&href, current));
        }
    })
    .forget();
}

pub fn init(window: &Window, document: &Document, config: &NavigationConfig) {
    let links = Rc::new(query_all(document, &config.link_selector));
    if links.is_empty() {
        debug!("no navigation links on this page");
        return;
    }

    for link in links.iter() {
        bind_anchor(window, document, &links, link, config.anchor_offset);
    }

    bind_scroll_spy(window, document, &links, config);
}
