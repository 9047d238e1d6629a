use std::{cell::RefCell, rc::Rc};

use gloo_events::EventListener;
use tracing::{debug, error};
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{query, query_all, set_class};
use common::{
    config::{MenuConfig, NavigationConfig},
    menu::{MenuPresentation, MenuState},
};

// mobile menu
//
// the toggle button and the overlay both flip the menu, and following any nav link closes it
struct MobileMenu {
    state: MenuState,
    nav: Element,
    overlay: Option<Element>,
    toggle: Option<Element>,
    body: Option<HtmlElement>,
}

impl MobileMenu {
    fn toggle(&mut self) {
        let presentation = self.state.toggle();
        self.render(presentation);
    }

    fn close(&mut self) {
        if let Some(presentation) = self.state.close() {
            self.render(presentation);
        }
    }

    fn render(&self, presentation: MenuPresentation) {
        set_class(&self.nav, "open", presentation.nav_open);

        if let Some(overlay) = &self.overlay {
            set_class(overlay, "active", presentation.overlay_active);
        }

        if let Some(toggle) = &self.toggle {
            toggle
                .set_attribute("aria-expanded", presentation.aria_expanded)
                .unwrap_or_else(|err| error!("failed to set aria-expanded: {err:?}"));
            toggle.set_text_content(Some(presentation.glyph));
        }

        if let Some(body) = &self.body
            && let Err(err) = body
                .style()
                .set_property("overflow", presentation.body_overflow)
        {
            error!("failed to lock body scroll: {err:?}");
        }

        debug!({ open = presentation.nav_open }, "mobile menu toggled");
    }
}

pub fn init(document: &Document, config: &MenuConfig, navigation: &NavigationConfig) {
    let toggle = query(document, &config.toggle_selector);
    let overlay = query(document, &config.overlay_selector);

    if toggle.is_none() && overlay.is_none() {
        debug!("no mobile menu controls on this page");
        return;
    }

    let Some(nav) = query(document, &config.nav_selector) else {
        debug!("mobile menu controls without a nav element");
        return;
    };

    let menu = Rc::new(RefCell::new(MobileMenu {
        state: MenuState::default(),
        nav,
        overlay: overlay.clone(),
        toggle: toggle.clone(),
        body: document.body(),
    }));

    for trigger in [toggle, overlay].into_iter().flatten() {
        let menu = menu.clone();
        EventListener::new(&trigger, "click", move |_| menu.borrow_mut().toggle()).forget();
    }

    for link in query_all(document, &navigation.link_selector) {
        let menu = menu.clone();
        EventListener::new(&link, "click", move |_| menu.borrow_mut().close()).forget();
    }
}
