use gloo_events::EventListener;
use tracing::{Level, debug, error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Window};

use common::{
    config::{SiteConfig, parse_config},
    layout::still_loading,
};

mod carousel;
mod dom;
mod filter;
mod header;
mod menu;
mod navigation;
mod theme;

// baked in at build time so the page never waits on a second request before wiring itself up
const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    let (config, parse_error) = match parse_config(SITE_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    dioxus_logger::init(Level::from(config.log_level)).expect("failed to init logger");

    if let Some(err) = parse_error {
        error!("failed to parse site config, using defaults: {err}");
    }

    let Some(window) = web_sys::window() else {
        error!("no global window exists");
        return;
    };
    let Some(document) = window.document() else {
        error!("window has no document");
        return;
    };

    // the bundle usually finishes loading after DOMContentLoaded has already fired
    if still_loading(&document.ready_state()) {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            spawn_local(init(window, document, config));
        })
        .forget();
    } else {
        spawn_local(init(window, document, config));
    }
}

// page initialization
//
// the header goes first since it hosts the theme toggle and the mobile menu.  after that each
// feature binds independently, and a feature whose elements are missing is skipped without
// affecting the others
async fn init(window: Window, document: Document, config: SiteConfig) {
    let profile = document
        .body()
        .and_then(|body| body.get_attribute("data-profile"));
    let config = config.for_profile(profile.as_deref());
    let features = config.features;

    if features.header {
        header::load_header(&document, &config.header).await;
    }

    if features.theme {
        theme::init(&document, &config.theme);
    }

    if features.menu {
        menu::init(&document, &config.menu, &config.navigation);
    }

    if features.navigation {
        navigation::init(&window, &document, &config.navigation);
    }

    if features.filter {
        filter::init(&document, &config.filter);
    }

    if features.carousel {
        carousel::init(&window, &document, &config.carousel);
    }

    debug!(?features, "enabled features");
    info!({ profile = profile.as_deref().unwrap_or("default") }, "page initialized");
}
