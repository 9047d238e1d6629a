use gloo_events::EventListener;
use tracing::{debug, error, info};
use web_sys::{Document, Element};

use crate::dom::storage::{get_local_storage, set_local_storage};
use common::{config::ThemeConfig, theme::Theme};

fn apply(root: &Element, attribute: &str, theme: Theme) {
    if let Err(err) = root.set_attribute(attribute, theme.as_str()) {
        error!("failed to set {attribute}: {err:?}");
    }
}

// the saved theme is applied even on pages without a toggle, so the choice carries across the
// whole site
pub fn init(document: &Document, config: &ThemeConfig) {
    let Some(root) = document.document_element() else {
        error!("document has no root element");
        return;
    };

    let theme = Theme::resolve(get_local_storage(&config.storage_key).as_deref());
    apply(&root, &config.attribute, theme);
    debug!({ theme = theme.as_str() }, "applied saved theme");

    let Some(toggle) = document.get_element_by_id(&config.toggle_id) else {
        debug!("no theme toggle on this page");
        return;
    };

    let attribute = config.attribute.clone();
    let storage_key = config.storage_key.clone();

    // the attribute, not the stored value, is the source of truth for the current theme
    EventListener::new(&toggle, "click", move |_| {
        let current = Theme::resolve(root.get_attribute(&attribute).as_deref());
        let next = current.toggled();

        apply(&root, &attribute, next);
        set_local_storage(&storage_key, next.as_str());
        info!({ theme = next.as_str() }, "switched theme");
    })
    .forget();
}
