use std::rc::Rc;

use gloo_events::EventListener;
use tracing::{debug, info};
use web_sys::{Document, Element};

use crate::dom::{query_all, query_within, set_class};
use common::{
    config::FilterConfig,
    filter::{Card, Filter, header_visible, visibility},
};

// filter bar
//
// the same binding drives both the chip and the tab layouts; only the selectors and the
// count/header switches differ between pages
struct FilterBar {
    controls: Vec<(Element, Filter)>,
    cards: Vec<Element>,
    models: Vec<Card>,
    headers: Vec<Element>,
}

impl FilterBar {
    fn select(&self, index: usize) {
        let Some((_, filter)) = self.controls.get(index) else {
            return;
        };

        for (i, (control, _)) in self.controls.iter().enumerate() {
            set_class(control, "active", i == index);
        }

        for (card, visible) in self.cards.iter().zip(visibility(filter, &self.models)) {
            set_class(card, "hidden", !visible);
        }

        for header in &self.headers {
            let category = header.get_attribute("data-category").unwrap_or_default();
            set_class(header, "hidden", !header_visible(&category, filter, &self.models));
        }

        info!({ filter = %filter }, "applied card filter");
    }

    // labels are rewritten once; a leading colored dot, when present, is kept in front of the text
    fn write_counts(&self, config: &FilterConfig) {
        for (control, filter) in &self.controls {
            let dot = query_within(control, &config.dot_selector);

            control.set_text_content(Some(&filter.counted_label(&self.models)));

            if let Some(dot) = dot {
                let first = control.first_child();
                if let Err(err) = control.insert_before(&dot, first.as_ref()) {
                    debug!("failed to restore chip dot: {err:?}");
                }
            }
        }
    }
}

fn card_model(card: &Element, config: &FilterConfig) -> Card {
    Card {
        category: card.get_attribute("data-category"),
        coming_soon: query_within(card, &config.coming_soon_selector).is_some(),
    }
}

pub fn init(document: &Document, config: &FilterConfig) {
    let controls: Vec<(Element, Filter)> = query_all(document, &config.control_selector)
        .into_iter()
        .filter_map(|control| {
            let filter = Filter::parse(&control.get_attribute("data-filter")?);
            Some((control, filter))
        })
        .collect();

    if controls.is_empty() {
        debug!("no filter controls on this page");
        return;
    }

    let cards = query_all(document, &config.card_selector);
    let models = cards.iter().map(|card| card_model(card, config)).collect();
    let headers = if config.category_headers {
        query_all(document, &config.header_selector)
    } else {
        Vec::new()
    };

    let bar = Rc::new(FilterBar {
        controls,
        cards,
        models,
        headers,
    });

    if config.chip_counts {
        bar.write_counts(config);
    }

    for (index, (control, _)) in bar.controls.iter().enumerate() {
        let bar = bar.clone();
        EventListener::new(control, "click", move |_| bar.select(index)).forget();
    }

    debug!({ controls = bar.controls.len(), cards = bar.cards.len() }, "bound filter bar");
}
