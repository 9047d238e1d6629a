use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::{Interval, Timeout};
use tracing::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Window};

use crate::dom::{
    has_class, query, query_all, scroll_y, set_class, smooth_scroll_to, window_height,
};
use common::{
    carousel::{
        ArrowKey, Carousel, CarouselInput, CarouselResponse, Scheduler, SlideView, Timer,
    },
    config::CarouselConfig,
    layout::{intersects_viewport, scroll_target},
};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type WebCarousel = Carousel<DomSlides, WebScheduler>;

// slides and dots as found in the page; the "active" class is the only thing we touch
pub struct DomSlides {
    window: Window,
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl SlideView for DomSlides {
    fn len(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get(index) {
            set_class(slide, "active", active);
        }
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.dots.get(index) {
            set_class(dot, "active", active);
        }
    }

    fn target(&self, index: usize) -> Option<String> {
        self.slides.get(index)?.get_attribute("data-target")
    }

    fn prefers_reduced_motion(&self) -> bool {
        match self.window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(query)) => query.matches(),
            _ => false,
        }
    }
}

pub enum TimerHandle {
    Interval(Interval),
    Timeout(Timeout),
}

// gloo timers
//
// a fired timer only holds a weak reference back to the controller, so the controller owning
// its own timers does not keep itself alive.  dropping a handle clears the browser timer
pub struct WebScheduler {
    carousel: Weak<RefCell<WebCarousel>>,
}

impl Scheduler for WebScheduler {
    type Handle = TimerHandle;

    fn every(&mut self, millis: u32, timer: Timer) -> TimerHandle {
        let carousel = self.carousel.clone();
        TimerHandle::Interval(Interval::new(millis, move || {
            dispatch(&carousel, timer.into());
        }))
    }

    fn after(&mut self, millis: u32, timer: Timer) -> TimerHandle {
        let carousel = self.carousel.clone();
        TimerHandle::Timeout(Timeout::new(millis, move || {
            dispatch(&carousel, timer.into());
        }))
    }

    fn cancel(&mut self, handle: TimerHandle) {
        match handle {
            TimerHandle::Interval(interval) => {
                interval.cancel();
            }
            TimerHandle::Timeout(timeout) => {
                timeout.cancel();
            }
        }
    }
}

// every browser callback goes through here; the borrow lasts exactly as long as one input
fn dispatch(carousel: &Weak<RefCell<WebCarousel>>, input: CarouselInput) -> CarouselResponse {
    match carousel.upgrade() {
        Some(carousel) => carousel.borrow_mut().handle(input),
        None => CarouselResponse::Nothing,
    }
}

// slide targets
//
// scroll so the target sits under the fixed header, then flash it.  the highlight goes on after
// a fixed delay rather than when the scroll finishes, and comes off when its css animation ends
fn reveal(window: &Window, document: &Document, target: &str, config: &CarouselConfig) {
    let Some(element) = document.get_element_by_id(target) else {
        debug!({ target }, "slide target missing");
        return;
    };

    let top = scroll_target(
        element.get_bounding_client_rect().top(),
        scroll_y(window),
        config.header_clearance,
    );
    smooth_scroll_to(window, top);

    let class = config.highlight_class.clone();
    Timeout::new(config.highlight_delay_ms, move || {
        set_class(&element, &class, true);

        let highlighted = element.clone();
        EventListener::once(&element, "animationend", move |_| {
            set_class(&highlighted, &class, false);
        })
        .forget();
    })
    .forget();
}

fn bind_inputs(
    window: &Window,
    document: &Document,
    container: &Element,
    carousel: &Rc<RefCell<WebCarousel>>,
    config: &Rc<CarouselConfig>,
) {
    let handle = Rc::downgrade(carousel);
    let (slides, dots) = {
        let carousel = carousel.borrow();
        (carousel.view().slides.clone(), carousel.view().dots.clone())
    };

    for (index, dot) in dots.iter().enumerate() {
        let handle = handle.clone();
        EventListener::new(dot, "click", move |_| {
            dispatch(&handle, CarouselInput::DotClicked(index));
        })
        .forget();
    }

    for (index, slide) in slides.iter().enumerate() {
        let handle = handle.clone();
        let window = window.clone();
        let document = document.clone();
        let config = config.clone();
        EventListener::new(slide, "click", move |_| {
            if let CarouselResponse::Reveal(target) =
                dispatch(&handle, CarouselInput::SlideClicked(index))
            {
                reveal(&window, &document, &target, &config);
            }
        })
        .forget();
    }

    let pointer_inputs = [
        ("mouseenter", CarouselInput::PointerEnter),
        ("mouseleave", CarouselInput::PointerLeave),
        ("touchstart", CarouselInput::TouchStart),
    ];
    for (event, input) in pointer_inputs {
        let handle = handle.clone();
        EventListener::new(container, event, move |_| {
            dispatch(&handle, input.clone());
        })
        .forget();
    }

    let window = window.clone();
    let container = container.clone();
    EventListener::new_with_options(
        document,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(key) = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|event| ArrowKey::from_key(&event.key()))
            else {
                return;
            };

            let rect = container.get_bounding_client_rect();
            let in_view = intersects_viewport(rect.top(), rect.bottom(), window_height(&window));

            let response = dispatch(&handle, CarouselInput::Key { key, in_view });
            if response == CarouselResponse::ConsumeKey {
                event.prevent_default();
            }
        },
    )
    .forget();
}

// listeners and timers only hold weak handles, so the last strong reference is leaked at the end
// to keep the controller alive for the rest of the page
pub fn init(window: &Window, document: &Document, config: &CarouselConfig) {
    let Some(container) = query(document, &config.container_selector) else {
        debug!("no carousel on this page");
        return;
    };

    let view = DomSlides {
        window: window.clone(),
        slides: query_all(document, &config.slide_selector),
        dots: query_all(document, &config.dot_selector),
    };

    // start from whichever slide the markup marked active
    let initial = view
        .slides
        .iter()
        .position(|slide| has_class(slide, "active"))
        .unwrap_or(0);
    let count = view.len();

    let carousel = Rc::new_cyclic(|weak| {
        RefCell::new(Carousel::new(
            view,
            WebScheduler {
                carousel: weak.clone(),
            },
            config.timing,
        ))
    });

    let config = Rc::new(config.clone());
    bind_inputs(window, document, &container, &carousel, &config);

    {
        let mut carousel = carousel.borrow_mut();
        carousel.show_slide(initial);
        carousel.start_rotation();
    }

    info!({ slides = count }, "carousel started");
    std::mem::forget(carousel);
}
