use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// carousel controller
//
// the controller owns the slide index and both timers, and everything that touches the carousel
// funnels through handle() so that the full set of bindings is one match statement.  the browser
// side supplies a SlideView (class toggling) and a Scheduler (gloo timers); tests supply fakes
//
// timer discipline: before either timer is armed, the previous instance of that same timer is
// cancelled, so there is never more than one recurring and one pending resume timer

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct CarouselTiming {
    pub rotation_interval_ms: u32,
    pub resume_delay_ms: u32,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        CarouselTiming {
            rotation_interval_ms: 5000,
            resume_delay_ms: 10000,
        }
    }
}

/// Which of the two controller timers fired.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Timer {
    Rotation,
    Resume,
}

pub trait Scheduler {
    type Handle;

    /// Arm a recurring timer that fires `timer` every `millis`.
    fn every(&mut self, millis: u32, timer: Timer) -> Self::Handle;

    /// Arm a one-shot timer that fires `timer` once after `millis`.
    fn after(&mut self, millis: u32, timer: Timer) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

pub trait SlideView {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set_slide_active(&mut self, index: usize, active: bool);

    fn set_dot_active(&mut self, index: usize, active: bool);

    /// Identifier of the element a slide points at, if any.
    fn target(&self, index: usize) -> Option<String>;

    // re-queried every time rotation is (re)started
    fn prefers_reduced_motion(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArrowKey {
    Left,
    Right,
}

impl ArrowKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(ArrowKey::Left),
            "ArrowRight" => Some(ArrowKey::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CarouselInput {
    Tick,
    ResumeElapsed,
    DotClicked(usize),
    SlideClicked(usize),
    PointerEnter,
    PointerLeave,
    TouchStart,
    Key { key: ArrowKey, in_view: bool },
}

impl From<Timer> for CarouselInput {
    fn from(timer: Timer) -> Self {
        match timer {
            Timer::Rotation => CarouselInput::Tick,
            Timer::Resume => CarouselInput::ResumeElapsed,
        }
    }
}

/// What the caller still has to do after the controller handled an input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CarouselResponse {
    Nothing,
    // the key was acted on, suppress the default scroll
    ConsumeKey,
    // the key was not ours, let the browser have it
    Ignored,
    // scroll to and highlight the element with this id
    Reveal(String),
}

pub struct Carousel<V: SlideView, S: Scheduler> {
    view: V,
    scheduler: S,
    timing: CarouselTiming,
    current: usize,
    rotation: Option<S::Handle>,
    resume: Option<S::Handle>,
}

impl<V: SlideView, S: Scheduler> Carousel<V, S> {
    pub fn new(view: V, scheduler: S, timing: CarouselTiming) -> Self {
        Carousel {
            view,
            scheduler,
            timing,
            current: 0,
            rotation: None,
            resume: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    pub fn resume_pending(&self) -> bool {
        self.resume.is_some()
    }

    #[instrument(level = "debug", skip(self))]
    pub fn handle(&mut self, input: CarouselInput) -> CarouselResponse {
        match input {
            CarouselInput::Tick => self.advance(),
            CarouselInput::ResumeElapsed => {
                // the one-shot already fired, so dropping the handle is all that is left
                self.resume = None;
                self.start_rotation();
            }
            CarouselInput::DotClicked(index) => {
                self.show_slide(index);
                self.pause_and_resume();
            }
            CarouselInput::SlideClicked(index) => {
                return match self.view.target(index) {
                    Some(target) => CarouselResponse::Reveal(target),
                    None => CarouselResponse::Nothing,
                };
            }
            CarouselInput::PointerEnter => self.stop_rotation(),
            CarouselInput::PointerLeave => self.start_rotation(),
            CarouselInput::TouchStart => self.pause_and_resume(),
            CarouselInput::Key { key, in_view } => {
                let len = self.view.len();
                if !in_view || len == 0 {
                    return CarouselResponse::Ignored;
                }

                let next = match key {
                    ArrowKey::Left => (self.current + len - 1) % len,
                    ArrowKey::Right => (self.current + 1) % len,
                };
                self.show_slide(next);
                self.pause_and_resume();

                return CarouselResponse::ConsumeKey;
            }
        }

        CarouselResponse::Nothing
    }

    pub fn show_slide(&mut self, index: usize) {
        let len = self.view.len();
        if index >= len {
            debug!({ index, len }, "ignoring out of range slide");
            return;
        }

        for i in 0..len {
            let active = i == index;
            self.view.set_slide_active(i, active);
            self.view.set_dot_active(i, active);
        }

        self.current = index;
    }

    pub fn advance(&mut self) {
        let len = self.view.len();
        if len == 0 {
            return;
        }

        self.show_slide((self.current + 1) % len);
    }

    pub fn start_rotation(&mut self) {
        if self.view.prefers_reduced_motion() {
            debug!("reduced motion preferred, not rotating");
            return;
        }

        self.stop_rotation();
        self.rotation = Some(
            self.scheduler
                .every(self.timing.rotation_interval_ms, Timer::Rotation),
        );
    }

    pub fn stop_rotation(&mut self) {
        if let Some(handle) = self.rotation.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn pause_and_resume(&mut self) {
        self.stop_rotation();

        if let Some(handle) = self.resume.take() {
            self.scheduler.cancel(handle);
        }

        self.resume = Some(
            self.scheduler
                .after(self.timing.resume_delay_ms, Timer::Resume),
        );
    }
}
