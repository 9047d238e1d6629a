// test doubles for the carousel seams
//
// VirtualClock never touches real time: tests move it forward explicitly and pop whatever came
// due, so timer ordering is fully deterministic

use crate::carousel::{Scheduler, SlideView, Timer};

#[derive(Debug)]
pub struct FakeSlides {
    pub slides: Vec<bool>,
    pub dots: Vec<bool>,
    pub targets: Vec<Option<String>>,
    pub reduced_motion: bool,
}

impl FakeSlides {
    pub fn new(len: usize) -> Self {
        FakeSlides {
            slides: vec![false; len],
            dots: vec![false; len],
            targets: vec![None; len],
            reduced_motion: false,
        }
    }

    pub fn active_slides(&self) -> Vec<usize> {
        active(&self.slides)
    }

    pub fn active_dots(&self) -> Vec<usize> {
        active(&self.dots)
    }
}

fn active(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, on)| on.then_some(i))
        .collect()
}

impl SlideView for FakeSlides {
    fn len(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        self.slides[index] = active;
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        self.dots[index] = active;
    }

    fn target(&self, index: usize) -> Option<String> {
        self.targets.get(index).cloned().flatten()
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

#[derive(Debug)]
struct Pending {
    id: u64,
    due: u64,
    period: Option<u64>,
    timer: Timer,
}

#[derive(Debug, Default)]
pub struct VirtualClock {
    now: u64,
    next_id: u64,
    pending: Vec<Pending>,
    armed_recurring: usize,
    armed_once: usize,
    cancelled: usize,
}

impl VirtualClock {
    pub fn new() -> Self {
        VirtualClock::default()
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn set_now(&mut self, now: u64) {
        self.now = now;
    }

    pub fn live_recurring(&self) -> usize {
        self.pending.iter().filter(|p| p.period.is_some()).count()
    }

    pub fn live_once(&self) -> usize {
        self.pending.iter().filter(|p| p.period.is_none()).count()
    }

    pub fn armed_recurring(&self) -> usize {
        self.armed_recurring
    }

    pub fn armed_once(&self) -> usize {
        self.armed_once
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Pop the earliest timer due at or before `deadline`, moving the clock to its due time.
    /// Recurring timers are rescheduled one period later, one-shots are removed.
    pub fn pop_due(&mut self, deadline: u64) -> Option<Timer> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= deadline)
            .min_by_key(|(_, p)| (p.due, p.id))
            .map(|(pos, _)| pos)?;

        let entry = &mut self.pending[pos];
        let timer = entry.timer;
        self.now = entry.due;

        match entry.period {
            Some(period) => entry.due += period,
            None => {
                self.pending.remove(pos);
            }
        }

        Some(timer)
    }

    fn arm(&mut self, millis: u32, period: Option<u64>, timer: Timer) -> u64 {
        self.next_id += 1;
        self.pending.push(Pending {
            id: self.next_id,
            due: self.now + u64::from(millis),
            period,
            timer,
        });
        self.next_id
    }
}

impl Scheduler for VirtualClock {
    type Handle = u64;

    fn every(&mut self, millis: u32, timer: Timer) -> u64 {
        self.armed_recurring += 1;
        self.arm(millis, Some(u64::from(millis)), timer)
    }

    fn after(&mut self, millis: u32, timer: Timer) -> u64 {
        self.armed_once += 1;
        self.arm(millis, None, timer)
    }

    fn cancel(&mut self, handle: u64) {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != handle);
        if self.pending.len() < before {
            self.cancelled += 1;
        }
    }
}
