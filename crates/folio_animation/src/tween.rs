//! Tweens
//!
//! A tween moves one element from a `from` state to a `to` state over a fixed
//! duration, after an optional delay. While the delay runs the tween writes
//! nothing, so whatever state the element already has stays on screen until
//! the first frame of the transition.

use crate::easing::Easing;
use crate::values::Interpolate;
use folio_core::{ElementId, VisualState};

/// How many times a tween plays
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    /// Play once, then retire
    #[default]
    Once,
    /// Loop until cancelled, reversing direction every cycle when `yoyo` is set
    Forever { yoyo: bool },
}

/// Where a tween is in its lifetime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenPhase {
    Delayed,
    Running,
    Finished,
}

/// A transition of one element between two visual states
#[derive(Clone, Debug)]
pub struct Tween {
    pub element: ElementId,
    pub from: VisualState,
    pub to: VisualState,
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub easing: Easing,
    pub repeat: Repeat,
    /// State the element is left in when the tween is settled early
    pub rest: VisualState,
    elapsed_ms: f32,
    completed: bool,
}

impl Tween {
    pub fn new(element: ElementId, from: VisualState, to: VisualState, duration_ms: f32) -> Self {
        Self {
            element,
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            delay_ms: 0.0,
            easing: Easing::default(),
            repeat: Repeat::Once,
            rest: to,
            elapsed_ms: 0.0,
            completed: false,
        }
    }

    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Loop forever, reversing each cycle; settles back to `from`
    pub fn yoyo_forever(mut self) -> Self {
        self.repeat = Repeat::Forever { yoyo: true };
        self.rest = self.from;
        self
    }

    pub fn rest(mut self, rest: VisualState) -> Self {
        self.rest = rest;
        self
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    pub fn phase(&self) -> TweenPhase {
        if self.elapsed_ms < self.delay_ms {
            return TweenPhase::Delayed;
        }
        match self.repeat {
            Repeat::Once if self.elapsed_ms - self.delay_ms >= self.duration_ms => {
                TweenPhase::Finished
            }
            _ => TweenPhase::Running,
        }
    }

    /// Whether the final frame has been written
    pub fn is_finished(&self) -> bool {
        self.completed
    }

    /// Linear progress through the current cycle (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        let local = self.elapsed_ms - self.delay_ms;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        match self.repeat {
            Repeat::Once => (local / self.duration_ms).min(1.0),
            Repeat::Forever { yoyo } => {
                let cycles = local / self.duration_ms;
                let fraction = cycles.fract();
                if yoyo && (cycles.floor() as u64) % 2 == 1 {
                    1.0 - fraction
                } else {
                    fraction
                }
            }
        }
    }

    /// The interpolated state at the current time
    pub fn value(&self) -> VisualState {
        self.from.lerp(&self.to, self.easing.apply(self.progress()))
    }

    /// Advance by `dt_ms`, returning the state to write, if any
    ///
    /// Nothing is returned while the tween is still inside its delay.
    pub fn step(&mut self, dt_ms: f32) -> Option<VisualState> {
        if self.completed {
            return None;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        match self.phase() {
            TweenPhase::Delayed => None,
            TweenPhase::Running => Some(self.value()),
            TweenPhase::Finished => {
                self.completed = true;
                Some(self.to)
            }
        }
    }
}
