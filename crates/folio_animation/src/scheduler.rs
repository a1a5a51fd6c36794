//! Animation scheduler
//!
//! Owns every live tween and timer and advances them against a single clock.
//! Tween values are written straight into the shared [`Document`].
//!
//! The scheduler is an explicit dependency: the host creates one per document
//! and hands [`SchedulerHandle`]s to whatever needs to animate. There is no
//! process-wide instance.
//!
//! # Clock
//!
//! - [`AnimationScheduler::advance`] moves the clock by an exact duration. The
//!   step is split at timer deadlines so that work scheduled by a timer starts
//!   at the right instant even when `dt` spans several frames.
//! - [`AnimationScheduler::tick`] measures wall-clock time since the previous
//!   tick, for hosts driven by a real frame loop.
//!
//! Timer callbacks run with no scheduler borrow held, so they may schedule or
//! cancel tweens and timers, including ones due in the same step.
//!
//! [`Document`]: folio_core::Document

use crate::tween::Tween;
use folio_core::{ElementId, SharedDocument, VisualState};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle to a registered tween
    pub struct TweenId;
    /// Handle to a pending timer
    pub struct TimerId;
}

/// One-shot timer callback
pub type TimerCallback = Box<dyn FnOnce()>;

/// Whole milliseconds convert exactly, so deadlines line up with `advance` steps
fn as_millis_f64(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}

struct Timer {
    due_ms: f64,
    seq: u64,
    callback: TimerCallback,
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    tweens: SlotMap<TweenId, Tween>,
    timers: SlotMap<TimerId, Timer>,
    document: SharedDocument,
    clock_ms: f64,
    last_frame: Instant,
    timer_seq: u64,
}

impl SchedulerInner {
    fn has_active(&self) -> bool {
        !self.tweens.is_empty() || !self.timers.is_empty()
    }

    fn next_deadline(&self) -> Option<f64> {
        self.timers
            .values()
            .map(|t| t.due_ms)
            .fold(None, |min, due| Some(min.map_or(due, |m: f64| m.min(due))))
    }

    /// Step every tween by `dt_ms` and write the results
    fn step_tweens(&mut self, dt_ms: f32) {
        let document = Rc::clone(&self.document);
        let mut doc = document.borrow_mut();
        let mut retired: SmallVec<[TweenId; 8]> = SmallVec::new();

        for (id, tween) in self.tweens.iter_mut() {
            if let Some(state) = tween.step(dt_ms) {
                if let Err(err) = doc.set_style(tween.element, state) {
                    tracing::debug!("AnimationScheduler: dropping tween {:?}: {}", id, err);
                    retired.push(id);
                    continue;
                }
            }
            if tween.is_finished() {
                retired.push(id);
            }
        }

        for id in retired {
            self.tweens.remove(id);
        }
    }

    /// Remove the earliest timer due at or before the current clock
    fn pop_due_timer(&mut self) -> Option<Timer> {
        let now = self.clock_ms;
        let id = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= now)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|(id, _)| id)?;
        self.timers.remove(id)
    }
}

/// The animation scheduler that advances all tweens and timers
///
/// Held by the host; components receive a [`SchedulerHandle`].
pub struct AnimationScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new(document: SharedDocument) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                tweens: SlotMap::with_key(),
                timers: SlotMap::with_key(),
                document,
                clock_ms: 0.0,
                last_frame: Instant::now(),
                timer_seq: 0,
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Advance the clock by `dt`
    ///
    /// Returns true if any tweens or timers are still live.
    pub fn advance(&self, dt: Duration) -> bool {
        let mut remaining = as_millis_f64(dt);

        loop {
            let step = {
                let inner = self.inner.borrow();
                match inner.next_deadline() {
                    Some(due) => (due - inner.clock_ms).clamp(0.0, remaining),
                    None => remaining,
                }
            };

            {
                let mut inner = self.inner.borrow_mut();
                inner.clock_ms += step;
                inner.step_tweens(step as f32);
            }
            remaining -= step;

            self.fire_due_timers();

            if remaining <= 0.0 {
                break;
            }
        }

        self.inner.borrow().has_active()
    }

    /// Advance by the wall-clock time since the previous tick
    pub fn tick(&self) -> bool {
        let dt = {
            let mut inner = self.inner.borrow_mut();
            let now = Instant::now();
            let dt = now - inner.last_frame;
            inner.last_frame = now;
            dt
        };
        self.advance(dt)
    }

    fn fire_due_timers(&self) {
        loop {
            let timer = self.inner.borrow_mut().pop_due_timer();
            match timer {
                Some(timer) => {
                    tracing::trace!("AnimationScheduler: firing timer due at {}ms", timer.due_ms);
                    (timer.callback)();
                }
                None => break,
            }
        }
    }

    /// Time elapsed on the scheduler clock
    pub fn now(&self) -> Duration {
        Duration::from_secs_f64(self.inner.borrow().clock_ms / 1000.0)
    }

    /// Check if any tweens or timers are live
    pub fn has_active_animations(&self) -> bool {
        self.inner.borrow().has_active()
    }

    /// Get the number of live tweens
    pub fn tween_count(&self) -> usize {
        self.inner.borrow().tweens.len()
    }

    /// Get the number of pending timers
    pub fn timer_count(&self) -> usize {
        self.inner.borrow().timers.len()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to components that need to animate. It won't keep the scheduler
/// alive; every operation on a dropped scheduler is a no-op.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// The document tween values are written to
    pub fn document(&self) -> Option<SharedDocument> {
        self.inner
            .upgrade()
            .map(|inner| Rc::clone(&inner.borrow().document))
    }

    // =========================================================================
    // Immediate Styles
    // =========================================================================

    /// Apply a visual state immediately
    ///
    /// Returns false if the scheduler is gone or the element is missing or
    /// detached.
    pub fn set(&self, element: ElementId, state: VisualState) -> bool {
        let Some(document) = self.document() else {
            return false;
        };
        let result = document.borrow_mut().set_style(element, state);
        match result {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!("SchedulerHandle: set skipped: {}", err);
                false
            }
        }
    }

    // =========================================================================
    // Tween Operations
    // =========================================================================

    /// Register a tween and return its ID
    pub fn add_tween(&self, tween: Tween) -> Option<TweenId> {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow_mut().tweens.insert(tween))
    }

    /// Check if a tween is still live
    pub fn is_tween_active(&self, id: TweenId) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|inner| inner.borrow().tweens.contains_key(id))
    }

    /// Current interpolated value of a live tween
    pub fn tween_value(&self, id: TweenId) -> Option<VisualState> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.borrow().tweens.get(id).map(|t| t.value()))
    }

    /// Remove a tween without touching its element
    pub fn cancel_tween(&self, id: TweenId) -> Option<Tween> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.borrow_mut().tweens.remove(id))
    }

    /// Remove a tween and leave its element in the tween's rest state
    ///
    /// Detached elements are left alone.
    pub fn settle_tween(&self, id: TweenId) -> bool {
        let Some(tween) = self.cancel_tween(id) else {
            return false;
        };
        self.set(tween.element, tween.rest)
    }

    // =========================================================================
    // Timer Operations
    // =========================================================================

    /// Schedule `callback` to run once `delay` has elapsed on the scheduler clock
    pub fn schedule<F>(&self, delay: Duration, callback: F) -> Option<TimerId>
    where
        F: FnOnce() + 'static,
    {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.borrow_mut();
            let due_ms = guard.clock_ms + as_millis_f64(delay);
            let seq = guard.timer_seq;
            guard.timer_seq += 1;
            guard.timers.insert(Timer {
                due_ms,
                seq,
                callback: Box::new(callback),
            })
        })
    }

    /// Cancel a pending timer; returns true if it had not fired yet
    pub fn cancel_timer(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|inner| inner.borrow_mut().timers.remove(id).is_some())
    }

    /// Check if a timer is still pending
    pub fn is_timer_pending(&self, id: TimerId) -> bool {
        self.inner
            .upgrade()
            .is_some_and(|inner| inner.borrow().timers.contains_key(id))
    }
}
