//! Folio Animation Engine
//!
//! Tweens, easing curves and cancellable timers driven by an explicit clock.
//!
//! # Features
//!
//! - **Tweens**: one-shot transitions between two visual states with delay and easing
//! - **Looping**: infinite repeats with optional yoyo for ambient motion
//! - **Timers**: one-shot callbacks owned by the scheduler, cancellable by id
//! - **Deterministic Clock**: `advance(dt)` for simulation and tests, `tick()` for wall-clock hosts
//! - **Weak Handles**: components hold a `SchedulerHandle` that never keeps the engine alive

pub mod easing;
pub mod scheduler;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use scheduler::{AnimationScheduler, SchedulerHandle, TimerCallback, TimerId, TweenId};
pub use tween::{Repeat, Tween, TweenPhase};
pub use values::Interpolate;
