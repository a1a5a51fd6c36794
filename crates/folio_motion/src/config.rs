//! Coordinator defaults

use crate::group::{StaggerConfig, Transition};
use folio_animation::Easing;
use std::time::Duration;

/// Defaults applied to groups that do not carry their own timing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Wait between a cross-route navigation and in-page work on the destination
    pub settle_delay: Duration,
    pub duration_ms: f32,
    pub stagger_ms: f32,
    pub easing: Easing,
}

impl MotionConfig {
    /// Transition used when a group does not specify one
    pub fn default_transition(&self) -> Transition {
        Transition {
            duration_ms: self.duration_ms,
            delay_ms: 0.0,
            stagger: StaggerConfig::new(self.stagger_ms),
            easing: self.easing,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(250),
            duration_ms: 700.0,
            stagger_ms: 100.0,
            easing: Easing::POWER3_OUT,
        }
    }
}
