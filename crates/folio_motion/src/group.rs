//! Animatable groups and their triggers
//!
//! A group is an ordered run of elements from one view region that reveal
//! together: the same base and target state, one trigger, and a stagger that
//! offsets each element's start by its position in the group.

use folio_animation::Easing;
use folio_core::{ElementId, Route, VisualState};
use smallvec::SmallVec;

slotmap::new_key_type! {
    /// Handle to a registered group
    pub struct GroupId;
}

/// What starts a group's transition
#[derive(Clone, Debug, PartialEq)]
pub enum TriggerCondition {
    /// Start as soon as the group is registered
    OnMount,
    /// Start when the visible fraction of the group's bounds reaches `threshold`
    ///
    /// With `once` set (the default) the group fires at most once per scope
    /// lifetime; otherwise it fires again on every upward crossing.
    OnScrollIntersect { threshold: f32, once: bool },
    /// Start when the user arrives at `route`, navigating there first if needed
    OnRouteEnter(Route),
}

impl TriggerCondition {
    /// Fire once when `threshold` of the group is visible
    pub fn on_scroll(threshold: f32) -> Self {
        TriggerCondition::OnScrollIntersect {
            threshold: threshold.clamp(0.0, 1.0),
            once: true,
        }
    }

    /// Fire on every crossing of `threshold`
    pub fn on_every_scroll(threshold: f32) -> Self {
        TriggerCondition::OnScrollIntersect {
            threshold: threshold.clamp(0.0, 1.0),
            once: false,
        }
    }

    pub fn on_route(route: impl Into<Route>) -> Self {
        TriggerCondition::OnRouteEnter(route.into())
    }
}

/// Configuration for stagger animations
///
/// Elements start in registration order, `delay_ms` apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaggerConfig {
    /// Delay between each element's start (ms)
    pub delay_ms: f32,
    /// Optional: cap the stagger after the first N items
    pub limit: Option<usize>,
}

impl StaggerConfig {
    pub fn new(delay_ms: f32) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            limit: None,
        }
    }

    /// Limit stagger to first N items
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Calculate delay for a specific element index
    pub fn delay_for_index(&self, index: usize) -> f32 {
        let capped_index = match self.limit {
            Some(limit) => index.min(limit),
            None => index,
        };
        self.delay_ms * capped_index as f32
    }
}

/// Timing of a group's transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: f32,
    /// Delay before the first element starts
    pub delay_ms: f32,
    pub stagger: StaggerConfig,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            delay_ms: 0.0,
            stagger: StaggerConfig::new(0.0),
            easing: Easing::POWER3_OUT,
        }
    }

    /// Start offset for element `index`
    pub fn start_for(&self, index: usize) -> f32 {
        self.delay_ms + self.stagger.delay_for_index(index)
    }
}

/// Everything needed to register a group
#[derive(Clone, Debug)]
pub struct GroupSpec {
    /// Element refs in registration order; `None` marks a ref that has not resolved
    pub elements: SmallVec<[Option<ElementId>; 8]>,
    pub base: VisualState,
    pub target: VisualState,
    pub trigger: TriggerCondition,
    /// Timing; `None` takes the coordinator defaults
    pub transition: Option<Transition>,
}

impl GroupSpec {
    pub fn new(
        elements: impl IntoIterator<Item = ElementId>,
        base: VisualState,
        target: VisualState,
        trigger: TriggerCondition,
    ) -> Self {
        Self::from_refs(elements.into_iter().map(Some), base, target, trigger)
    }

    /// Build from refs that may still be unresolved
    pub fn from_refs(
        refs: impl IntoIterator<Item = Option<ElementId>>,
        base: VisualState,
        target: VisualState,
        trigger: TriggerCondition,
    ) -> Self {
        Self {
            elements: refs.into_iter().collect(),
            base,
            target,
            trigger,
            transition: None,
        }
    }

    /// Reveal from `base` to fully visible
    pub fn reveal(
        elements: impl IntoIterator<Item = ElementId>,
        base: VisualState,
        trigger: TriggerCondition,
    ) -> Self {
        Self::new(elements, base, VisualState::VISIBLE, trigger)
    }

    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }
}

/// Looping decorative motion around an element's resting state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientMotion {
    /// Offset reached at the far end of each swing
    pub dx: f32,
    pub dy: f32,
    /// Duration of one swing (ms)
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub easing: Easing,
}

impl AmbientMotion {
    /// Drift by `(dx, dy)` and back, forever
    pub fn drift(dx: f32, dy: f32, duration_ms: f32) -> Self {
        Self {
            dx,
            dy,
            duration_ms,
            delay_ms: 0.0,
            easing: Easing::POWER1_IN_OUT,
        }
    }

    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        let stagger = StaggerConfig::new(50.0);
        assert_eq!(stagger.delay_for_index(0), 0.0);
        assert_eq!(stagger.delay_for_index(3), 150.0);

        let limited = StaggerConfig::new(50.0).limit(2);
        assert_eq!(limited.delay_for_index(1), 50.0);
        assert_eq!(limited.delay_for_index(10), 100.0);

        assert_eq!(StaggerConfig::new(-20.0).delay_for_index(4), 0.0);
    }

    #[test]
    fn test_transition_start_offsets() {
        let transition = Transition {
            delay_ms: 200.0,
            stagger: StaggerConfig::new(80.0),
            ..Transition::new(550.0)
        };
        assert_eq!(transition.start_for(0), 200.0);
        assert_eq!(transition.start_for(2), 360.0);
    }

    #[test]
    fn test_trigger_threshold_clamped() {
        assert_eq!(
            TriggerCondition::on_scroll(1.5),
            TriggerCondition::OnScrollIntersect {
                threshold: 1.0,
                once: true
            }
        );
    }
}
