//! Hero section
//!
//! Title, subtitle and call-to-action reveal on mount as one overlapping
//! timeline; three background orbs drift for as long as the section is
//! mounted.

use super::{timed, MountedView, ViewContext};
use crate::content::PROFILE;
use crate::layout;
use folio_animation::Easing;
use folio_core::{Rect, VisualState};
use folio_motion::{AmbientMotion, GroupSpec, TriggerCondition};

/// `(x, y, size)` of each orb as fractions of the section, and its drift
const ORBS: [((f32, f32, f32), AmbientMotion); 3] = [
    (
        (0.25, 0.25, 128.0),
        AmbientMotion {
            dx: 10.0,
            dy: -18.0,
            duration_ms: 4000.0,
            delay_ms: 0.0,
            easing: Easing::POWER1_IN_OUT,
        },
    ),
    (
        (0.62, 0.33, 96.0),
        AmbientMotion {
            dx: -14.0,
            dy: -26.0,
            duration_ms: 5000.0,
            delay_ms: 800.0,
            easing: Easing::POWER1_IN_OUT,
        },
    ),
    (
        (0.33, 0.70, 160.0),
        AmbientMotion {
            dx: 18.0,
            dy: -22.0,
            duration_ms: 6000.0,
            delay_ms: 1600.0,
            easing: Easing::POWER1_IN_OUT,
        },
    ),
];

pub fn mount(cx: &ViewContext<'_>, top: f32) -> MountedView {
    let mut backdrop = None;
    let mut orbs = Vec::new();
    let mut title = None;
    let mut subtitle = None;
    let mut cta = None;

    let (root, height) = {
        let mut doc = cx.document.borrow_mut();
        let screen = doc.viewport().height;
        layout::section(&mut doc, None, top, Some("hero"), screen, |col| {
            let width = col.width();
            backdrop = Some(col.overlay(Rect::new(0.0, 0.0, width, screen), "backdrop"));
            for ((x, y, size), _) in &ORBS {
                orbs.push(col.overlay(Rect::new(width * x, screen * y, *size, *size), "orb"));
            }

            col.space(screen * 0.25);
            title = Some(col.block(
                120.0,
                format!("Hi, I'm {} / {}", PROFILE.name, PROFILE.headline),
            ));
            subtitle = Some(col.text(PROFILE.summary));
            cta = Some(col.block(56.0, "View Projects | Download CV | Hire Me"));
        })
    };

    let scope = cx.coordinator.create_scope("hero", Some(root));

    // One timeline starting at 200ms; each step overlaps the previous one
    scope.register(
        GroupSpec::from_refs(
            [title],
            VisualState::hidden().with_y(40.0).with_blur(10.0),
            VisualState::VISIBLE,
            TriggerCondition::OnMount,
        )
        .transition(timed(900.0, 200.0, Easing::POWER3_OUT)),
    );
    scope.register(
        GroupSpec::from_refs(
            [subtitle],
            VisualState::hidden().with_y(24.0),
            VisualState::VISIBLE,
            TriggerCondition::OnMount,
        )
        .transition(timed(700.0, 650.0, Easing::POWER3_OUT)),
    );
    scope.register(
        GroupSpec::from_refs(
            [cta],
            VisualState::hidden().with_y(20.0).with_scale(0.98),
            VisualState::VISIBLE,
            TriggerCondition::OnMount,
        )
        .transition(timed(650.0, 1000.0, Easing::POWER3_OUT)),
    );
    scope.register(
        GroupSpec::from_refs(
            [backdrop],
            VisualState::hidden(),
            VisualState::VISIBLE,
            TriggerCondition::OnMount,
        )
        .transition(timed(900.0, 850.0, Easing::POWER3_OUT)),
    );

    for (orb, (_, motion)) in orbs.into_iter().zip(ORBS) {
        scope.register_ambient(Some(orb), motion);
    }

    MountedView::new("hero", root, height, scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::Stage;
    use std::time::Duration;

    #[test]
    fn test_visible_at_mount_and_after_timeline() {
        let stage = Stage::new("/");
        let hero = mount(&stage.cx(), 0.0);

        assert!(stage.fully_visible(hero.root()));
        assert!(hero.height() >= 800.0);

        stage.scheduler.advance(Duration::from_millis(2_000));
        assert!(stage.fully_visible(hero.root()));
        // Orbs keep drifting
        assert!(stage.scheduler.has_active_animations());
    }

    #[test]
    fn test_unmount_stops_orbs() {
        let stage = Stage::new("/");
        let hero = mount(&stage.cx(), 0.0);
        stage.scheduler.advance(Duration::from_millis(3_000));

        hero.unmount(&stage.document);
        assert_eq!(stage.scheduler.tween_count(), 0);
        assert_eq!(stage.coordinator.active_scope_count(), 0);

        let before = stage.document.borrow().mutation_count();
        stage.scheduler.advance(Duration::from_millis(10_000));
        assert_eq!(stage.document.borrow().mutation_count(), before);
    }
}
