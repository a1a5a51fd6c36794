//! Footer
//!
//! Columns blur in once when the footer reaches the bottom of the screen.
//! Six particles float behind it, each on its own period.

use super::{staggered, MountedView, ViewContext};
use crate::content::{NAV_ITEMS, PROFILE};
use crate::layout;
use folio_animation::Easing;
use folio_core::{ElementId, Rect, VisualState};
use folio_motion::{AmbientMotion, GroupSpec, TriggerCondition};

/// Footer top only needs to peek above the fold
const FOOTER_THRESHOLD: f32 = 0.08;

/// Horizontal drift and period for each particle
const PARTICLES: [(f32, f32); 6] = [
    (-12.0, 3400.0),
    (8.0, 4600.0),
    (-18.0, 3900.0),
    (15.0, 3100.0),
    (-4.0, 4200.0),
    (19.0, 4800.0),
];

/// Stagger between particle start times
const PARTICLE_STAGGER_MS: f32 = 350.0;

pub fn mount(cx: &ViewContext<'_>, top: f32) -> MountedView {
    let mut columns: Vec<ElementId> = Vec::new();
    let mut particles: Vec<ElementId> = Vec::new();

    let (root, height) = {
        let mut doc = cx.document.borrow_mut();
        layout::section(&mut doc, None, top, None, 0.0, |col| {
            let width = col.width();
            for (index, _) in PARTICLES.iter().enumerate() {
                let x = width * (index as f32 + 0.5) / PARTICLES.len() as f32;
                let y = 40.0 + (index % 3) as f32 * 60.0;
                particles.push(col.overlay(Rect::new(x, y, 8.0, 8.0), "particle"));
            }

            let (_, cells) = col.grid(
                "footer columns",
                3,
                200.0,
                [
                    format!("{}: {}", PROFILE.name, PROFILE.github),
                    NAV_ITEMS
                        .iter()
                        .map(|item| item.name)
                        .chain(["All Projects"])
                        .collect::<Vec<_>>()
                        .join(" | "),
                    format!("{} / {}", PROFILE.email, PROFILE.location),
                ],
            );
            columns = cells;
            columns.push(col.block(
                32.0,
                format!("© 2026 {}. All rights reserved. | Back to Top", PROFILE.name),
            ));
        })
    };

    let scope = cx.coordinator.create_scope("footer", Some(root));
    scope.register(
        GroupSpec::reveal(
            columns,
            VisualState::hidden().with_y(30.0).with_blur(8.0),
            TriggerCondition::on_scroll(FOOTER_THRESHOLD),
        )
        .transition(staggered(700.0, 120.0, Easing::POWER3_OUT)),
    );

    for (index, (particle, (dx, period))) in particles.into_iter().zip(PARTICLES).enumerate() {
        scope.register_ambient(
            Some(particle),
            AmbientMotion::drift(dx, -22.0, period).delay(index as f32 * PARTICLE_STAGGER_MS),
        );
    }

    MountedView::new("footer", root, height, scope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::Stage;
    use std::time::Duration;

    #[test]
    fn test_particles_loop_until_unmount() {
        let stage = Stage::new("/");
        let footer = mount(&stage.cx(), 0.0);
        assert_eq!(stage.scheduler.tween_count(), 6 + 4);

        stage.scheduler.advance(Duration::from_millis(1_500));
        // Column tweens finished, particles still running
        assert_eq!(stage.scheduler.tween_count(), 6);

        footer.unmount(&stage.document);
        assert_eq!(stage.scheduler.tween_count(), 0);
    }
}
