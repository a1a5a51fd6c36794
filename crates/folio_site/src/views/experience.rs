//! Experience section

use super::{staggered, timed, MountedView, ViewContext, REVEAL_THRESHOLD};
use crate::content::EXPERIENCE;
use crate::layout;
use folio_animation::Easing;
use folio_core::{ElementId, VisualState};
use folio_motion::{GroupSpec, TriggerCondition};

pub fn mount(cx: &ViewContext<'_>, top: f32) -> MountedView {
    let mut header = None;
    let mut cards: Vec<ElementId> = Vec::new();

    let (root, height) = {
        let mut doc = cx.document.borrow_mut();
        layout::section(&mut doc, None, top, Some("experience"), 0.0, |col| {
            header = Some(col.container("experience header", 0.0, |inner| {
                inner.block(56.0, "Experience");
                inner.text("Where I've applied robotics, perception and automation in practice.");
            }));

            let list = col.container("experience cards", 0.0, |inner| {
                for entry in &EXPERIENCE {
                    inner.container(entry.company, 28.0, |card| {
                        card.block(32.0, entry.role);
                        card.block(24.0, format!("{} · {}", entry.company, entry.location));
                        card.block(20.0, entry.date);
                        for bullet in entry.bullets {
                            card.text(bullet);
                        }
                    });
                }
            });
            cards = col.children(list);
        })
    };

    let scope = cx.coordinator.create_scope("experience", Some(root));

    scope.register(
        GroupSpec::from_refs(
            [header],
            VisualState::hidden().with_y(20.0),
            VisualState::VISIBLE,
            TriggerCondition::on_scroll(REVEAL_THRESHOLD),
        )
        .transition(timed(700.0, 0.0, Easing::POWER3_OUT)),
    );
    scope.register(
        GroupSpec::reveal(
            cards,
            VisualState::hidden().with_y(35.0),
            TriggerCondition::on_scroll(REVEAL_THRESHOLD),
        )
        .transition(staggered(750.0, 120.0, Easing::POWER3_OUT)),
    );

    MountedView::new("experience", root, height, scope)
}
