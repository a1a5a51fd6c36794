//! Featured projects section

use super::{staggered, MountedView, ViewContext, REVEAL_THRESHOLD};
use crate::layout;
use crate::router::project_route;
use folio_animation::Easing;
use folio_core::{ElementId, VisualState};
use folio_motion::{GroupSpec, TriggerCondition};

pub fn mount(cx: &ViewContext<'_>, top: f32) -> MountedView {
    let mut title: Vec<ElementId> = Vec::new();
    let mut cards: Vec<ElementId> = Vec::new();

    let (root, height) = {
        let mut doc = cx.document.borrow_mut();
        layout::section(&mut doc, None, top, Some("projects"), 0.0, |col| {
            let heading = col.container("projects title", 0.0, |inner| {
                inner.block(56.0, "Featured Projects");
                inner.block(4.0, "divider");
                inner.text(
                    "A selection of robotics, perception and automation work. \
                     Open any project for the full case study.",
                );
            });
            title = col.children(heading);

            let (_, cells) = col.grid(
                "featured",
                3,
                420.0,
                cx.content
                    .featured()
                    .map(|p| format!("{} -> {}", p.title, project_route(&p.slug))),
            );
            cards = cells;

            col.block(48.0, "View All Projects");
        })
    };

    let scope = cx.coordinator.create_scope("projects", Some(root));

    scope.register(
        GroupSpec::reveal(
            title,
            VisualState::hidden().with_y(30.0),
            TriggerCondition::on_scroll(REVEAL_THRESHOLD),
        )
        .transition(staggered(800.0, 120.0, Easing::POWER3_OUT)),
    );
    scope.register(
        GroupSpec::reveal(
            cards,
            VisualState::hidden().with_y(40.0),
            TriggerCondition::on_scroll(REVEAL_THRESHOLD),
        )
        .transition(staggered(700.0, 150.0, Easing::POWER3_OUT)),
    );

    MountedView::new("projects", root, height, scope)
}
