//! Project catalog page (`/projects`)

use super::{staggered, MountedView, ViewContext};
use crate::layout;
use crate::router::{project_route, Page};
use folio_animation::Easing;
use folio_core::{ElementId, VisualState};
use folio_motion::{GroupSpec, StaggerConfig, Transition, TriggerCondition};

/// Cards after this many start together
const STAGGER_LIMIT: usize = 6;

pub fn mount(cx: &ViewContext<'_>, top: f32) -> MountedView {
    let mut header = None;
    let mut cards: Vec<ElementId> = Vec::new();

    let (root, height) = {
        let mut doc = cx.document.borrow_mut();
        layout::section(&mut doc, None, top, None, 0.0, |col| {
            header = Some(col.container("catalog header", 0.0, |inner| {
                inner.block(64.0, "All Projects");
                inner.text(
                    "Explore my complete project portfolio. Click any project to view the \
                     detailed case study.",
                );
            }));

            let (_, cells) = col.grid(
                "catalog",
                2,
                360.0,
                cx.content.projects().iter().map(|p| {
                    format!(
                        "{} [{}] -> {}",
                        p.title,
                        p.card_tech().join(", "),
                        project_route(&p.slug)
                    )
                }),
            );
            cards = cells;

            col.block(48.0, "Back to Home");
        })
    };

    let scope = cx.coordinator.create_scope("catalog", Some(root));
    let route = Page::Catalog.route();

    scope.register(
        GroupSpec::from_refs(
            [header],
            VisualState::hidden().with_y(30.0),
            VisualState::VISIBLE,
            TriggerCondition::on_route(route.clone()),
        )
        .transition(staggered(700.0, 0.0, Easing::POWER3_OUT)),
    );
    scope.register(
        GroupSpec::reveal(
            cards,
            VisualState::hidden().with_y(40.0),
            TriggerCondition::on_route(route),
        )
        .transition(Transition {
            stagger: StaggerConfig::new(80.0).limit(STAGGER_LIMIT),
            delay_ms: 150.0,
            ..staggered(700.0, 0.0, Easing::POWER3_OUT)
        }),
    );

    MountedView::new("catalog", root, height, scope)
}
