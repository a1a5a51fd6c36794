//! About section
//!
//! The skills grid only animates offset and scale. Its opacity is never
//! touched, so the grid reads correctly even when the trigger is missed.

use super::{staggered, timed, MountedView, ViewContext, REVEAL_THRESHOLD};
use crate::content::{ABOUT, HIGHLIGHTS, SKILLS};
use crate::layout;
use folio_animation::Easing;
use folio_core::{ElementId, VisualState};
use folio_motion::{GroupSpec, TriggerCondition};

pub fn mount(cx: &ViewContext<'_>, top: f32) -> MountedView {
    let mut image = None;
    let mut content: Vec<ElementId> = Vec::new();
    let mut skills: Vec<ElementId> = Vec::new();

    let (root, height) = {
        let mut doc = cx.document.borrow_mut();
        layout::section(&mut doc, None, top, Some("about"), 0.0, |col| {
            image = Some(col.block(320.0, "profile image"));

            let body = col.container("about content", 0.0, |inner| {
                inner.block(56.0, "About Me");
                for paragraph in ABOUT {
                    inner.text(paragraph);
                }
                inner.grid(
                    "highlights",
                    3,
                    40.0,
                    HIGHLIGHTS.iter().map(|(value, caption)| format!("{value} {caption}")),
                );
            });
            content = col.children(body);

            col.block(40.0, "Technical Skills");
            let (_, cells) = col.grid(
                "skills",
                3,
                72.0,
                SKILLS.iter().map(|s| format!("{} {}%", s.name, s.level)),
            );
            skills = cells;
        })
    };

    let scope = cx.coordinator.create_scope("about", Some(root));

    scope.register(
        GroupSpec::from_refs(
            [image],
            VisualState::hidden().with_x(-80.0).with_blur(8.0),
            VisualState::VISIBLE,
            TriggerCondition::on_scroll(0.2),
        )
        .transition(timed(900.0, 0.0, Easing::POWER3_OUT)),
    );
    scope.register(
        GroupSpec::reveal(
            content,
            VisualState::hidden().with_y(24.0),
            TriggerCondition::on_scroll(REVEAL_THRESHOLD),
        )
        .transition(staggered(700.0, 150.0, Easing::POWER3_OUT)),
    );
    scope.register(
        GroupSpec::reveal(
            skills,
            VisualState::VISIBLE.with_y(18.0).with_scale(0.98),
            TriggerCondition::on_scroll(REVEAL_THRESHOLD),
        )
        .transition(staggered(550.0, 80.0, Easing::POWER3_OUT)),
    );

    MountedView::new("about", root, height, scope)
}
