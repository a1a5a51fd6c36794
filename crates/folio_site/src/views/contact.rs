//! Contact section

use super::{staggered, MountedView, ViewContext, REVEAL_THRESHOLD};
use crate::content::PROFILE;
use crate::layout;
use folio_animation::Easing;
use folio_core::{ElementId, VisualState};
use folio_motion::{GroupSpec, TriggerCondition};

pub fn mount(cx: &ViewContext<'_>, top: f32) -> MountedView {
    let mut content: Vec<ElementId> = Vec::new();

    let (root, height) = {
        let mut doc = cx.document.borrow_mut();
        layout::section(&mut doc, None, top, Some("contact"), 0.0, |col| {
            let body = col.container("contact content", 0.0, |inner| {
                inner.block(56.0, "Let's Connect");
                inner.block(4.0, "divider");
                inner.text(
                    "I'm actively seeking robotics, autonomy, and perception roles where I can \
                     build reliable systems and solve real engineering problems. Feel free to reach out.",
                );
                inner.container("contact info", 0.0, |info| {
                    info.block(24.0, PROFILE.email);
                    info.block(24.0, PROFILE.location);
                });
                inner.grid("social", 2, 48.0, [PROFILE.github, PROFILE.linkedin]);
                inner.block(48.0, "Send a message");
            });
            content = col.children(body);
        })
    };

    let scope = cx.coordinator.create_scope("contact", Some(root));
    scope.register(
        GroupSpec::reveal(
            content,
            VisualState::hidden().with_y(24.0),
            TriggerCondition::on_scroll(REVEAL_THRESHOLD),
        )
        .transition(staggered(600.0, 100.0, Easing::POWER2_OUT)),
    );

    MountedView::new("contact", root, height, scope)
}
