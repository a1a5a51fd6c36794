//! Project case study page (`/projects/<slug>`)

use super::{staggered, MountedView, ViewContext};
use crate::content::Project;
use crate::layout::{self, Column};
use crate::router::project_route;
use folio_animation::Easing;
use folio_core::{ElementId, VisualState};
use folio_motion::{GroupSpec, TriggerCondition};

pub fn mount(cx: &ViewContext<'_>, top: f32, slug: &str) -> MountedView {
    let Some(project) = cx.content.find(slug) else {
        tracing::debug!("detail: no project `{}`", slug);
        return not_found(cx, top);
    };

    let mut blocks: Vec<ElementId> = Vec::new();
    let (root, height) = {
        let mut doc = cx.document.borrow_mut();
        layout::section(&mut doc, None, top, None, 0.0, |col| {
            case_study(col, project);
            blocks = col.children(col.parent());
        })
    };

    let scope = cx.coordinator.create_scope("detail", Some(root));
    scope.register(
        GroupSpec::reveal(
            blocks,
            VisualState::hidden().with_y(24.0),
            TriggerCondition::on_route(project_route(slug)),
        )
        .transition(staggered(600.0, 70.0, Easing::POWER3_OUT)),
    );

    MountedView::new("detail", root, height, scope)
}

/// Shown for unknown slugs and unknown routes
pub fn not_found(cx: &ViewContext<'_>, top: f32) -> MountedView {
    let mut blocks: Vec<ElementId> = Vec::new();
    let (root, height) = {
        let mut doc = cx.document.borrow_mut();
        layout::section(&mut doc, None, top, None, 0.0, |col| {
            col.block(48.0, "Project not found");
            col.block(24.0, "Go back to All Projects");
            blocks = col.children(col.parent());
        })
    };

    let scope = cx.coordinator.create_scope("not-found", Some(root));
    scope.register(
        GroupSpec::reveal(blocks, VisualState::hidden().with_y(16.0), TriggerCondition::OnMount)
            .transition(staggered(500.0, 80.0, Easing::POWER2_OUT)),
    );

    MountedView::new("not-found", root, height, scope)
}

fn case_study(col: &mut Column<'_>, project: &Project) {
    col.block(24.0, "Back to All Projects");
    col.block(64.0, project.title.as_str());
    col.text(&project.long_description);
    col.block(256.0, project.image.as_str());
    col.text(&project.tech.join(" · "));

    let github = match &project.github_url {
        Some(url) => format!("GitHub: {url}"),
        None => "GitHub link coming soon".to_string(),
    };
    let live = match &project.live_url {
        Some(url) => format!("Live Demo: {url}"),
        None => "Live demo coming soon".to_string(),
    };
    col.grid("links", 2, 48.0, [github, live]);

    for (heading, items) in [
        ("Highlights", &project.highlights),
        ("Responsibilities", &project.responsibilities),
        ("Results", &project.results),
    ] {
        col.container(heading, 0.0, |list| {
            list.block(32.0, heading);
            for item in items {
                list.text(item);
            }
        });
    }

    col.block(24.0, "Back to Home");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::Stage;
    use std::time::Duration;

    #[test]
    fn test_case_study() {
        let slug = "ros2-cpp-lidar-perception-pipeline";
        let stage = Stage::new(&format!("/projects/{slug}"));
        let view = mount(&stage.cx(), 0.0, slug);
        assert_eq!(view.name(), "detail");

        let ids = stage.subtree(view.root());
        let doc = stage.document.borrow();
        let labels: Vec<_> = ids
            .into_iter()
            .filter_map(|id| doc.label(id).map(str::to_string))
            .collect();
        assert!(labels.iter().any(|l| l == "GitHub link coming soon"));
        assert!(labels.iter().any(|l| l == "Results"));
    }

    #[test]
    fn test_unknown_slug() {
        let stage = Stage::new("/projects/nope");
        let view = mount(&stage.cx(), 0.0, "nope");
        assert_eq!(view.name(), "not-found");
        assert!(stage.fully_visible(view.root()));
        assert_eq!(stage.navigator.navigation_count(), 0);

        stage.scheduler.advance(Duration::from_millis(1_000));
        assert!(stage.fully_visible(view.root()));
    }
}
