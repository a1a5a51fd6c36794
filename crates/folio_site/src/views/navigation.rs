//! Navigation bar
//!
//! Persistent chrome: mounted once and kept across page changes. Its section
//! links work from any page; off the home page they navigate home first and
//! scroll once the home page has had time to mount.

use super::{staggered, timed, MountedView, ViewContext};
use crate::content::{NAV_ITEMS, PROFILE};
use crate::layout;
use crate::router::Page;
use folio_animation::Easing;
use folio_core::{ElementId, Rect, Route, SharedDocument, VisualState};
use folio_motion::{GroupSpec, Transition, TriggerCondition};

/// Height of the bar
pub const NAV_HEIGHT: f32 = 72.0;

/// Menu entries after the section links
const EXTRA_ITEMS: [&str; 2] = ["All Projects", "Hire Me"];

pub struct Navigation {
    view: MountedView,
}

impl Navigation {
    pub fn mount(cx: &ViewContext<'_>) -> Self {
        let mut logo = None;
        let mut items: Vec<ElementId> = Vec::new();

        let (root, height) = {
            let mut doc = cx.document.borrow_mut();
            layout::section(&mut doc, None, 0.0, None, NAV_HEIGHT, |col| {
                logo = Some(col.overlay(Rect::new(0.0, 20.0, 240.0, 32.0), PROFILE.name));
                let labels = NAV_ITEMS.iter().map(|item| item.name).chain(EXTRA_ITEMS);
                let (_, cells) = col.grid("menu", NAV_ITEMS.len() + EXTRA_ITEMS.len(), 24.0, labels);
                items = cells;
            })
        };

        let scope = cx.coordinator.create_scope("navigation", Some(root));
        scope.register(
            GroupSpec::new(
                [root],
                VisualState::hidden().with_y(-18.0),
                VisualState::VISIBLE,
                TriggerCondition::OnMount,
            )
            .transition(timed(450.0, 0.0, Easing::POWER2_OUT)),
        );
        scope.register(
            GroupSpec::from_refs(
                [logo],
                VisualState::hidden().with_x(-14.0),
                VisualState::VISIBLE,
                TriggerCondition::OnMount,
            )
            .transition(timed(350.0, 50.0, Easing::POWER2_OUT)),
        );
        scope.register(
            GroupSpec::reveal(items, VisualState::hidden().with_y(-10.0), TriggerCondition::OnMount)
                .transition(Transition {
                    delay_ms: 80.0,
                    ..staggered(250.0, 50.0, Easing::POWER2_OUT)
                }),
        );

        Self {
            view: MountedView::new("navigation", root, height, scope),
        }
    }

    pub fn view(&self) -> &MountedView {
        &self.view
    }

    /// Bring a home page section into view from wherever the user is
    pub fn go_to_section(&self, anchor: &str) -> bool {
        tracing::debug!("Navigation: go to #{}", anchor);
        self.view.scope().go_to_section(Route::home(), anchor)
    }

    pub fn go_home(&self) -> bool {
        self.go_to_section("hero")
    }

    /// "Hire Me" scrolls to the contact section
    pub fn hire_me(&self) -> bool {
        self.go_to_section("contact")
    }

    /// Open the project catalog
    pub fn open_catalog(&self, navigator: &dyn folio_core::Navigator) {
        navigator.navigate_to(&Page::Catalog.route());
    }

    pub fn unmount(self, document: &SharedDocument) {
        self.view.unmount(document);
    }
}
