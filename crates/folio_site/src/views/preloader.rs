//! Preloader
//!
//! Full-screen splash shown over the home page on first load. The logo
//! reveals, the progress bar fills, and once the timeline has run the
//! preloader reports itself complete. The site removes it on its next pump.

use super::{timed, MountedView, ViewContext};
use crate::content::PROFILE;
use crate::layout;
use folio_animation::Easing;
use folio_core::{SharedDocument, VisualState};
use folio_motion::{GroupSpec, TriggerCondition};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

const LOGO_MS: f32 = 700.0;
/// The bar starts slightly before the logo settles
const BAR_DELAY_MS: f32 = 600.0;
const BAR_MS: f32 = 2300.0;
const PULSE_MS: u64 = 250;
const HOLD_MS: u64 = 150;
const FADE_MS: u64 = 600;

/// Time from mount until the preloader reports completion
pub fn timeline() -> Duration {
    Duration::from_millis((BAR_DELAY_MS + BAR_MS) as u64 + PULSE_MS + HOLD_MS + FADE_MS)
}

pub struct Preloader {
    view: MountedView,
    complete: Rc<Cell<bool>>,
}

impl Preloader {
    /// Mount over the page; `complete` is shared with any fallback that may
    /// dismiss the preloader early
    pub fn mount(cx: &ViewContext<'_>, complete: Rc<Cell<bool>>) -> Self {
        let mut logo = None;
        let mut bar = None;

        let (root, height) = {
            let mut doc = cx.document.borrow_mut();
            let screen = doc.viewport().height;
            layout::section(&mut doc, None, 0.0, None, screen, |col| {
                col.space(screen * 0.35);
                logo = Some(col.block(96.0, PROFILE.name));
                bar = Some(col.block(4.0, "progress"));
                col.block(24.0, "0%");
            })
        };

        let scope = cx.coordinator.create_scope("preloader", Some(root));
        scope.register(
            GroupSpec::from_refs(
                [logo],
                VisualState::hidden().with_y(10.0).with_scale(0.9),
                VisualState::VISIBLE,
                TriggerCondition::OnMount,
            )
            .transition(timed(LOGO_MS, 0.0, Easing::POWER3_OUT)),
        );
        scope.register(
            GroupSpec::from_refs(
                [bar],
                VisualState::VISIBLE.with_scale(0.0),
                VisualState::VISIBLE,
                TriggerCondition::OnMount,
            )
            .transition(timed(BAR_MS, BAR_DELAY_MS, Easing::POWER2_OUT)),
        );

        let flag = Rc::clone(&complete);
        scope.after(timeline(), move || {
            tracing::debug!("Preloader: complete");
            flag.set(true);
        });

        Self {
            view: MountedView::new("preloader", root, height, scope),
            complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete.get()
    }

    pub fn view(&self) -> &MountedView {
        &self.view
    }

    pub fn unmount(self, document: &SharedDocument) {
        self.view.unmount(document);
    }
}
