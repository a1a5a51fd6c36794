//! Animated views
//!
//! A view builds its elements into the document, opens a lifecycle scope on
//! its root and registers its groups. Unmounting tears the scope down before
//! the elements are detached, so nothing the view started outlives it.
//!
//! Elements are always laid out with the document borrow released before any
//! registration, since registering writes styles through the engine.

pub mod about;
pub mod catalog;
pub mod contact;
pub mod detail;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod preloader;
pub mod projects;

use crate::content::ContentStore;
use folio_animation::Easing;
use folio_core::{ElementId, SharedDocument};
use folio_motion::{Coordinator, StaggerConfig, Transition, ViewLifecycleScope};

/// What a view needs to mount
pub struct ViewContext<'a> {
    pub document: &'a SharedDocument,
    pub coordinator: &'a Coordinator,
    pub content: &'a ContentStore,
}

/// A mounted view and the scope that owns its animations
pub struct MountedView {
    name: &'static str,
    root: ElementId,
    height: f32,
    scope: ViewLifecycleScope,
}

impl MountedView {
    pub(crate) fn new(
        name: &'static str,
        root: ElementId,
        height: f32,
        scope: ViewLifecycleScope,
    ) -> Self {
        Self {
            name,
            root,
            height,
            scope,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    /// Laid-out height of the root
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn scope(&self) -> &ViewLifecycleScope {
        &self.scope
    }

    /// Tear the scope down, then detach the view's elements
    pub fn unmount(self, document: &SharedDocument) {
        tracing::debug!("MountedView: unmounting `{}`", self.name);
        self.scope.teardown();
        document.borrow_mut().remove(self.root);
    }
}

impl std::fmt::Debug for MountedView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedView")
            .field("name", &self.name)
            .field("root", &self.root)
            .field("height", &self.height)
            .field("active", &self.scope.is_active())
            .finish()
    }
}

/// Scroll reveal threshold for section content
pub(crate) const REVEAL_THRESHOLD: f32 = 0.15;

/// Single-shot timing
pub(crate) fn timed(duration_ms: f32, delay_ms: f32, easing: Easing) -> Transition {
    Transition {
        delay_ms,
        easing,
        ..Transition::new(duration_ms)
    }
}

/// Staggered timing
pub(crate) fn staggered(duration_ms: f32, stagger_ms: f32, easing: Easing) -> Transition {
    Transition {
        stagger: StaggerConfig::new(stagger_ms),
        easing,
        ..Transition::new(duration_ms)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use folio_animation::AnimationScheduler;
    use folio_core::{Document, MemoryNavigator, Route, VisualState};
    use folio_motion::MotionConfig;
    use std::rc::Rc;

    pub struct Stage {
        pub document: SharedDocument,
        pub scheduler: AnimationScheduler,
        pub navigator: Rc<MemoryNavigator>,
        pub coordinator: Coordinator,
        pub content: ContentStore,
    }

    impl Stage {
        pub fn new(route: &str) -> Self {
            let document = Document::new(1280.0, 800.0).shared();
            let scheduler = AnimationScheduler::new(Rc::clone(&document));
            let navigator = Rc::new(MemoryNavigator::new(Route::new(route)));
            let coordinator = Coordinator::new(
                scheduler.handle(),
                navigator.clone(),
                MotionConfig::default(),
            );
            Self {
                document,
                scheduler,
                navigator,
                coordinator,
                content: ContentStore::load().unwrap(),
            }
        }

        pub fn cx(&self) -> ViewContext<'_> {
            ViewContext {
                document: &self.document,
                coordinator: &self.coordinator,
                content: &self.content,
            }
        }

        /// Every attached descendant of `root`, including itself
        pub fn subtree(&self, root: ElementId) -> Vec<ElementId> {
            let doc = self.document.borrow();
            let mut out = Vec::new();
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                if doc.is_attached(id) {
                    out.push(id);
                    stack.extend(doc.children(id));
                }
            }
            out
        }

        /// Whether every element under `root` has full opacity
        pub fn fully_visible(&self, root: ElementId) -> bool {
            let doc = self.document.borrow();
            self.subtree(root)
                .into_iter()
                .all(|id| doc.style(id).is_some_and(|s| s.opacity >= 1.0))
        }

        pub fn style(&self, id: ElementId) -> VisualState {
            self.document.borrow().style(id).unwrap()
        }
    }
}
