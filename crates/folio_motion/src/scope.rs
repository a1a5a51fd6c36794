//! View lifecycle scopes
//!
//! A scope is the handle a view holds while it is mounted. Everything
//! registered through it is owned by it, and dropping it (or calling
//! [`ViewLifecycleScope::teardown`]) cancels all of that work.

use crate::coordinator::{CoordinatorInner, ScopeId};
use crate::error::{MotionError, Result};
use crate::group::{AmbientMotion, GroupId, GroupSpec, TriggerCondition};
use folio_animation::{TimerId, TweenId};
use folio_core::{ElementId, Route, VisualState};
use std::cell::Cell;
use std::rc::Weak;
use std::time::Duration;

/// Owning handle for one mounted view's animations
///
/// Registration methods return `None` instead of failing: a view whose refs
/// have not resolved, or whose scope is inert, simply renders without motion.
pub struct ViewLifecycleScope {
    id: Cell<Option<ScopeId>>,
    view: String,
    coordinator: Weak<CoordinatorInner>,
}

impl ViewLifecycleScope {
    pub(crate) fn new(id: ScopeId, view: &str, coordinator: Weak<CoordinatorInner>) -> Self {
        Self {
            id: Cell::new(Some(id)),
            view: view.to_string(),
            coordinator,
        }
    }

    /// A scope that accepts registrations and does nothing with them
    pub(crate) fn inert(view: &str) -> Self {
        Self {
            id: Cell::new(None),
            view: view.to_string(),
            coordinator: Weak::new(),
        }
    }

    pub fn id(&self) -> Option<ScopeId> {
        self.id.get()
    }

    pub fn view(&self) -> &str {
        &self.view
    }

    /// Whether the scope still owns live work
    ///
    /// False for inert scopes, after teardown, and after another scope was
    /// created for the same root.
    pub fn is_active(&self) -> bool {
        match (self.id.get(), self.coordinator.upgrade()) {
            (Some(id), Some(inner)) => inner.is_active(id),
            _ => false,
        }
    }

    /// Register a group with default timing
    pub fn register_group(
        &self,
        elements: impl IntoIterator<Item = ElementId>,
        base: VisualState,
        target: VisualState,
        trigger: TriggerCondition,
    ) -> Option<GroupId> {
        self.register(GroupSpec::new(elements, base, target, trigger))
    }

    /// Register a group; skipped registrations are logged and yield `None`
    pub fn register(&self, spec: GroupSpec) -> Option<GroupId> {
        match self.try_register(spec) {
            Ok(group) => Some(group),
            Err(err) => {
                tracing::debug!("ViewLifecycleScope: skipped group: {}", err);
                None
            }
        }
    }

    pub fn try_register(&self, spec: GroupSpec) -> Result<GroupId> {
        let (id, inner) = self.live()?;
        inner.register(id, spec)
    }

    /// Start looping motion on `element`; stops and returns to rest on teardown
    pub fn register_ambient(
        &self,
        element: Option<ElementId>,
        motion: AmbientMotion,
    ) -> Option<TweenId> {
        let result = self
            .live()
            .and_then(|(id, inner)| inner.register_ambient(id, element, motion));
        match result {
            Ok(tween) => Some(tween),
            Err(err) => {
                tracing::debug!("ViewLifecycleScope: skipped ambient motion: {}", err);
                None
            }
        }
    }

    /// Run `callback` after `delay` unless the scope is torn down first
    pub fn after<F>(&self, delay: Duration, callback: F) -> Option<TimerId>
    where
        F: FnOnce() + 'static,
    {
        self.live()
            .and_then(|(id, inner)| inner.after(id, delay, Box::new(callback)))
            .ok()
    }

    /// Bring the section tagged `anchor` on `route` into view
    ///
    /// Off-route this navigates first and scrolls once the destination has
    /// had time to mount.
    pub fn go_to_section(&self, route: impl Into<Route>, anchor: &str) -> bool {
        self.live()
            .and_then(|(id, inner)| inner.go_to_section(id, route.into(), anchor))
            .is_ok()
    }

    /// Cancel everything this scope owns; safe to call more than once
    pub fn teardown(&self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(inner) = self.coordinator.upgrade() {
            inner.teardown(id);
        }
    }

    fn live(&self) -> Result<(ScopeId, std::rc::Rc<CoordinatorInner>)> {
        let id = self.id.get().ok_or(MotionError::InactiveScope)?;
        let inner = self.coordinator.upgrade().ok_or(MotionError::InactiveScope)?;
        if !inner.is_active(id) {
            return Err(MotionError::InactiveScope);
        }
        Ok((id, inner))
    }
}

impl Drop for ViewLifecycleScope {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for ViewLifecycleScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewLifecycleScope")
            .field("id", &self.id.get())
            .field("view", &self.view)
            .field("active", &self.is_active())
            .finish()
    }
}
