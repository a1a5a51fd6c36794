//! Animation lifecycle coordinator
//!
//! Ties animations to the lifetime of the view that owns them. Every tween,
//! timer and observer created on behalf of a view is recorded against that
//! view's scope, and tearing the scope down removes all of them from the
//! engine before returning. Because the engine only ever runs what is still in
//! its arenas, a trigger can never fire against a torn-down scope.
//!
//! # Visibility
//!
//! Registering a group writes its target state to every element before any
//! trigger is armed. Transitions are layered on top of that state and only
//! render their base state once they actually start, so an element whose
//! trigger never fires is simply shown without its animation.
//!
//! # Borrow order
//!
//! registry → scheduler → document. The scheduler never calls back into the
//! coordinator while borrowed, and the navigator is only called with the
//! registry released.

use crate::config::MotionConfig;
use crate::error::{MotionError, Result};
use crate::group::{AmbientMotion, GroupId, GroupSpec, Transition, TriggerCondition};
use crate::observer::{group_bounds, Observer, ObserverId};
use crate::scope::ViewLifecycleScope;
use folio_animation::{SchedulerHandle, TimerId, Tween, TweenId};
use folio_core::{ElementId, Navigator, Route, VisualState};
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

new_key_type! {
    /// Handle to a view lifecycle scope
    pub struct ScopeId;
}

struct ScopeState {
    view: String,
    root: ElementId,
    groups: SmallVec<[GroupId; 8]>,
    ambient: SmallVec<[TweenId; 8]>,
    timers: SmallVec<[TimerId; 4]>,
    observers: SmallVec<[ObserverId; 4]>,
}

struct GroupState {
    scope: ScopeId,
    elements: SmallVec<[ElementId; 8]>,
    base: VisualState,
    target: VisualState,
    transition: Transition,
    tweens: SmallVec<[TweenId; 8]>,
    fired: usize,
}

#[derive(Default)]
struct Registry {
    scopes: SlotMap<ScopeId, ScopeState>,
    groups: SlotMap<GroupId, GroupState>,
    observers: SlotMap<ObserverId, Observer>,
    roots: FxHashMap<ElementId, ScopeId>,
    /// Scope that animates each registered element
    owners: FxHashMap<ElementId, ScopeId>,
}

impl Registry {
    /// Record `scope` as the animator of `elements`
    ///
    /// Fails without claiming anything if a live scope other than `scope`
    /// already animates one of them.
    fn claim(&mut self, scope: ScopeId, view: &str, elements: &[ElementId]) -> Result<()> {
        let taken = elements.iter().find(|element| {
            self.owners
                .get(*element)
                .is_some_and(|owner| *owner != scope && self.scopes.contains_key(*owner))
        });
        if let Some(element) = taken {
            return Err(MotionError::ForeignElement {
                view: view.to_string(),
                element: *element,
            });
        }
        for element in elements {
            self.owners.insert(*element, scope);
        }
        Ok(())
    }
}

/// What to do once the user is on a route
enum RouteAction {
    StartGroup(GroupId),
    ScrollToAnchor(String),
}

pub(crate) struct CoordinatorInner {
    engine: SchedulerHandle,
    navigator: Rc<dyn Navigator>,
    config: MotionConfig,
    registry: RefCell<Registry>,
}

impl CoordinatorInner {
    // =========================================================================
    // Scope Lifecycle
    // =========================================================================

    fn create_scope(self: &Rc<Self>, view: &str, root: Option<ElementId>) -> ViewLifecycleScope {
        let Some(root) = root else {
            tracing::debug!("Coordinator: `{}` has no root yet, scope is inert", view);
            return ViewLifecycleScope::inert(view);
        };
        let attached = self
            .engine
            .document()
            .is_some_and(|doc| doc.borrow().is_attached(root));
        if !attached {
            tracing::debug!("Coordinator: `{}` root {:?} is not attached, scope is inert", view, root);
            return ViewLifecycleScope::inert(view);
        }

        let previous = self.registry.borrow().roots.get(&root).copied();
        if let Some(previous) = previous {
            tracing::debug!("Coordinator: `{}` remounted, tearing down previous scope", view);
            self.teardown(previous);
        }

        let id = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.scopes.insert(ScopeState {
                view: view.to_string(),
                root,
                groups: SmallVec::new(),
                ambient: SmallVec::new(),
                timers: SmallVec::new(),
                observers: SmallVec::new(),
            });
            reg.roots.insert(root, id);
            id
        };
        tracing::debug!("Coordinator: created scope {:?} for `{}`", id, view);
        ViewLifecycleScope::new(id, view, Rc::downgrade(self))
    }

    /// Cancel everything the scope owns; returns false if it was already gone
    pub(crate) fn teardown(&self, id: ScopeId) -> bool {
        let (tweens, timers) = {
            let mut reg = self.registry.borrow_mut();
            let reg = &mut *reg;
            let Some(scope) = reg.scopes.remove(id) else {
                return false;
            };
            if reg.roots.get(&scope.root) == Some(&id) {
                reg.roots.remove(&scope.root);
            }
            reg.owners.retain(|_, owner| *owner != id);
            for observer in &scope.observers {
                reg.observers.remove(*observer);
            }

            let mut tweens: Vec<TweenId> = scope.ambient.to_vec();
            for group in &scope.groups {
                if let Some(group) = reg.groups.remove(*group) {
                    tweens.extend(group.tweens);
                }
            }
            tracing::debug!(
                "Coordinator: tearing down scope {:?} (`{}`): {} groups, {} observers",
                id,
                scope.view,
                scope.groups.len(),
                scope.observers.len()
            );
            (tweens, scope.timers)
        };

        for timer in timers {
            self.engine.cancel_timer(timer);
        }
        for tween in tweens {
            self.engine.settle_tween(tween);
        }
        true
    }

    pub(crate) fn is_active(&self, id: ScopeId) -> bool {
        self.registry.borrow().scopes.contains_key(id)
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// View name and root of a live scope
    fn scope_info(&self, scope: ScopeId) -> Result<(String, ElementId)> {
        self.registry
            .borrow()
            .scopes
            .get(scope)
            .map(|s| (s.view.clone(), s.root))
            .ok_or(MotionError::InactiveScope)
    }

    pub(crate) fn register(self: &Rc<Self>, scope: ScopeId, spec: GroupSpec) -> Result<GroupId> {
        let (view, root) = self.scope_info(scope)?;
        let document = self.engine.document().ok_or(MotionError::EngineGone)?;

        let elements: SmallVec<[ElementId; 8]> = {
            let doc = document.borrow();
            let mut resolved = SmallVec::new();
            for (index, element) in spec.elements.iter().enumerate() {
                let element = element
                    .filter(|e| doc.contains(*e))
                    .ok_or_else(|| MotionError::MissingElement {
                        view: view.clone(),
                        index,
                    })?;
                if !doc.is_attached(element) {
                    return Err(MotionError::DetachedElement {
                        view: view.clone(),
                        element,
                    });
                }
                if !doc.is_within(element, root) {
                    return Err(MotionError::ForeignElement {
                        view: view.clone(),
                        element,
                    });
                }
                resolved.push(element);
            }
            resolved
        };
        self.registry
            .borrow_mut()
            .claim(scope, &view, &elements)?;

        // Visible before any trigger is armed
        for element in &elements {
            self.engine.set(*element, spec.target);
        }

        let transition = spec
            .transition
            .unwrap_or_else(|| self.config.default_transition());
        let group = {
            let mut reg = self.registry.borrow_mut();
            let group = reg.groups.insert(GroupState {
                scope,
                elements,
                base: spec.base,
                target: spec.target,
                transition,
                tweens: SmallVec::new(),
                fired: 0,
            });
            if let Some(state) = reg.scopes.get_mut(scope) {
                state.groups.push(group);
            }
            group
        };

        match spec.trigger {
            TriggerCondition::OnMount => self.start_group(group),
            TriggerCondition::OnScrollIntersect { threshold, once } => {
                {
                    let mut reg = self.registry.borrow_mut();
                    let observer = reg
                        .observers
                        .insert(Observer::new(scope, group, threshold, once));
                    if let Some(state) = reg.scopes.get_mut(scope) {
                        state.observers.push(observer);
                    }
                }
                // Already on screen at mount
                self.evaluate_observers();
            }
            TriggerCondition::OnRouteEnter(route) => {
                self.enter_route(scope, route, RouteAction::StartGroup(group));
            }
        }

        Ok(group)
    }

    pub(crate) fn register_ambient(
        &self,
        scope: ScopeId,
        element: Option<ElementId>,
        motion: AmbientMotion,
    ) -> Result<TweenId> {
        let (view, root) = self.scope_info(scope)?;
        let document = self.engine.document().ok_or(MotionError::EngineGone)?;

        let element = element.ok_or_else(|| MotionError::MissingElement {
            view: view.clone(),
            index: 0,
        })?;
        let rest = {
            let doc = document.borrow();
            if !doc.is_attached(element) {
                return Err(MotionError::DetachedElement { view, element });
            }
            if !doc.is_within(element, root) {
                return Err(MotionError::ForeignElement { view, element });
            }
            doc.style(element).unwrap_or(VisualState::VISIBLE)
        };
        self.registry.borrow_mut().claim(scope, &view, &[element])?;

        let swing = rest.with_offset(rest.x + motion.dx, rest.y + motion.dy);
        let tween = Tween::new(element, rest, swing, motion.duration_ms)
            .delay(motion.delay_ms)
            .easing(motion.easing)
            .yoyo_forever();
        let id = self
            .engine
            .add_tween(tween)
            .ok_or(MotionError::EngineGone)?;

        if let Some(state) = self.registry.borrow_mut().scopes.get_mut(scope) {
            state.ambient.push(id);
        }
        Ok(id)
    }

    pub(crate) fn after(
        &self,
        scope: ScopeId,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<TimerId> {
        if !self.is_active(scope) {
            return Err(MotionError::InactiveScope);
        }
        let timer = self
            .engine
            .schedule(delay, callback)
            .ok_or(MotionError::EngineGone)?;
        self.own_timer(scope, timer);
        Ok(timer)
    }

    pub(crate) fn go_to_section(
        self: &Rc<Self>,
        scope: ScopeId,
        route: Route,
        anchor: &str,
    ) -> Result<()> {
        if !self.is_active(scope) {
            return Err(MotionError::InactiveScope);
        }
        self.enter_route(scope, route, RouteAction::ScrollToAnchor(anchor.to_string()));
        Ok(())
    }

    fn own_timer(&self, scope: ScopeId, timer: TimerId) {
        let mut reg = self.registry.borrow_mut();
        if let Some(state) = reg.scopes.get_mut(scope) {
            state.timers.retain(|t| self.engine.is_timer_pending(*t));
            state.timers.push(timer);
        }
    }

    // =========================================================================
    // Triggers
    // =========================================================================

    /// Run `action` on `route`, navigating and waiting out the settle delay first if needed
    fn enter_route(self: &Rc<Self>, scope: ScopeId, route: Route, action: RouteAction) {
        if self.navigator.current_route() == route {
            self.run_route_action(action);
            self.evaluate_observers();
            return;
        }

        tracing::debug!(
            "Coordinator: navigating to {} and settling for {:?}",
            route,
            self.config.settle_delay
        );
        self.navigator.navigate_to(&route);

        let weak: Weak<CoordinatorInner> = Rc::downgrade(self);
        let timer = self.engine.schedule(self.config.settle_delay, move || {
            if let Some(inner) = weak.upgrade() {
                inner.run_route_action(action);
                inner.evaluate_observers();
            }
        });
        if let Some(timer) = timer {
            self.own_timer(scope, timer);
        }
    }

    fn run_route_action(&self, action: RouteAction) {
        match action {
            RouteAction::StartGroup(group) => self.start_group(group),
            RouteAction::ScrollToAnchor(anchor) => self.scroll_to_anchor(&anchor),
        }
    }

    /// Start (or restart) a group's staggered transition
    fn start_group(&self, group: GroupId) {
        let mut reg = self.registry.borrow_mut();
        let Some(state) = reg.groups.get_mut(group) else {
            return;
        };

        for stale in state.tweens.drain(..) {
            self.engine.cancel_tween(stale);
        }

        for (index, element) in state.elements.iter().enumerate() {
            let tween = Tween::new(
                *element,
                state.base,
                state.target,
                state.transition.duration_ms,
            )
            .delay(state.transition.start_for(index))
            .easing(state.transition.easing);
            if let Some(id) = self.engine.add_tween(tween) {
                state.tweens.push(id);
            }
        }
        state.fired += 1;
        tracing::trace!(
            "Coordinator: group {:?} started ({} elements, fire #{})",
            group,
            state.elements.len(),
            state.fired
        );
    }

    /// Check every observer against the current viewport
    pub(crate) fn evaluate_observers(&self) {
        let Some(document) = self.engine.document() else {
            return;
        };

        let fired: SmallVec<[GroupId; 8]> = {
            let doc = document.borrow();
            let viewport = doc.viewport();
            let mut reg = self.registry.borrow_mut();
            let reg = &mut *reg;

            let mut fired = SmallVec::new();
            let mut spent: SmallVec<[(ObserverId, ScopeId); 8]> = SmallVec::new();
            for (id, observer) in reg.observers.iter_mut() {
                let Some(group) = reg.groups.get(observer.group) else {
                    continue;
                };
                let Some(bounds) = group_bounds(&doc, &group.elements) else {
                    continue;
                };
                if observer.update(viewport.visible_fraction(&bounds)) {
                    fired.push(observer.group);
                    if observer.once {
                        spent.push((id, observer.scope));
                    }
                }
            }

            for (id, scope) in spent {
                reg.observers.remove(id);
                if let Some(state) = reg.scopes.get_mut(scope) {
                    state.observers.retain(|o| *o != id);
                }
            }
            fired
        };

        for group in fired {
            self.start_group(group);
        }
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    fn scroll_to(&self, y: f32) {
        if let Some(document) = self.engine.document() {
            document.borrow_mut().set_scroll(y);
        }
        self.evaluate_observers();
    }

    fn scroll_to_anchor(&self, anchor: &str) {
        let top = self.engine.document().and_then(|document| {
            let doc = document.borrow();
            doc.find_anchor(anchor).and_then(|id| doc.bounds(id))
        });
        match top {
            Some(bounds) => self.scroll_to(bounds.y()),
            None => tracing::debug!("Coordinator: no section `{}` to scroll to", anchor),
        }
    }
}

impl Drop for CoordinatorInner {
    fn drop(&mut self) {
        let scopes: Vec<ScopeId> = self.registry.get_mut().scopes.keys().collect();
        for scope in scopes {
            self.teardown(scope);
        }
    }
}

/// Coordinates view-scoped animation lifecycles
///
/// Cheap to clone; clones share the same registry.
///
/// ```ignore
/// let coordinator = Coordinator::new(scheduler.handle(), navigator, MotionConfig::default());
///
/// let scope = coordinator.create_scope("hero", Some(hero_root));
/// scope.register_group(
///     [title, subtitle, cta],
///     VisualState::hidden().with_y(40.0),
///     VisualState::VISIBLE,
///     TriggerCondition::OnMount,
/// );
///
/// // Dropping the scope cancels everything it started
/// drop(scope);
/// ```
#[derive(Clone)]
pub struct Coordinator {
    inner: Rc<CoordinatorInner>,
}

impl Coordinator {
    pub fn new(engine: SchedulerHandle, navigator: Rc<dyn Navigator>, config: MotionConfig) -> Self {
        Self {
            inner: Rc::new(CoordinatorInner {
                engine,
                navigator,
                config,
                registry: RefCell::new(Registry::default()),
            }),
        }
    }

    /// Open a scope for the view mounted at `root`
    ///
    /// Never fails: an absent or detached root yields an inert scope. An
    /// existing scope on the same root is torn down first.
    pub fn create_scope(&self, view: &str, root: Option<ElementId>) -> ViewLifecycleScope {
        self.inner.create_scope(view, root)
    }

    /// Tear a scope down; same as [`ViewLifecycleScope::teardown`]
    pub fn teardown_scope(&self, scope: &ViewLifecycleScope) {
        scope.teardown();
    }

    /// Scroll the viewport so its top sits at `y`, then evaluate scroll triggers
    pub fn scroll_to(&self, y: f32) {
        self.inner.scroll_to(y);
    }

    /// Scroll by a delta from the current position
    pub fn scroll_by(&self, dy: f32) {
        let current = self
            .inner
            .engine
            .document()
            .map(|doc| doc.borrow().viewport().scroll_y)
            .unwrap_or(0.0);
        self.inner.scroll_to(current + dy);
    }

    /// Resize the viewport, then evaluate scroll triggers
    pub fn resize(&self, width: f32, height: f32) {
        if let Some(document) = self.inner.engine.document() {
            document.borrow_mut().set_viewport_size(width, height);
        }
        self.inner.evaluate_observers();
    }

    /// Re-evaluate scroll triggers after a layout change
    pub fn refresh(&self) {
        self.inner.evaluate_observers();
    }

    pub fn config(&self) -> &MotionConfig {
        &self.inner.config
    }

    pub fn engine(&self) -> &SchedulerHandle {
        &self.inner.engine
    }

    pub fn navigator(&self) -> &Rc<dyn Navigator> {
        &self.inner.navigator
    }

    // =========================================================================
    // Introspection
    // =========================================================================

    pub fn active_scope_count(&self) -> usize {
        self.inner.registry.borrow().scopes.len()
    }

    pub fn observer_count(&self) -> usize {
        self.inner.registry.borrow().observers.len()
    }

    pub fn is_scope_active(&self, id: ScopeId) -> bool {
        self.inner.is_active(id)
    }

    /// The scope currently bound to `root`, if any
    pub fn scope_for_root(&self, root: ElementId) -> Option<ScopeId> {
        self.inner.registry.borrow().roots.get(&root).copied()
    }

    /// How many times a group's transition has started; `None` once its scope is gone
    pub fn times_triggered(&self, group: GroupId) -> Option<usize> {
        self.inner
            .registry
            .borrow()
            .groups
            .get(group)
            .map(|g| g.fired)
    }

    /// Views with an active scope, in no particular order
    pub fn active_views(&self) -> Vec<String> {
        self.inner
            .registry
            .borrow()
            .scopes
            .values()
            .map(|s| s.view.clone())
            .collect()
    }
}
