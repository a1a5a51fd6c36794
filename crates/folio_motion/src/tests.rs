//! Lifecycle tests for the coordinator
//!
//! Every test drives a real scheduler against an in-memory document with an
//! explicit clock, so timings are exact.

use crate::{
    AmbientMotion, Coordinator, GroupSpec, MotionConfig, MotionError, StaggerConfig, Transition,
    TriggerCondition,
};
use folio_animation::AnimationScheduler;
use folio_core::{
    Document, ElementId, MemoryNavigator, Navigator, Rect, Route, SharedDocument, VisualState,
};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Viewport 800x600 over a 4000px page
struct Harness {
    document: SharedDocument,
    scheduler: AnimationScheduler,
    navigator: Rc<MemoryNavigator>,
    coordinator: Coordinator,
}

impl Harness {
    fn new() -> Self {
        Self::on_route("/")
    }

    fn on_route(route: &str) -> Self {
        let mut doc = Document::new(800.0, 600.0);
        // Spacer so the page can scroll
        doc.create_element(None, Rect::new(0.0, 0.0, 800.0, 4000.0));
        let document = doc.shared();
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
        }
    }

    fn element(&self, parent: Option<ElementId>, y: f32, height: f32) -> ElementId {
        self.document
            .borrow_mut()
            .create_element(parent, Rect::new(0.0, y, 400.0, height))
    }

    fn style(&self, element: ElementId) -> VisualState {
        self.document.borrow().style(element).unwrap()
    }

    fn mutations(&self) -> u64 {
        self.document.borrow().mutation_count()
    }

    fn advance_ms(&self, ms: u64) {
        self.scheduler.advance(Duration::from_millis(ms));
    }
}

fn fade_up() -> VisualState {
    VisualState::hidden().with_y(40.0).with_blur(10.0)
}

// =========================================================================
// Visibility
// =========================================================================

#[test]
fn test_target_state_applied_at_registration() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 3000.0);
    let below = h.element(Some(root), 2500.0, 200.0);
    let title = h.element(Some(root), 100.0, 60.0);

    // Start from a hidden element so the write is observable
    h.document
        .borrow_mut()
        .set_style(below, VisualState::hidden())
        .unwrap();

    let scope = h.coordinator.create_scope("about", Some(root));
    scope
        .register_group(
            [below],
            fade_up(),
            VisualState::VISIBLE,
            TriggerCondition::on_scroll(0.3),
        )
        .unwrap();
    scope
        .register_group(
            [title],
            fade_up(),
            VisualState::VISIBLE,
            TriggerCondition::OnMount,
        )
        .unwrap();

    assert_eq!(h.style(below), VisualState::VISIBLE);
    assert_eq!(h.style(title), VisualState::VISIBLE);

    // The scroll trigger never fires; the element stays visible regardless
    h.advance_ms(5_000);
    assert_eq!(h.style(below), VisualState::VISIBLE);
}

#[test]
fn test_partial_target_is_applied_verbatim() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 1000.0);
    let skill = h.element(Some(root), 2500.0, 40.0);

    let scope = h.coordinator.create_scope("skills", Some(root));
    let dimmed = VisualState::VISIBLE.with_opacity(0.6);
    scope.register_group(
        [skill],
        dimmed.with_y(18.0).with_scale(0.98),
        dimmed,
        TriggerCondition::on_scroll(0.2),
    );

    assert_eq!(h.style(skill), dimmed);
}

#[test]
fn test_missing_ref_skips_group_only() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 1000.0);
    let present = h.element(Some(root), 100.0, 50.0);
    let other = h.element(Some(root), 200.0, 50.0);

    let scope = h.coordinator.create_scope("experience", Some(root));
    let spec = GroupSpec::from_refs(
        [Some(present), None],
        fade_up(),
        VisualState::VISIBLE,
        TriggerCondition::OnMount,
    );
    assert_eq!(
        scope.try_register(spec),
        Err(MotionError::MissingElement {
            view: "experience".to_string(),
            index: 1
        })
    );

    // Nothing written for the skipped group, the scope keeps working
    assert_eq!(h.document.borrow().get(present).unwrap().mutations, 0);
    assert!(scope.is_active());
    assert!(scope
        .register_group([other], fade_up(), VisualState::VISIBLE, TriggerCondition::OnMount)
        .is_some());
}

#[test]
fn test_absent_or_detached_root_gives_inert_scope() {
    let h = Harness::new();
    let scope = h.coordinator.create_scope("hero", None);
    assert!(!scope.is_active());
    assert_eq!(scope.id(), None);

    let root = h.element(None, 0.0, 500.0);
    let child = h.element(Some(root), 0.0, 100.0);
    h.document.borrow_mut().remove(root);
    let detached = h.coordinator.create_scope("hero", Some(root));
    assert!(!detached.is_active());

    let before = h.mutations();
    assert!(detached
        .register_group([child], fade_up(), VisualState::VISIBLE, TriggerCondition::OnMount)
        .is_none());
    assert!(detached.after(Duration::from_millis(10), || {}).is_none());
    detached.teardown();
    assert_eq!(h.mutations(), before);
    assert_eq!(h.coordinator.active_scope_count(), 0);
}

#[test]
fn test_on_mount_staggers_in_registration_order() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 1000.0);
    let items: Vec<_> = (0..3).map(|i| h.element(Some(root), i as f32 * 50.0, 40.0)).collect();

    let scope = h.coordinator.create_scope("contact", Some(root));
    scope.register(
        GroupSpec::reveal(items.clone(), VisualState::hidden().with_y(24.0), TriggerCondition::OnMount)
            .transition(Transition {
                stagger: StaggerConfig::new(100.0),
                ..Transition::new(500.0)
            }),
    );

    h.advance_ms(50);
    // First element is mid-transition, the others have not started
    assert!(h.style(items[0]).opacity < 1.0);
    assert_eq!(h.style(items[1]), VisualState::VISIBLE);
    assert_eq!(h.style(items[2]), VisualState::VISIBLE);

    h.advance_ms(100);
    assert!(h.style(items[1]).opacity < 1.0);
    assert_eq!(h.style(items[2]), VisualState::VISIBLE);

    h.advance_ms(1_000);
    for item in &items {
        assert_eq!(h.style(*item), VisualState::VISIBLE);
    }
}

// =========================================================================
// Scroll triggers
// =========================================================================

#[test]
fn test_scroll_trigger_fires_once_at_exact_threshold() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 3000.0);
    let card = h.element(Some(root), 1000.0, 200.0);

    let scope = h.coordinator.create_scope("projects", Some(root));
    let group = scope
        .register_group(
            [card],
            fade_up(),
            VisualState::VISIBLE,
            TriggerCondition::on_scroll(0.5),
        )
        .unwrap();
    assert_eq!(h.coordinator.times_triggered(group), Some(0));

    // 0.495 visible
    h.coordinator.scroll_to(499.0);
    assert_eq!(h.coordinator.times_triggered(group), Some(0));

    // Exactly half visible
    h.coordinator.scroll_to(500.0);
    assert_eq!(h.coordinator.times_triggered(group), Some(1));
    assert_eq!(h.coordinator.observer_count(), 0);

    for y in [0.0, 500.0, 100.0, 900.0, 300.0, 700.0] {
        h.coordinator.scroll_to(y);
    }
    assert_eq!(h.coordinator.times_triggered(group), Some(1));

    h.advance_ms(2_000);
    assert_eq!(h.style(card), VisualState::VISIBLE);
}

#[test]
fn test_repeating_scroll_trigger_refires() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 3000.0);
    let card = h.element(Some(root), 1000.0, 200.0);

    let scope = h.coordinator.create_scope("projects", Some(root));
    let group = scope
        .register_group(
            [card],
            fade_up(),
            VisualState::VISIBLE,
            TriggerCondition::on_every_scroll(0.5),
        )
        .unwrap();

    h.coordinator.scroll_to(600.0);
    h.coordinator.scroll_to(0.0);
    h.coordinator.scroll_to(600.0);
    assert_eq!(h.coordinator.times_triggered(group), Some(2));
    assert_eq!(h.coordinator.observer_count(), 1);
}

#[test]
fn test_group_already_in_view_fires_at_registration() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 1000.0);
    let header = h.element(Some(root), 100.0, 80.0);

    let scope = h.coordinator.create_scope("experience", Some(root));
    let group = scope
        .register_group(
            [header],
            fade_up(),
            VisualState::VISIBLE,
            TriggerCondition::on_scroll(0.2),
        )
        .unwrap();
    assert_eq!(h.coordinator.times_triggered(group), Some(1));
}

#[test]
fn test_resize_reevaluates_observers() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 3000.0);
    let card = h.element(Some(root), 700.0, 100.0);

    let scope = h.coordinator.create_scope("about", Some(root));
    let group = scope
        .register_group(
            [card],
            fade_up(),
            VisualState::VISIBLE,
            TriggerCondition::on_scroll(1.0),
        )
        .unwrap();
    assert_eq!(h.coordinator.times_triggered(group), Some(0));

    h.coordinator.resize(800.0, 900.0);
    assert_eq!(h.coordinator.times_triggered(group), Some(1));
}

// =========================================================================
// Teardown
// =========================================================================

#[test]
fn test_no_mutation_after_teardown() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 3000.0);
    let title = h.element(Some(root), 0.0, 60.0);
    let card = h.element(Some(root), 1500.0, 200.0);
    let orb = h.element(Some(root), 200.0, 100.0);

    let scope = h.coordinator.create_scope("hero", Some(root));
    scope.register_group([title], fade_up(), VisualState::VISIBLE, TriggerCondition::OnMount);
    scope.register_group(
        [card],
        fade_up(),
        VisualState::VISIBLE,
        TriggerCondition::on_scroll(0.3),
    );
    scope.register_ambient(Some(orb), AmbientMotion::drift(10.0, -18.0, 4_000.0));

    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    scope.after(Duration::from_millis(500), move || flag.set(true));

    h.advance_ms(100);
    scope.teardown();
    assert_eq!(h.scheduler.tween_count(), 0);
    assert_eq!(h.scheduler.timer_count(), 0);
    assert_eq!(h.coordinator.observer_count(), 0);

    let before = h.mutations();
    h.coordinator.scroll_to(1400.0);
    h.advance_ms(10_000);
    assert_eq!(h.mutations(), before);
    assert!(!fired.get());

    // Idempotent
    scope.teardown();
    h.coordinator.teardown_scope(&scope);
    assert!(!scope.is_active());
}

#[test]
fn test_teardown_settles_in_flight_transition() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 1000.0);
    let title = h.element(Some(root), 0.0, 60.0);

    let scope = h.coordinator.create_scope("hero", Some(root));
    scope.register_group([title], fade_up(), VisualState::VISIBLE, TriggerCondition::OnMount);

    h.advance_ms(100);
    assert!(h.style(title).opacity < 1.0);

    drop(scope);
    assert_eq!(h.style(title), VisualState::VISIBLE);
}

#[test]
fn test_teardown_after_unmount_is_silent() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 1000.0);
    let title = h.element(Some(root), 0.0, 60.0);

    let scope = h.coordinator.create_scope("hero", Some(root));
    scope.register_group([title], fade_up(), VisualState::VISIBLE, TriggerCondition::OnMount);
    h.advance_ms(50);

    // View removed before its scope is released
    h.document.borrow_mut().remove(root);
    let before = h.mutations();
    drop(scope);
    h.advance_ms(1_000);
    assert_eq!(h.mutations(), before);
}

#[test]
fn test_remount_invalidates_previous_scope() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 3000.0);
    let card = h.element(Some(root), 1500.0, 200.0);

    let first = h.coordinator.create_scope("projects", Some(root));
    let old_group = first
        .register_group(
            [card],
            fade_up(),
            VisualState::VISIBLE,
            TriggerCondition::on_scroll(0.3),
        )
        .unwrap();

    let second = h.coordinator.create_scope("projects", Some(root));
    assert!(!first.is_active());
    assert!(second.is_active());
    assert_eq!(h.coordinator.active_scope_count(), 1);
    assert_eq!(h.coordinator.scope_for_root(root), second.id());
    assert_eq!(h.coordinator.times_triggered(old_group), None);
    assert!(first
        .register_group([card], fade_up(), VisualState::VISIBLE, TriggerCondition::OnMount)
        .is_none());

    let before = h.document.borrow().get(card).unwrap().mutations;
    h.coordinator.scroll_to(1400.0);
    h.advance_ms(2_000);
    assert_eq!(h.document.borrow().get(card).unwrap().mutations, before);

    // Releasing the stale handle leaves the new scope alone
    drop(first);
    assert!(second.is_active());
}

#[test]
fn test_scope_cannot_animate_another_views_element() {
    let h = Harness::new();
    let a_root = h.element(None, 0.0, 1000.0);
    let shared = h.element(Some(a_root), 100.0, 50.0);
    let b_root = h.element(None, 1000.0, 1000.0);

    let a = h.coordinator.create_scope("about", Some(a_root));
    let b = h.coordinator.create_scope("experience", Some(b_root));
    a.register_group([shared], fade_up(), VisualState::VISIBLE, TriggerCondition::OnMount)
        .unwrap();
    h.advance_ms(2_000);

    let spec = GroupSpec::reveal([shared], fade_up(), TriggerCondition::OnMount);
    assert_eq!(
        b.try_register(spec),
        Err(MotionError::ForeignElement {
            view: "experience".to_string(),
            element: shared,
        })
    );
    assert!(b
        .register_ambient(Some(shared), AmbientMotion::drift(0.0, -10.0, 2_000.0))
        .is_none());

    let before = h.document.borrow().get(shared).unwrap().mutations;
    b.teardown();
    h.advance_ms(1_000);
    assert_eq!(h.document.borrow().get(shared).unwrap().mutations, before);
    assert_eq!(h.style(shared), VisualState::VISIBLE);
}

#[test]
fn test_nested_scope_waits_for_owner_teardown() {
    let h = Harness::new();
    let outer = h.element(None, 0.0, 1000.0);
    let inner = h.element(Some(outer), 0.0, 500.0);
    let card = h.element(Some(inner), 100.0, 50.0);

    let page = h.coordinator.create_scope("page", Some(outer));
    let widget = h.coordinator.create_scope("widget", Some(inner));
    page.register_group([card], fade_up(), VisualState::VISIBLE, TriggerCondition::OnMount)
        .unwrap();

    let spec = GroupSpec::reveal([card], fade_up(), TriggerCondition::OnMount);
    assert!(matches!(
        widget.try_register(spec.clone()),
        Err(MotionError::ForeignElement { .. })
    ));

    // Same scope may animate its element again
    assert!(page
        .register_ambient(Some(card), AmbientMotion::drift(4.0, 0.0, 2_000.0))
        .is_some());

    page.teardown();
    assert!(widget.try_register(spec).is_ok());
}

#[test]
fn test_dropping_coordinator_tears_down_scopes() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 1000.0);
    let orb = h.element(Some(root), 100.0, 50.0);

    let scope = h.coordinator.create_scope("footer", Some(root));
    scope.register_ambient(Some(orb), AmbientMotion::drift(0.0, -22.0, 3_000.0));
    assert_eq!(h.scheduler.tween_count(), 1);

    let Harness {
        scheduler,
        coordinator,
        ..
    } = h;
    drop(coordinator);
    assert_eq!(scheduler.tween_count(), 0);
    assert!(!scope.is_active());
}

// =========================================================================
// Route entry
// =========================================================================

#[test]
fn test_route_enter_navigates_once_then_settles() {
    let h = Harness::on_route("/projects");
    let root = h.element(None, 0.0, 1000.0);
    let section = h.element(Some(root), 0.0, 400.0);

    let scope = h.coordinator.create_scope("navigation", Some(root));
    let group = scope
        .register_group(
            [section],
            fade_up(),
            VisualState::VISIBLE,
            TriggerCondition::on_route("/"),
        )
        .unwrap();

    assert_eq!(h.navigator.navigation_count(), 1);
    assert_eq!(h.navigator.current_route(), Route::home());
    assert_eq!(h.coordinator.times_triggered(group), Some(0));

    h.advance_ms(249);
    assert_eq!(h.coordinator.times_triggered(group), Some(0));
    h.advance_ms(1);
    assert_eq!(h.coordinator.times_triggered(group), Some(1));
    assert_eq!(h.navigator.navigation_count(), 1);
}

#[test]
fn test_route_enter_on_current_route_runs_now() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 1000.0);
    let section = h.element(Some(root), 0.0, 400.0);

    let scope = h.coordinator.create_scope("hero", Some(root));
    let group = scope
        .register_group(
            [section],
            fade_up(),
            VisualState::VISIBLE,
            TriggerCondition::on_route("/"),
        )
        .unwrap();

    assert_eq!(h.navigator.navigation_count(), 0);
    assert_eq!(h.coordinator.times_triggered(group), Some(1));
}

#[test]
fn test_go_to_section_scrolls_after_settle() {
    let h = Harness::on_route("/projects/perception-stack");
    let root = h.element(None, 0.0, 100.0);
    let contact = h.element(None, 2000.0, 500.0);
    h.document.borrow_mut().set_anchor(contact, "contact");

    let scope = h.coordinator.create_scope("navigation", Some(root));
    assert!(scope.go_to_section("/", "contact"));
    assert_eq!(h.navigator.navigation_count(), 1);
    assert_eq!(h.document.borrow().viewport().scroll_y, 0.0);

    h.advance_ms(250);
    assert_eq!(h.document.borrow().viewport().scroll_y, 2000.0);
}

#[test]
fn test_teardown_cancels_pending_settle() {
    let h = Harness::on_route("/projects");
    let root = h.element(None, 0.0, 100.0);
    let contact = h.element(None, 2000.0, 500.0);
    h.document.borrow_mut().set_anchor(contact, "contact");

    let scope = h.coordinator.create_scope("navigation", Some(root));
    scope.go_to_section("/", "contact");
    scope.teardown();

    h.advance_ms(1_000);
    assert_eq!(h.document.borrow().viewport().scroll_y, 0.0);
    assert_eq!(h.scheduler.timer_count(), 0);
}

// =========================================================================
// End to end
// =========================================================================

#[test]
fn test_mount_reveal_and_ambient_lifecycle() {
    let h = Harness::new();
    let root = h.element(None, 0.0, 900.0);
    let lines: Vec<_> = (0..3).map(|i| h.element(Some(root), 100.0 + i as f32 * 80.0, 60.0)).collect();
    let orb = h.element(Some(root), 500.0, 120.0);

    let scope = h.coordinator.create_scope("hero", Some(root));
    let group = scope
        .register(
            GroupSpec::reveal(lines.clone(), fade_up(), TriggerCondition::OnMount).transition(
                Transition {
                    delay_ms: 200.0,
                    stagger: StaggerConfig::new(150.0),
                    ..Transition::new(900.0)
                },
            ),
        )
        .unwrap();
    let drift = scope
        .register_ambient(Some(orb), AmbientMotion::drift(10.0, -18.0, 4_000.0))
        .unwrap();

    for line in &lines {
        assert_eq!(h.style(*line), VisualState::VISIBLE);
    }

    h.advance_ms(1_500);
    for line in &lines {
        assert_eq!(h.style(*line), VisualState::VISIBLE);
    }
    assert_eq!(h.coordinator.times_triggered(group), Some(1));

    // The orb is drifting
    let drifting = h.style(orb);
    assert!(drifting.y < 0.0);
    assert!(h.scheduler.handle().is_tween_active(drift));

    scope.teardown();
    assert!(!h.scheduler.handle().is_tween_active(drift));
    assert_eq!(h.style(orb), VisualState::VISIBLE);

    let before = h.mutations();
    for _ in 0..50 {
        h.advance_ms(100);
    }
    assert_eq!(h.mutations(), before);
    assert!(!h.scheduler.has_active_animations());
}
