//! Routes and the navigation service
//!
//! The coordinator only needs two capabilities from navigation: asking where
//! the user currently is, and asking to go somewhere else. [`MemoryNavigator`]
//! is the in-process history used by the headless site; a browser host would
//! implement [`Navigator`] over its history API instead.

use std::cell::{Cell, RefCell};
use std::fmt;

/// A normalised route path such as `/` or `/projects/some-slug`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    /// Normalise a path: leading slash, no trailing slash, no fragment or query
    pub fn new(path: impl AsRef<str>) -> Self {
        let raw = path.as_ref().trim();
        let raw = raw.split(|c: char| c == '#' || c == '?').next().unwrap_or("");
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            Route("/".to_string())
        } else {
            Route(format!("/{trimmed}"))
        }
    }

    /// The root route `/`
    pub fn home() -> Self {
        Route("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        self.0 == "/"
    }

    /// Non-empty path segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Route::new(path)
    }
}

/// Navigation capability consumed by the coordinator
pub trait Navigator {
    /// The route the user is on
    fn current_route(&self) -> Route;

    /// Request navigation to `route`
    ///
    /// Hosts apply the change on their own schedule; callers must not assume
    /// the destination view has mounted when this returns.
    fn navigate_to(&self, route: &Route);
}

/// In-memory history
///
/// Navigation updates the current route immediately and marks it pending
/// until the host picks it up with [`MemoryNavigator::take_pending`].
#[derive(Debug)]
pub struct MemoryNavigator {
    history: RefCell<Vec<Route>>,
    pending: RefCell<Option<Route>>,
    navigations: Cell<usize>,
}

impl MemoryNavigator {
    pub fn new(initial: Route) -> Self {
        Self {
            history: RefCell::new(vec![initial]),
            pending: RefCell::new(None),
            navigations: Cell::new(0),
        }
    }

    /// Take the route change the host has not applied yet
    pub fn take_pending(&self) -> Option<Route> {
        self.pending.borrow_mut().take()
    }

    /// Number of `navigate_to` calls so far
    pub fn navigation_count(&self) -> usize {
        self.navigations.get()
    }

    pub fn history(&self) -> Vec<Route> {
        self.history.borrow().clone()
    }

    /// Pop the current entry, returning to the previous route
    pub fn back(&self) -> Option<Route> {
        let mut history = self.history.borrow_mut();
        if history.len() < 2 {
            return None;
        }
        history.pop();
        let route = history.last().cloned();
        *self.pending.borrow_mut() = route.clone();
        route
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new(Route::home())
    }
}

impl Navigator for MemoryNavigator {
    fn current_route(&self) -> Route {
        self.history
            .borrow()
            .last()
            .cloned()
            .unwrap_or_else(Route::home)
    }

    fn navigate_to(&self, route: &Route) {
        tracing::debug!("MemoryNavigator: navigate_to({})", route);
        self.navigations.set(self.navigations.get() + 1);
        self.history.borrow_mut().push(route.clone());
        *self.pending.borrow_mut() = Some(route.clone());
    }
}
