//! Site runtime
//!
//! Owns the document, the animation scheduler, the coordinator and the
//! navigator, and keeps the mounted views in step with the current route.
//! Navigation is applied on [`Site::pump`], which the frame loop calls before
//! every frame, mirroring a router that re-renders after a history change.

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::error::{Result, SiteError};
use crate::router::{project_route, Page};
use crate::views::navigation::{Navigation, NAV_HEIGHT};
use crate::views::preloader::Preloader;
use crate::views::{
    about, catalog, contact, detail, experience, footer, hero, projects, MountedView, ViewContext,
};
use folio_animation::AnimationScheduler;
use folio_core::{Document, ElementId, MemoryNavigator, Navigator, Route, SharedDocument};
use folio_motion::Coordinator;
use serde::Serialize;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Simulated frame length used by [`Site::run_for`]
pub const FRAME: Duration = Duration::from_millis(16);

type MountFn = fn(&ViewContext<'_>, f32) -> MountedView;

/// Home page sections, top to bottom
const HOME_SECTIONS: [MountFn; 6] = [
    hero::mount,
    about::mount,
    experience::mount,
    projects::mount,
    contact::mount,
    footer::mount,
];

pub struct Site {
    config: SiteConfig,
    content: ContentStore,
    document: SharedDocument,
    scheduler: AnimationScheduler,
    navigator: Rc<MemoryNavigator>,
    coordinator: Coordinator,
    navigation: Option<Navigation>,
    page: Page,
    views: Vec<MountedView>,
    preloader: Option<Preloader>,
    preloader_done: Rc<Cell<bool>>,
}

impl Site {
    /// Boot the site on `initial`
    ///
    /// The preloader only shows when the first page is the home page.
    pub fn new(config: SiteConfig, initial: Route) -> Result<Self> {
        config.validate()?;
        let content = ContentStore::load()?;
        let document =
            Document::new(config.site.viewport_width, config.site.viewport_height).shared();
        let scheduler = AnimationScheduler::new(Rc::clone(&document));
        let navigator = Rc::new(MemoryNavigator::new(initial.clone()));
        let coordinator = Coordinator::new(
            scheduler.handle(),
            navigator.clone(),
            config.motion_config(),
        );
        let page = Page::resolve(&initial);

        let mut site = Self {
            config,
            content,
            document,
            scheduler,
            navigator,
            coordinator,
            navigation: None,
            page: page.clone(),
            views: Vec::new(),
            preloader: None,
            preloader_done: Rc::new(Cell::new(false)),
        };

        if site.config.site.preloader && page == Page::Home {
            let preloader = Preloader::mount(&site.cx(), Rc::clone(&site.preloader_done));
            site.preloader = Some(preloader);
        }
        site.mount_page(page);
        site.navigation = Some(Navigation::mount(&site.cx()));
        site.coordinator.refresh();

        tracing::debug!("Site: booted on {}", initial);
        Ok(site)
    }

    fn cx(&self) -> ViewContext<'_> {
        ViewContext {
            document: &self.document,
            coordinator: &self.coordinator,
            content: &self.content,
        }
    }

    fn mount_page(&mut self, page: Page) {
        tracing::debug!("Site: mounting {} page", page.name());
        let mut views = Vec::new();
        {
            let cx = self.cx();
            match &page {
                Page::Home => {
                    let mut top = 0.0;
                    for mount in HOME_SECTIONS {
                        let view = mount(&cx, top);
                        top += view.height();
                        views.push(view);
                    }
                }
                Page::Catalog => {
                    let view = catalog::mount(&cx, NAV_HEIGHT);
                    let top = NAV_HEIGHT + view.height();
                    views.push(view);
                    views.push(footer::mount(&cx, top));
                }
                Page::Detail(slug) => {
                    let view = detail::mount(&cx, NAV_HEIGHT, slug);
                    let top = NAV_HEIGHT + view.height();
                    views.push(view);
                    views.push(footer::mount(&cx, top));
                }
                Page::NotFound => views.push(detail::not_found(&cx, NAV_HEIGHT)),
            }
        }

        // Dismiss the preloader even if its own timeline never completes
        if self.preloader.is_some() {
            if let Some(first) = views.first() {
                let done = Rc::clone(&self.preloader_done);
                let fallback = Duration::from_millis(self.config.site.preloader_fallback_ms);
                first.scope().after(fallback, move || {
                    if !done.replace(true) {
                        tracing::debug!("Site: preloader dismissed by fallback");
                    }
                });
            }
        }

        self.views = views;
        self.page = page;
    }

    fn unmount_page(&mut self) {
        for view in self.views.drain(..) {
            view.unmount(&self.document);
        }
        self.document.borrow_mut().collect_detached();
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Apply pending navigation and remove a finished preloader
    ///
    /// Returns true if the mounted page changed.
    pub fn pump(&mut self) -> bool {
        if self.preloader_done.get() {
            if let Some(preloader) = self.preloader.take() {
                tracing::debug!("Site: removing preloader");
                preloader.unmount(&self.document);
            }
        }

        let Some(route) = self.navigator.take_pending() else {
            return false;
        };
        let page = Page::resolve(&route);
        if page == self.page {
            return false;
        }

        self.unmount_page();
        self.document.borrow_mut().set_scroll(0.0);
        self.mount_page(page);
        self.coordinator.refresh();
        true
    }

    /// Advance the clock by `dt` as a single frame
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.pump();
        let live = self.scheduler.advance(dt);
        self.pump();
        live
    }

    /// Run frame by frame for `total`
    pub fn run_for(&mut self, total: Duration) {
        let mut remaining = total;
        while !remaining.is_zero() {
            let dt = remaining.min(FRAME);
            self.advance(dt);
            remaining -= dt;
        }
    }

    // =========================================================================
    // User actions
    // =========================================================================

    /// Navigation bar section link
    pub fn go_to_section(&mut self, anchor: &str) -> bool {
        let started = self
            .navigation
            .as_ref()
            .is_some_and(|nav| nav.go_to_section(anchor));
        self.pump();
        started
    }

    pub fn open_catalog(&mut self) {
        if let Some(nav) = &self.navigation {
            nav.open_catalog(self.navigator.as_ref());
        }
        self.pump();
    }

    /// Open a project's case study
    pub fn open_project(&mut self, slug: &str) -> Result<()> {
        if self.content.find(slug).is_none() {
            return Err(SiteError::UnknownProject(slug.to_string()));
        }
        self.navigator.navigate_to(&project_route(slug));
        self.pump();
        Ok(())
    }

    /// Browser back button
    pub fn back(&mut self) -> Option<Route> {
        let route = self.navigator.back();
        self.pump();
        route
    }

    pub fn scroll_to(&self, y: f32) {
        self.coordinator.scroll_to(y);
    }

    pub fn scroll_by(&self, dy: f32) {
        self.coordinator.scroll_by(dy);
    }

    pub fn resize(&self, width: f32, height: f32) {
        self.coordinator.resize(width, height);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    pub fn navigator(&self) -> &Rc<MemoryNavigator> {
        &self.navigator
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn route(&self) -> Route {
        self.navigator.current_route()
    }

    pub fn views(&self) -> &[MountedView] {
        &self.views
    }

    pub fn view(&self, name: &str) -> Option<&MountedView> {
        self.views.iter().find(|v| v.name() == name)
    }

    pub fn is_preloader_visible(&self) -> bool {
        self.preloader.is_some()
    }

    /// Point-in-time summary of what is mounted and how visible it is
    pub fn snapshot(&self) -> SiteSnapshot {
        let doc = self.document.borrow();
        let summarize = |view: &MountedView| {
            let ids = subtree(&doc, view.root());
            let visible = ids
                .iter()
                .filter(|id| doc.style(**id).is_some_and(|s| s.opacity >= 1.0))
                .count();
            ViewSummary {
                name: view.name(),
                top: doc.bounds(view.root()).map(|b| b.y()).unwrap_or(0.0),
                height: view.height(),
                elements: ids.len(),
                visible,
                active: view.scope().is_active(),
            }
        };

        SiteSnapshot {
            clock_ms: self.scheduler.now().as_millis() as u64,
            route: self.route().to_string(),
            page: self.page.name(),
            scroll_y: doc.viewport().scroll_y,
            preloader: self.preloader.is_some(),
            views: self
                .navigation
                .iter()
                .map(Navigation::view)
                .chain(self.views.iter())
                .map(summarize)
                .collect(),
            tweens: self.scheduler.tween_count(),
            timers: self.scheduler.timer_count(),
            observers: self.coordinator.observer_count(),
        }
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        if let Some(preloader) = self.preloader.take() {
            preloader.unmount(&self.document);
        }
        self.unmount_page();
        if let Some(nav) = self.navigation.take() {
            nav.unmount(&self.document);
        }
    }
}

fn subtree(doc: &Document, root: ElementId) -> Vec<ElementId> {
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

// ===== Snapshot =====

#[derive(Clone, Debug, Serialize)]
pub struct ViewSummary {
    pub name: &'static str,
    pub top: f32,
    pub height: f32,
    pub elements: usize,
    /// Elements at full opacity
    pub visible: usize,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct SiteSnapshot {
    pub clock_ms: u64,
    pub route: String,
    pub page: &'static str,
    pub scroll_y: f32,
    pub preloader: bool,
    pub views: Vec<ViewSummary>,
    pub tweens: usize,
    pub timers: usize,
    pub observers: usize,
}

impl fmt::Display for SiteSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[{:>6}ms] {} ({}) scroll={:.0}{}",
            self.clock_ms,
            self.route,
            self.page,
            self.scroll_y,
            if self.preloader { " preloader" } else { "" }
        )?;
        for view in &self.views {
            writeln!(
                f,
                "  {:<12} top={:<7.0} h={:<6.0} visible {}/{}{}",
                view.name,
                view.top,
                view.height,
                view.visible,
                view.elements,
                if view.active { "" } else { " (inert)" }
            )?;
        }
        write!(
            f,
            "  tweens={} timers={} observers={}",
            self.tweens, self.timers, self.observers
        )
    }
}
