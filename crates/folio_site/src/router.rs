//! Route table

use folio_core::Route;

/// Page rendered for a route
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    /// `/`
    Home,
    /// `/projects`
    Catalog,
    /// `/projects/<slug>`; the slug may not exist
    Detail(String),
    NotFound,
}

impl Page {
    pub fn resolve(route: &Route) -> Self {
        let segments: Vec<&str> = route.segments().collect();
        match segments.as_slice() {
            [] => Page::Home,
            ["projects"] => Page::Catalog,
            ["projects", slug] => Page::Detail((*slug).to_string()),
            _ => Page::NotFound,
        }
    }

    /// Canonical route for this page
    pub fn route(&self) -> Route {
        match self {
            Page::Home => Route::home(),
            Page::Catalog => Route::new("/projects"),
            Page::Detail(slug) => Route::new(format!("/projects/{slug}")),
            Page::NotFound => Route::new("/404"),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Catalog => "catalog",
            Page::Detail(_) => "detail",
            Page::NotFound => "not-found",
        }
    }
}

/// Route of a project's case study
pub fn project_route(slug: &str) -> Route {
    Page::Detail(slug.to_string()).route()
}
