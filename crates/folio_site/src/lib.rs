//! Folio Site
//!
//! The portfolio itself: content, routes, layout and the animated views, run
//! headlessly on top of [`folio_motion`].
//!
//! # Features
//!
//! - **Content**: the project catalog (embedded JSON) and profile statics
//! - **Router**: home, catalog, case study and not-found pages
//! - **Views**: each section lays out its elements and registers its motion
//! - **Site**: mounts chrome once and swaps page views on navigation
//! - **Contact**: form validation and a one-shot HTTP submission
//!
//! # Example
//!
//! ```rust
//! use folio_core::Route;
//! use folio_site::{Site, SiteConfig};
//! use std::time::Duration;
//!
//! let mut site = Site::new(SiteConfig::default(), Route::home()).unwrap();
//! site.run_for(Duration::from_secs(5));
//! assert!(!site.is_preloader_visible());
//!
//! site.go_to_section("projects");
//! println!("{}", site.snapshot());
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod router;
pub mod site;
pub mod submission;
pub mod views;

pub use config::{SiteConfig, CONFIG_FILE};
pub use content::{ContentStore, Project};
pub use error::{ContactError, Result, SiteError};
pub use router::{project_route, Page};
pub use site::{Site, SiteSnapshot, ViewSummary};
pub use submission::{ContactClient, ContactForm, SubmissionStatus};
