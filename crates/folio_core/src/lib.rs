//! Folio Core
//!
//! Foundational primitives shared by the Folio crates:
//!
//! - **Document**: an arena of element nodes standing in for the page DOM
//! - **Geometry**: points, sizes, rects and the viewport
//! - **Visual State**: the animatable style of an element (opacity, offset, scale, blur)
//! - **Navigation**: routes and the navigator service
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Document, Rect, VisualState};
//!
//! let mut doc = Document::new(1280.0, 800.0);
//! let section = doc.create_element(None, Rect::new(0.0, 0.0, 1280.0, 600.0));
//!
//! doc.set_style(section, VisualState::hidden()).unwrap();
//! assert_eq!(doc.style(section).unwrap().opacity, 0.0);
//!
//! doc.remove(section);
//! assert!(!doc.is_attached(section));
//! ```

pub mod document;
pub mod error;
pub mod geometry;
pub mod navigation;
pub mod style;

pub use document::{Document, ElementId, ElementNode, SharedDocument};
pub use error::{DocumentError, Result};
pub use geometry::{Point, Rect, Size, Viewport};
pub use navigation::{MemoryNavigator, Navigator, Route};
pub use style::VisualState;
