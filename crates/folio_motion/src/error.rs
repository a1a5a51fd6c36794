//! Motion error types
//!
//! None of these reach the user: a group that cannot be registered is skipped
//! and its elements keep the visible state they already have.

use folio_core::ElementId;
use thiserror::Error;

/// Reasons a registration was skipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotionError {
    /// A ref was unresolved, or points at a missing or detached element
    #[error("view `{view}`: element #{index} is missing")]
    MissingElement { view: String, index: usize },

    /// The element exists but is not attached to the document
    #[error("view `{view}`: element {element:?} is detached")]
    DetachedElement { view: String, element: ElementId },

    /// The element lies outside the scope's root, or another live scope
    /// already animates it
    #[error("view `{view}`: element {element:?} belongs to another view")]
    ForeignElement { view: String, element: ElementId },

    /// The scope was never activated or has been torn down
    #[error("scope is not active")]
    InactiveScope,

    /// The animation engine has been dropped
    #[error("animation engine is gone")]
    EngineGone,
}

/// Result type for motion operations
pub type Result<T> = std::result::Result<T, MotionError>;
