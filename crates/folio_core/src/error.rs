//! Document error types

use crate::document::ElementId;
use thiserror::Error;

/// Errors raised when touching elements of the document
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentError {
    /// The element id was never allocated, or its slot has been reused
    #[error("element {0:?} does not exist")]
    Missing(ElementId),

    /// The element exists but has been removed from the tree
    #[error("element {0:?} is detached")]
    Detached(ElementId),
}

/// Result type for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;
