//! Folio Motion
//!
//! View-scoped animation lifecycles for the portfolio site.
//!
//! # Features
//!
//! - **Scopes**: every tween, timer and observer belongs to the view that created it
//! - **Triggers**: start on mount, on scroll intersection, or on arriving at a route
//! - **Staggered Groups**: one transition fanned out over an ordered run of elements
//! - **Ambient Motion**: looping drift that returns to rest on teardown
//! - **Never Invisible**: elements hold their target state until a transition starts
//!
//! # Example
//!
//! ```ignore
//! use folio_motion::{Coordinator, MotionConfig, TriggerCondition};
//!
//! let coordinator = Coordinator::new(scheduler.handle(), navigator, MotionConfig::default());
//! let scope = coordinator.create_scope("about", Some(about_root));
//!
//! scope.register_group(
//!     cards,
//!     VisualState::hidden().with_y(35.0),
//!     VisualState::VISIBLE,
//!     TriggerCondition::on_scroll(0.2),
//! );
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod group;
mod observer;
pub mod scope;

#[cfg(test)]
mod tests;

pub use config::MotionConfig;
pub use coordinator::{Coordinator, ScopeId};
pub use error::{MotionError, Result};
pub use group::{
    AmbientMotion, GroupId, GroupSpec, StaggerConfig, Transition, TriggerCondition,
};
pub use observer::ObserverId;
pub use scope::ViewLifecycleScope;
