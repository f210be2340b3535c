//! Motion engine for the landing page.
//!
//! This module provides a small, frame-driven animation engine:
//! - `easing`: deceleration and overshoot curves
//! - `spec`: explicit two-state motion records
//! - `tween`: a motion bound to one element
//! - `trigger`: play-once scroll triggers
//! - `scheduler`: the scope-based scheduling service
//! - `surface`: the element tree the engine writes to
//! - `choreography`: the landing page's entrance and reveal sequence
//!
//! The engine has no dependency on the browser; the hydrate build plugs a
//! DOM-backed surface into it, tests use `VirtualSurface`.

pub mod choreography;
pub mod easing;
pub mod scheduler;
pub mod spec;
pub mod surface;
pub mod trigger;
pub mod tween;


use derive_more::Display;

pub use choreography::{GridTarget, LandingTargets, MotionController};
pub use easing::Ease;
pub use scheduler::{
    Binding, BindingKind, MotionScheduler, ReleaseSummary, RuntimeDemand, frame_delta,
};
pub use spec::{MotionSpec, VisualState};
pub use surface::{MotionSurface, VirtualSurface};
pub use trigger::{ScrollTrigger, TriggerStart};
pub use tween::{Tween, TweenState};

/// Handle of an element known to a `MotionSurface`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("element#{_0}")]
pub struct ElementId(pub u64);

/// Disposable grouping of tweens and triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("scope#{_0}")]
pub struct ScopeId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("tween#{_0}")]
pub struct TweenId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("trigger#{_0}")]
pub struct TriggerId(pub u64);

/// Errors reported by the scheduler.
///
/// None of these are fatal for the page: motion is an enhancement and the
/// controller drops them after logging.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    #[error("Motion scope {0} is not live")]
    UnknownScope(ScopeId),

    #[error("Invalid motion timing: duration={duration}s, delay={delay}s")]
    InvalidTiming { duration: f64, delay: f64 },
}
