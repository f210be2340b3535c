//! Scroll triggers.
//!
//! A trigger watches one element and fires the first time the element's top
//! edge reaches a fixed line in the viewport (`top 85%` means the top edge
//! is at or above 85% of the viewport height, measured from the top).
//! Triggers are play-once: after firing they never reverse or replay.

use serde::{Deserialize, Serialize};

use super::{ElementId, TriggerId};

/// Viewport line an element's top edge has to reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerStart {
    /// Fraction of the viewport height, from the top
    pub viewport_fraction: f64,
}

impl TriggerStart {
    pub fn top_at(viewport_fraction: f64) -> Self {
        Self {
            viewport_fraction: viewport_fraction.clamp(0.0, 1.0),
        }
    }

    /// Threshold line in pixels for a viewport of the given height.
    pub fn line(&self, viewport_height: f64) -> f64 {
        viewport_height * self.viewport_fraction
    }

    /// Whether an element whose top edge sits at `element_top` (relative to
    /// the viewport top) has entered.
    pub fn is_entered(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top <= self.line(viewport_height)
    }
}

/// One armed trigger.
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    pub id: TriggerId,
    pub element: ElementId,
    pub start: TriggerStart,
    fired: bool,
}

impl ScrollTrigger {
    pub fn new(id: TriggerId, element: ElementId, start: TriggerStart) -> Self {
        Self {
            id,
            element,
            start,
            fired: false,
        }
    }

    /// Check the element's position. Returns `true` exactly once: on the
    /// first check where the element has entered.
    pub fn check(&mut self, element_top: f64, viewport_height: f64) -> bool {
        if self.fired {
            return false;
        }
        if self.start.is_entered(element_top, viewport_height) {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
