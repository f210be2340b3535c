//! Explicit motion records.
//!
//! A motion is described by both of its end states instead of "from these
//! values to wherever the element currently is". The rendered value at any
//! instant is a pure function of the record and the elapsed time.

use serde::{Deserialize, Serialize};

use super::MotionError;
use super::easing::Ease;

/// Visual properties the engine is allowed to write.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    /// Vertical offset from the layout position, in CSS pixels
    pub y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl VisualState {
    /// Layout position, fully opaque, unscaled.
    pub const RESTING: VisualState = VisualState {
        y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Interpolate towards `target`. `progress` is not clamped so that
    /// overshooting curves can carry the state past the target.
    pub fn lerp(&self, target: &VisualState, progress: f64) -> VisualState {
        VisualState {
            y: self.y + (target.y - self.y) * progress,
            opacity: self.opacity + (target.opacity - self.opacity) * progress,
            scale: self.scale + (target.scale - self.scale) * progress,
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Two-state motion record with timing. All times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSpec {
    pub from: VisualState,
    pub to: VisualState,
    pub duration: f64,
    /// Time between the motion being started and it beginning to move
    pub delay: f64,
    pub ease: Ease,
}

impl MotionSpec {
    /// Motion from `from` to the resting state, lasting one second.
    pub fn from_state(from: VisualState) -> Self {
        Self {
            from,
            to: VisualState::RESTING,
            duration: 1.0,
            delay: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Same motion with `extra` seconds added to the delay.
    pub fn delayed_by(mut self, extra: f64) -> Self {
        self.delay += extra;
        self
    }

    /// Reject timings the frame interpolator cannot evaluate.
    pub fn validate(&self) -> Result<(), MotionError> {
        let duration_ok = self.duration.is_finite() && self.duration > 0.0;
        let delay_ok = self.delay.is_finite() && self.delay >= 0.0;

        if duration_ok && delay_ok {
            Ok(())
        } else {
            Err(MotionError::InvalidTiming {
                duration: self.duration,
                delay: self.delay,
            })
        }
    }

    /// State at `local_time` seconds after the motion was started.
    ///
    /// Before the delay elapses the element sits at `from`; after the
    /// delay plus duration it sits exactly at `to`.
    pub fn sample(&self, local_time: f64) -> VisualState {
        let active = local_time - self.delay;
        if active <= 0.0 {
            return self.from;
        }
        if active >= self.duration {
            return self.to;
        }

        let progress = self.ease.evaluate(active / self.duration);
        self.from.lerp(&self.to, progress)
    }

    /// Time at which the motion has settled at `to`.
    pub fn end_time(&self) -> f64 {
        self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_up() -> MotionSpec {
        MotionSpec::from_state(VisualState::RESTING.with_y(100.0).with_opacity(0.0))
            .duration(1.0)
            .delay(0.5)
            .ease(Ease::Linear)
    }

    #[test]
    fn test_resting_state() {
        let state = VisualState::default();
        assert_eq!(state.y, 0.0);
        assert_eq!(state.opacity, 1.0);
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn test_from_state_targets_resting() {
        let spec = MotionSpec::from_state(VisualState::RESTING.with_scale(0.8));
        assert_eq!(spec.to, VisualState::RESTING);
        assert_eq!(spec.from.scale, 0.8);
        assert_eq!(spec.from.opacity, 1.0);
    }

    #[test]
    fn test_sample_holds_from_during_delay() {
        let spec = fade_up();
        assert_eq!(spec.sample(0.0), spec.from);
        assert_eq!(spec.sample(0.5), spec.from);
    }

    #[test]
    fn test_sample_interpolates() {
        let spec = fade_up();
        let halfway = spec.sample(1.0);
        assert!((halfway.y - 50.0).abs() < 1e-9);
        assert!((halfway.opacity - 0.5).abs() < 1e-9);
        assert_eq!(halfway.scale, 1.0);
    }

    #[test]
    fn test_sample_settles_at_target() {
        let spec = fade_up();
        assert_eq!(spec.end_time(), 1.5);
        assert_eq!(spec.sample(1.5), VisualState::RESTING);
        assert_eq!(spec.sample(10.0), VisualState::RESTING);
    }

    #[test]
    fn test_delayed_by_accumulates() {
        let spec = fade_up().delayed_by(0.2).delayed_by(0.2);
        assert!((spec.delay - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_validate() {
        assert!(fade_up().validate().is_ok());
        assert!(fade_up().duration(0.0).validate().is_err());
        assert!(fade_up().duration(f64::NAN).validate().is_err());
        assert!(fade_up().delay(-1.0).validate().is_err());
        assert!(fade_up().delay(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_lerp_allows_overshoot() {
        let from = VisualState::RESTING.with_scale(0.8);
        let state = from.lerp(&VisualState::RESTING, 1.1);
        assert!(state.scale > 1.0);
    }
}
