use super::spec::{MotionSpec, VisualState};
use super::{ElementId, TweenId};

/// Lifecycle of a single tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TweenState {
    /// Started, still inside its delay.
    #[default]
    Pending,
    Running,
    Finished,
    Cancelled,
}

/// A motion bound to one element, advanced by frame deltas.
#[derive(Debug, Clone)]
pub struct Tween {
    pub id: TweenId,
    pub target: ElementId,
    pub spec: MotionSpec,
    elapsed: f64,
    state: TweenState,
}

impl Tween {
    pub fn new(id: TweenId, target: ElementId, spec: MotionSpec) -> Self {
        Self {
            id,
            target,
            spec,
            elapsed: 0.0,
            state: TweenState::Pending,
        }
    }

    /// Advance by `delta` seconds and return the state to render.
    pub fn advance(&mut self, delta: f64) -> VisualState {
        if self.is_done() {
            return self.current();
        }

        self.elapsed += delta.max(0.0);
        self.state = if self.elapsed >= self.spec.end_time() {
            TweenState::Finished
        } else if self.elapsed > self.spec.delay {
            TweenState::Running
        } else {
            TweenState::Pending
        };

        self.current()
    }

    pub fn current(&self) -> VisualState {
        self.spec.sample(self.elapsed)
    }

    pub fn cancel(&mut self) {
        if !self.is_done() {
            self.state = TweenState::Cancelled;
        }
    }

    pub fn state(&self) -> TweenState {
        self.state
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_done(&self) -> bool {
        matches!(self.state, TweenState::Finished | TweenState::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::Ease;

    fn tween() -> Tween {
        let spec = MotionSpec::from_state(VisualState::RESTING.with_opacity(0.0))
            .duration(1.0)
            .delay(0.5)
            .ease(Ease::Linear);
        Tween::new(TweenId(1), ElementId(7), spec)
    }

    #[test]
    fn test_new_tween_is_pending_at_from_state() {
        let tween = tween();
        assert_eq!(tween.state(), TweenState::Pending);
        assert_eq!(tween.current().opacity, 0.0);
    }

    #[test]
    fn test_advance_through_lifecycle() {
        let mut tween = tween();

        tween.advance(0.25);
        assert_eq!(tween.state(), TweenState::Pending);

        let state = tween.advance(0.75);
        assert_eq!(tween.state(), TweenState::Running);
        assert!((state.opacity - 0.5).abs() < 1e-9);

        let state = tween.advance(0.5);
        assert_eq!(tween.state(), TweenState::Finished);
        assert_eq!(state, VisualState::RESTING);
    }

    #[test]
    fn test_finished_tween_does_not_advance() {
        let mut tween = tween();
        tween.advance(5.0);
        let elapsed = tween.elapsed();
        tween.advance(1.0);
        assert_eq!(tween.elapsed(), elapsed);
    }

    #[test]
    fn test_cancel_freezes_tween() {
        let mut tween = tween();
        tween.advance(0.75);
        tween.cancel();
        assert_eq!(tween.state(), TweenState::Cancelled);

        let before = tween.current();
        tween.advance(1.0);
        assert_eq!(tween.current(), before);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut tween = tween();
        tween.advance(-1.0);
        assert_eq!(tween.elapsed(), 0.0);
    }
}
