//! Scheduling service for all motion on a page.
//!
//! Every tween and scroll trigger belongs to a scope. Views create a scope
//! when they mount, register their motion into it and release it when they
//! are torn down. Releasing a scope cancels its tweens, disarms its
//! triggers and reverts every element it wrote to, so nothing outlives the
//! view that created it no matter how many views share the scheduler.
//!
//! The scheduler is driven from the outside:
//! - `tick(delta, surface)` once per frame
//! - `refresh(surface)` whenever the scroll position or layout changes

use std::collections::{BTreeMap, BTreeSet};

use super::spec::MotionSpec;
use super::surface::MotionSurface;
use super::trigger::{ScrollTrigger, TriggerStart};
use super::tween::Tween;
use super::{ElementId, MotionError, ScopeId, TriggerId, TweenId};

/// Longest frame delta fed into the scheduler, in seconds
pub const MAX_FRAME_DELTA: f64 = 0.1;

/// Frame delta assumed when the previous timestamp is unknown
pub const FALLBACK_FRAME_DELTA: f64 = 1.0 / 60.0;

/// Seconds elapsed between two frame timestamps given in milliseconds.
///
/// Clamped to `MAX_FRAME_DELTA` so a backgrounded tab resumes where it
/// left off instead of jumping to the end.
pub fn frame_delta(now_ms: Option<f64>, last_ms: Option<f64>) -> f64 {
    match (now_ms, last_ms) {
        (Some(now), Some(last)) => ((now - last) / 1000.0).clamp(0.0, MAX_FRAME_DELTA),
        _ => FALLBACK_FRAME_DELTA,
    }
}

/// Host resources a scheduler currently needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeDemand {
    /// An animation frame loop
    pub frames: bool,
    /// Scroll and resize listeners
    pub listeners: bool,
}

impl RuntimeDemand {
    pub const IDLE: RuntimeDemand = RuntimeDemand {
        frames: false,
        listeners: false,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// What a registration bound, as recorded in its scope.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingKind {
    /// One-shot motion started immediately for `targets` elements.
    Entrance { targets: usize },
    /// Play-once motion of `element`, gated on its own position.
    ScrollReveal { element: ElementId },
    /// Play-once staggered motion of a container's children, gated on the
    /// container's position.
    StaggerGroup {
        container: ElementId,
        children: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub label: &'static str,
    pub kind: BindingKind,
}

/// Counts of what a released scope still held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReleaseSummary {
    pub tweens_cancelled: usize,
    pub triggers_disarmed: usize,
    pub elements_reverted: usize,
}

#[derive(Debug)]
struct ArmedReveal {
    trigger: ScrollTrigger,
    targets: Vec<ElementId>,
    spec: MotionSpec,
    stagger: f64,
}

#[derive(Debug, Default)]
struct ScopeState {
    bindings: Vec<Binding>,
    tweens: Vec<Tween>,
    reveals: Vec<ArmedReveal>,
    touched: BTreeSet<ElementId>,
}

#[derive(Debug, Default)]
pub struct MotionScheduler {
    scopes: BTreeMap<ScopeId, ScopeState>,
    next_scope: u64,
    next_tween: u64,
    next_trigger: u64,
}

impl MotionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new, empty scope.
    pub fn create_scope(&mut self) -> ScopeId {
        self.next_scope += 1;
        let scope = ScopeId(self.next_scope);
        self.scopes.insert(scope, ScopeState::default());
        tracing::debug!(%scope, "motion scope created");
        scope
    }

    /// Release a scope and everything registered under it.
    ///
    /// In-flight tweens stop where they are, armed triggers are dropped and
    /// every element the scope wrote to is reverted on the surface.
    /// Releasing a scope twice is an `UnknownScope` error and has no effect.
    pub fn release_scope<S: MotionSurface>(
        &mut self,
        scope: ScopeId,
        surface: &mut S,
    ) -> Result<ReleaseSummary, MotionError> {
        let mut state = self
            .scopes
            .remove(&scope)
            .ok_or(MotionError::UnknownScope(scope))?;

        let mut summary = ReleaseSummary::default();
        for tween in state.tweens.iter_mut() {
            tween.cancel();
            summary.tweens_cancelled += 1;
        }
        summary.triggers_disarmed = state.reveals.len();

        for element in &state.touched {
            surface.revert(*element);
        }
        summary.elements_reverted = state.touched.len();

        tracing::debug!(
            %scope,
            tweens = summary.tweens_cancelled,
            triggers = summary.triggers_disarmed,
            elements = summary.elements_reverted,
            "motion scope released"
        );
        Ok(summary)
    }

    pub fn is_live(&self, scope: ScopeId) -> bool {
        self.scopes.contains_key(&scope)
    }

    /// Start `spec` on every target now, each delayed by `index * stagger`.
    ///
    /// Targets are put into the `from` state immediately. An empty target
    /// list registers nothing. Returns the number of tweens started.
    pub fn from<S: MotionSurface>(
        &mut self,
        scope: ScopeId,
        label: &'static str,
        targets: &[ElementId],
        spec: MotionSpec,
        stagger: f64,
        surface: &mut S,
    ) -> Result<usize, MotionError> {
        spec.validate()?;
        let next_tween = &mut self.next_tween;
        let state = self
            .scopes
            .get_mut(&scope)
            .ok_or(MotionError::UnknownScope(scope))?;

        if targets.is_empty() {
            tracing::trace!(%scope, label, "no targets, skipping entrance");
            return Ok(0);
        }

        for (index, target) in targets.iter().enumerate() {
            let spec = spec.delayed_by(index as f64 * stagger);
            surface.apply(*target, spec.from);
            state.touched.insert(*target);

            *next_tween += 1;
            state
                .tweens
                .push(Tween::new(TweenId(*next_tween), *target, spec));
        }

        state.bindings.push(Binding {
            label,
            kind: BindingKind::Entrance {
                targets: targets.len(),
            },
        });
        Ok(targets.len())
    }

    /// Arm a play-once reveal of `element`, gated on its own position.
    pub fn scroll_reveal<S: MotionSurface>(
        &mut self,
        scope: ScopeId,
        label: &'static str,
        element: ElementId,
        start: TriggerStart,
        spec: MotionSpec,
        surface: &mut S,
    ) -> Result<TriggerId, MotionError> {
        let trigger = self.arm(scope, element, vec![element], start, spec, 0.0, surface)?;
        self.record(
            scope,
            Binding {
                label,
                kind: BindingKind::ScrollReveal { element },
            },
        );
        Ok(trigger)
    }

    /// Arm a play-once staggered reveal of `children`, gated on the
    /// position of `container`. No children means nothing is armed.
    #[allow(clippy::too_many_arguments)]
    pub fn stagger_group<S: MotionSurface>(
        &mut self,
        scope: ScopeId,
        label: &'static str,
        container: ElementId,
        children: &[ElementId],
        start: TriggerStart,
        spec: MotionSpec,
        stagger: f64,
        surface: &mut S,
    ) -> Result<Option<TriggerId>, MotionError> {
        if children.is_empty() {
            if !self.is_live(scope) {
                return Err(MotionError::UnknownScope(scope));
            }
            tracing::trace!(%scope, label, "empty stagger group, skipping");
            return Ok(None);
        }

        let trigger = self.arm(
            scope,
            container,
            children.to_vec(),
            start,
            spec,
            stagger,
            surface,
        )?;
        self.record(
            scope,
            Binding {
                label,
                kind: BindingKind::StaggerGroup {
                    container,
                    children: children.len(),
                },
            },
        );
        Ok(Some(trigger))
    }

    #[allow(clippy::too_many_arguments)]
    fn arm<S: MotionSurface>(
        &mut self,
        scope: ScopeId,
        trigger_element: ElementId,
        targets: Vec<ElementId>,
        start: TriggerStart,
        spec: MotionSpec,
        stagger: f64,
        surface: &mut S,
    ) -> Result<TriggerId, MotionError> {
        spec.validate()?;
        let state = self
            .scopes
            .get_mut(&scope)
            .ok_or(MotionError::UnknownScope(scope))?;

        for target in &targets {
            surface.apply(*target, spec.from);
            state.touched.insert(*target);
        }

        self.next_trigger += 1;
        let id = TriggerId(self.next_trigger);
        state.reveals.push(ArmedReveal {
            trigger: ScrollTrigger::new(id, trigger_element, start),
            targets,
            spec,
            stagger,
        });
        Ok(id)
    }

    fn record(&mut self, scope: ScopeId, binding: Binding) {
        if let Some(state) = self.scopes.get_mut(&scope) {
            state.bindings.push(binding);
        }
    }

    /// Re-evaluate every armed trigger against the current layout.
    ///
    /// Fired triggers start their tweens and are disarmed for good.
    /// Returns the number of triggers that fired.
    pub fn refresh<S: MotionSurface>(&mut self, surface: &S) -> usize {
        let viewport_height = surface.viewport_height();
        let next_tween = &mut self.next_tween;
        let mut fired = 0;

        for (scope, state) in self.scopes.iter_mut() {
            let mut index = 0;
            while index < state.reveals.len() {
                let reveal = &mut state.reveals[index];
                let entered = surface
                    .element_top(reveal.trigger.element)
                    .is_some_and(|top| reveal.trigger.check(top, viewport_height));

                if !entered {
                    index += 1;
                    continue;
                }

                let reveal = state.reveals.remove(index);
                tracing::trace!(%scope, trigger = %reveal.trigger.id, "scroll trigger fired");
                for (position, target) in reveal.targets.iter().enumerate() {
                    *next_tween += 1;
                    let spec = reveal.spec.delayed_by(position as f64 * reveal.stagger);
                    state
                        .tweens
                        .push(Tween::new(TweenId(*next_tween), *target, spec));
                }
                fired += 1;
            }
        }

        fired
    }

    /// Advance all motion by `delta` seconds.
    ///
    /// Triggers are refreshed first, so a trigger crossed since the last
    /// frame starts moving within this frame. Finished tweens are dropped
    /// after their final state has been written.
    pub fn tick<S: MotionSurface>(&mut self, delta: f64, surface: &mut S) {
        self.refresh(surface);

        for state in self.scopes.values_mut() {
            for tween in state.tweens.iter_mut() {
                let visual = tween.advance(delta);
                surface.apply(tween.target, visual);
            }
            state.tweens.retain(|tween| !tween.is_done());
        }
    }

    /// Number of tweens that still need frames, across all scopes.
    pub fn active_tweens(&self) -> usize {
        self.scopes.values().map(|state| state.tweens.len()).sum()
    }

    /// Number of triggers still waiting for their element, across all scopes.
    pub fn armed_triggers(&self) -> usize {
        self.scopes.values().map(|state| state.reveals.len()).sum()
    }

    /// What the host must keep running to drive this scheduler.
    ///
    /// Frames are needed only while tweens move. Armed triggers are checked
    /// from scroll and resize notifications, so they only need listeners.
    pub fn demand(&self) -> RuntimeDemand {
        RuntimeDemand {
            frames: self.active_tweens() > 0,
            listeners: self.armed_triggers() > 0,
        }
    }

    pub fn live_scopes(&self) -> usize {
        self.scopes.len()
    }

    /// Bindings registered under a live scope, in registration order.
    pub fn bindings(&self, scope: ScopeId) -> Option<&[Binding]> {
        self.scopes
            .get(&scope)
            .map(|state| state.bindings.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::{Ease, VirtualSurface, VisualState};

    const VIEWPORT: f64 = 1000.0;

    fn fade() -> MotionSpec {
        MotionSpec::from_state(VisualState::RESTING.with_opacity(0.0))
            .duration(1.0)
            .ease(Ease::Linear)
    }

    #[test]
    fn test_create_scope_ids_are_unique() {
        let mut scheduler = MotionScheduler::new();
        let a = scheduler.create_scope();
        let b = scheduler.create_scope();
        assert_ne!(a, b);
        assert_eq!(scheduler.live_scopes(), 2);
    }

    #[test]
    fn test_from_renders_from_state_immediately() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let el = surface.insert(0.0);
        let scope = scheduler.create_scope();

        let started = scheduler
            .from(scope, "fade", &[el], fade(), 0.0, &mut surface)
            .unwrap();

        assert_eq!(started, 1);
        assert_eq!(surface.rendered(el).opacity, 0.0);
        assert_eq!(scheduler.active_tweens(), 1);
    }

    #[test]
    fn test_from_with_no_targets_is_noop() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let scope = scheduler.create_scope();

        let started = scheduler
            .from(scope, "fade", &[], fade(), 0.2, &mut surface)
            .unwrap();

        assert_eq!(started, 0);
        assert!(scheduler.bindings(scope).unwrap().is_empty());
        assert!(scheduler.demand().is_idle());
    }

    #[test]
    fn test_from_rejects_invalid_timing() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let el = surface.insert(0.0);
        let scope = scheduler.create_scope();

        let result = scheduler.from(scope, "bad", &[el], fade().duration(0.0), 0.0, &mut surface);
        assert!(matches!(result, Err(MotionError::InvalidTiming { .. })));
        assert_eq!(surface.writes(el), 0);
    }

    #[test]
    fn test_stagger_offsets_start_times() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let first = surface.insert(0.0);
        let second = surface.insert(0.0);
        let scope = scheduler.create_scope();

        scheduler
            .from(scope, "lines", &[first, second], fade(), 0.5, &mut surface)
            .unwrap();
        scheduler.tick(0.5, &mut surface);

        assert!((surface.rendered(first).opacity - 0.5).abs() < 1e-9);
        assert_eq!(surface.rendered(second).opacity, 0.0);
    }

    #[test]
    fn test_tick_drops_finished_tweens() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let el = surface.insert(0.0);
        let scope = scheduler.create_scope();

        scheduler
            .from(scope, "fade", &[el], fade(), 0.0, &mut surface)
            .unwrap();
        scheduler.tick(1.0, &mut surface);

        assert_eq!(scheduler.active_tweens(), 0);
        assert_eq!(surface.applied(el), Some(VisualState::RESTING));
    }

    #[test]
    fn test_scroll_reveal_waits_for_threshold() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let el = surface.insert(2000.0);
        let scope = scheduler.create_scope();

        scheduler
            .scroll_reveal(
                scope,
                "reveal",
                el,
                TriggerStart::top_at(0.85),
                fade(),
                &mut surface,
            )
            .unwrap();

        assert_eq!(surface.rendered(el).opacity, 0.0);
        assert_eq!(scheduler.refresh(&surface), 0);
        assert_eq!(scheduler.armed_triggers(), 1);

        surface.scroll_to(1200.0);
        assert_eq!(scheduler.refresh(&surface), 1);
        assert_eq!(scheduler.armed_triggers(), 0);
        assert_eq!(scheduler.active_tweens(), 1);
    }

    #[test]
    fn test_stagger_group_without_children_is_noop() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let container = surface.insert(0.0);
        let scope = scheduler.create_scope();

        let trigger = scheduler
            .stagger_group(
                scope,
                "grid",
                container,
                &[],
                TriggerStart::top_at(0.8),
                fade(),
                0.15,
                &mut surface,
            )
            .unwrap();

        assert!(trigger.is_none());
        assert_eq!(scheduler.armed_triggers(), 0);
    }

    #[test]
    fn test_release_reverts_touched_elements() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let hero = surface.insert(0.0);
        let below = surface.insert(5000.0);
        let scope = scheduler.create_scope();

        scheduler
            .from(scope, "hero", &[hero], fade(), 0.0, &mut surface)
            .unwrap();
        scheduler
            .scroll_reveal(
                scope,
                "below",
                below,
                TriggerStart::top_at(0.85),
                fade(),
                &mut surface,
            )
            .unwrap();
        scheduler.tick(0.25, &mut surface);

        let summary = scheduler.release_scope(scope, &mut surface).unwrap();

        assert_eq!(
            summary,
            ReleaseSummary {
                tweens_cancelled: 1,
                triggers_disarmed: 1,
                elements_reverted: 2,
            }
        );
        assert_eq!(surface.styled_count(), 0);
        assert!(scheduler.demand().is_idle());
        assert!(!scheduler.is_live(scope));
    }

    #[test]
    fn test_released_scope_is_inert() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let el = surface.insert(0.0);
        let scope = scheduler.create_scope();
        scheduler.release_scope(scope, &mut surface).unwrap();

        assert_eq!(
            scheduler.release_scope(scope, &mut surface),
            Err(MotionError::UnknownScope(scope))
        );
        assert!(
            scheduler
                .from(scope, "late", &[el], fade(), 0.0, &mut surface)
                .is_err()
        );
        assert!(
            scheduler
                .stagger_group(
                    scope,
                    "late",
                    el,
                    &[],
                    TriggerStart::top_at(0.8),
                    fade(),
                    0.1,
                    &mut surface,
                )
                .is_err()
        );
        assert_eq!(surface.writes(el), 0);
    }

    #[test]
    fn test_release_leaves_other_scopes_running() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let a = surface.insert(0.0);
        let b = surface.insert(0.0);
        let first = scheduler.create_scope();
        let second = scheduler.create_scope();

        scheduler
            .from(first, "a", &[a], fade(), 0.0, &mut surface)
            .unwrap();
        scheduler
            .from(second, "b", &[b], fade(), 0.0, &mut surface)
            .unwrap();

        scheduler.release_scope(first, &mut surface).unwrap();
        scheduler.tick(0.5, &mut surface);

        assert_eq!(surface.applied(a), None);
        assert!((surface.rendered(b).opacity - 0.5).abs() < 1e-9);
        assert_eq!(scheduler.active_tweens(), 1);
    }

    #[test]
    fn test_frame_delta_converts_milliseconds() {
        assert!((frame_delta(Some(1016.0), Some(1000.0)) - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_frame_delta_is_clamped() {
        // Tab in the background for five seconds
        assert_eq!(frame_delta(Some(6000.0), Some(1000.0)), MAX_FRAME_DELTA);
        // Clock went backwards
        assert_eq!(frame_delta(Some(900.0), Some(1000.0)), 0.0);
    }

    #[test]
    fn test_frame_delta_without_previous_frame() {
        assert_eq!(frame_delta(Some(1000.0), None), FALLBACK_FRAME_DELTA);
        assert_eq!(frame_delta(None, Some(1000.0)), FALLBACK_FRAME_DELTA);
    }

    #[test]
    fn test_armed_trigger_needs_listeners_only() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(VIEWPORT);
        let below = surface.insert(5000.0);
        let scope = scheduler.create_scope();

        scheduler
            .scroll_reveal(scope, "reveal", below, TriggerStart::top_at(0.85), fade(), &mut surface)
            .unwrap();

        assert_eq!(
            scheduler.demand(),
            RuntimeDemand {
                frames: false,
                listeners: true
            }
        );

        scheduler.release_scope(scope, &mut surface).unwrap();
        assert!(scheduler.demand().is_idle());
    }
}
