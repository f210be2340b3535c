//! Entrance and reveal choreography of the landing page.
//!
//! Activation registers, in order:
//! 1. the hero title lines, staggered
//! 2. the hero subtexts
//! 3. the hero call-to-action
//! 4. one play-once scroll reveal per revealable element
//! 5. one stagger group over the feature grid's children
//!
//! Everything lands in a single scope owned by the controller, which is
//! released on teardown or before the next activation.

use super::easing::Ease;
use super::scheduler::{MotionScheduler, ReleaseSummary};
use super::spec::{MotionSpec, VisualState};
use super::surface::MotionSurface;
use super::trigger::TriggerStart;
use super::{ElementId, MotionError, ScopeId};

pub const HERO_TITLE: &str = "hero-title";
pub const HERO_SUBTEXT: &str = "hero-subtext";
pub const HERO_CTA: &str = "hero-cta";
pub const REVEAL: &str = "reveal";
pub const FEATURE_GRID: &str = "feature-grid";

/// Delay between consecutive hero title lines
pub const HERO_TITLE_STAGGER: f64 = 0.2;

/// Delay between consecutive feature grid items
pub const FEATURE_GRID_STAGGER: f64 = 0.15;

pub fn hero_title_motion() -> MotionSpec {
    MotionSpec::from_state(VisualState::RESTING.with_y(100.0).with_opacity(0.0))
        .duration(1.2)
        .ease(Ease::POWER4_OUT)
}

pub fn hero_subtext_motion() -> MotionSpec {
    MotionSpec::from_state(VisualState::RESTING.with_y(50.0).with_opacity(0.0))
        .duration(1.0)
        .delay(0.5)
        .ease(Ease::POWER3_OUT)
}

pub fn hero_cta_motion() -> MotionSpec {
    MotionSpec::from_state(VisualState::RESTING.with_scale(0.8).with_opacity(0.0))
        .duration(1.0)
        .delay(0.8)
        .ease(Ease::BACK_OUT)
}

pub fn reveal_start() -> TriggerStart {
    TriggerStart::top_at(0.85)
}

pub fn reveal_motion() -> MotionSpec {
    MotionSpec::from_state(VisualState::RESTING.with_y(60.0).with_opacity(0.0))
        .duration(1.0)
        .ease(Ease::POWER3_OUT)
}

pub fn feature_grid_start() -> TriggerStart {
    TriggerStart::top_at(0.8)
}

pub fn feature_grid_motion() -> MotionSpec {
    MotionSpec::from_state(VisualState::RESTING.with_y(50.0).with_opacity(0.0))
        .duration(0.8)
        .ease(Ease::POWER2_OUT)
}

/// Container whose direct children reveal as a staggered group.
#[derive(Debug, Clone, PartialEq)]
pub struct GridTarget {
    pub container: ElementId,
    pub items: Vec<ElementId>,
}

/// Elements handed over by the view tree, grouped by role.
///
/// Captured once per activation; elements added later are not bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandingTargets {
    /// Title lines in document order
    pub hero_titles: Vec<ElementId>,
    pub hero_subtexts: Vec<ElementId>,
    pub hero_ctas: Vec<ElementId>,
    pub reveals: Vec<ElementId>,
    pub grid: Option<GridTarget>,
}

/// Owner of the landing page's motion scope.
#[derive(Debug, Default)]
pub struct MotionController {
    scope: Option<ScopeId>,
}

impl MotionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the whole choreography under a fresh scope.
    ///
    /// A scope left over from a previous activation is released first, so
    /// repeated activation never stacks triggers. Steps that fail are
    /// skipped; the remaining steps still run.
    pub fn activate<S: MotionSurface>(
        &mut self,
        scheduler: &mut MotionScheduler,
        surface: &mut S,
        targets: &LandingTargets,
    ) -> ScopeId {
        self.teardown(scheduler, surface);

        let scope = scheduler.create_scope();
        self.scope = Some(scope);

        let mut results = vec![
            scheduler
                .from(
                    scope,
                    HERO_TITLE,
                    &targets.hero_titles,
                    hero_title_motion(),
                    HERO_TITLE_STAGGER,
                    surface,
                )
                .map(drop),
            scheduler
                .from(
                    scope,
                    HERO_SUBTEXT,
                    &targets.hero_subtexts,
                    hero_subtext_motion(),
                    0.0,
                    surface,
                )
                .map(drop),
            scheduler
                .from(
                    scope,
                    HERO_CTA,
                    &targets.hero_ctas,
                    hero_cta_motion(),
                    0.0,
                    surface,
                )
                .map(drop),
        ];

        for element in &targets.reveals {
            results.push(
                scheduler
                    .scroll_reveal(
                        scope,
                        REVEAL,
                        *element,
                        reveal_start(),
                        reveal_motion(),
                        surface,
                    )
                    .map(drop),
            );
        }

        if let Some(grid) = &targets.grid {
            results.push(
                scheduler
                    .stagger_group(
                        scope,
                        FEATURE_GRID,
                        grid.container,
                        &grid.items,
                        feature_grid_start(),
                        feature_grid_motion(),
                        FEATURE_GRID_STAGGER,
                        surface,
                    )
                    .map(drop),
            );
        }

        for err in results.into_iter().filter_map(Result::err) {
            log_skipped(scope, &err);
        }

        tracing::debug!(
            %scope,
            titles = targets.hero_titles.len(),
            reveals = targets.reveals.len(),
            grid_items = targets.grid.as_ref().map_or(0, |grid| grid.items.len()),
            "landing motion activated"
        );
        scope
    }

    /// Release the current scope, if any.
    pub fn teardown<S: MotionSurface>(
        &mut self,
        scheduler: &mut MotionScheduler,
        surface: &mut S,
    ) -> Option<ReleaseSummary> {
        let scope = self.scope.take()?;
        match scheduler.release_scope(scope, surface) {
            Ok(summary) => Some(summary),
            Err(err) => {
                log_skipped(scope, &err);
                None
            }
        }
    }

    pub fn scope(&self) -> Option<ScopeId> {
        self.scope
    }
}

fn log_skipped(scope: ScopeId, err: &MotionError) {
    #[cfg(feature = "hydrate")]
    leptos::logging::warn!("Motion step skipped for {}: {}", scope, err);
    #[cfg(not(feature = "hydrate"))]
    tracing::warn!(%scope, error = %err, "motion step skipped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::{BindingKind, VirtualSurface};

    #[test]
    fn test_hero_motion_records() {
        let title = hero_title_motion();
        assert_eq!(title.from.y, 100.0);
        assert_eq!(title.from.opacity, 0.0);
        assert_eq!(title.to, VisualState::RESTING);
        assert_eq!(title.duration, 1.2);
        assert_eq!(title.delay, 0.0);
        assert_eq!(title.ease, Ease::POWER4_OUT);

        let subtext = hero_subtext_motion();
        assert_eq!(subtext.from.y, 50.0);
        assert_eq!(subtext.delay, 0.5);
        assert_eq!(subtext.ease, Ease::POWER3_OUT);

        let cta = hero_cta_motion();
        assert_eq!(cta.from.scale, 0.8);
        assert_eq!(cta.from.y, 0.0);
        assert_eq!(cta.delay, 0.8);
        assert_eq!(cta.ease, Ease::BackOut { overshoot: 1.7 });
    }

    #[test]
    fn test_reveal_records() {
        assert_eq!(reveal_start().viewport_fraction, 0.85);
        let reveal = reveal_motion();
        assert_eq!(reveal.from.y, 60.0);
        assert_eq!(reveal.duration, 1.0);

        assert_eq!(feature_grid_start().viewport_fraction, 0.8);
        let item = feature_grid_motion();
        assert_eq!(item.from.y, 50.0);
        assert_eq!(item.duration, 0.8);
        assert_eq!(item.ease, Ease::POWER2_OUT);
    }

    #[test]
    fn test_teardown_without_activation() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(1000.0);
        let mut controller = MotionController::new();

        assert!(controller.teardown(&mut scheduler, &mut surface).is_none());
        assert!(controller.scope().is_none());
    }

    #[test]
    fn test_teardown_of_released_scope_is_skipped() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(1000.0);
        let mut controller = MotionController::new();

        let scope = controller.activate(&mut scheduler, &mut surface, &LandingTargets::default());
        scheduler.release_scope(scope, &mut surface).unwrap();

        assert!(controller.teardown(&mut scheduler, &mut surface).is_none());
        assert!(controller.scope().is_none());
    }

    #[test]
    fn test_activation_with_empty_targets() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(1000.0);
        let mut controller = MotionController::new();

        let scope = controller.activate(&mut scheduler, &mut surface, &LandingTargets::default());

        assert_eq!(controller.scope(), Some(scope));
        assert!(scheduler.bindings(scope).unwrap().is_empty());
        assert!(scheduler.demand().is_idle());
    }

    #[test]
    fn test_grid_binding_counts_children() {
        let mut scheduler = MotionScheduler::new();
        let mut surface = VirtualSurface::new(1000.0);
        let container = surface.insert(3000.0);
        let items: Vec<_> = (0..6).map(|_| surface.insert(3000.0)).collect();
        let targets = LandingTargets {
            grid: Some(GridTarget {
                container,
                items: items.clone(),
            }),
            ..Default::default()
        };

        let mut controller = MotionController::new();
        let scope = controller.activate(&mut scheduler, &mut surface, &targets);

        let bindings = scheduler.bindings(scope).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].label, FEATURE_GRID);
        assert_eq!(
            bindings[0].kind,
            BindingKind::StaggerGroup {
                container,
                children: 6
            }
        );
        for item in items {
            assert_eq!(surface.rendered(item).opacity, 0.0);
        }
        // The container itself is never animated
        assert_eq!(surface.applied(container), None);
    }
}
