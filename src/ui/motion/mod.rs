//! Landing page motion, view side.
//!
//! Sections register element handles in a `MotionRegistry`; the landing page
//! calls `use_landing_motion` once, which activates the choreography after
//! mount and releases it when the page is torn down.

#[cfg(not(feature = "ssr"))]
mod dom;
mod registry;
mod reveal;

use leptos::html;
use leptos::prelude::*;

pub use registry::{MotionRegistry, MotionRole, provide_motion_registry, use_motion_registry};
pub use reveal::Reveal;

/// Run the landing choreography for the lifetime of the current component.
///
/// `hero` gates activation: nothing runs until the hero section is attached.
pub fn use_landing_motion(registry: MotionRegistry, hero: NodeRef<html::Section>) {
    #[cfg(not(feature = "ssr"))]
    {
        let key = dom::ControllerKey::next();

        Effect::new(move |_| {
            if hero.get().is_none() {
                return;
            }

            let targets = dom::ResolvedTargets {
                hero_titles: registry.resolve(MotionRole::HeroTitle),
                hero_subtexts: registry.resolve(MotionRole::HeroSubtext),
                hero_ctas: registry.resolve(MotionRole::HeroCta),
                reveals: registry.resolve(MotionRole::Reveal),
                grid: registry.resolve(MotionRole::FeatureGrid).into_iter().next(),
            };
            dom::activate(key, targets);
        });

        on_cleanup(move || dom::teardown(key));
    }

    #[cfg(feature = "ssr")]
    {
        // SSR stub - motion only runs in the browser
        let _ = (registry, hero);
    }
}
