//! Registration of animated elements.
//!
//! Sections of the landing page hand their element handles to the registry
//! together with the role the element plays in the choreography. The motion
//! runtime resolves them once the view is attached.

use std::sync::Arc;

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;
use leptos::web_sys;

/// Part an element plays in the landing choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionRole {
    /// One line of the hero heading; lines animate in registration order
    HeroTitle,
    HeroSubtext,
    HeroCta,
    /// Revealed once when scrolled into view
    Reveal,
    /// Container whose direct children reveal as a staggered group
    FeatureGrid,
}

type Resolver = Arc<dyn Fn() -> Option<web_sys::HtmlElement> + Send + Sync>;

#[derive(Clone)]
struct Slot {
    role: MotionRole,
    resolve: Resolver,
}

/// Registry context shared by every section of a landing page instance.
#[derive(Clone, Copy)]
pub struct MotionRegistry {
    slots: StoredValue<Vec<Slot>>,
}

impl MotionRegistry {
    pub fn new() -> Self {
        Self {
            slots: StoredValue::new(Vec::new()),
        }
    }

    /// Register an element for `role`.
    pub fn register<E>(&self, role: MotionRole, node_ref: NodeRef<E>)
    where
        E: ElementType,
        E::Output: JsCast + Clone + Into<web_sys::HtmlElement> + 'static,
    {
        let resolve: Resolver = Arc::new(move || node_ref.get_untracked().map(Into::into));
        self.slots
            .update_value(|slots| slots.push(Slot { role, resolve }));
    }

    /// Attached elements registered for `role`, in registration order.
    ///
    /// Handles whose element is not mounted are skipped.
    pub fn resolve(&self, role: MotionRole) -> Vec<web_sys::HtmlElement> {
        self.slots.with_value(|slots| {
            slots
                .iter()
                .filter(|slot| slot.role == role)
                .filter_map(|slot| (slot.resolve)())
                .collect()
        })
    }

    /// Number of handles registered for `role`, mounted or not.
    pub fn count(&self, role: MotionRole) -> usize {
        self.slots
            .with_value(|slots| slots.iter().filter(|slot| slot.role == role).count())
    }
}

impl Default for MotionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide a fresh registry to the current component subtree.
pub fn provide_motion_registry() -> MotionRegistry {
    let registry = MotionRegistry::new();
    provide_context(registry);
    registry
}

/// Get the registry provided by the enclosing landing page.
pub fn use_motion_registry() -> MotionRegistry {
    use_context::<MotionRegistry>().expect("MotionRegistry not provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::html::Div;

    #[test]
    fn test_register_counts_by_role() {
        let owner = Owner::new();
        owner.with(|| {
            let registry = MotionRegistry::new();
            registry.register(MotionRole::Reveal, NodeRef::<Div>::new());
            registry.register(MotionRole::Reveal, NodeRef::<Div>::new());
            registry.register(MotionRole::HeroCta, NodeRef::<Div>::new());

            assert_eq!(registry.count(MotionRole::Reveal), 2);
            assert_eq!(registry.count(MotionRole::HeroCta), 1);
            assert_eq!(registry.count(MotionRole::FeatureGrid), 0);
        });
    }

    #[test]
    fn test_unmounted_handles_resolve_to_nothing() {
        let owner = Owner::new();
        owner.with(|| {
            let registry = MotionRegistry::new();
            registry.register(MotionRole::HeroTitle, NodeRef::<Div>::new());

            assert!(registry.resolve(MotionRole::HeroTitle).is_empty());
        });
    }

    #[test]
    fn test_context_round_trip() {
        let owner = Owner::new();
        owner.with(|| {
            let provided = provide_motion_registry();
            provided.register(MotionRole::Reveal, NodeRef::<Div>::new());

            assert_eq!(use_motion_registry().count(MotionRole::Reveal), 1);
        });
    }
}
