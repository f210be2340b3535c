//! Browser runtime for the motion engine.
//!
//! One runtime per page (thread-local) owns the scheduler and a DOM-backed
//! surface. It keeps a `requestAnimationFrame` loop running only while
//! tweens are moving, and keeps scroll/resize listeners attached only while
//! triggers are armed. Each mounted landing view owns
//! one controller inside the runtime, addressed by a `ControllerKey`.

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::ev;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;
use leptos::web_sys::HtmlElement;

use crate::core::motion::{
    ElementId, GridTarget, LandingTargets, MotionController, MotionScheduler, MotionSurface,
    VisualState, frame_delta,
};

thread_local! {
    static RUNTIME: RefCell<MotionRuntime> = RefCell::new(MotionRuntime::default());
}

/// Identifies one mounted landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerKey(u64);

impl ControllerKey {
    pub fn next() -> Self {
        RUNTIME.with_borrow_mut(|runtime| {
            runtime.next_key += 1;
            ControllerKey(runtime.next_key)
        })
    }
}

/// Elements resolved from the registry for one activation.
#[derive(Default)]
pub struct ResolvedTargets {
    pub hero_titles: Vec<HtmlElement>,
    pub hero_subtexts: Vec<HtmlElement>,
    pub hero_ctas: Vec<HtmlElement>,
    pub reveals: Vec<HtmlElement>,
    pub grid: Option<HtmlElement>,
}

/// Activate (or re-activate) the choreography for one view.
pub fn activate(key: ControllerKey, targets: ResolvedTargets) {
    RUNTIME.with_borrow_mut(|runtime| runtime.activate(key, targets));
}

/// Release everything the view registered.
pub fn teardown(key: ControllerKey) {
    RUNTIME.with_borrow_mut(|runtime| runtime.teardown(key));
}

/// `HtmlElement`-backed surface.
#[derive(Default)]
struct DomSurface {
    elements: HashMap<ElementId, HtmlElement>,
    /// Last state written to each element's inline style
    applied: HashMap<ElementId, VisualState>,
    next_id: u64,
}

impl DomSurface {
    fn adopt(&mut self, element: HtmlElement) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.elements.insert(id, element);
        id
    }

    fn forget(&mut self, ids: &[ElementId]) {
        for id in ids {
            self.elements.remove(id);
            self.applied.remove(id);
        }
    }

    /// Direct children of an element, as `HtmlElement`s.
    fn children_of(element: &HtmlElement) -> Vec<HtmlElement> {
        let children = element.children();
        (0..children.length())
            .filter_map(|index| children.item(index))
            .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
            .collect()
    }
}

impl MotionSurface for DomSurface {
    fn apply(&mut self, element: ElementId, state: VisualState) {
        let Some(el) = self.elements.get(&element) else {
            return;
        };
        let style = el.style();
        let transform = format!(
            "translate3d(0px, {:.3}px, 0px) scale({:.4})",
            state.y, state.scale
        );
        let _ = style.set_property("transform", &transform);
        let _ = style.set_property("opacity", &format!("{:.4}", state.opacity.clamp(0.0, 1.0)));
        self.applied.insert(element, state);
    }

    fn revert(&mut self, element: ElementId) {
        if let Some(el) = self.elements.get(&element) {
            let style = el.style();
            let _ = style.remove_property("transform");
            let _ = style.remove_property("opacity");
        }
        self.applied.remove(&element);
    }

    fn bounding_top(&self, element: ElementId) -> Option<f64> {
        self.elements
            .get(&element)
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn applied_state(&self, element: ElementId) -> Option<VisualState> {
        self.applied.get(&element).copied()
    }

    fn viewport_height(&self) -> f64 {
        window()
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }
}

struct Mounted {
    controller: MotionController,
    elements: Vec<ElementId>,
}

struct ViewportListeners {
    scroll: WindowListenerHandle,
    resize: WindowListenerHandle,
}

#[derive(Default)]
struct MotionRuntime {
    scheduler: MotionScheduler,
    surface: DomSurface,
    mounted: HashMap<ControllerKey, Mounted>,
    next_key: u64,
    frame: Option<AnimationFrameRequestHandle>,
    last_frame: Option<f64>,
    listeners: Option<ViewportListeners>,
}

impl MotionRuntime {
    fn activate(&mut self, key: ControllerKey, targets: ResolvedTargets) {
        self.release(key);

        let mut elements = Vec::new();
        let mut adopt = |list: Vec<HtmlElement>, surface: &mut DomSurface| -> Vec<ElementId> {
            let ids: Vec<ElementId> = list.into_iter().map(|el| surface.adopt(el)).collect();
            elements.extend_from_slice(&ids);
            ids
        };

        let hero_titles = adopt(targets.hero_titles, &mut self.surface);
        let hero_subtexts = adopt(targets.hero_subtexts, &mut self.surface);
        let hero_ctas = adopt(targets.hero_ctas, &mut self.surface);
        let reveals = adopt(targets.reveals, &mut self.surface);
        let grid = targets.grid.map(|container| {
            let items = adopt(DomSurface::children_of(&container), &mut self.surface);
            let container = adopt(vec![container], &mut self.surface)[0];
            GridTarget { container, items }
        });

        let landing = LandingTargets {
            hero_titles,
            hero_subtexts,
            hero_ctas,
            reveals,
            grid,
        };

        let mut controller = MotionController::new();
        controller.activate(&mut self.scheduler, &mut self.surface, &landing);
        self.mounted.insert(
            key,
            Mounted {
                controller,
                elements,
            },
        );

        // The entrance clock starts at activation
        self.last_frame = now();
        self.scheduler.refresh(&self.surface);
        self.sync();
    }

    fn teardown(&mut self, key: ControllerKey) {
        self.release(key);
        self.sync();
    }

    fn release(&mut self, key: ControllerKey) {
        if let Some(mut mounted) = self.mounted.remove(&key) {
            mounted
                .controller
                .teardown(&mut self.scheduler, &mut self.surface);
            self.surface.forget(&mounted.elements);
        }
    }

    fn on_frame(&mut self) {
        self.frame = None;

        let now = now();
        let delta = frame_delta(now, self.last_frame);
        self.last_frame = now;

        self.scheduler.tick(delta, &mut self.surface);
        self.sync();
    }

    fn on_viewport_change(&mut self) {
        if self.scheduler.refresh(&self.surface) > 0 {
            self.sync();
        }
    }

    /// Start or stop the frame loop and listeners to match the scheduler.
    fn sync(&mut self) {
        let demand = self.scheduler.demand();

        if demand.frames {
            if self.frame.is_none() {
                self.frame = schedule_frame();
                if self.last_frame.is_none() {
                    self.last_frame = now();
                }
            }
        } else {
            if let Some(frame) = self.frame.take() {
                frame.cancel();
            }
            self.last_frame = None;
        }

        if demand.listeners {
            if self.listeners.is_none() {
                self.listeners = Some(ViewportListeners {
                    scroll: window_event_listener(ev::scroll, |_| on_viewport_change()),
                    resize: window_event_listener(ev::resize, |_| on_viewport_change()),
                });
            }
        } else if let Some(listeners) = self.listeners.take() {
            listeners.scroll.remove();
            listeners.resize.remove();
        }
    }
}

fn schedule_frame() -> Option<AnimationFrameRequestHandle> {
    match request_animation_frame_with_handle(|| {
        RUNTIME.with_borrow_mut(|runtime| runtime.on_frame());
    }) {
        Ok(handle) => Some(handle),
        Err(err) => {
            leptos::logging::warn!("Failed to request animation frame: {:?}", err);
            None
        }
    }
}

fn on_viewport_change() {
    RUNTIME.with_borrow_mut(|runtime| runtime.on_viewport_change());
}

/// High resolution timestamp in milliseconds.
fn now() -> Option<f64> {
    window().performance().map(|performance| performance.now())
}
