//! The element tree the engine writes to.
//!
//! The scheduler never touches the DOM directly. In the browser the surface
//! is backed by `HtmlElement`s; in tests it is a `VirtualSurface`.

use std::collections::BTreeMap;

use super::ElementId;
use super::spec::VisualState;

/// Host display surface seen by the scheduler.
pub trait MotionSurface {
    /// Commit a visual state to an element's inline properties.
    fn apply(&mut self, element: ElementId, state: VisualState);

    /// Remove every inline property the engine wrote to the element.
    fn revert(&mut self, element: ElementId);

    /// Top edge of the element's rendered box relative to the viewport top,
    /// including any translation the engine applied. `None` if the element
    /// is no longer known to the surface.
    fn bounding_top(&self, element: ElementId) -> Option<f64>;

    /// Inline state the engine last wrote to the element, if any.
    fn applied_state(&self, element: ElementId) -> Option<VisualState>;

    /// Layout top edge relative to the viewport top.
    ///
    /// The engine's own `y` offset is taken back out, so a trigger element
    /// held at its `from` offset is measured where it will come to rest.
    fn element_top(&self, element: ElementId) -> Option<f64> {
        let offset = self.applied_state(element).map_or(0.0, |state| state.y);
        self.bounding_top(element).map(|top| top - offset)
    }

    fn viewport_height(&self) -> f64;
}

#[derive(Debug, Clone)]
struct VirtualElement {
    /// Position within the document, from the document top
    document_top: f64,
    /// Inline state written by the engine, `None` when untouched or reverted
    applied: Option<VisualState>,
    /// Number of `apply` calls received
    writes: usize,
}

/// In-memory document with a scrollable viewport.
#[derive(Debug, Clone)]
pub struct VirtualSurface {
    elements: BTreeMap<ElementId, VirtualElement>,
    next_id: u64,
    viewport_height: f64,
    scroll_y: f64,
}

impl VirtualSurface {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            elements: BTreeMap::new(),
            next_id: 1,
            viewport_height,
            scroll_y: 0.0,
        }
    }

    /// Add an element whose top edge sits at `document_top`.
    pub fn insert(&mut self, document_top: f64) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(
            id,
            VirtualElement {
                document_top,
                applied: None,
                writes: 0,
            },
        );
        id
    }

    pub fn remove(&mut self, element: ElementId) {
        self.elements.remove(&element);
    }

    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y.max(0.0);
    }

    /// Scroll so that the element's top edge sits at `fraction` of the
    /// viewport height.
    pub fn scroll_element_to(&mut self, element: ElementId, fraction: f64) {
        if let Some(el) = self.elements.get(&element) {
            self.scroll_y = el.document_top - self.viewport_height * fraction;
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Inline state currently written to the element.
    pub fn applied(&self, element: ElementId) -> Option<VisualState> {
        self.elements.get(&element).and_then(|el| el.applied)
    }

    /// Visible state: the inline state, or the resting state when none is set.
    pub fn rendered(&self, element: ElementId) -> VisualState {
        self.applied(element).unwrap_or(VisualState::RESTING)
    }

    pub fn writes(&self, element: ElementId) -> usize {
        self.elements.get(&element).map(|el| el.writes).unwrap_or(0)
    }

    /// Number of elements carrying inline state.
    pub fn styled_count(&self) -> usize {
        self.elements
            .values()
            .filter(|el| el.applied.is_some())
            .count()
    }
}

impl MotionSurface for VirtualSurface {
    fn apply(&mut self, element: ElementId, state: VisualState) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.applied = Some(state);
            el.writes += 1;
        }
    }

    fn revert(&mut self, element: ElementId) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.applied = None;
        }
    }

    fn bounding_top(&self, element: ElementId) -> Option<f64> {
        self.elements.get(&element).map(|el| {
            let offset = el.applied.map_or(0.0, |state| state.y);
            el.document_top - self.scroll_y + offset
        })
    }

    fn applied_state(&self, element: ElementId) -> Option<VisualState> {
        self.applied(element)
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_top_follows_scroll() {
        let mut surface = VirtualSurface::new(800.0);
        let el = surface.insert(2000.0);

        assert_eq!(surface.element_top(el), Some(2000.0));
        surface.scroll_to(1500.0);
        assert_eq!(surface.element_top(el), Some(500.0));
    }

    #[test]
    fn test_scroll_element_to_fraction() {
        let mut surface = VirtualSurface::new(1000.0);
        let el = surface.insert(3000.0);

        surface.scroll_element_to(el, 0.8);
        assert_eq!(surface.element_top(el), Some(800.0));
    }

    #[test]
    fn test_translation_moves_box_but_not_layout_top() {
        let mut surface = VirtualSurface::new(1000.0);
        let el = surface.insert(900.0);

        surface.apply(el, VisualState::RESTING.with_y(60.0).with_opacity(0.0));

        assert_eq!(surface.bounding_top(el), Some(960.0));
        assert_eq!(surface.element_top(el), Some(900.0));

        surface.revert(el);
        assert_eq!(surface.bounding_top(el), Some(900.0));
    }

    #[test]
    fn test_scroll_is_not_negative() {
        let mut surface = VirtualSurface::new(1000.0);
        surface.scroll_to(-50.0);
        assert_eq!(surface.scroll_y(), 0.0);
    }

    #[test]
    fn test_apply_and_revert() {
        let mut surface = VirtualSurface::new(1000.0);
        let el = surface.insert(0.0);

        surface.apply(el, VisualState::RESTING.with_opacity(0.0));
        assert_eq!(surface.rendered(el).opacity, 0.0);
        assert_eq!(surface.styled_count(), 1);

        surface.revert(el);
        assert_eq!(surface.applied(el), None);
        assert_eq!(surface.rendered(el), VisualState::RESTING);
        assert_eq!(surface.writes(el), 1);
    }

    #[test]
    fn test_unknown_element_is_ignored() {
        let mut surface = VirtualSurface::new(1000.0);
        let el = surface.insert(0.0);
        surface.remove(el);

        surface.apply(el, VisualState::RESTING);
        assert_eq!(surface.element_top(el), None);
        assert_eq!(surface.writes(el), 0);
    }
}
