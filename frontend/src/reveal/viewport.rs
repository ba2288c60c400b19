//! Intersection model used to drive reveal scenarios without a DOM.
//!
//! Mirrors what the browser computes for an observer with a bottom-only
//! root margin: the root is the viewport minus the margin band, and the
//! ratio is the visible share of the target's area.

use super::options::RevealOptions;
use super::state::IntersectionEvent;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap of two rects, or `None` when they are disjoint.
    /// Edge-adjacent rects overlap with zero area.
    fn intersection(&self, other: &Rect) -> Option<Rect> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());
        if bottom < top || right < left {
            return None;
        }
        Some(Rect::new(top, left, right - left, bottom - top))
    }
}

/// A viewport of the given size scrolled to `scroll_y`, in document coordinates.
pub fn viewport_at(scroll_y: f64, width: f64, height: f64) -> Rect {
    Rect::new(scroll_y, 0.0, width, height)
}

/// The viewport after applying the bottom margin.
pub fn effective_root(viewport: &Rect, options: &RevealOptions) -> Rect {
    let height = (viewport.height - options.bottom_margin).max(0.0);
    Rect::new(viewport.top, viewport.left, viewport.width, height)
}

/// What an observer would report for `target` against `viewport`.
pub fn observe(target: &Rect, viewport: &Rect, options: &RevealOptions) -> IntersectionEvent {
    let root = effective_root(viewport, options);
    match target.intersection(&root) {
        None => IntersectionEvent::leaving(),
        Some(overlap) => {
            let area = target.area();
            // Zero-area targets count as fully visible once they touch the root.
            let ratio = if area == 0.0 { 1.0 } else { overlap.area() / area };
            IntersectionEvent {
                fills_root: root.height > 0.0 && overlap.height >= root.height,
                ..IntersectionEvent::entering(ratio)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_below_fold_is_not_intersecting() {
        let options = RevealOptions::default();
        let viewport = viewport_at(0.0, 1280.0, 800.0);
        let target = Rect::new(1200.0, 0.0, 1280.0, 400.0);
        assert!(!observe(&target, &viewport, &options).is_intersecting);
    }

    #[test]
    fn bottom_margin_shrinks_the_root() {
        let options = RevealOptions::default();
        let viewport = viewport_at(0.0, 1280.0, 800.0);
        // Top edge sits inside the 50px margin band, so it does not count yet.
        let target = Rect::new(760.0, 0.0, 1280.0, 400.0);
        assert!(!observe(&target, &viewport, &options).is_intersecting);

        let target = Rect::new(700.0, 0.0, 1280.0, 400.0);
        let event = observe(&target, &viewport, &options);
        assert!(event.is_intersecting);
        assert!((event.ratio - 0.125).abs() < 1e-9);
    }

    #[test]
    fn fully_contained_element_has_full_ratio() {
        let options = RevealOptions::default();
        let viewport = viewport_at(0.0, 1280.0, 800.0);
        let target = Rect::new(100.0, 0.0, 640.0, 200.0);
        let event = observe(&target, &viewport, &options);
        assert_eq!(event.ratio, 1.0);
        assert!(!event.fills_root);
    }

    #[test]
    fn tall_section_fills_the_root() {
        let options = RevealOptions::default();
        let viewport = viewport_at(4000.0, 375.0, 667.0);
        let target = Rect::new(0.0, 0.0, 375.0, 8000.0);
        let event = observe(&target, &viewport, &options);
        assert!(event.ratio < 0.1);
        assert!(event.fills_root);
    }
}
