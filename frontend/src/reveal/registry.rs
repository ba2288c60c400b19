//! Bookkeeping for the elements one page has handed to the observer.

use std::collections::BTreeMap;

use log::{debug, warn};

use super::state::{IntersectionEvent, RevealState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct ObservedElement {
    pub id: ElementId,
    pub state: RevealState,
    /// False once the element has revealed or the page let go of it.
    pub registered: bool,
}

impl ObservedElement {
    fn new(id: ElementId) -> Self {
        Self { id, state: RevealState::Hidden, registered: true }
    }

    pub fn visible(&self) -> bool {
        self.state.is_visible()
    }
}

#[derive(Debug)]
pub struct RevealRegistry {
    threshold: f64,
    elements: BTreeMap<ElementId, ObservedElement>,
    next_id: usize,
    released: bool,
}

impl RevealRegistry {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            elements: BTreeMap::new(),
            next_id: 0,
            released: false,
        }
    }

    /// Adds every present element and returns the ids handed out, in order.
    /// Absent entries are skipped. Nothing is added after `release`.
    pub fn register<T, I>(&mut self, elements: I) -> Vec<(ElementId, T)>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        if self.released {
            return Vec::new();
        }
        let mut added = Vec::new();
        for element in elements.into_iter().flatten() {
            let id = ElementId(self.next_id);
            self.next_id += 1;
            self.elements.insert(id, ObservedElement::new(id));
            added.push((id, element));
        }
        added
    }

    /// Feeds one observation to an element.
    ///
    /// Returns `true` only for the call that moves the element to visible;
    /// the caller applies the visual transition exactly then.
    pub fn deliver(&mut self, id: ElementId, event: &IntersectionEvent) -> bool {
        if self.released {
            warn!("Dropping intersection event for {:?} after page teardown", id);
            return false;
        }
        let Some(element) = self.elements.get_mut(&id) else {
            warn!("Intersection event for unknown element {:?}", id);
            return false;
        };
        if !element.registered {
            return false;
        }
        let next = element.state.next(event, self.threshold);
        if next == element.state {
            return false;
        }
        debug!("Revealing element {:?} at ratio {:.3}", element.id, event.ratio);
        element.state = next;
        element.registered = false;
        true
    }

    /// Lets go of every element. Idempotent.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        for element in self.elements.values_mut() {
            element.registered = false;
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Elements still waiting to be revealed.
    pub fn pending(&self) -> usize {
        self.elements.values().filter(|e| e.registered && !e.visible()).count()
    }
}

#[cfg(test)]
impl RevealRegistry {
    pub fn get(&self, id: ElementId) -> Option<&ObservedElement> {
        self.elements.get(&id)
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.get(id).map_or(false, ObservedElement::visible)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::options::RevealOptions;
    use crate::reveal::viewport::{observe, viewport_at, Rect};
    use pretty_assertions::assert_eq;

    fn ids<T>(added: Vec<(ElementId, T)>) -> Vec<ElementId> {
        added.into_iter().map(|(id, _)| id).collect()
    }

    #[test]
    fn starts_hidden_and_skips_absent_elements() {
        let mut registry = RevealRegistry::new(0.1);
        let added = ids(registry.register(vec![Some("hero"), None, Some("values")]));
        assert_eq!(added, vec![ElementId(0), ElementId(1)]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.pending(), 2);
        for id in added {
            let element = registry.get(id).unwrap();
            assert!(!element.visible());
            assert!(element.registered);
        }
    }

    #[test]
    fn first_crossing_reveals_once() {
        let mut registry = RevealRegistry::new(0.1);
        let id = ids(registry.register(vec![Some(())]))[0];

        assert!(registry.deliver(id, &IntersectionEvent::entering(0.3)));
        assert!(registry.is_visible(id));
        assert!(!registry.get(id).unwrap().registered);

        // Repeats and leave events change nothing.
        assert!(!registry.deliver(id, &IntersectionEvent::entering(0.9)));
        assert!(!registry.deliver(id, &IntersectionEvent::leaving()));
        assert!(registry.is_visible(id));
        assert_eq!(registry.pending(), 0);
    }

    #[test]
    fn below_threshold_keeps_waiting() {
        let mut registry = RevealRegistry::new(0.1);
        let id = ids(registry.register(vec![Some(())]))[0];
        assert!(!registry.deliver(id, &IntersectionEvent::entering(0.02)));
        assert!(!registry.is_visible(id));
        assert_eq!(registry.pending(), 1);
    }

    #[test]
    fn stale_event_after_release_is_ignored() {
        let mut registry = RevealRegistry::new(0.1);
        let id = ids(registry.register(vec![Some(())]))[0];
        registry.release();
        assert!(!registry.deliver(id, &IntersectionEvent::entering(1.0)));
        assert!(!registry.is_visible(id));
        assert!(registry.register(vec![Some(())]).is_empty());
    }

    #[test]
    fn release_is_idempotent_and_safe_before_register() {
        let mut registry = RevealRegistry::new(0.1);
        registry.release();
        registry.release();
        assert!(registry.is_released());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut registry = RevealRegistry::new(0.1);
        assert!(!registry.deliver(ElementId(7), &IntersectionEvent::entering(1.0)));
    }

    #[test]
    fn delivery_order_does_not_matter() {
        let event = IntersectionEvent::entering(0.5);
        let mut forward = RevealRegistry::new(0.1);
        let a = ids(forward.register(vec![Some(()), Some(())]));
        forward.deliver(a[0], &event);
        forward.deliver(a[1], &event);

        let mut backward = RevealRegistry::new(0.1);
        let b = ids(backward.register(vec![Some(()), Some(())]));
        backward.deliver(b[1], &event);
        backward.deliver(b[0], &event);

        assert_eq!(forward.get(a[0]), backward.get(b[0]));
        assert_eq!(forward.get(a[1]), backward.get(b[1]));
    }

    #[test]
    fn scrolling_reveals_only_the_crossed_section() {
        let options = RevealOptions::default();
        let sections = [
            Rect::new(1000.0, 0.0, 1280.0, 600.0),
            Rect::new(1800.0, 0.0, 1280.0, 600.0),
            Rect::new(2600.0, 0.0, 1280.0, 600.0),
        ];
        let mut registry = RevealRegistry::new(options.visible_threshold);
        let added = registry.register(sections.iter().map(Some));

        let scroll_to = |scroll_y: f64, registry: &mut RevealRegistry| {
            let viewport = viewport_at(scroll_y, 1280.0, 800.0);
            for (id, rect) in &added {
                registry.deliver(*id, &observe(rect, &viewport, &options));
            }
        };

        // Mount: nothing on screen.
        scroll_to(0.0, &mut registry);
        let visible: Vec<bool> = added.iter().map(|(id, _)| registry.is_visible(*id)).collect();
        assert_eq!(visible, vec![false, false, false]);

        // Root spans 1760..2510: the second section sits fully inside it,
        // the first has scrolled out above and the third is still below.
        scroll_to(1760.0, &mut registry);
        let visible: Vec<bool> = added.iter().map(|(id, _)| registry.is_visible(*id)).collect();
        assert_eq!(visible, vec![false, true, false]);
    }

    #[test]
    fn section_taller_than_the_viewport_reveals_on_scroll() {
        let options = RevealOptions::default();
        let section = Rect::new(400.0, 0.0, 375.0, 8000.0);
        let mut registry = RevealRegistry::new(options.visible_threshold);
        let (id, rect) = registry.register(vec![Some(section)])[0];

        let mut max_ratio: f64 = 0.0;
        let mut scroll_y = 0.0;
        while scroll_y <= 9000.0 && !registry.is_visible(id) {
            let event = observe(&rect, &viewport_at(scroll_y, 375.0, 667.0), &options);
            max_ratio = max_ratio.max(event.ratio);
            registry.deliver(id, &event);
            scroll_y += 10.0;
        }

        assert!(max_ratio < options.visible_threshold);
        assert!(registry.is_visible(id));
    }
}
