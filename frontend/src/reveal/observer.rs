//! `RevealScope`: one page's hold on a browser `IntersectionObserver`.
//!
//! Created when the page mounts, released when it unmounts (or dropped).
//! After release no callback can touch element state, even if the browser
//! still has a batch queued.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::options::RevealOptions;
use super::registry::{ElementId, RevealRegistry};
use super::state::IntersectionEvent;
use super::style::VISIBLE_CLASS;

const REVEAL_ID_ATTR: &str = "data-reveal-id";

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct LiveObserver {
    observer: IntersectionObserver,
    // Must outlive every observe() call made through `observer`.
    _callback: EntriesCallback,
}

impl LiveObserver {
    fn new(options: &RevealOptions, registry: Weak<RefCell<RevealRegistry>>) -> Option<Self> {
        let callback = EntriesCallback::new(move |entries: Array, observer: IntersectionObserver| {
            handle_entries(&registry, &entries, &observer);
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.visible_threshold));
        init.set_root_margin(&options.root_margin());

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => Some(Self { observer, _callback: callback }),
            Err(err) => {
                // Sections keep their hidden styling for the life of the page.
                warn!("IntersectionObserver unavailable, reveal disabled: {:?}", err);
                None
            }
        }
    }
}

fn reveal_id(target: &Element) -> Option<ElementId> {
    target
        .get_attribute(REVEAL_ID_ATTR)
        .and_then(|raw| raw.parse().ok())
        .map(ElementId)
}

fn event_of(entry: &IntersectionObserverEntry) -> IntersectionEvent {
    let visible_height = entry.intersection_rect().height();
    let fills_root = entry
        .root_bounds()
        .map(|root| root.height() > 0.0 && visible_height >= root.height())
        .unwrap_or(false);
    IntersectionEvent {
        is_intersecting: entry.is_intersecting(),
        ratio: entry.intersection_ratio(),
        fills_root,
    }
}

fn handle_entries(
    registry: &Weak<RefCell<RevealRegistry>>,
    entries: &Array,
    observer: &IntersectionObserver,
) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        deliver_to(registry, &entry.target(), &event_of(&entry), observer);
    }
}

/// Applies one observation to `target`. Returns whether it was revealed.
fn deliver_to(
    registry: &Weak<RefCell<RevealRegistry>>,
    target: &Element,
    event: &IntersectionEvent,
    observer: &IntersectionObserver,
) -> bool {
    let Some(registry) = registry.upgrade() else {
        warn!("Intersection callback fired after its page was dropped");
        return false;
    };
    let mut state = registry.borrow_mut();
    if state.is_released() {
        return false;
    }
    let Some(id) = reveal_id(target) else {
        warn!("Observed element without {}", REVEAL_ID_ATTR);
        return false;
    };
    if !state.deliver(id, event) {
        return false;
    }
    if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
        warn!("Failed to mark {:?} visible: {:?}", id, err);
    }
    observer.unobserve(target);
    debug!("{} reveal sections still hidden", state.pending());
    true
}

pub struct RevealScope {
    options: RevealOptions,
    registry: Rc<RefCell<RevealRegistry>>,
    live: Option<LiveObserver>,
}

impl RevealScope {
    pub fn new(options: RevealOptions) -> Self {
        Self {
            registry: Rc::new(RefCell::new(RevealRegistry::new(options.visible_threshold))),
            options,
            live: None,
        }
    }

    /// Starts watching every present element. Returns how many are being observed.
    pub fn register<I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = Option<Element>>,
    {
        let added = self.registry.borrow_mut().register(elements);
        if added.is_empty() {
            return 0;
        }
        if self.live.is_none() {
            self.live = LiveObserver::new(&self.options, Rc::downgrade(&self.registry));
        }
        let Some(live) = self.live.as_ref() else {
            return 0;
        };

        let mut observed = 0;
        for (id, element) in &added {
            if let Err(err) = element.set_attribute(REVEAL_ID_ATTR, &id.0.to_string()) {
                warn!("Could not tag reveal section {:?}: {:?}", id, err);
                continue;
            }
            live.observer.observe(element);
            observed += 1;
        }
        debug!("Observing {} reveal sections", observed);
        observed
    }

    /// Releases the observer and every registration. Safe to call repeatedly.
    pub fn unregister(&mut self) {
        self.registry.borrow_mut().release();
        if let Some(live) = self.live.take() {
            // Queued entries would otherwise be delivered to the dropped closure.
            live.observer.take_records();
            live.observer.disconnect();
            debug!("Reveal observer disconnected");
        }
    }
}

impl Drop for RevealScope {
    fn drop(&mut self) {
        self.unregister();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn section() -> Element {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.create_element("section").ok())
            .unwrap()
    }

    fn idle_observer() -> (IntersectionObserver, EntriesCallback) {
        let callback = EntriesCallback::new(|_: Array, _: IntersectionObserver| {});
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).unwrap();
        (observer, callback)
    }

    fn is_revealed(element: &Element) -> bool {
        element.class_list().contains(VISIBLE_CLASS)
    }

    #[wasm_bindgen_test]
    fn register_skips_absent_sections_and_tags_the_rest() {
        let (first, second) = (section(), section());
        let mut scope = RevealScope::new(RevealOptions::default());

        let observed = scope.register(vec![Some(first.clone()), None, Some(second.clone())]);

        assert_eq!(observed, 2);
        assert_eq!(first.get_attribute(REVEAL_ID_ATTR).as_deref(), Some("0"));
        assert_eq!(second.get_attribute(REVEAL_ID_ATTR).as_deref(), Some("1"));
        assert_eq!(scope.registry.borrow().pending(), 2);
    }

    #[wasm_bindgen_test]
    fn crossing_marks_the_section_visible_once() {
        let target = section();
        let (observer, _callback) = idle_observer();
        let mut scope = RevealScope::new(RevealOptions::default());
        scope.register(vec![Some(target.clone())]);
        let registry = Rc::downgrade(&scope.registry);

        assert!(!deliver_to(&registry, &target, &IntersectionEvent::entering(0.02), &observer));
        assert!(!is_revealed(&target));

        assert!(deliver_to(&registry, &target, &IntersectionEvent::entering(0.4), &observer));
        assert!(is_revealed(&target));
        assert!(!deliver_to(&registry, &target, &IntersectionEvent::entering(0.9), &observer));
        assert_eq!(scope.registry.borrow().pending(), 0);
    }

    #[wasm_bindgen_test]
    fn unregister_is_safe_before_register_and_when_repeated() {
        let mut scope = RevealScope::new(RevealOptions::default());
        scope.unregister();
        scope.unregister();
        assert!(scope.live.is_none());
        assert_eq!(scope.register(vec![Some(section())]), 0);
    }

    #[wasm_bindgen_test]
    fn late_entries_after_unregister_touch_nothing() {
        let target = section();
        let (observer, _callback) = idle_observer();
        let mut scope = RevealScope::new(RevealOptions::default());
        scope.register(vec![Some(target.clone())]);
        let registry = Rc::downgrade(&scope.registry);

        scope.unregister();
        scope.unregister();

        assert!(scope.live.is_none());
        assert!(!deliver_to(&registry, &target, &IntersectionEvent::entering(1.0), &observer));
        assert!(!is_revealed(&target));
    }

    #[wasm_bindgen_test]
    fn dropping_the_scope_releases_its_registry() {
        let target = section();
        let (observer, _callback) = idle_observer();
        let registry = {
            let mut scope = RevealScope::new(RevealOptions::default());
            scope.register(vec![Some(target.clone())]);
            Rc::downgrade(&scope.registry)
        };

        assert!(registry.upgrade().is_none());
        assert!(!deliver_to(&registry, &target, &IntersectionEvent::entering(1.0), &observer));
        assert!(!is_revealed(&target));
    }
}
