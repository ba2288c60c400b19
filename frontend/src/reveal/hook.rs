use web_sys::Element;
use yew::prelude::*;

use super::options::RevealOptions;
use super::observer::RevealScope;

/// Reveals each section the first time it scrolls into view.
///
/// The observer lives exactly as long as the calling component.
#[hook]
pub fn use_reveal_on_scroll(sections: Vec<NodeRef>) {
    use_effect_with_deps(
        move |_| {
            let mut scope = RevealScope::new(RevealOptions::default());
            scope.register(sections.iter().map(|node| node.cast::<Element>()));
            move || scope.unregister()
        },
        (),
    );
}
