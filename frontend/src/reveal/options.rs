//! Options handed to the browser observer.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be inside the viewport, in `[0, 1]`.
    pub visible_threshold: f64,
    /// Pixels the viewport's bottom edge is pulled inward.
    pub bottom_margin: f64,
}

impl RevealOptions {
    pub fn new(visible_threshold: f64, bottom_margin: f64) -> Self {
        let visible_threshold = if visible_threshold.is_nan() {
            0.0
        } else {
            visible_threshold.clamp(0.0, 1.0)
        };
        let bottom_margin = if bottom_margin.is_nan() { 0.0 } else { bottom_margin.max(0.0) };
        Self { visible_threshold, bottom_margin }
    }

    /// CSS margin string for `IntersectionObserverInit.rootMargin`.
    /// Only the bottom edge is adjusted.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin)
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new(config::REVEAL_THRESHOLD, config::REVEAL_BOTTOM_MARGIN_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_match_call_sites() {
        let options = RevealOptions::default();
        assert_eq!(options.visible_threshold, 0.1);
        assert_eq!(options.bottom_margin, 50.0);
        assert_eq!(options.root_margin(), "0px 0px -50px 0px");
    }

    #[test]
    fn options_are_clamped() {
        let options = RevealOptions::new(1.7, -20.0);
        assert_eq!(options.visible_threshold, 1.0);
        assert_eq!(options.bottom_margin, 0.0);
        assert_eq!(RevealOptions::new(f64::NAN, 10.0).visible_threshold, 0.0);
    }
}
