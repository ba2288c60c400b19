//! Per-element reveal state.
//!
//! An element starts `Hidden` and may move to `Visible` once. Nothing moves
//! it back: `Visible` absorbs every later event.

/// Tolerance for browsers reporting a ratio a hair under the threshold
/// on the callback that announces the crossing.
pub const RATIO_TOLERANCE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// One observation delivered for an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEvent {
    pub is_intersecting: bool,
    pub ratio: f64,
    /// The visible part spans the whole root height. A section much taller
    /// than the viewport never reaches the ratio threshold, so filling the
    /// root counts as reaching it.
    pub fills_root: bool,
}

impl IntersectionEvent {
    fn reaches(&self, threshold: f64) -> bool {
        self.is_intersecting && (self.fills_root || self.ratio + RATIO_TOLERANCE >= threshold)
    }
}

#[cfg(test)]
impl IntersectionEvent {
    pub fn entering(ratio: f64) -> Self {
        Self { is_intersecting: true, ratio, fills_root: false }
    }

    pub fn leaving() -> Self {
        Self { is_intersecting: false, ratio: 0.0, fills_root: false }
    }
}

impl RevealState {
    /// Pure transition: `(state, event) -> state'`.
    pub fn next(self, event: &IntersectionEvent, threshold: f64) -> RevealState {
        match self {
            RevealState::Visible => RevealState::Visible,
            RevealState::Hidden if event.reaches(threshold) => RevealState::Visible,
            RevealState::Hidden => RevealState::Hidden,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_threshold_reached() {
        let state = RevealState::default();
        assert_eq!(state.next(&IntersectionEvent::entering(0.05), 0.1), RevealState::Hidden);
        assert_eq!(state.next(&IntersectionEvent::entering(0.1), 0.1), RevealState::Visible);
        assert_eq!(state.next(&IntersectionEvent::entering(0.8), 0.1), RevealState::Visible);
    }

    #[test]
    fn leaving_never_reveals() {
        let event = IntersectionEvent { is_intersecting: false, ratio: 0.5, fills_root: true };
        assert_eq!(RevealState::Hidden.next(&event, 0.1), RevealState::Hidden);
    }

    #[test]
    fn visible_is_absorbing() {
        let state = RevealState::Visible;
        assert_eq!(state.next(&IntersectionEvent::leaving(), 0.1), RevealState::Visible);
        assert_eq!(state.next(&IntersectionEvent::entering(0.0), 1.0), RevealState::Visible);
    }

    #[test]
    fn rounding_at_crossing_is_tolerated() {
        let event = IntersectionEvent::entering(0.0995);
        assert!(RevealState::Hidden.next(&event, 0.1).is_visible());

        let event = IntersectionEvent::entering(0.09);
        assert!(!RevealState::Hidden.next(&event, 0.1).is_visible());
    }

    #[test]
    fn filling_the_root_reveals_below_threshold() {
        let event = IntersectionEvent { fills_root: true, ..IntersectionEvent::entering(0.07) };
        assert!(RevealState::Hidden.next(&event, 0.1).is_visible());
    }

    #[test]
    fn zero_threshold_reveals_on_any_intersection() {
        let event = IntersectionEvent::entering(0.0);
        assert!(RevealState::Hidden.next(&event, 0.0).is_visible());
    }
}
