//! Visual side of the reveal: the fade-in-up animation and its CSS.

/// Class every watchable section carries.
pub const REVEAL_CLASS: &str = "reveal";
/// Class added once the section has been revealed.
pub const VISIBLE_CLASS: &str = "reveal-visible";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTransition {
    pub duration_secs: f64,
    pub offset_px: f64,
    pub timing: &'static str,
}

pub const FADE_IN_UP: RevealTransition = RevealTransition {
    duration_secs: 0.8,
    offset_px: 30.0,
    timing: "ease-out",
};

impl RevealTransition {
    pub fn css(&self) -> String {
        format!(
            r#"
@keyframes fadeInUp {{
    from {{ opacity: 0; transform: translateY({offset}px); }}
    to {{ opacity: 1; transform: translateY(0); }}
}}
.{reveal} {{
    opacity: 0;
    transform: translateY({offset}px);
}}
.{reveal}.{visible} {{
    animation: fadeInUp {duration}s {timing} forwards;
}}
"#,
            offset = self.offset_px,
            reveal = REVEAL_CLASS,
            visible = VISIBLE_CLASS,
            duration = self.duration_secs,
            timing = self.timing,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_carries_transition_parameters() {
        let css = FADE_IN_UP.css();
        assert!(css.contains("animation: fadeInUp 0.8s ease-out forwards;"));
        assert!(css.contains("transform: translateY(30px);"));
        assert!(css.contains(".reveal.reveal-visible"));
    }
}
