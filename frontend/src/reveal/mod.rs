//! Scroll-triggered, one-shot reveal of page sections.

pub mod hook;
pub mod observer;
pub mod options;
pub mod registry;
pub mod state;
pub mod style;
#[cfg(test)]
pub mod viewport;

pub use hook::use_reveal_on_scroll;
pub use style::REVEAL_CLASS;
