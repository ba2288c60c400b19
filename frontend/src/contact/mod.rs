//! Client-side contact form. Nothing leaves the browser.

pub mod form;
pub mod schedule;
pub mod session;

pub use form::{Field, Service};
pub use schedule::TimeoutScheduler;
pub use session::{ContactSession, Phase, SubmitRejected};
