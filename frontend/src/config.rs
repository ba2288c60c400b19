use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Reveal-on-scroll call site settings
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;

/// How long the contact form shows its thank-you state before clearing.
pub const ACK_WINDOW_MS: u32 = 3_000;

/// Header switches to its solid background past this scroll offset.
pub const SCROLLED_OFFSET_PX: f64 = 50.0;

pub const COMPANY_NAME: &str = "Aboveground Renovation and Construction Corp";
pub const CONTACT_EMAIL: &str = "u.anitherealtor@gmail.com";
pub const LOCATION: &str = "Vancouver, British Columbia, Canada";
pub const BUSINESS_HOURS: &str = "Monday - Friday: 8AM - 6PM";
