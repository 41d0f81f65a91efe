use log::Level;

pub const SLIDE_IN_ELEMENT_ID: &str = "slide-in-element";
pub const ENTERED_CLASS: &str = "slide-in";
pub const PENDING_CLASS: &str = "slide-section";
pub const SCROLL_EVENT: &str = "scroll";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
