use log::Level;

pub const CONTACT_EMAIL: &str = "hello@mindstreamsolutions.com";

/// Delay added per item index before a revealed element starts its transition.
pub const REVEAL_STAGGER_MS: usize = 80;

/// Window scroll offset after which the nav gets its solid background.
pub const NAV_SCROLL_THRESHOLD: f64 = 24.0;

pub const GRID_SPEED: f64 = 1.5;
pub const GRID_SQUARE_SIZE: f64 = 60.0;
pub const GRID_BORDER_COLOR: &str = "rgba(81, 53, 101, 0.15)";
pub const GRID_HOVER_FILL_COLOR: &str = "rgba(81, 53, 101, 0.08)";
pub const GRID_FRAME_MS: u32 = 16;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
