use log::Level;

pub const BRAND: &str = "CivilTech Solutions";
pub const COPYRIGHT_YEAR: u16 = 2024;

/// Fraction of a region that has to be inside the viewport before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_OFFSET_PX: u32 = 50;
pub const REVEAL_DURATION_SECS: f64 = 0.8;

/// Shared by the card scale effect and the overlay fade.
pub const HOVER_DURATION_MS: u32 = 300;
pub const HOVER_SCALE: f64 = 1.05;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
