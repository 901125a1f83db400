use log::Level;

use crate::reveal::tracker::RevealOptions;

/// Share of a section that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Bottom slice of the viewport ignored when measuring, so sections trigger a little early.
pub const REVEAL_BOTTOM_MARGIN: f64 = 0.10;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Development build, keep the reveal tracker chatty
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn reveal_options() -> RevealOptions {
    RevealOptions {
        threshold: REVEAL_THRESHOLD,
        bottom_margin: REVEAL_BOTTOM_MARGIN,
    }
}
